//! Play-pack workbook parsing.
//!
//! A worksheet is a profile sheet when column A holds the exact marker
//! `"Strategy / Play"` somewhere in rows 1..=60. The profile name and notes
//! sit in B1 and B2; play rows start right under the marker and end at the
//! first row with an empty column A.

use std::collections::HashSet;
use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};

use crate::cell::{CellValue, Coerced};
use crate::error::{PlaybookError, Result};
use crate::types::{sort_parse_order, PlayPack, PlayRow, ProfileSheet, MAX_MONTH, MIN_MONTH};

pub const MARKER: &str = "Strategy / Play";
pub const MARKER_SEARCH_ROWS: u32 = 60;

pub const DEFAULT_PRIORITY: u32 = 999;
pub const DEFAULT_MONTH: u8 = 6;
pub const DEFAULT_EFFORT: u32 = 0;

/// Parse every profile sheet in `bytes`. Sheets without the marker are
/// skipped; an empty pack is a valid result.
pub fn parse_profiles(bytes: &[u8]) -> Result<PlayPack> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| PlaybookError::MalformedWorkbook(e.to_string()))?;

    let mut pack = PlayPack::default();
    for sheet_name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| PlaybookError::MalformedWorkbook(format!("sheet '{sheet_name}': {e}")))?;
        match parse_sheet(&sheet_name, &range) {
            Some(profile) => {
                tracing::debug!(
                    sheet = %sheet_name,
                    plays = profile.plays.len(),
                    "parsed profile sheet"
                );
                pack.profiles.push(profile);
            }
            None => tracing::debug!(sheet = %sheet_name, "no play table marker, skipping"),
        }
    }
    Ok(pack)
}

/// Cell at 1-based `(row, col)`.
fn cell(range: &Range<Data>, row: u32, col: u32) -> CellValue {
    CellValue::from_data(range.get_value((row - 1, col - 1)))
}

fn find_marker_row(range: &Range<Data>) -> Option<u32> {
    (1..=MARKER_SEARCH_ROWS).find(|&r| cell(range, r, 1).is_text(MARKER))
}

fn parse_sheet(sheet_name: &str, range: &Range<Data>) -> Option<ProfileSheet> {
    let marker_row = find_marker_row(range)?;

    let display_name = cell(range, 1, 2)
        .as_text()
        .unwrap_or_else(|| sheet_name.to_string());
    let description = cell(range, 2, 2).as_text().unwrap_or_default();

    let mut plays = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut r = marker_row + 1;
    // Stop at the first gap, even if more rows follow it.
    while let Some(name) = cell(range, r, 1).strategy_name() {
        let priority = coerce(sheet_name, r, 2, cell(range, r, 2).to_int_or(DEFAULT_PRIORITY));
        let month = coerce(sheet_name, r, 3, month_cell(&cell(range, r, 3)));
        let effort = coerce(sheet_name, r, 4, cell(range, r, 4).to_int_or(DEFAULT_EFFORT));

        if seen.insert(name.clone()) {
            plays.push(PlayRow::new(name, priority, month, effort));
        } else {
            tracing::warn!(sheet = %sheet_name, row = r, strategy = %name, "duplicate strategy skipped");
        }
        r += 1;
    }

    sort_parse_order(&mut plays);

    Some(ProfileSheet {
        key: sheet_name.to_string(),
        display_name,
        description,
        plays,
    })
}

fn month_cell(value: &CellValue) -> Coerced<u8> {
    match value.to_int_or(DEFAULT_MONTH) {
        Coerced::Value(m) if !(MIN_MONTH..=MAX_MONTH).contains(&m) => Coerced::Rejected(DEFAULT_MONTH),
        other => other,
    }
}

fn coerce<T: Copy + std::fmt::Display>(sheet: &str, row: u32, col: u32, value: Coerced<T>) -> T {
    if let Coerced::Rejected(default) = value {
        tracing::warn!(sheet = %sheet, row, col, %default, "unusable cell value, using default");
    }
    value.value()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
