//! One run of the roadmap builder: load a play pack, pick a profile, apply
//! overrides, take edits, render.
//!
//! Every value here is owned by the run that created it. The default play
//! pack is read from disk on each call and never cached or modified.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::config::DEFAULT_CLIENT_NAME;
use crate::enrichment::EnrichmentTable;
use crate::error::{PlaybookError, Result};
use crate::overrides::apply_overrides;
use crate::paths;
use crate::report::{self, ReportDocument};
use crate::types::{
    sort_timeline_order, EffortSummary, OverrideFlags, PlayPack, PlayRow, MAX_MONTH, MIN_MONTH,
};
use crate::workbook::parse_profiles;

pub const EFFORT_STEP_MINUTES: u32 = 5;

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayPackSource {
    Default,
    Override,
}

impl PlayPackSource {
    pub fn label(self) -> &'static str {
        match self {
            PlayPackSource::Default => "Pre-loaded default",
            PlayPackSource::Override => "Uploaded override",
        }
    }
}

impl fmt::Display for PlayPackSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoadedPlayPack {
    pub source: PlayPackSource,
    pub pack: PlayPack,
}

/// Pick the workbook bytes for this run: the override when one is supplied,
/// otherwise a fresh read of the default play pack.
pub fn read_playpack_bytes(
    default_path: &Path,
    override_bytes: Option<Vec<u8>>,
) -> Result<(Vec<u8>, PlayPackSource)> {
    if let Some(bytes) = override_bytes {
        return Ok((bytes, PlayPackSource::Override));
    }
    if !default_path.is_file() {
        return Err(PlaybookError::MissingDefaultResource(
            default_path.display().to_string(),
        ));
    }
    Ok((std::fs::read(default_path)?, PlayPackSource::Default))
}

/// Load and parse the play pack. Fails when the bytes are not a workbook or
/// when no sheet carries a play table.
pub fn load_playpack(default_path: &Path, override_bytes: Option<Vec<u8>>) -> Result<LoadedPlayPack> {
    let (bytes, source) = read_playpack_bytes(default_path, override_bytes)?;
    let pack = parse_profiles(&bytes)?;
    if pack.is_empty() {
        return Err(PlaybookError::NoProfilesFound);
    }
    tracing::info!(source = %source, profiles = pack.len(), "loaded play pack");
    Ok(LoadedPlayPack { source, pack })
}

// ---------------------------------------------------------------------------
// DraftPlan
// ---------------------------------------------------------------------------

/// The editable play table for one profile after overrides.
#[derive(Debug, Clone, Serialize)]
pub struct DraftPlan {
    pub profile_key: String,
    pub profile_label: String,
    pub profile_description: String,
    pub flags: OverrideFlags,
    pub plays: Vec<PlayRow>,
}

#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub file_name: String,
    pub document: ReportDocument,
    pub bytes: Vec<u8>,
}

impl DraftPlan {
    pub fn prepare(pack: &PlayPack, profile_key: &str, flags: OverrideFlags) -> Result<Self> {
        let profile = pack
            .get(profile_key)
            .ok_or_else(|| PlaybookError::ProfileNotFound(profile_key.to_string()))?;

        let mut plays = apply_overrides(&profile.plays, flags);
        sort_timeline_order(&mut plays);

        let profile_label = if profile.display_name.is_empty() {
            profile.key.clone()
        } else {
            profile.display_name.clone()
        };
        tracing::info!(profile = %profile.key, plays = plays.len(), "prepared draft plan");

        Ok(Self {
            profile_key: profile.key.clone(),
            profile_label,
            profile_description: profile.description.clone(),
            flags,
            plays,
        })
    }

    /// Replace the table with caller-edited rows, kept in the order given.
    pub fn apply_edits(&mut self, rows: Vec<PlayRow>) -> Result<()> {
        validate_edits(&rows)?;
        tracing::debug!(rows = rows.len(), "applied edits");
        self.plays = rows;
        Ok(())
    }

    pub fn effort_summary(&self) -> EffortSummary {
        EffortSummary::from_plays(&self.plays)
    }

    pub fn render(
        &self,
        client_name: &str,
        enrichment: Option<&EnrichmentTable>,
    ) -> Result<RenderedReport> {
        let client = normalize_client_name(client_name);
        let document = report::render(
            &client,
            &self.profile_label,
            &self.profile_description,
            &self.plays,
            enrichment,
        );
        let bytes = document.to_docx()?;
        Ok(RenderedReport {
            file_name: paths::report_file_name(&client),
            document,
            bytes,
        })
    }
}

/// Trimmed client name, or the placeholder when blank.
pub fn normalize_client_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_CLIENT_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Edited tables must keep names present and unique, months in 1..=6, and
/// effort in 5-minute steps. Priorities are unsigned already.
pub fn validate_edits(rows: &[PlayRow]) -> Result<()> {
    let mut seen = HashSet::new();
    for (i, play) in rows.iter().enumerate() {
        let invalid = |reason: String| PlaybookError::InvalidEdit {
            row: i + 1,
            strategy: play.strategy_name.clone(),
            reason,
        };
        if play.strategy_name.trim().is_empty() {
            return Err(invalid("strategy name is empty".to_string()));
        }
        if !seen.insert(play.strategy_name.as_str()) {
            return Err(invalid("strategy name appears more than once".to_string()));
        }
        if !(MIN_MONTH..=MAX_MONTH).contains(&play.month_allocation) {
            return Err(invalid(format!(
                "month allocation {} is outside {MIN_MONTH}-{MAX_MONTH}",
                play.month_allocation
            )));
        }
        if play.allocated_effort_minutes % EFFORT_STEP_MINUTES != 0 {
            return Err(invalid(format!(
                "effort {} is not a multiple of {EFFORT_STEP_MINUTES} minutes",
                play.allocated_effort_minutes
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
