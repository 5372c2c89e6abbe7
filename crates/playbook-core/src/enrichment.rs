use csv::ReaderBuilder;
use serde::Serialize;

use crate::error::{PlaybookError, Result};

pub const REPORT_PREVIEW_ROWS: usize = 20;
pub const SCREEN_PREVIEW_ROWS: usize = 25;

/// Keyword/topic data supplied alongside a play pack. The column set belongs
/// to whoever produced the file; cells are kept as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnrichmentTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl EnrichmentTable {
    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() {
            return Err(malformed("no columns to parse from file".to_string()));
        }

        let mut rows: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let record = record?;
            // Short rows are padded; a row wider than the header has no
            // column to put its extra cells in.
            if record.len() > headers.len() {
                let line = record.position().map_or(0, |p| p.line());
                return Err(malformed(format!(
                    "line {line}: expected {} fields, saw {}",
                    headers.len(),
                    record.len()
                )));
            }
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            row.resize(headers.len(), String::new());
            rows.push(row);
        }
        tracing::debug!(columns = headers.len(), rows = rows.len(), "loaded enrichment table");
        Ok(Self { headers, rows })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first `n` rows in their original order.
    pub fn preview(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..self.rows.len().min(n)]
    }
}

fn malformed(message: String) -> PlaybookError {
    csv::Error::from(std::io::Error::new(std::io::ErrorKind::InvalidData, message)).into()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
