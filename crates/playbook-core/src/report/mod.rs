//! Client report: a flat list of blocks built from the adjusted play table,
//! serialised to DOCX by [`docx`].

pub mod docx;

use serde::Serialize;

use crate::enrichment::{EnrichmentTable, REPORT_PREVIEW_ROWS};
use crate::types::{
    focus_order, sort_timeline_order, PlayRow, COL_EFFORT, COL_MONTH_LABEL, COL_PRIORITY,
    COL_STRATEGY,
};

pub const FOCUS_AREA_COUNT: usize = 5;

pub const HEADING_OVERVIEW: &str = "Overview";
pub const HEADING_FOCUS: &str = "Recommended Focus Areas";
pub const HEADING_TIMELINE: &str = "6-Month Roadmap Timeline (Plays)";
pub const HEADING_ENRICHMENT: &str = "Keyword / Topic Enrichment (Optional)";
pub const HEADING_NEXT_STEPS: &str = "Next Steps";

const OVERVIEW_NOTE: &str = "This document is a prototype skeleton generated from a standardized play-pack plus optional keyword/topic enrichment.";
const NO_ENRICHMENT: &str =
    "No keyword/topic upload provided. Roadmap uses generic placeholders where relevant.";
const WITH_ENRICHMENT: &str =
    "Uploaded topics/keywords were included to customize content-building plays.";
const NEXT_STEPS: [&str; 4] = [
    "1) Review and adjust month allocation and priorities as needed.",
    "2) Add or refine specific tasks per play (URLs, pages, on-page edits, technical fixes).",
    "3) Confirm dependencies (access, dev support, approvals).",
    "4) Track execution and outcomes monthly (GSC, GA4, rank tracking).",
];

// ---------------------------------------------------------------------------
// Document model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Centered, large type.
    Title { text: String },
    Heading { text: String, level: u8 },
    Paragraph { text: String },
    Bullet { text: String },
    /// First row holds the column headers.
    Table { rows: Vec<Vec<String>> },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportDocument {
    pub blocks: Vec<Block>,
}

impl ReportDocument {
    fn heading(&mut self, text: &str) {
        self.blocks.push(Block::Heading {
            text: text.to_string(),
            level: 1,
        });
    }

    fn paragraph(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::Paragraph { text: text.into() });
    }

    fn bullet(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::Bullet { text: text.into() });
    }

    /// Rows are written in the order given.
    fn table<H, R>(&mut self, headers: &[H], records: R)
    where
        H: ToString,
        R: IntoIterator<Item = Vec<String>>,
    {
        let mut rows = vec![headers.iter().map(ToString::to_string).collect::<Vec<_>>()];
        rows.extend(records);
        self.blocks.push(Block::Table { rows });
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn title_text(client_name: &str) -> String {
    format!("{client_name} — SEO Action Plan (Prototype)")
}

/// Build the report. Section order is fixed; only the play table and the
/// optional enrichment table vary.
pub fn render(
    client_name: &str,
    profile_label: &str,
    profile_description: &str,
    plays: &[PlayRow],
    enrichment: Option<&EnrichmentTable>,
) -> ReportDocument {
    let mut doc = ReportDocument::default();

    doc.blocks.push(Block::Title {
        text: title_text(client_name),
    });
    doc.paragraph("");

    doc.heading(HEADING_OVERVIEW);
    doc.paragraph(format!("Client Profile: {profile_label}"));
    if !profile_description.is_empty() {
        doc.paragraph(format!("Profile Notes: {profile_description}"));
    }
    doc.paragraph(OVERVIEW_NOTE);

    doc.heading(HEADING_FOCUS);
    for play in focus_order(plays).into_iter().take(FOCUS_AREA_COUNT) {
        doc.bullet(play.strategy_name.clone());
    }

    doc.heading(HEADING_TIMELINE);
    let mut timeline = plays.to_vec();
    sort_timeline_order(&mut timeline);
    doc.table(
        &[COL_MONTH_LABEL, COL_PRIORITY, COL_STRATEGY, COL_EFFORT],
        timeline.iter().map(|p| {
            vec![
                p.month_label(),
                p.priority_order.to_string(),
                p.strategy_name.clone(),
                p.allocated_effort_minutes.to_string(),
            ]
        }),
    );

    doc.heading(HEADING_ENRICHMENT);
    match enrichment.filter(|t| !t.is_empty()) {
        None => doc.paragraph(NO_ENRICHMENT),
        Some(table) => {
            doc.paragraph(WITH_ENRICHMENT);
            doc.table(
                &table.headers,
                table.preview(REPORT_PREVIEW_ROWS).iter().cloned(),
            );
        }
    }

    doc.heading(HEADING_NEXT_STEPS);
    for step in NEXT_STEPS {
        doc.paragraph(step);
    }

    doc
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
