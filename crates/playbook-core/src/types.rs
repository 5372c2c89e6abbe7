use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

pub const COL_STRATEGY: &str = "Strategy / Play";
pub const COL_PRIORITY: &str = "Priority Order";
pub const COL_MONTH: &str = "Month Allocation (1-6)";
pub const COL_EFFORT: &str = "Allocated Effort (Minutes)";
pub const COL_MONTH_LABEL: &str = "Month";

pub const MIN_MONTH: u8 = 1;
pub const MAX_MONTH: u8 = 6;

// ---------------------------------------------------------------------------
// PlayRow
// ---------------------------------------------------------------------------

/// One recommended strategy with its scheduling and effort metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRow {
    #[serde(rename = "Strategy / Play")]
    pub strategy_name: String,
    #[serde(rename = "Priority Order")]
    pub priority_order: u32,
    #[serde(rename = "Month Allocation (1-6)")]
    pub month_allocation: u8,
    #[serde(rename = "Allocated Effort (Minutes)")]
    pub allocated_effort_minutes: u32,
}

impl PlayRow {
    pub fn new(name: impl Into<String>, priority: u32, month: u8, effort: u32) -> Self {
        Self {
            strategy_name: name.into(),
            priority_order: priority,
            month_allocation: month,
            allocated_effort_minutes: effort,
        }
    }

    pub fn month_label(&self) -> String {
        format!("Month {}", self.month_allocation)
    }
}

// ---------------------------------------------------------------------------
// Orderings
//
// Three different orderings are used at three different moments: the catalog
// order right after parsing, the timeline order after overrides, and the
// focus order used for the report's bullet list. All sorts are stable.
// ---------------------------------------------------------------------------

/// Catalog order: (priority, month).
pub fn sort_parse_order(plays: &mut [PlayRow]) {
    plays.sort_by_key(|p| (p.priority_order, p.month_allocation));
}

/// Timeline order: (month, priority).
pub fn sort_timeline_order(plays: &mut [PlayRow]) {
    plays.sort_by_key(|p| (p.month_allocation, p.priority_order));
}

/// Focus order: priority only. Ties keep their incoming order.
pub fn focus_order(plays: &[PlayRow]) -> Vec<&PlayRow> {
    let mut ordered: Vec<&PlayRow> = plays.iter().collect();
    ordered.sort_by_key(|p| p.priority_order);
    ordered
}

// ---------------------------------------------------------------------------
// ProfileSheet / PlayPack
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSheet {
    /// Worksheet name; unique within a workbook.
    pub key: String,
    pub display_name: String,
    pub description: String,
    pub plays: Vec<PlayRow>,
}

impl ProfileSheet {
    /// Selection label: `"<key> — <description>"`.
    pub fn choice_label(&self) -> String {
        format!("{} — {}", self.key, self.description)
    }
}

/// Every profile found in one workbook, in sheet order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayPack {
    pub profiles: Vec<ProfileSheet>,
}

impl PlayPack {
    pub fn get(&self, key: &str) -> Option<&ProfileSheet> {
        self.profiles.iter().find(|p| p.key == key)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.key.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }
}

// ---------------------------------------------------------------------------
// OverrideFlags
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideFlags {
    #[serde(default)]
    pub tech_blocker_present: bool,
    #[serde(default = "default_true")]
    pub local_priority: bool,
    #[serde(default = "default_true")]
    pub content_gap_present: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OverrideFlags {
    fn default() -> Self {
        Self {
            tech_blocker_present: false,
            local_priority: true,
            content_gap_present: true,
        }
    }
}

// ---------------------------------------------------------------------------
// EffortSummary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EffortSummary {
    pub total_minutes: u64,
    /// Hours, rounded to two decimals.
    pub total_hours: f64,
}

impl EffortSummary {
    pub fn from_plays(plays: &[PlayRow]) -> Self {
        let total_minutes: u64 = plays
            .iter()
            .map(|p| u64::from(p.allocated_effort_minutes))
            .sum();
        let total_hours = (total_minutes as f64 / 60.0 * 100.0).round() / 100.0;
        Self {
            total_minutes,
            total_hours,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
