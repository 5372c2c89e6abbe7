use crate::types::{sort_timeline_order, OverrideFlags, PlayRow};

pub const INDEXABILITY_ASSURANCE: &str = "Indexability Assurance";
pub const TECHNICAL_INTEGRITY: &str = "Technical Integrity & Error Resolution";
pub const LOCAL_SEO: &str = "Local SEO & GBP Optimization";
pub const HORIZONTAL_CONTENT: &str = "Horizontal Content Expansion";

/// Apply the audit override rules and return the plays in timeline order.
///
/// Rules match on the exact strategy name; a profile without the named play
/// is left alone. Every rule forces fixed values, so applying the same flags
/// twice gives the same result as applying them once.
pub fn apply_overrides(plays: &[PlayRow], flags: OverrideFlags) -> Vec<PlayRow> {
    let mut adjusted = plays.to_vec();

    if flags.tech_blocker_present {
        for play in adjusted.iter_mut().filter(|p| {
            p.strategy_name == INDEXABILITY_ASSURANCE || p.strategy_name == TECHNICAL_INTEGRITY
        }) {
            tracing::debug!(strategy = %play.strategy_name, "tech blocker: month 1, priority 0");
            play.month_allocation = 1;
            play.priority_order = 0;
        }
    }

    if flags.local_priority {
        for play in adjusted.iter_mut().filter(|p| p.strategy_name == LOCAL_SEO) {
            tracing::debug!(strategy = %play.strategy_name, "local priority: month 1");
            play.month_allocation = 1;
        }
    }

    if !flags.content_gap_present {
        for play in adjusted.iter_mut().filter(|p| p.strategy_name == HORIZONTAL_CONTENT) {
            tracing::debug!(strategy = %play.strategy_name, "no content gap: month 5");
            play.month_allocation = 5;
        }
    }

    sort_timeline_order(&mut adjusted);
    adjusted
}

impl OverrideFlags {
    /// Human-readable list of the adjustments these flags turn on.
    pub fn describe(&self) -> Vec<String> {
        let mut active = Vec::new();
        if self.tech_blocker_present {
            active.push(format!(
                "tech blocker: '{INDEXABILITY_ASSURANCE}' and '{TECHNICAL_INTEGRITY}' moved to month 1, priority 0"
            ));
        }
        if self.local_priority {
            active.push(format!("local priority: '{LOCAL_SEO}' moved to month 1"));
        }
        if !self.content_gap_present {
            active.push(format!("no content gaps: '{HORIZONTAL_CONTENT}' moved to month 5"));
        }
        active
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(plays: &'a [PlayRow], name: &str) -> &'a PlayRow {
        plays.iter().find(|p| p.strategy_name == name).unwrap()
    }

    fn none() -> OverrideFlags {
        OverrideFlags {
            tech_blocker_present: false,
            local_priority: false,
            content_gap_present: true,
        }
    }

    fn catalog() -> Vec<PlayRow> {
        vec![
            PlayRow::new("Keyword Mapping", 1, 2, 60),
            PlayRow::new(LOCAL_SEO, 2, 3, 45),
            PlayRow::new(HORIZONTAL_CONTENT, 3, 2, 120),
            PlayRow::new(INDEXABILITY_ASSURANCE, 5, 4, 30),
            PlayRow::new(TECHNICAL_INTEGRITY, 6, 3, 90),
        ]
    }

    #[test]
    fn tech_blocker_pulls_technical_plays_forward() {
        let flags = OverrideFlags {
            tech_blocker_present: true,
            ..none()
        };
        let out = apply_overrides(&catalog(), flags);
        let idx = find(&out, INDEXABILITY_ASSURANCE);
        assert_eq!((idx.priority_order, idx.month_allocation), (0, 1));
        let tech = find(&out, TECHNICAL_INTEGRITY);
        assert_eq!((tech.priority_order, tech.month_allocation), (0, 1));
        assert_eq!(out[0].month_allocation, 1);
        assert_eq!(out[1].month_allocation, 1);
    }

    #[test]
    fn local_priority_only_touches_month() {
        let flags = OverrideFlags {
            local_priority: true,
            ..none()
        };
        let out = apply_overrides(&catalog(), flags);
        let local = find(&out, LOCAL_SEO);
        assert_eq!((local.priority_order, local.month_allocation), (2, 1));
        assert_eq!(out[0].strategy_name, LOCAL_SEO);
    }

    #[test]
    fn missing_content_gap_pushes_expansion_to_month_five() {
        let flags = OverrideFlags {
            content_gap_present: false,
            ..none()
        };
        let input = catalog();
        let out = apply_overrides(&input, flags);
        assert_eq!(find(&out, HORIZONTAL_CONTENT).month_allocation, 5);
        for original in input.iter().filter(|p| p.strategy_name != HORIZONTAL_CONTENT) {
            assert_eq!(find(&out, &original.strategy_name), original);
        }
    }

    #[test]
    fn result_is_in_timeline_order() {
        let out = apply_overrides(&catalog(), none());
        let keys: Vec<(u8, u32)> = out
            .iter()
            .map(|p| (p.month_allocation, p.priority_order))
            .collect();
        assert_eq!(keys, [(2, 1), (2, 3), (3, 2), (3, 6), (4, 5)]);
    }

    #[test]
    fn overrides_are_idempotent() {
        let flags = OverrideFlags {
            tech_blocker_present: true,
            local_priority: true,
            content_gap_present: false,
        };
        let once = apply_overrides(&catalog(), flags);
        let twice = apply_overrides(&once, flags);
        assert_eq!(once, twice);
    }

    #[test]
    fn name_matching_is_exact() {
        let plays = vec![PlayRow::new("indexability assurance", 5, 4, 30)];
        let flags = OverrideFlags {
            tech_blocker_present: true,
            ..none()
        };
        assert_eq!(apply_overrides(&plays, flags), plays);
    }

    #[test]
    fn profile_without_targets_is_unaffected() {
        let plays = vec![PlayRow::new("Link Building", 1, 3, 30)];
        let flags = OverrideFlags {
            tech_blocker_present: true,
            local_priority: true,
            content_gap_present: false,
        };
        assert_eq!(apply_overrides(&plays, flags), plays);
    }

    #[test]
    fn describe_lists_active_rules() {
        assert_eq!(OverrideFlags::default().describe().len(), 1);
        assert!(none().describe().is_empty());
    }
}
