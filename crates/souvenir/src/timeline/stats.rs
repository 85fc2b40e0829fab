//! "Days since milestone" counters.
//!
//! Pure derivation from the displayed moment's date and the fixed milestone
//! set. A milestone only counts once the timeline has reached it.

use chrono::NaiveDate;
use serde::Serialize;

use crate::milestone::MilestoneSet;
use crate::moment::Tone;
use crate::timeline::dates::span_days;

/// The counter unit shown next to each figure.
pub const DAY_UNIT: &str = "天";

/// One "days since milestone" counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Counter {
    /// Milestone label.
    pub label: &'static str,
    /// Whole days elapsed, counting the anchor day as day one.
    pub days: i64,
    /// Color tone for rendering.
    pub tone: Tone,
}

/// Build the counters for the given date, in fixed priority order.
///
/// A milestone is included only when `current` has reached its date and the
/// resulting day count is non-negative. The order is first meeting, reunion,
/// marriage — display order, regardless of magnitude.
#[must_use]
pub fn days_since_milestones(current: NaiveDate, milestones: &MilestoneSet) -> Vec<Counter> {
    let mut counters = Vec::with_capacity(3);
    for milestone in milestones.in_priority_order() {
        if current < milestone.date {
            continue;
        }
        let days = span_days(milestone.date, current);
        if days < 0 {
            continue;
        }
        counters.push(Counter {
            label: milestone.label,
            days,
            tone: milestone.tone,
        });
    }
    counters
}

/// The statistics block header: `截至 {date}`.
#[must_use]
pub fn as_of_label(current: NaiveDate) -> String {
    format!("截至 {}", current.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::dates::parse_date;

    fn date(value: &str) -> NaiveDate {
        parse_date(value).unwrap()
    }

    #[test]
    fn test_first_meeting_day_counts_as_one() {
        let counters = days_since_milestones(date("2022-04-24"), &MilestoneSet::standard());
        assert_eq!(counters.len(), 1);
        assert_eq!(counters[0].label, "相知");
        assert_eq!(counters[0].days, 1);
    }

    #[test]
    fn test_before_first_meeting_yields_nothing() {
        let counters = days_since_milestones(date("2021-12-31"), &MilestoneSet::standard());
        assert!(counters.is_empty());
    }

    #[test]
    fn test_reunion_day_includes_two_counters() {
        // Reunion date, before the marriage: 相知 and 再相遇, not 领证.
        let counters = days_since_milestones(date("2023-02-04"), &MilestoneSet::standard());
        let labels: Vec<&str> = counters.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["相知", "再相遇"]);
        assert_eq!(counters[1].days, 1);
    }

    #[test]
    fn test_after_marriage_includes_all_three_in_priority_order() {
        let counters = days_since_milestones(date("2025-01-01"), &MilestoneSet::standard());
        let labels: Vec<&str> = counters.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["相知", "再相遇", "领证"]);
        // Earlier anchors have larger counts, yet keep their fixed slot.
        assert!(counters[0].days > counters[1].days);
        assert!(counters[1].days > counters[2].days);
    }

    #[test]
    fn test_counts_are_inclusive_of_anchor_day() {
        let counters = days_since_milestones(date("2022-04-25"), &MilestoneSet::standard());
        assert_eq!(counters[0].days, 2);
    }

    #[test]
    fn test_as_of_label() {
        assert_eq!(as_of_label(date("2023-02-04")), "截至 2023-02-04");
    }

    #[test]
    fn test_counter_serializes() {
        let counters = days_since_milestones(date("2022-04-24"), &MilestoneSet::standard());
        let json = serde_json::to_string(&counters).unwrap();
        assert!(json.contains("相知"));
        assert!(json.contains("\"days\":1"));
    }
}
