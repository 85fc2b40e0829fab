//! The fixed milestone anchors.
//!
//! Three dates mark the relationship: the first meeting, the reunion, and
//! the marriage registration. They are process-wide constants and the
//! statistics builder counts days elapsed since each of them.

use chrono::NaiveDate;
use serde::Serialize;

use crate::moment::Tone;

/// One fixed anchor date, labeled and colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    /// Display label.
    pub label: &'static str,
    /// The anchor date.
    pub date: NaiveDate,
    /// Color tone used when rendering the counter.
    pub tone: Tone,
}

/// The three milestone anchors, in display priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MilestoneSet {
    /// 相知 — the day they first met.
    pub first_meeting: Milestone,
    /// 再相遇 — the day they found each other again.
    pub reunion: Milestone,
    /// 领证 — the day the marriage was registered.
    pub marriage: Milestone,
}

impl MilestoneSet {
    /// The fixed anchors used by the timeline.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            first_meeting: Milestone {
                label: "相知",
                date: anchor(2022, 4, 24),
                tone: Tone::Pink,
            },
            reunion: Milestone {
                label: "再相遇",
                date: anchor(2023, 2, 4),
                tone: Tone::Purple,
            },
            marriage: Milestone {
                label: "领证",
                date: anchor(2024, 11, 23),
                tone: Tone::Indigo,
            },
        }
    }

    /// The milestones in their fixed priority order: first meeting,
    /// reunion, marriage. This is display order, not a ranking.
    #[must_use]
    pub fn in_priority_order(&self) -> [&Milestone; 3] {
        [&self.first_meeting, &self.reunion, &self.marriage]
    }
}

fn anchor(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid anchor date literal")
}
