//! Timeline navigation and temporal statistics.
//!
//! This is the logic behind the card sequence: whole-day date arithmetic,
//! the "days since milestone" counters, the cyclic navigation controller
//! with its transition lock, and swipe detection.

pub mod dates;
pub mod navigation;
pub mod stats;
pub mod swipe;

pub use dates::{parse_date, span_days};
pub use navigation::{Direction, NavRequest, Navigator, TRANSITION_DURATION};
pub use stats::{days_since_milestones, Counter};
pub use swipe::{SwipeTracker, SWIPE_THRESHOLD};
