//! `souvenir` - a relationship-memory timeline for the terminal
//!
//! This library provides the timeline data model, the navigation and
//! temporal-statistics engine, background-music control, and the terminal
//! presentation layer behind the `souvenir` binary.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod milestone;
pub mod moment;
pub mod store;
pub mod timeline;
pub mod ui;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use milestone::{Milestone, MilestoneSet};
pub use moment::{Diary, Moment, Tone};
pub use store::MomentStore;
