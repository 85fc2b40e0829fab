//! Core data types for souvenir.
//!
//! This module defines the moment record: one dated card in the timeline,
//! with an optional image, optional short subtext, and an associated diary
//! entry. Records are authored at build time and never mutated.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;

/// Decorative color token for cards without an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Warm pink, the default card tone.
    Pink,
    /// Violet purple.
    Purple,
    /// Deep indigo.
    Indigo,
    /// Soft green.
    Green,
    /// Sky blue.
    Blue,
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pink => write!(f, "pink"),
            Self::Purple => write!(f, "purple"),
            Self::Indigo => write!(f, "indigo"),
            Self::Green => write!(f, "green"),
            Self::Blue => write!(f, "blue"),
        }
    }
}

/// A diary entry attached to a moment.
///
/// The content is free text; newline characters separate paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diary {
    /// The raw diary text.
    pub content: String,
}

impl Diary {
    /// Create a diary entry from raw text.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Iterate over the trimmed, non-blank paragraphs of the entry.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content
            .split('\n')
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
    }
}

/// A single dated moment in the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Moment {
    /// The calendar date of the moment.
    pub date: NaiveDate,

    /// Short display title.
    pub title: String,

    /// Optional short line, shown on the card only when no image is
    /// present, and as the diary modal preamble when it exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,

    /// Optional picture asset reference (lightbox target).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,

    /// Optional decorative tone, used only when `image` is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Tone>,

    /// The diary entry behind the card.
    pub diary: Diary,
}

impl Moment {
    /// The date rendered verbatim in `YYYY-MM-DD` form.
    #[must_use]
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Whether the card has a picture to open in the lightbox.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}
