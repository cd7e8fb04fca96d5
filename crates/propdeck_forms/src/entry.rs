use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Color tag applied when the prompt input has no second segment.
pub const DEFAULT_COLOR_TAG: &str = "default";

/// One item in the to-do list demo: a label plus a raw color tag.
/// The tag is stored unvalidated; unknown tags fall back to a neutral
/// appearance at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    pub label: String,
    pub color_tag: String,
}

impl Entry {
    pub fn new(label: impl Into<String>, color_tag: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            color_tag: color_tag.into(),
        }
    }

    /// Parse raw prompt input of the form `label,tag`.
    ///
    /// The label is the first comma-separated segment and the tag the last;
    /// with fewer than two segments the tag is `"default"`.
    pub fn parse(raw: &str) -> Self {
        let segments: Vec<&str> = raw.split(',').collect();
        let label = segments.first().copied().unwrap_or("");
        let color_tag = if segments.len() < 2 {
            DEFAULT_COLOR_TAG
        } else {
            segments.last().copied().unwrap_or(DEFAULT_COLOR_TAG)
        };
        Self::new(label, color_tag)
    }

    pub fn background(&self) -> CellBackground {
        CellBackground::from_tag(&self.color_tag)
    }
}

/// Background appearance for an entry row. Total over arbitrary tags: only
/// `blue`, `red` and `green` are recognized, everything else (the literal
/// `"default"` included) renders neutral gray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellBackground {
    TranslucentBlue,
    TranslucentRed,
    TranslucentGreen,
    NeutralGray,
}

impl CellBackground {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "blue" => CellBackground::TranslucentBlue,
            "red" => CellBackground::TranslucentRed,
            "green" => CellBackground::TranslucentGreen,
            _ => CellBackground::NeutralGray,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CellBackground::TranslucentBlue => "translucent blue",
            CellBackground::TranslucentRed => "translucent red",
            CellBackground::TranslucentGreen => "translucent green",
            CellBackground::NeutralGray => "neutral gray",
        }
    }
}
