//! Sweetness category parsing and residual sugar estimation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweetnessLevel {
    Dry,
    OffDry,
    Medium,
    SemiSweet,
    Sweet,
    Unknown,
}

impl SweetnessLevel {
    /// Classifies a sweetness label by substring. Order matters: "off-dry"
    /// and "halbtrocken" must not be read as plain dry, and "semi-dry" must
    /// not be read as semi-sweet.
    pub fn parse(label: &str) -> Self {
        let label = label.to_lowercase();
        let has = |needles: &[&str]| needles.iter().any(|needle| label.contains(needle));
        if has(&["beerenauslese", "eiswein"]) {
            Self::Sweet
        } else if has(&["off", "feinherb", "halbtrocken", "semi-dry", "semi dry"]) {
            Self::OffDry
        } else if has(&["semi", "halb", "lieblich"]) {
            Self::SemiSweet
        } else if has(&["medium"]) {
            Self::Medium
        } else if has(&["sweet", "süß", "süss", "suss"]) {
            Self::Sweet
        } else if has(&["dry", "trocken", "brut"]) {
            Self::Dry
        } else {
            Self::Unknown
        }
    }

    pub fn scalar(&self) -> f64 {
        match self {
            Self::Dry => 0.05,
            Self::OffDry => 0.20,
            Self::Medium => 0.45,
            Self::SemiSweet => 0.60,
            Self::Sweet => 0.90,
            Self::Unknown => 0.10,
        }
    }

    /// Canonical label that parses back to the same level.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Dry => Some("dry"),
            Self::OffDry => Some("off-dry"),
            Self::Medium => Some("medium"),
            Self::SemiSweet => Some("semi-sweet"),
            Self::Sweet => Some("sweet"),
            Self::Unknown => None,
        }
    }

    /// Typical residual sugar in g/L for the category.
    pub fn typical_residual_sugar(&self) -> f64 {
        match self {
            Self::Dry => 4.0,
            Self::OffDry => 12.0,
            Self::Medium => 25.0,
            Self::SemiSweet => 45.0,
            Self::Sweet => 120.0,
            Self::Unknown => 6.0,
        }
    }
}

/// Prädikat designations that pin residual sugar more precisely than the
/// sweetness category. Longest designation first.
const PRADIKAT_SUGAR: &[(&str, f64)] = &[
    ("trockenbeerenauslese", 300.0),
    ("beerenauslese", 180.0),
    ("eiswein", 180.0),
    ("auslese", 80.0),
    ("spätlese", 40.0),
];

/// Estimates residual sugar (g/L) from lower-cased notes and the sweetness level.
pub fn estimate_residual_sugar(level: SweetnessLevel, lowered_notes: &[String]) -> f64 {
    PRADIKAT_SUGAR
        .iter()
        .find(|(marker, _)| lowered_notes.iter().any(|note| note.contains(marker)))
        .map(|(_, grams)| *grams)
        .unwrap_or_else(|| level.typical_residual_sugar())
}
