//! Canonical sensory profile and the normalizer that builds it.
//!
//! A [`SensoryProfile`] is the fully populated, clamped description of a wine
//! that the renderer consumes. It is produced by [`normalize`] from a sparse
//! attribute map and never mutated afterwards.

pub mod color;
pub mod defaults;
pub mod keywords;
pub mod normalize;
pub mod sweetness;

pub use color::{Hsl, Rgb, PALE_STRAW};
pub use normalize::{normalize, normalize_traced, normalize_value, Derivation, Resolution};
pub use sweetness::SweetnessLevel;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

/// Raw attribute keys understood by the normalizer.
pub mod keys {
    pub const WINE_TYPE: &str = "wine_type";
    pub const GRAPES: &str = "grapes";
    pub const TASTING_NOTES: &str = "tasting_notes";
    pub const SWEETNESS: &str = "sweetness";
    pub const BASE_COLOR_HEX: &str = "base_color_hex";
    pub const COLOR_NAME: &str = "color_name";
    pub const BUBBLES: &str = "bubbles";
    pub const SPARKLING: &str = "sparkling";
    pub const RESIDUAL_SUGAR: &str = "residual_sugar";
    pub const SUMMARY: &str = "summary";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WineType {
    Red,
    White,
    Rose,
    Sparkling,
    /// Classify from the base color.
    Auto,
}

impl WineType {
    /// Parses a free-form wine type label. Unrecognized labels map to `Auto`.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "red" | "rot" | "rotwein" => Self::Red,
            "white" | "weiss" | "weiß" | "weisswein" | "weißwein" => Self::White,
            "rose" | "rosé" | "rosado" | "rosato" => Self::Rose,
            "sparkling" | "sekt" | "schaumwein" | "champagne" => Self::Sparkling,
            _ => Self::Auto,
        }
    }

    /// HSL threshold classification used when no explicit type is supplied.
    pub fn classify(color: Rgb) -> Self {
        let Hsl { h, l, .. } = color.to_hsl();
        if l > 0.65 && (40.0..=120.0).contains(&h) {
            Self::White
        } else if l > 0.60 && (h >= 330.0 || h <= 30.0) {
            Self::Rose
        } else {
            Self::Red
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::White => "white",
            Self::Rose => "rose",
            Self::Sparkling => "sparkling",
            Self::Auto => "auto",
        }
    }

    /// Typical glass color for a wine type, used when no color was supplied.
    pub fn typical_color(&self) -> Option<Rgb> {
        match self {
            Self::Red => Rgb::from_name("ruby"),
            Self::Rose => Rgb::from_name("rosé"),
            Self::White | Self::Sparkling => Some(PALE_STRAW),
            Self::Auto => None,
        }
    }
}

/// Scalar profile dimensions resolved through the derivation cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    ColorIntensity,
    Acidity,
    Body,
    Tannin,
    Depth,
    Oak,
    Minerality,
    Maturity,
    FruitIntensity,
    NonFruitIntensity,
    Effervescence,
}

impl Dimension {
    pub const ALL: [Dimension; 11] = [
        Dimension::ColorIntensity,
        Dimension::Acidity,
        Dimension::Body,
        Dimension::Tannin,
        Dimension::Depth,
        Dimension::Oak,
        Dimension::Minerality,
        Dimension::Maturity,
        Dimension::FruitIntensity,
        Dimension::NonFruitIntensity,
        Dimension::Effervescence,
    ];

    /// Attribute key carrying an explicit value for this dimension.
    pub fn key(&self) -> &'static str {
        match self {
            Self::ColorIntensity => "color_intensity",
            Self::Acidity => "acidity",
            Self::Body => "body",
            Self::Tannin => "tannin",
            Self::Depth => "depth",
            Self::Oak => "oak",
            Self::Minerality => "minerality",
            Self::Maturity => "maturity",
            Self::FruitIntensity => "fruit_intensity",
            Self::NonFruitIntensity => "non_fruit_intensity",
            Self::Effervescence => "effervescence",
        }
    }
}

/// Fully normalized wine description. Every scalar except `residual_sugar`
/// lies in [0,1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensoryProfile {
    pub base_color: Rgb,
    pub wine_type: WineType,
    pub color_intensity: f64,
    pub acidity: f64,
    pub body: f64,
    pub tannin: f64,
    pub depth: f64,
    pub oak: f64,
    pub minerality: f64,
    pub maturity: f64,
    pub fruit_intensity: f64,
    pub non_fruit_intensity: f64,
    pub effervescence: f64,
    pub sweetness: f64,
    pub sweetness_level: SweetnessLevel,
    /// Grams per liter, not clamped to [0,1].
    pub residual_sugar: f64,
    #[serde(default)]
    pub summary: Option<String>,
}

impl SensoryProfile {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::ColorIntensity => self.color_intensity,
            Dimension::Acidity => self.acidity,
            Dimension::Body => self.body,
            Dimension::Tannin => self.tannin,
            Dimension::Depth => self.depth,
            Dimension::Oak => self.oak,
            Dimension::Minerality => self.minerality,
            Dimension::Maturity => self.maturity,
            Dimension::FruitIntensity => self.fruit_intensity,
            Dimension::NonFruitIntensity => self.non_fruit_intensity,
            Dimension::Effervescence => self.effervescence,
        }
    }

    /// Returns a copy with one dimension replaced (clamped to [0,1]).
    pub fn with(&self, dimension: Dimension, value: f64) -> Self {
        let mut next = self.clone();
        let value = value.clamp(0.0, 1.0);
        let slot = match dimension {
            Dimension::ColorIntensity => &mut next.color_intensity,
            Dimension::Acidity => &mut next.acidity,
            Dimension::Body => &mut next.body,
            Dimension::Tannin => &mut next.tannin,
            Dimension::Depth => &mut next.depth,
            Dimension::Oak => &mut next.oak,
            Dimension::Minerality => &mut next.minerality,
            Dimension::Maturity => &mut next.maturity,
            Dimension::FruitIntensity => &mut next.fruit_intensity,
            Dimension::NonFruitIntensity => &mut next.non_fruit_intensity,
            Dimension::Effervescence => &mut next.effervescence,
        };
        *slot = value;
        next
    }

    /// Converts the profile back into the raw attribute shape, so that
    /// normalizing the result reproduces this profile.
    pub fn to_raw(&self) -> Map<String, Value> {
        let mut raw = Map::new();
        raw.insert(keys::BASE_COLOR_HEX.into(), Value::from(self.base_color.to_hex()));
        raw.insert(keys::WINE_TYPE.into(), Value::from(self.wine_type.label()));
        for dimension in Dimension::ALL {
            raw.insert(dimension.key().into(), Value::from(self.get(dimension)));
        }
        if let Some(label) = self.sweetness_level.label() {
            raw.insert(keys::SWEETNESS.into(), Value::from(label));
        }
        raw.insert(keys::RESIDUAL_SUGAR.into(), Value::from(self.residual_sugar));
        if let Some(summary) = &self.summary {
            raw.insert(keys::SUMMARY.into(), Value::from(summary.clone()));
        }
        raw
    }

    /// Stable SHA-256 digest of the canonical attribute form.
    pub fn fingerprint(&self) -> String {
        let canonical = Value::Object(self.to_raw()).to_string();
        let digest = Sha256::digest(canonical.as_bytes());
        format!("{digest:x}")
    }
}

impl Default for SensoryProfile {
    /// The profile an empty attribute map normalizes to.
    fn default() -> Self {
        normalize(&Map::new(), None)
    }
}
