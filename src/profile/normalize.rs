//! Derivation cascade: explicit value, keyword heuristic, wine-type default,
//! static default.
//!
//! Normalization never fails. Malformed fields are treated exactly like
//! missing ones; the only visible effect is that a fallback is substituted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use super::defaults::{categorical_default, static_default};
use super::keywords::keyword_value;
use super::sweetness::{estimate_residual_sugar, SweetnessLevel};
use super::{keys, Dimension, Rgb, SensoryProfile, WineType};

/// Value substituted for boolean `true` flags and for bubbles without a level.
const FLAG_ON: f64 = 0.7;

/// Which stage of the cascade produced a dimension's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Derivation {
    Explicit,
    Keyword,
    WineType,
    Default,
    /// Effervescence promoted by a `bubbles`/`sparkling` flag.
    Flag,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub dimension: Dimension,
    pub value: f64,
    pub derivation: Derivation,
}

/// Builds a canonical profile from a raw attribute map.
///
/// `explicit_color` takes precedence over any color in `raw`.
pub fn normalize(raw: &Map<String, Value>, explicit_color: Option<&str>) -> SensoryProfile {
    normalize_traced(raw, explicit_color).0
}

/// Like [`normalize`], but accepts any JSON value; non-objects act as an empty map.
pub fn normalize_value(raw: &Value, explicit_color: Option<&str>) -> SensoryProfile {
    match raw.as_object() {
        Some(map) => normalize(map, explicit_color),
        None => normalize(&Map::new(), explicit_color),
    }
}

/// Normalizes and reports how each scalar dimension was resolved.
pub fn normalize_traced(
    raw: &Map<String, Value>,
    explicit_color: Option<&str>,
) -> (SensoryProfile, Vec<Resolution>) {
    let notes = text_list(raw.get(keys::TASTING_NOTES));
    let grapes = text_list(raw.get(keys::GRAPES));

    let supplied_type = raw
        .get(keys::WINE_TYPE)
        .and_then(Value::as_str)
        .map(WineType::parse)
        .unwrap_or(WineType::Auto);
    let base_color = resolve_base_color(raw, explicit_color, supplied_type);
    let wine_type = match supplied_type {
        WineType::Auto => WineType::classify(base_color),
        supplied => supplied,
    };

    let mut resolutions: Vec<Resolution> = Dimension::ALL
        .iter()
        .map(|&dimension| resolve_dimension(raw, dimension, wine_type, &notes, &grapes))
        .collect();

    if let Some(effervescence) = resolutions
        .iter_mut()
        .find(|resolution| resolution.dimension == Dimension::Effervescence)
    {
        if effervescence.value == 0.0 && bubble_flag(raw) {
            effervescence.value = FLAG_ON;
            effervescence.derivation = Derivation::Flag;
        }
    }

    for resolution in &resolutions {
        debug!(
            dimension = resolution.dimension.key(),
            value = resolution.value,
            derivation = ?resolution.derivation,
            "resolved profile dimension"
        );
    }

    let sweetness_level = raw
        .get(keys::SWEETNESS)
        .and_then(Value::as_str)
        .map(SweetnessLevel::parse)
        .unwrap_or(SweetnessLevel::Unknown);
    let residual_sugar = raw
        .get(keys::RESIDUAL_SUGAR)
        .and_then(Value::as_f64)
        .filter(|grams| grams.is_finite())
        .map(|grams| grams.max(0.0))
        .unwrap_or_else(|| estimate_residual_sugar(sweetness_level, &notes));
    let summary = raw
        .get(keys::SUMMARY)
        .and_then(Value::as_str)
        .map(str::to_string);

    let value = |dimension: Dimension| {
        resolutions
            .iter()
            .find(|resolution| resolution.dimension == dimension)
            .map(|resolution| resolution.value)
            .unwrap_or_else(|| static_default(dimension))
    };

    let profile = SensoryProfile {
        base_color,
        wine_type,
        color_intensity: value(Dimension::ColorIntensity),
        acidity: value(Dimension::Acidity),
        body: value(Dimension::Body),
        tannin: value(Dimension::Tannin),
        depth: value(Dimension::Depth),
        oak: value(Dimension::Oak),
        minerality: value(Dimension::Minerality),
        maturity: value(Dimension::Maturity),
        fruit_intensity: value(Dimension::FruitIntensity),
        non_fruit_intensity: value(Dimension::NonFruitIntensity),
        effervescence: value(Dimension::Effervescence),
        sweetness: sweetness_level.scalar(),
        sweetness_level,
        residual_sugar,
        summary,
    };
    (profile, resolutions)
}

fn resolve_dimension(
    raw: &Map<String, Value>,
    dimension: Dimension,
    wine_type: WineType,
    notes: &[String],
    grapes: &[String],
) -> Resolution {
    let (value, derivation) = if let Some(value) = raw.get(dimension.key()).and_then(explicit_scalar) {
        (value, Derivation::Explicit)
    } else if let Some(value) = keyword_value(dimension, notes, grapes) {
        (value, Derivation::Keyword)
    } else if let Some(value) = categorical_default(dimension, wine_type) {
        (value, Derivation::WineType)
    } else {
        (static_default(dimension), Derivation::Default)
    };
    Resolution {
        dimension,
        value,
        derivation,
    }
}

/// Reads an explicit scalar. Numbers above 1 are read as percentages.
pub(crate) fn explicit_scalar(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|v| v.is_finite()).map(|v| {
            let v = if v > 1.0 { v / 100.0 } else { v };
            v.clamp(0.0, 1.0)
        }),
        Value::Bool(true) => Some(FLAG_ON),
        Value::Bool(false) => Some(0.0),
        _ => None,
    }
}

fn bubble_flag(raw: &Map<String, Value>) -> bool {
    [keys::BUBBLES, keys::SPARKLING]
        .iter()
        .any(|key| matches!(raw.get(*key), Some(Value::Bool(true))))
}

fn resolve_base_color(
    raw: &Map<String, Value>,
    explicit_color: Option<&str>,
    supplied_type: WineType,
) -> Rgb {
    explicit_color
        .and_then(Rgb::from_hex)
        .or_else(|| {
            raw.get(keys::BASE_COLOR_HEX)
                .and_then(Value::as_str)
                .and_then(Rgb::from_hex)
        })
        .or_else(|| {
            raw.get(keys::COLOR_NAME)
                .and_then(Value::as_str)
                .and_then(Rgb::from_name)
        })
        .or_else(|| supplied_type.typical_color())
        .unwrap_or_default()
}

/// Collects lower-cased strings from a list, or from a single string.
fn text_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_lowercase)
            .collect(),
        Some(Value::String(text)) => vec![text.to_lowercase()],
        _ => Vec::new(),
    }
}
