//! Fallback values for dimensions the attribute map leaves unresolved.

use super::{Dimension, WineType};

/// Per-wine-type constants applied when neither an explicit value nor a
/// keyword heuristic resolved the dimension. Sparkling wines use the white
/// column.
pub fn categorical_default(dimension: Dimension, wine_type: WineType) -> Option<f64> {
    use WineType::*;
    let value = match (dimension, wine_type) {
        (_, Auto) => return None,
        (Dimension::Acidity, White | Sparkling) => 0.70,
        (Dimension::Acidity, Rose) => 0.55,
        (Dimension::Acidity, Red) => 0.40,
        (Dimension::Body, Red) => 0.60,
        (Dimension::Body, Rose) => 0.45,
        (Dimension::Body, White | Sparkling) => 0.35,
        (Dimension::Tannin, Red) => 0.45,
        (Dimension::Tannin, Rose) => 0.20,
        (Dimension::Tannin, White | Sparkling) => 0.05,
        (Dimension::Depth, Red) => 0.55,
        (Dimension::Depth, Rose) => 0.40,
        (Dimension::Depth, White | Sparkling) => 0.35,
        (Dimension::ColorIntensity, Red) => 0.70,
        (Dimension::ColorIntensity, _) => 0.55,
        (Dimension::Effervescence, Sparkling) => 0.70,
        _ => return None,
    };
    Some(value)
}

/// Baseline for anything the cascade left unresolved.
pub fn static_default(dimension: Dimension) -> f64 {
    match dimension {
        Dimension::ColorIntensity => 0.55,
        Dimension::Acidity => 0.50,
        Dimension::Body => 0.40,
        Dimension::Tannin => 0.20,
        Dimension::Depth => 0.40,
        Dimension::Oak => 0.10,
        Dimension::Minerality => 0.20,
        Dimension::Maturity => 0.20,
        Dimension::FruitIntensity => 0.40,
        Dimension::NonFruitIntensity => 0.25,
        Dimension::Effervescence => 0.0,
    }
}
