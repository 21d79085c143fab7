use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use wine_colours::profile::{normalize_traced, Derivation, Dimension, Rgb, SweetnessLevel, WineType};
use wine_colours::render::rings::RingGeometry;
use wine_colours::render::{plan, render, RingKind, RingStyle};

use super::support::fixtures::{normalize_json, raw};
use super::support::pixels::band_pixels;

#[test]
fn red_with_oaky_notes() {
    let input = raw(json!({
        "wine_type": "red",
        "tasting_notes": ["cherry", "vanilla", "oak"],
        "sweetness": "dry",
    }));
    let (profile, trace) = normalize_traced(&input, None);
    assert_eq!(profile.wine_type, WineType::Red);
    assert_eq!(profile.oak, 0.6);
    assert_eq!(profile.acidity, 0.40);
    assert_eq!(profile.tannin, 0.45);
    assert_eq!(profile.sweetness, 0.05);
    assert_eq!(profile.sweetness_level, SweetnessLevel::Dry);
    assert_eq!(profile.fruit_intensity, 0.60);
    assert_eq!(profile.base_color, Rgb::from_name("ruby").unwrap());

    let derivation = |dimension: Dimension| {
        trace
            .iter()
            .find(|resolution| resolution.dimension == dimension)
            .map(|resolution| resolution.derivation)
    };
    assert_eq!(derivation(Dimension::Oak), Some(Derivation::Keyword));
    assert_eq!(derivation(Dimension::Tannin), Some(Derivation::WineType));
    assert_eq!(derivation(Dimension::Minerality), Some(Derivation::Default));
}

#[test]
fn dark_hex_classifies_as_red() {
    let profile = normalize_json(json!({"base_color_hex": "#7A1F2B"}));
    assert_eq!(profile.wine_type, WineType::Red);
    assert_eq!(profile.base_color, Rgb::new(0x7A, 0x1F, 0x2B));
    assert_eq!(profile.acidity, 0.40);
    assert_eq!(profile.body, 0.60);
    assert_eq!(profile.tannin, 0.45);
    assert_eq!(profile.depth, 0.55);
    assert_eq!(profile.color_intensity, 0.70);
    assert_eq!(profile.oak, 0.10);
    assert_eq!(profile.minerality, 0.20);
    assert_eq!(profile.maturity, 0.20);
    assert_eq!(profile.fruit_intensity, 0.40);
    assert_eq!(profile.non_fruit_intensity, 0.25);
    assert_eq!(profile.effervescence, 0.0);
    assert_eq!(profile.sweetness, 0.10);
}

#[test]
fn bubbles_flag_renders_scatter_ring() {
    let profile = normalize_json(json!({"bubbles": true}));
    assert_eq!(profile.effervescence, 0.7);

    let geometry = RingGeometry::new(512);
    let mut rng = StdRng::seed_from_u64(42);
    let layers = plan(&profile, &geometry, &mut rng);
    assert!(matches!(
        layers[RingKind::Effervescence.position()].style,
        RingStyle::Scatter { .. }
    ));

    // The translucent fallback barely moves the underlay; bubbles brighten
    // spots well above it.
    let still = profile.with(Dimension::Effervescence, 0.0);
    let brightest_blue = |pixels: Vec<[u8; 3]>| pixels.iter().map(|pixel| pixel[2]).max().unwrap_or(0);
    let fizzy_peak = brightest_blue(band_pixels(&render(&profile, 512, 42), RingKind::Effervescence, 1.0));
    let still_peak = brightest_blue(band_pixels(&render(&still, 512, 42), RingKind::Effervescence, 1.0));
    assert!(
        fizzy_peak > still_peak.saturating_add(20),
        "scatter peak {fizzy_peak} vs stroke peak {still_peak}"
    );
}

#[test]
fn sparkling_analysis_keeps_white_structure() {
    let profile = normalize_json(json!({
        "wine_type": "Sekt",
        "sweetness": "Brut",
        "tasting_notes": ["green apple", "brioche", "chalk"],
    }));
    assert_eq!(profile.wine_type, WineType::Sparkling);
    assert_eq!(profile.effervescence, 0.70);
    assert_eq!(profile.acidity, 0.70);
    assert_eq!(profile.minerality, 0.45);
    assert_eq!(profile.sweetness_level, SweetnessLevel::Dry);
}

#[test]
fn noble_sweet_riesling_estimates_residual_sugar() {
    let profile = normalize_json(json!({
        "grapes": "Riesling",
        "sweetness": "edelsüß",
        "tasting_notes": ["Trockenbeerenauslese", "honey", "apricot"],
        "color_name": "gold",
    }));
    assert_eq!(profile.sweetness_level, SweetnessLevel::Sweet);
    assert_eq!(profile.sweetness, 0.90);
    assert_eq!(profile.residual_sugar, 300.0);
    assert_eq!(profile.maturity, 0.50);
    assert_eq!(profile.wine_type, WineType::classify(Rgb::from_name("gold").unwrap()));
}
