use wine_colours::profile::{Dimension, Rgb, SensoryProfile};
use wine_colours::render::{encode_png, render, render_batch, RenderOptions, RingKind};

use super::support::fixtures::{normalize_json, uniform_profile};
use super::support::pixels::{band_pixels, histogram, mean_luminance};

#[test]
fn identical_arguments_give_identical_bytes() {
    let profile = normalize_json(serde_json::json!({
        "wine_type": "sparkling",
        "tasting_notes": ["chalk", "lemon"],
    }));
    let first = render(&profile, 512, 7);
    let second = render(&profile, 512, 7);
    assert_eq!(first.dimensions(), (512, 512));
    assert_eq!(first.as_raw(), second.as_raw());
    assert_eq!(encode_png(&first).unwrap(), encode_png(&second).unwrap());
}

#[test]
fn oak_band_brightens_with_oak() {
    let base = SensoryProfile {
        base_color: Rgb::new(0x7A, 0x1F, 0x2B),
        ..SensoryProfile::default()
    };
    let measurements: Vec<f64> = [0.0, 0.25, 0.5, 0.75, 1.0]
        .iter()
        .map(|&oak| {
            let image = render(&base.with(Dimension::Oak, oak), 512, 42);
            mean_luminance(&band_pixels(&image, RingKind::Oak, 1.0))
        })
        .collect();
    for pair in measurements.windows(2) {
        assert!(pair[1] > pair[0], "oak band luminance not increasing: {measurements:?}");
    }
}

/// Mean per-channel distance between two equally sized pixel sets.
fn mean_channel_distance(a: &[[u8; 3]], b: &[[u8; 3]]) -> f64 {
    let total: u32 = a
        .iter()
        .zip(b)
        .flat_map(|(p, q)| (0..3).map(move |c| u32::from(p[c].abs_diff(q[c]))))
        .sum();
    f64::from(total) / (a.len() * 3) as f64
}

#[test]
fn oak_stays_visible_on_light_bases() {
    for hex in ["#FFFFFF", "#F6F2AF"] {
        let base = normalize_json(serde_json::json!({ "base_color_hex": hex }));
        let band = |oak: f64| band_pixels(&render(&base.with(Dimension::Oak, oak), 512, 42), RingKind::Oak, 1.0);
        let faintest = band(0.0);
        let contributions: Vec<f64> = [0.25, 0.5, 0.75, 1.0]
            .iter()
            .map(|&oak| mean_channel_distance(&band(oak), &faintest))
            .collect();
        assert!(contributions[0] > 0.0, "{hex}: oak has no effect: {contributions:?}");
        for pair in contributions.windows(2) {
            assert!(pair[1] > pair[0], "{hex}: oak contribution not increasing: {contributions:?}");
        }
    }

    let white = normalize_json(serde_json::json!({ "base_color_hex": "#FFFFFF" }));
    let heavy = band_pixels(&render(&white.with(Dimension::Oak, 1.0), 512, 42), RingKind::Oak, 1.0);
    let bluest = heavy.iter().map(|pixel| pixel[2]).max().unwrap_or(255);
    assert!(bluest < 235, "oak band on white should be warm, blue peaks at {bluest}");
}

#[test]
fn oak_leaves_inner_rings_untouched() {
    let base = SensoryProfile::default();
    let light = render(&base.with(Dimension::Oak, 0.0), 256, 42);
    let heavy = render(&base.with(Dimension::Oak, 1.0), 256, 42);
    assert_eq!(
        band_pixels(&light, RingKind::Body, 1.0),
        band_pixels(&heavy, RingKind::Body, 1.0)
    );
}

#[test]
fn extreme_profiles_render_distinctly() {
    let empty = uniform_profile(0.0);
    let full = uniform_profile(1.0);
    let low = render(&empty, 256, 42);
    let high = render(&full, 256, 42);
    assert_eq!(low.dimensions(), high.dimensions());
    let (low, high) = (histogram(&low), histogram(&high));
    let moved: u32 = low.iter().zip(&high).map(|(a, b)| a.abs_diff(*b)).sum();
    assert!(moved > 1_000, "histograms barely differ: {low:?} vs {high:?}");
}

#[test]
fn batch_rendering_is_order_preserving() {
    let profiles: Vec<SensoryProfile> = (0..6)
        .map(|step| SensoryProfile::default().with(Dimension::Tannin, f64::from(step) / 5.0))
        .collect();
    let options = RenderOptions {
        size: 128,
        seed: 9,
        gauge: None,
    };
    let images = render_batch(&profiles, &options);
    for (image, profile) in images.iter().zip(&profiles) {
        assert_eq!(image.as_raw(), render(profile, 128, 9).as_raw());
    }
}
