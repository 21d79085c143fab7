//! Vertical gauge for a single scalar, drawn independently of the rings.

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use super::canvas::{mix, rgb8, BlendMode, Canvas};
use super::BACKGROUND;
use crate::profile::SensoryProfile;

/// Residual sugar that fills the gauge on the logarithmic scale.
const SUGAR_CEILING: f64 = 500.0;
const TRACK: (u8, u8, u8) = (222, 222, 228);
const FILL_BOTTOM: (u8, u8, u8) = (240, 62, 107);
const FILL_TOP: (u8, u8, u8) = (252, 176, 122);

/// What the gauge measures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GaugeScale {
    /// Fill fraction equals `sweetness`.
    #[default]
    Sweetness,
    /// log10 of residual sugar (1..=500 g/L) mapped onto the track.
    ResidualSugarLog,
}

impl GaugeScale {
    pub fn fraction(&self, profile: &SensoryProfile) -> f64 {
        match self {
            Self::Sweetness => profile.sweetness.clamp(0.0, 1.0),
            Self::ResidualSugarLog => {
                if profile.residual_sugar <= 0.0 {
                    return 0.0;
                }
                let grams = profile.residual_sugar.clamp(1.0, SUGAR_CEILING);
                (grams.log10() / SUGAR_CEILING.log10()).clamp(0.0, 1.0)
            }
        }
    }
}

/// Signed distance from `(px, py)` to a rounded rectangle centered on `center`.
fn rounded_rect_distance(px: f32, py: f32, center: (f32, f32), half: (f32, f32), radius: f32) -> f32 {
    let qx = (px - center.0).abs() - (half.0 - radius);
    let qy = (py - center.1).abs() - (half.1 - radius);
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    outside + qx.max(qy).min(0.0) - radius
}

/// Renders a `width × height` gauge surface filled bottom-up.
pub fn render_gauge(profile: &SensoryProfile, width: u32, height: u32, scale: GaugeScale) -> RgbaImage {
    let mut canvas = Canvas::new(width, height, BACKGROUND);
    let padding = width as f32 * 0.18;
    let half = (
        (width as f32 / 2.0 - padding).max(0.0),
        (height as f32 / 2.0 - padding).max(0.0),
    );
    let center = (width as f32 / 2.0, height as f32 / 2.0);
    let radius = half.0.min(half.1);
    let track = rgb8(TRACK.0, TRACK.1, TRACK.2);
    let rows = (0.0, height as f32);

    canvas.paint(rows, BlendMode::Normal, move |x, y| {
        let coverage = (0.5 - rounded_rect_distance(x, y, center, half, radius)).clamp(0.0, 1.0);
        (coverage > 0.0).then_some((track, coverage))
    });

    let fraction = scale.fraction(profile) as f32;
    if fraction > 0.0 && half.1 > 0.0 {
        let bottom = center.1 + half.1;
        let track_height = half.1 * 2.0;
        let top = bottom - fraction * track_height;
        let low = rgb8(FILL_BOTTOM.0, FILL_BOTTOM.1, FILL_BOTTOM.2);
        let high = rgb8(FILL_TOP.0, FILL_TOP.1, FILL_TOP.2);
        canvas.paint(rows, BlendMode::Normal, move |x, y| {
            let shape = (0.5 - rounded_rect_distance(x, y, center, half, radius)).clamp(0.0, 1.0);
            let level = (y - top + 0.5).clamp(0.0, 1.0);
            let coverage = shape * level;
            if coverage <= 0.0 {
                return None;
            }
            let t = (bottom - y) / track_height;
            Some((mix(low, high, t), coverage))
        });
    }
    canvas.into_image()
}
