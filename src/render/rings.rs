//! Concentric ring layers, in their fixed outer-to-inner order.
//!
//! Inner rings are composited over outer ones and several use
//! order-dependent blend modes, so `RING_ORDER` must not be permuted.

use std::f32::consts::TAU;

use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;

use super::canvas::{band_coverage, mix, rgb8, BlendMode, Canvas, Color, BLACK, WHITE};
use crate::profile::{Dimension, Hsl, SensoryProfile};

pub const RING_COUNT: usize = 11;
/// The core disc is as wide as this many rings.
pub const CORE_UNITS: f32 = 2.0;
/// Fraction of the half-canvas used by the drawable circle.
pub const DRAWABLE_FRACTION: f32 = 0.95;

pub const EFFERVESCENCE_THRESHOLD: f64 = 0.10;
pub const TANNIN_HATCH_COUNT: u32 = 48;
pub const MINERAL_DOT_COUNT: u32 = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RingKind {
    Oak,
    ColorIntensity,
    Effervescence,
    Acidity,
    Fruit,
    NonFruit,
    Body,
    Tannin,
    Maturity,
    Depth,
    Minerality,
}

/// Outer-to-inner ring order.
pub const RING_ORDER: [RingKind; RING_COUNT] = [
    RingKind::Oak,
    RingKind::ColorIntensity,
    RingKind::Effervescence,
    RingKind::Acidity,
    RingKind::Fruit,
    RingKind::NonFruit,
    RingKind::Body,
    RingKind::Tannin,
    RingKind::Maturity,
    RingKind::Depth,
    RingKind::Minerality,
];

impl RingKind {
    pub fn dimension(&self) -> Dimension {
        match self {
            Self::Oak => Dimension::Oak,
            Self::ColorIntensity => Dimension::ColorIntensity,
            Self::Effervescence => Dimension::Effervescence,
            Self::Acidity => Dimension::Acidity,
            Self::Fruit => Dimension::FruitIntensity,
            Self::NonFruit => Dimension::NonFruitIntensity,
            Self::Body => Dimension::Body,
            Self::Tannin => Dimension::Tannin,
            Self::Maturity => Dimension::Maturity,
            Self::Depth => Dimension::Depth,
            Self::Minerality => Dimension::Minerality,
        }
    }

    /// Zero-based position counted from the outermost ring.
    pub fn position(&self) -> usize {
        RING_ORDER
            .iter()
            .position(|kind| kind == self)
            .unwrap_or(RING_COUNT - 1)
    }
}

/// Circle geometry shared by the ring stack and the core disc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RingGeometry {
    pub center: (f32, f32),
    pub outer_radius: f32,
    pub thickness: f32,
}

impl RingGeometry {
    pub fn new(size: u32) -> Self {
        let half = size as f32 / 2.0;
        let outer_radius = half * DRAWABLE_FRACTION;
        Self {
            center: (half, half),
            outer_radius,
            thickness: outer_radius / (RING_COUNT as f32 + CORE_UNITS),
        }
    }

    /// `(inner, outer)` radii of the ring at `position` (0 = outermost).
    pub fn band(&self, position: usize) -> (f32, f32) {
        let outer = self.outer_radius - position as f32 * self.thickness;
        (outer - self.thickness, outer)
    }

    pub fn core_radius(&self) -> f32 {
        self.thickness * CORE_UNITS
    }

    pub fn radius_at(&self, x: f32, y: f32) -> f32 {
        let dx = x - self.center.0;
        let dy = y - self.center.1;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn point(&self, angle: f32, radius: f32) -> (f32, f32) {
        (
            self.center.0 + radius * angle.cos(),
            self.center.1 + radius * angle.sin(),
        )
    }

    fn rows(&self, outer: f32) -> (f32, f32) {
        (self.center.1 - outer - 1.0, self.center.1 + outer + 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dot {
    pub center: (f32, f32),
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum RingStyle {
    /// Continuous band.
    Stroke,
    /// Band in the layer color, with a narrower accent stripe on top.
    Split { accent: Color, accent_opacity: f32 },
    /// Band plus evenly spaced radial hatch strokes.
    Hatched {
        count: u32,
        hatch_color: Color,
        hatch_opacity: f32,
    },
    /// Seeded scatter of bubbles instead of a band.
    Scatter { dots: Vec<Dot> },
    /// Evenly spaced flecks instead of a band.
    Dots { dots: Vec<Dot> },
}

/// Fully resolved drawing instructions for one ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RingLayer {
    pub kind: RingKind,
    pub inner: f32,
    pub outer: f32,
    pub color: Color,
    pub blend: BlendMode,
    pub opacity: f32,
    pub style: RingStyle,
}

const OAK_COLOR: (u8, u8, u8) = (140, 90, 50);
const ACIDITY_TONE: (u8, u8, u8) = (226, 240, 188);
const ACIDITY_ACCENT: (u8, u8, u8) = (172, 206, 72);
const FRUIT_COLOR: (u8, u8, u8) = (222, 92, 70);
const NON_FRUIT_COLOR: (u8, u8, u8) = (108, 124, 78);
const TANNIN_COLOR: (u8, u8, u8) = (72, 42, 26);
const TANNIN_HATCH: (u8, u8, u8) = (40, 22, 14);
const MATURITY_COLOR: (u8, u8, u8) = (200, 140, 60);
const MINERAL_COLOR: (u8, u8, u8) = (130, 140, 150);
const BUBBLE_COLOR: (u8, u8, u8) = (255, 255, 250);

fn color(rgb: (u8, u8, u8)) -> Color {
    rgb8(rgb.0, rgb.1, rgb.2)
}

/// Resolves every ring for `profile`. Scatter and fleck placement draws from
/// `rng`, effervescence first, then minerality.
pub fn plan(profile: &SensoryProfile, geometry: &RingGeometry, rng: &mut StdRng) -> Vec<RingLayer> {
    RING_ORDER
        .iter()
        .enumerate()
        .map(|(position, &kind)| plan_ring(kind, position, profile, geometry, rng))
        .collect()
}

fn plan_ring(
    kind: RingKind,
    position: usize,
    profile: &SensoryProfile,
    geometry: &RingGeometry,
    rng: &mut StdRng,
) -> RingLayer {
    let (inner, outer) = geometry.band(position);
    let value = profile.get(kind.dimension()) as f32;
    let layer = |color: Color, blend: BlendMode, opacity: f32, style: RingStyle| RingLayer {
        kind,
        inner,
        outer,
        color,
        blend,
        opacity,
        style,
    };
    match kind {
        RingKind::Oak => layer(color(OAK_COLOR), BlendMode::Additive, 0.10 + 0.55 * value, RingStyle::Stroke),
        RingKind::ColorIntensity => layer(
            shifted_base(profile, 0.55 + 0.9 * value, 1.2 - 0.4 * value),
            BlendMode::Normal,
            0.95,
            RingStyle::Stroke,
        ),
        RingKind::Effervescence => {
            if profile.effervescence > EFFERVESCENCE_THRESHOLD {
                let dots = bubble_dots(value, inner, outer, geometry, rng);
                layer(
                    color(BUBBLE_COLOR),
                    BlendMode::Screen,
                    0.35 + 0.5 * value,
                    RingStyle::Scatter { dots },
                )
            } else {
                layer(WHITE, BlendMode::Normal, 0.06, RingStyle::Stroke)
            }
        }
        RingKind::Acidity => layer(
            color(ACIDITY_TONE),
            BlendMode::Normal,
            0.18 + 0.20 * value,
            RingStyle::Split {
                accent: color(ACIDITY_ACCENT),
                accent_opacity: 0.18 + 0.25 * value,
            },
        ),
        RingKind::Fruit => layer(color(FRUIT_COLOR), BlendMode::Additive, 0.12 + 0.55 * value, RingStyle::Stroke),
        RingKind::NonFruit => layer(
            color(NON_FRUIT_COLOR),
            BlendMode::Additive,
            0.10 + 0.45 * value,
            RingStyle::Stroke,
        ),
        RingKind::Body => layer(
            shifted_base(profile, 0.8 + 0.5 * value, 1.1 - 0.35 * value),
            BlendMode::Normal,
            0.90,
            RingStyle::Stroke,
        ),
        RingKind::Tannin => layer(
            color(TANNIN_COLOR),
            BlendMode::Normal,
            0.12 + 0.45 * value,
            RingStyle::Hatched {
                count: TANNIN_HATCH_COUNT,
                hatch_color: color(TANNIN_HATCH),
                hatch_opacity: 0.06 + 0.18 * value,
            },
        ),
        RingKind::Maturity => layer(
            color(MATURITY_COLOR),
            BlendMode::Additive,
            0.10 + 0.50 * value,
            RingStyle::Stroke,
        ),
        RingKind::Depth => layer(BLACK, BlendMode::Multiply, 0.08 + 0.30 * value, RingStyle::Stroke),
        RingKind::Minerality => {
            let dots = mineral_dots(inner, outer, geometry, rng);
            layer(
                color(MINERAL_COLOR),
                BlendMode::Normal,
                0.20 + 0.40 * value,
                RingStyle::Dots { dots },
            )
        }
    }
}

/// Base color with saturation scaled by `saturation` and lightness by `lightness`.
fn shifted_base(profile: &SensoryProfile, saturation: f32, lightness: f32) -> Color {
    let hsl = profile.base_color.to_hsl();
    Hsl {
        h: hsl.h,
        s: (hsl.s * f64::from(saturation)).clamp(0.0, 1.0),
        l: (hsl.l * f64::from(lightness)).clamp(0.0, 1.0),
    }
    .to_unit()
}

fn bubble_dots(value: f32, inner: f32, outer: f32, geometry: &RingGeometry, rng: &mut StdRng) -> Vec<Dot> {
    let count = 24 + (48.0 * value).round() as u32;
    let mid = (inner + outer) / 2.0;
    let thickness = outer - inner;
    let step = TAU / count as f32;
    (0..count)
        .map(|index| {
            let angle = index as f32 * step + rng.gen_range(-0.3f32..=0.3) * step;
            let radius = mid + rng.gen_range(-0.2f32..=0.2) * thickness;
            Dot {
                center: geometry.point(angle, radius),
                radius: thickness * rng.gen_range(0.12f32..=0.24),
            }
        })
        .collect()
}

fn mineral_dots(inner: f32, outer: f32, geometry: &RingGeometry, rng: &mut StdRng) -> Vec<Dot> {
    let mid = (inner + outer) / 2.0;
    let thickness = outer - inner;
    let step = TAU / MINERAL_DOT_COUNT as f32;
    (0..MINERAL_DOT_COUNT)
        .map(|index| Dot {
            center: geometry.point(index as f32 * step, mid + rng.gen_range(-0.2f32..=0.2) * thickness),
            radius: thickness * 0.18,
        })
        .collect()
}

/// Composites one planned ring onto the canvas.
pub fn draw(canvas: &mut Canvas, geometry: &RingGeometry, layer: &RingLayer) {
    match &layer.style {
        RingStyle::Stroke => stroke(canvas, geometry, layer.inner, layer.outer, layer.color, layer.opacity, layer.blend),
        RingStyle::Split { accent, accent_opacity } => {
            stroke(canvas, geometry, layer.inner, layer.outer, layer.color, layer.opacity, layer.blend);
            let quarter = (layer.outer - layer.inner) / 4.0;
            stroke(
                canvas,
                geometry,
                layer.inner + quarter,
                layer.outer - quarter,
                *accent,
                *accent_opacity,
                layer.blend,
            );
        }
        RingStyle::Hatched {
            count,
            hatch_color,
            hatch_opacity,
        } => {
            stroke(canvas, geometry, layer.inner, layer.outer, layer.color, layer.opacity, layer.blend);
            hatch(canvas, geometry, layer, *count, *hatch_color, *hatch_opacity);
        }
        RingStyle::Scatter { dots } | RingStyle::Dots { dots } => {
            for dot in dots {
                canvas.dot(dot.center, dot.radius, layer.color, layer.opacity, layer.blend);
            }
        }
    }
}

fn stroke(
    canvas: &mut Canvas,
    geometry: &RingGeometry,
    inner: f32,
    outer: f32,
    color: Color,
    opacity: f32,
    blend: BlendMode,
) {
    let geometry = *geometry;
    canvas.paint(geometry.rows(outer), blend, move |x, y| {
        let coverage = band_coverage(geometry.radius_at(x, y), inner, outer);
        (coverage > 0.0).then_some((color, opacity * coverage))
    });
}

/// Radial hatch strokes about 1.2px wide, evenly spaced around the band.
fn hatch(
    canvas: &mut Canvas,
    geometry: &RingGeometry,
    layer: &RingLayer,
    count: u32,
    color: Color,
    opacity: f32,
) {
    if count == 0 {
        return;
    }
    let geometry = *geometry;
    let (inner, outer) = (layer.inner, layer.outer);
    let step = TAU / count as f32;
    let half_width = 0.6;
    canvas.paint(geometry.rows(outer), BlendMode::Normal, move |x, y| {
        let r = geometry.radius_at(x, y);
        let coverage = band_coverage(r, inner, outer);
        if coverage <= 0.0 {
            return None;
        }
        let angle = (y - geometry.center.1).atan2(x - geometry.center.0).rem_euclid(TAU);
        let offset = (angle / step).round() * step - angle;
        let distance = (offset * r).abs();
        let line = (half_width - distance + 0.5).clamp(0.0, 1.0);
        (line > 0.0).then_some((color, opacity * coverage * line))
    });
}

/// Radial gradient disc filling the space inside the innermost ring.
pub fn draw_core(canvas: &mut Canvas, geometry: &RingGeometry, profile: &SensoryProfile) {
    let hsl = profile.base_color.to_hsl();
    let center_color = Hsl {
        h: hsl.h,
        s: (hsl.s + (1.0 - hsl.s) * 0.5 * profile.body).clamp(0.0, 1.0),
        l: (hsl.l * (1.0 - 0.5 * profile.depth)).clamp(0.0, 1.0),
    }
    .to_unit();
    let edge_color = mix(profile.base_color.to_unit(), WHITE, 0.3);
    let geometry = *geometry;
    let radius = geometry.core_radius();
    canvas.paint(geometry.rows(radius), BlendMode::Normal, move |x, y| {
        let r = geometry.radius_at(x, y);
        let coverage = band_coverage(r, -1.0, radius);
        if coverage <= 0.0 {
            return None;
        }
        let t = if radius > 0.0 { r / radius } else { 0.0 };
        Some((mix(center_color, edge_color, t), coverage))
    });
}

/// Base color disc laid under the ring stack, brightening slightly toward the rim.
pub fn draw_underlay(canvas: &mut Canvas, geometry: &RingGeometry, profile: &SensoryProfile) {
    let base = profile.base_color.to_unit();
    let geometry = *geometry;
    let radius = geometry.outer_radius;
    canvas.paint(geometry.rows(radius), BlendMode::Normal, move |x, y| {
        let r = geometry.radius_at(x, y);
        let coverage = band_coverage(r, -1.0, radius);
        if coverage <= 0.0 {
            return None;
        }
        let t = if radius > 0.0 { r / radius } else { 0.0 };
        Some((mix(base, WHITE, 0.12 * t), coverage))
    });
}
