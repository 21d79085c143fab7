//! Deterministic ring diagram for a [`SensoryProfile`].
//!
//! Rendering is a pure function of `(profile, size, seed)`. Any scattered
//! placement draws from a generator seeded inside the call, so identical
//! arguments give byte-identical images and the result is safe to cache.

pub mod cache;
pub mod canvas;
pub mod gauge;
pub mod rings;

use std::io::Cursor;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::debug;

use crate::profile::SensoryProfile;
use canvas::{Canvas, Color};
use rings::RingGeometry;

pub use cache::DiagramCache;
pub use canvas::BlendMode;
pub use gauge::{render_gauge, GaugeScale};
pub use rings::{plan, RingKind, RingLayer, RingStyle, RING_ORDER};

pub const DEFAULT_SIZE: u32 = 512;
pub const DEFAULT_SEED: u64 = 42;

/// Canvas fill outside the drawable circle.
pub const BACKGROUND: Color = [252.0 / 255.0, 252.0 / 255.0, 254.0 / 255.0];

/// Gauge placement for [`render_with_gauge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaugeOptions {
    pub width: u32,
    pub scale: GaugeScale,
}

impl GaugeOptions {
    /// Gauge strip sized relative to a diagram of `size` pixels.
    pub fn for_size(size: u32) -> Self {
        Self {
            width: default_gauge_width(size),
            scale: GaugeScale::default(),
        }
    }
}

pub fn default_gauge_width(size: u32) -> u32 {
    ((size as f32 * 0.06).round() as u32).max(24)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub size: u32,
    pub seed: u64,
    /// When set, a gauge strip is composited to the right of the diagram.
    pub gauge: Option<GaugeOptions>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            seed: DEFAULT_SEED,
            gauge: None,
        }
    }
}

impl RenderOptions {
    pub fn render(&self, profile: &SensoryProfile) -> RgbaImage {
        match &self.gauge {
            Some(gauge) => render_with_gauge(profile, self.size, self.seed, gauge),
            None => render(profile, self.size, self.seed),
        }
    }
}

/// Renders the `size × size` ring diagram.
pub fn render(profile: &SensoryProfile, size: u32, seed: u64) -> RgbaImage {
    let geometry = RingGeometry::new(size);
    let mut rng = StdRng::seed_from_u64(seed);
    let layers = rings::plan(profile, &geometry, &mut rng);

    let mut canvas = Canvas::new(size, size, BACKGROUND);
    rings::draw_underlay(&mut canvas, &geometry, profile);
    for layer in &layers {
        rings::draw(&mut canvas, &geometry, layer);
    }
    rings::draw_core(&mut canvas, &geometry, profile);
    debug!(size, seed, layers = layers.len(), "rendered diagram");
    canvas.into_image()
}

/// Diagram and gauge side by side in one `(size + gauge.width) × size` image.
pub fn render_with_gauge(profile: &SensoryProfile, size: u32, seed: u64, gauge: &GaugeOptions) -> RgbaImage {
    let diagram = render(profile, size, seed);
    let strip = render_gauge(profile, gauge.width, size, gauge.scale);
    let mut combined = RgbaImage::new(size + gauge.width, size);
    for (x, y, pixel) in diagram.enumerate_pixels() {
        combined.put_pixel(x, y, *pixel);
    }
    for (x, y, pixel) in strip.enumerate_pixels() {
        combined.put_pixel(size + x, y, *pixel);
    }
    combined
}

/// Renders independent profiles in parallel; each render owns its buffer.
pub fn render_batch(profiles: &[SensoryProfile], options: &RenderOptions) -> Vec<RgbaImage> {
    profiles.par_iter().map(|profile| options.render(profile)).collect()
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .context("Failed to encode diagram as PNG")?;
    Ok(bytes)
}
