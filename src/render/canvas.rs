//! Float RGB raster with anti-aliased primitives and blend modes.
//!
//! Row compositing runs on rayon; every pixel is computed independently from
//! its own coordinates, so the result does not depend on scheduling.

use image::{Rgba, RgbaImage};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

pub type Color = [f32; 3];

pub const WHITE: Color = [1.0, 1.0, 1.0];
pub const BLACK: Color = [0.0, 0.0, 0.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    Normal,
    Additive,
    Multiply,
    Screen,
}

impl BlendMode {
    /// Blends `src` over `dst`, then mixes the result in by `alpha`.
    ///
    /// Additive light that would clip is scaled down by its brightest channel
    /// instead of being clamped per channel, so it keeps the hue of the sum and
    /// still tints a saturated backdrop.
    pub fn apply(self, dst: Color, src: Color, alpha: f32) -> Color {
        let alpha = alpha.clamp(0.0, 1.0);
        let blended = match self {
            BlendMode::Normal => src,
            BlendMode::Additive => {
                let sum = [dst[0] + src[0], dst[1] + src[1], dst[2] + src[2]];
                let peak = sum[0].max(sum[1]).max(sum[2]);
                if peak > 1.0 {
                    sum.map(|c| c / peak)
                } else {
                    sum
                }
            }
            BlendMode::Multiply => [dst[0] * src[0], dst[1] * src[1], dst[2] * src[2]],
            BlendMode::Screen => {
                let screen = |d: f32, s: f32| 1.0 - (1.0 - d) * (1.0 - s);
                [screen(dst[0], src[0]), screen(dst[1], src[1]), screen(dst[2], src[2])]
            }
        };
        let mut out = dst;
        for channel in 0..3 {
            out[channel] = dst[channel] + (blended[channel] - dst[channel]) * alpha;
        }
        out
    }
}

pub fn mix(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

pub fn rgb8(r: u8, g: u8, b: u8) -> Color {
    [f32::from(r) / 255.0, f32::from(g) / 255.0, f32::from(b) / 255.0]
}

/// Pixel coverage of the band `inner <= r <= outer`, with one pixel of
/// anti-aliasing on each edge.
pub fn band_coverage(r: f32, inner: f32, outer: f32) -> f32 {
    ((r - inner + 0.5).clamp(0.0, 1.0)) * ((outer - r + 0.5).clamp(0.0, 1.0))
}

pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; width as usize * height as usize],
        }
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Evaluates `shader` at every pixel center; a returned `(color, alpha)`
    /// is composited with `blend`. `rows` bounds the scanlines visited.
    pub fn paint<F>(&mut self, rows: (f32, f32), blend: BlendMode, shader: F)
    where
        F: Fn(f32, f32) -> Option<(Color, f32)> + Sync,
    {
        if self.width == 0 {
            return;
        }
        let first = rows.0.floor().max(0.0) as usize;
        let last = rows.1.ceil().max(0.0) as usize;
        self.pixels
            .par_chunks_mut(self.width as usize)
            .enumerate()
            .filter(|(y, _)| *y >= first && *y <= last)
            .for_each(|(y, row)| {
                let py = y as f32 + 0.5;
                for (x, dst) in row.iter_mut().enumerate() {
                    let px = x as f32 + 0.5;
                    if let Some((src, alpha)) = shader(px, py) {
                        if alpha > 0.0 {
                            *dst = blend.apply(*dst, src, alpha);
                        }
                    }
                }
            });
    }

    /// Filled anti-aliased disc. Dots are small, so only the bounding box is visited.
    pub fn dot(&mut self, center: (f32, f32), radius: f32, color: Color, alpha: f32, blend: BlendMode) {
        if radius <= 0.0 || alpha <= 0.0 {
            return;
        }
        let (cx, cy) = center;
        let x0 = (cx - radius - 1.0).floor().max(0.0) as u32;
        let y0 = (cy - radius - 1.0).floor().max(0.0) as u32;
        let x1 = ((cx + radius + 1.0).ceil().max(0.0) as u32).min(self.width);
        let y1 = ((cy + radius + 1.0).ceil().max(0.0) as u32).min(self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                let coverage = (radius - (dx * dx + dy * dy).sqrt() + 0.5).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    let index = y as usize * self.width as usize + x as usize;
                    let dst = self.pixels[index];
                    self.pixels[index] = blend.apply(dst, color, alpha * coverage);
                }
            }
        }
    }

    pub fn into_image(self) -> RgbaImage {
        let mut image = RgbaImage::new(self.width, self.height);
        for (pixel, color) in image.pixels_mut().zip(self.pixels) {
            let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
            *pixel = Rgba([quantize(color[0]), quantize(color[1]), quantize(color[2]), 255]);
        }
        image
    }
}
