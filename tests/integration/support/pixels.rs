use image::RgbaImage;
use wine_colours::render::rings::{RingGeometry, RingKind};

/// Pixels whose centers fall inside the ring band, shrunk by `inset` on both
/// edges so anti-aliased neighbours are excluded.
pub fn band_pixels(image: &RgbaImage, kind: RingKind, inset: f32) -> Vec<[u8; 3]> {
    let geometry = RingGeometry::new(image.width());
    let (inner, outer) = geometry.band(kind.position());
    image
        .enumerate_pixels()
        .filter(|(x, y, _)| {
            let r = geometry.radius_at(*x as f32 + 0.5, *y as f32 + 0.5);
            r >= inner + inset && r <= outer - inset
        })
        .map(|(_, _, pixel)| [pixel[0], pixel[1], pixel[2]])
        .collect()
}

pub fn luminance(pixel: [u8; 3]) -> f64 {
    (0.2126 * f64::from(pixel[0]) + 0.7152 * f64::from(pixel[1]) + 0.0722 * f64::from(pixel[2])) / 255.0
}

pub fn mean_luminance(pixels: &[[u8; 3]]) -> f64 {
    if pixels.is_empty() {
        return 0.0;
    }
    pixels.iter().copied().map(luminance).sum::<f64>() / pixels.len() as f64
}

/// 16-bucket luminance histogram over the whole image.
pub fn histogram(image: &RgbaImage) -> [u32; 16] {
    let mut buckets = [0u32; 16];
    for pixel in image.pixels() {
        let lum = luminance([pixel[0], pixel[1], pixel[2]]);
        let index = ((lum * 16.0) as usize).min(15);
        buckets[index] += 1;
    }
    buckets
}
