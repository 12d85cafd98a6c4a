//! Foreground recoloring.
//!
//! Reassigns one random hue/saturation/value triplet to every foreground
//! pixel while leaving background bytes numerically untouched. The value
//! range depends on the background polarity so the recolored foreground
//! keeps contrasting with the background: bright strokes on dark canvases,
//! dark strokes on light ones.

use rand::Rng;

use crate::canvas::{BackgroundPolarity, Canvas};
use crate::color::hsv_to_rgb;

/// Recolor the foreground of a canvas with a single random flat color.
///
/// The background is classified by majority vote; every channel byte equal
/// to the background value is restored bit-exact after the color-space
/// round trip, so quantization never drifts the background.
pub fn recolor<R: Rng>(canvas: &Canvas, rng: &mut R) -> Canvas {
    let polarity = canvas.background_polarity();
    let bg = polarity.background_value();

    let hue = rng.gen_range(0.0f32..1.0);
    let sat = rng.gen_range(0.0f32..1.0);
    // Contrast preservation: the foreground must stay bright against a dark
    // background and dark against a light one.
    let val = match polarity {
        BackgroundPolarity::Dark => rng.gen_range(0.3f32..1.0),
        BackgroundPolarity::Light => rng.gen_range(0.0f32..0.7),
    };

    // The triplet is global, so one conversion covers every pixel.
    let [r, g, b] = hsv_to_rgb([hue, sat, val]);
    let flat = [
        (r * 255.0).round().clamp(0.0, 255.0) as u8,
        (g * 255.0).round().clamp(0.0, 255.0) as u8,
        (b * 255.0).round().clamp(0.0, 255.0) as u8,
    ];

    let mut pixels = Vec::with_capacity(canvas.pixels.len());
    for _ in 0..canvas.pixel_count() {
        pixels.extend_from_slice(&flat);
    }

    // Restore background bytes exactly where the input held them.
    for (dst, &src) in pixels.iter_mut().zip(&canvas.pixels) {
        if src == bg {
            *dst = bg;
        }
    }

    Canvas {
        width: canvas.width,
        height: canvas.height,
        pixels,
    }
}
