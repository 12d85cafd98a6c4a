//! Polarity inversion.

use crate::canvas::Canvas;

/// Invert a canvas elementwise: every channel byte becomes `255 - v`.
///
/// Pure and total; applying it twice returns the original canvas.
pub fn invert(canvas: &Canvas) -> Canvas {
    Canvas {
        width: canvas.width,
        height: canvas.height,
        pixels: canvas.pixels.iter().map(|&v| 255 - v).collect(),
    }
}
