//! Content-aware rescale and recenter.
//!
//! Scales the canvas by a randomly drawn factor, then crops the content back
//! out and re-pads it to the original canvas size. The draw is capped by how
//! much the canvas can absorb without clipping content: the limit is derived
//! from the current content extent, not a fixed constant.

use rand::Rng;

use crate::canvas::{Canvas, FilterType};
use crate::extent::ContentExtent;
use crate::resample;

/// Rescale a canvas by a random factor in `[min_scale, max_scale]`, capped
/// so the content keeps fitting, then re-crop and re-pad back to the
/// original size.
///
/// # Arguments
///
/// * `canvas` - Source canvas
/// * `min_scale` - Lower bound of the scale draw
/// * `max_scale` - Upper bound of the scale draw (before the content cap)
/// * `min_pad` - Minimum padding to keep around the content after cropping
/// * `rng` - Random source for the scale draw
///
/// # Returns
///
/// A new canvas of the identical size. If the scaled content cannot be
/// padded back to size without clipping, the *original* canvas is returned
/// unchanged - a designed no-op, not an error.
pub fn rescale<R: Rng>(
    canvas: &Canvas,
    min_scale: f64,
    max_scale: f64,
    min_pad: u32,
    rng: &mut R,
) -> Canvas {
    let (h, w) = (canvas.height, canvas.width);

    let Some(extent) = ContentExtent::of(canvas) else {
        // Nothing to scale on a blank canvas.
        return canvas.clone();
    };

    // Cap the requested maximum so the content cannot outgrow the canvas.
    // A zero span divides to infinity and drops out of the min naturally.
    let cap_h = h as f64 / extent.row_span() as f64;
    let cap_w = w as f64 / extent.col_span() as f64;
    let effective_max = cap_h.min(cap_w).min(max_scale);

    // An inverted interval collapses to the cap instead of panicking.
    let scale = if effective_max > min_scale {
        rng.gen_range(min_scale..effective_max)
    } else {
        effective_max
    };

    let Ok(scaled) = resample::resize_by_factor(canvas, scale, FilterType::CatmullRom) else {
        return canvas.clone();
    };

    let Some(scaled_extent) = ContentExtent::of(&scaled) else {
        return canvas.clone();
    };

    // Content that no longer fits with the requested padding is rejected
    // wholesale rather than clamped.
    if scaled_extent.row_span() as u64 + 2 * min_pad as u64 > h as u64
        || scaled_extent.col_span() as u64 + 2 * min_pad as u64 > w as u64
    {
        return canvas.clone();
    }

    // Expand the extent by the padding request, then border-clamp into both
    // the original frame and the resampled canvas.
    let y0 = scaled_extent.row_min.saturating_sub(min_pad).min(h - 1);
    let y1 = (scaled_extent.row_max + min_pad)
        .min(h - 1)
        .min(scaled.height - 1);
    let x0 = scaled_extent.col_min.saturating_sub(min_pad).min(w - 1);
    let x1 = (scaled_extent.col_max + min_pad)
        .min(w - 1)
        .min(scaled.width - 1);

    let cropped = crop(&scaled, x0, y0, x1, y1);
    pad_to(&cropped, w, h)
}

/// Crop a canvas to the inclusive pixel rectangle `[x0, x1] x [y0, y1]`.
///
/// Bounds must lie inside the canvas with `x0 <= x1` and `y0 <= y1`.
fn crop(canvas: &Canvas, x0: u32, y0: u32, x1: u32, y1: u32) -> Canvas {
    let out_w = (x1 - x0 + 1) as usize;
    let out_h = (y1 - y0 + 1) as usize;
    let src_w = canvas.width as usize;

    let mut output = vec![0u8; out_w * out_h * 3];
    for y in 0..out_h {
        let src_start = ((y0 as usize + y) * src_w + x0 as usize) * 3;
        let dst_start = y * out_w * 3;
        let len = out_w * 3;
        output[dst_start..dst_start + len]
            .copy_from_slice(&canvas.pixels[src_start..src_start + len]);
    }

    Canvas {
        width: out_w as u32,
        height: out_h as u32,
        pixels: output,
    }
}

/// Pad a canvas with zero-valued pixels up to exactly `width x height`.
///
/// The size deficit splits as `before = deficit / 2`, remainder after, so an
/// odd deficit biases the content one pixel toward the top-left.
fn pad_to(canvas: &Canvas, width: u32, height: u32) -> Canvas {
    let top = ((height - canvas.height) / 2) as usize;
    let left = ((width - canvas.width) / 2) as usize;
    let src_w = canvas.width as usize;
    let dst_w = width as usize;

    let mut output = vec![0u8; dst_w * (height as usize) * 3];
    for y in 0..canvas.height as usize {
        let src_start = y * src_w * 3;
        let dst_start = ((top + y) * dst_w + left) * 3;
        let len = src_w * 3;
        output[dst_start..dst_start + len]
            .copy_from_slice(&canvas.pixels[src_start..src_start + len]);
    }

    Canvas {
        width,
        height,
        pixels: output,
    }
}
