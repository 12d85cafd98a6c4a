//! Canvas resampling adapters.
//!
//! Thin wrappers over the `image` crate's resize kernels. All functions
//! return new `Canvas` instances without modifying the input.

use crate::canvas::{Canvas, CanvasError, FilterType};

/// Resample a canvas to exact dimensions.
///
/// # Arguments
///
/// * `canvas` - The source canvas to resample
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
/// * `filter` - Interpolation filter to use
///
/// # Errors
///
/// Returns `CanvasError::ZeroDimension` for a zero target dimension, or
/// `CanvasError::InvalidBuffer` if the source buffer cannot be converted.
pub fn resize(
    canvas: &Canvas,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<Canvas, CanvasError> {
    if width == 0 || height == 0 {
        return Err(CanvasError::ZeroDimension);
    }

    // Fast path: if dimensions match, just clone
    if canvas.width == width && canvas.height == height {
        return Ok(canvas.clone());
    }

    let rgb_image = canvas
        .to_rgb_image()
        .ok_or_else(|| CanvasError::InvalidBuffer("Failed to create RgbImage".to_string()))?;

    let resized = image::imageops::resize(&rgb_image, width, height, filter.to_image_filter());

    Ok(Canvas::from_rgb_image(resized))
}

/// Resample a canvas by a scale factor, growing or shrinking both
/// dimensions proportionally.
///
/// Target dimensions are rounded and floored at 1 pixel so extreme
/// shrink factors still produce a valid canvas.
///
/// # Errors
///
/// Returns `CanvasError::ZeroDimension` if the factor is not a positive
/// finite number.
pub fn resize_by_factor(
    canvas: &Canvas,
    factor: f64,
    filter: FilterType,
) -> Result<Canvas, CanvasError> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(CanvasError::ZeroDimension);
    }

    let width = ((canvas.width as f64 * factor).round() as u32).max(1);
    let height = ((canvas.height as f64 * factor).round() as u32).max(1);

    resize(canvas, width, height, filter)
}
