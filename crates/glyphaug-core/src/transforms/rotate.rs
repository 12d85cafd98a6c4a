//! Random rotation.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::canvas::{Canvas, FilterType};
use crate::resample;
use crate::rotation;

/// Rotate a canvas by a normally distributed angle and resample the
/// expanded result back to the original size.
///
/// The angle is drawn from `Normal(0, angle_std)` degrees. The rotation
/// expands the canvas to contain the rotated content without clipping, which
/// introduces zero-valued corner regions; shrinking back to the original
/// size keeps the shape contract but is lossy (mild aliasing and skew are
/// accepted side effects).
///
/// A negative or non-finite `angle_std` leaves the canvas unchanged.
pub fn rotate<R: Rng>(canvas: &Canvas, angle_std: f64, rng: &mut R) -> Canvas {
    let Ok(distribution) = Normal::new(0.0, angle_std) else {
        return canvas.clone();
    };
    let angle = distribution.sample(rng);

    let expanded = rotation::rotate_expanded(canvas, angle);
    let Ok(result) = resample::resize(
        &expanded,
        canvas.width,
        canvas.height,
        FilterType::CatmullRom,
    ) else {
        return canvas.clone();
    };
    result
}
