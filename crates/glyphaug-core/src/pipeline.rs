//! Random transform dispatcher.
//!
//! Draws one independent gate per stage and conditionally applies the
//! transforms in a fixed order: rescale, recolor, rotate, then the
//! invert-or-clean contrast snap. The final snap is not conditional on the
//! earlier stages - exactly one of its two branches always runs, as a last
//! denoising pass over whatever the gates produced.

use rand::Rng;

use crate::canvas::Canvas;
use crate::transforms::{invert, recolor, rescale, rotate};
use crate::TransformConfig;

/// Pixels above this value snap to 255 after an inversion.
const HIGH_SNAP_FLOOR: u8 = 200;

/// Pixels below this value snap to 0 on the clean branch.
const LOW_SNAP_CEIL: u8 = 55;

/// Apply a random selection of transforms to a canvas.
///
/// Each stage has its own independent gate: a uniform draw in `[0, 1)`
/// compared against the stage's configured threshold. The identity gate
/// short-circuits everything, returning the input untouched.
///
/// The output canvas always has the same dimensions as the input.
pub fn transform<R: Rng>(canvas: &Canvas, config: &TransformConfig, rng: &mut R) -> Canvas {
    // Identity gate: keep the sample as-is and skip every later stage.
    if rng.gen::<f64>() < config.original {
        return canvas.clone();
    }

    let mut result = canvas.clone();

    if rng.gen::<f64>() < config.scale {
        result = rescale(&result, config.min_scale, config.max_scale, 0, rng);
    }

    if rng.gen::<f64>() < config.hue {
        result = recolor(&result, rng);
    }

    if rng.gen::<f64>() < config.rotate {
        result = rotate(&result, config.angle_std, rng);
    }

    // One of the two contrast snaps always runs, even when no earlier gate
    // fired.
    if rng.gen::<f64>() < config.invert {
        result = invert(&result);
        for v in &mut result.pixels {
            if *v > HIGH_SNAP_FLOOR {
                *v = 255;
            }
        }
    } else {
        for v in &mut result.pixels {
            if *v < LOW_SNAP_CEIL {
                *v = 0;
            }
        }
    }

    result
}
