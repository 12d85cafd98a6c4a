//! Glyphaug Core - Training-variety synthesis for symbol recognizers
//!
//! This crate provides randomized, content-aware visual transforms over
//! fixed-size RGB canvases: rescaling that respects the content extent,
//! foreground recoloring, rotation, and inversion, composed by a random
//! dispatcher. Every transform returns a canvas of the same size as its
//! input, so augmented samples drop straight back into a training batch.
//!
//! All randomness flows through a caller-supplied [`rand::Rng`] handle;
//! seed it externally for reproducible augmentation streams.

pub mod canvas;
pub mod color;
pub mod extent;
pub mod pipeline;
pub mod resample;
pub mod rotation;
pub mod transforms;

pub use canvas::{BackgroundPolarity, Canvas, CanvasError, FilterType};
pub use extent::ContentExtent;
pub use pipeline::transform;
pub use transforms::{invert, recolor, rescale, rotate};

/// Per-stage gate thresholds and draw parameters for the random dispatcher.
///
/// Every probability is in `[0, 1]` and gates are drawn independently; the
/// thresholds are not required to sum to 1.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransformConfig {
    /// Chance to keep the sample untouched, skipping every other stage.
    pub original: f64,
    /// Chance to invert the canvas in the final contrast snap.
    pub invert: f64,
    /// Chance to apply the content-aware rescale.
    pub scale: f64,
    /// Lower bound of the rescale factor draw.
    pub min_scale: f64,
    /// Upper bound of the rescale factor draw (before the content cap).
    pub max_scale: f64,
    /// Chance to recolor the foreground.
    pub hue: f64,
    /// Chance to rotate the canvas.
    pub rotate: f64,
    /// Standard deviation of the rotation angle, in degrees.
    pub angle_std: f64,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            original: 0.2,
            invert: 0.5,
            scale: 1.0,
            min_scale: 0.7,
            max_scale: 1.43,
            hue: 1.0,
            rotate: 1.0,
            angle_std: 5.0,
        }
    }
}

impl TransformConfig {
    /// Create a new TransformConfig with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pass every sample through untouched (for validation and inference).
    pub fn none() -> Self {
        Self {
            original: 1.0,
            ..Self::default()
        }
    }
}
