//! Core canvas types for the augmentation pipeline.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for canvas construction and resampling.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// A zero width or height was requested.
    #[error("Canvas dimensions must be nonzero")]
    ZeroDimension,

    /// The pixel buffer does not match the stated dimensions.
    #[error("Pixel buffer size mismatch: expected {expected}, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Conversion to the underlying image representation failed.
    #[error("Failed to build image buffer: {0}")]
    InvalidBuffer(String),
}

/// Filter type for resampling operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    Bilinear,
    /// Catmull-Rom (bicubic) interpolation - the default for augmentation.
    #[default]
    CatmullRom,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::CatmullRom => image::imageops::FilterType::CatmullRom,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Majority-vote classification of a canvas background.
///
/// Symbol images in the training sets are either dark strokes on a light
/// background or light strokes on a dark background. The vote counts channel
/// bytes exactly equal to 0 against bytes exactly equal to 255; ties resolve
/// to a light background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundPolarity {
    /// Background value 0, foreground expected bright.
    Dark,
    /// Background value 255, foreground expected dark.
    Light,
}

impl BackgroundPolarity {
    /// The channel byte value of the background this polarity names.
    #[inline]
    pub fn background_value(self) -> u8 {
        match self {
            BackgroundPolarity::Dark => 0,
            BackgroundPolarity::Light => 255,
        }
    }
}

/// A fixed-size RGB canvas with 8-bit channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl Canvas {
    /// Create a new Canvas with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a Canvas after validating the buffer against the dimensions.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::ZeroDimension` if either dimension is zero, or
    /// `CanvasError::BufferSizeMismatch` if the buffer length is not
    /// `width * height * 3`.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::ZeroDimension);
        }
        let expected = (width as usize) * (height as usize) * 3;
        if pixels.len() != expected {
            return Err(CanvasError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build an RGB canvas from a single-channel grid by replicating the
    /// gray value into all three channels.
    ///
    /// Recognizer datasets are stored as grayscale; this is how they enter
    /// the augmentation pipeline.
    ///
    /// # Errors
    ///
    /// Same validation as [`Canvas::from_raw`], with `gray` expected to hold
    /// `width * height` bytes.
    pub fn from_gray(width: u32, height: u32, gray: &[u8]) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::ZeroDimension);
        }
        let expected = (width as usize) * (height as usize);
        if gray.len() != expected {
            return Err(CanvasError::BufferSizeMismatch {
                expected,
                actual: gray.len(),
            });
        }
        let mut pixels = Vec::with_capacity(expected * 3);
        for &v in gray {
            pixels.push(v);
            pixels.push(v);
            pixels.push(v);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a Canvas filled with a single channel value.
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self {
            width,
            height,
            pixels: vec![value; (width as usize) * (height as usize) * 3],
        }
    }

    /// Create a Canvas from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an image::RgbImage for resampling.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Check if this is an empty/invalid canvas.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Classify the canvas background by majority vote.
    ///
    /// Counts channel bytes equal to 0 against bytes equal to 255; whichever
    /// count is strictly larger wins, ties resolve to [`BackgroundPolarity::Light`].
    pub fn background_polarity(&self) -> BackgroundPolarity {
        let mut zeros = 0usize;
        let mut highs = 0usize;
        for &v in &self.pixels {
            if v == 0 {
                zeros += 1;
            } else if v == 255 {
                highs += 1;
            }
        }
        if zeros > highs {
            BackgroundPolarity::Dark
        } else {
            BackgroundPolarity::Light
        }
    }
}
