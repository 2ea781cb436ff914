//! Letterbox normalizer.
//!
//! Scales an arbitrary-size picture onto a fixed canvas while keeping
//! its aspect ratio, centering it and padding the rest with black.
//! The device consumes frames of one fixed geometry, so every input
//! goes through this stage before packing.

use image::{imageops, imageops::FilterType, RgbImage};

use crate::{Error, Result};

/// Fixed output geometry of the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total RGB payload size of one normalized frame in bytes.
    pub const fn byte_len(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidCanvasSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl Default for CanvasSize {
    /// The geometry the device's segmentation core was trained for.
    fn default() -> Self {
        Self::new(224, 224)
    }
}

/// Resizes `image` to fit within `canvas` preserving aspect ratio and
/// pastes it centered onto a black canvas of exactly that size.
///
/// The scale factor is `min(canvas.w / src.w, canvas.h / src.h)`, the
/// scaled dimensions are rounded, and the centering offset uses floor
/// division, so content never gets cropped. A source with an aspect
/// ratio extreme enough to scale one dimension down to zero produces
/// an entirely black canvas instead of failing.
pub fn letterbox(image: &RgbImage, canvas: CanvasSize) -> Result<RgbImage> {
    canvas.validate()?;

    let (src_w, src_h) = image.dimensions();
    let ratio = f64::min(
        f64::from(canvas.width) / f64::from(src_w),
        f64::from(canvas.height) / f64::from(src_h),
    );
    let new_w = (f64::from(src_w) * ratio).round() as u32;
    let new_h = (f64::from(src_h) * ratio).round() as u32;

    // Zero-filled, thus already black.
    let mut padded = RgbImage::new(canvas.width, canvas.height);
    if new_w == 0 || new_h == 0 {
        return Ok(padded);
    }

    let scaled = imageops::resize(image, new_w, new_h, FilterType::Lanczos3);
    let offset_x = i64::from((canvas.width - new_w) / 2);
    let offset_y = i64::from((canvas.height - new_h) / 2);
    imageops::replace(&mut padded, &scaled, offset_x, offset_y);
    Ok(padded)
}
