// SPDX-License-Identifier: MPL-2.0
//! Primary image scaling.
//!
//! The primary bitmap is the source image scaled uniformly to fit the
//! viewport. Policy: fit-to-viewport, but never upscale — the factor is
//! `min(viewport/image)` per axis, capped at 1.0, so an image smaller than
//! the viewport renders at its natural size. Resampling is nearest-neighbor:
//! fast, deterministic, and byte-identical across runs.

use image_rs::imageops::{self, FilterType};
use image_rs::RgbaImage;

use crate::domain::Size;

/// Uniform scale factor fitting `image` inside `viewport`, capped at 1.0.
///
/// Degenerate input (a zero-area viewport or image) yields 0.0 rather than
/// dividing by zero; callers treat that as "nothing to draw".
#[must_use]
pub fn fit_scale(viewport: Size, image: Size) -> f64 {
    if viewport.is_empty() || image.is_empty() {
        return 0.0;
    }

    let sx = f64::from(viewport.width) / f64::from(image.width);
    let sy = f64::from(viewport.height) / f64::from(image.height);

    sx.min(sy).min(1.0)
}

/// The size of `image` after scaling by `factor`, rounded to whole pixels.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scaled_size(image: Size, factor: f64) -> Size {
    if factor <= 0.0 || image.is_empty() {
        return Size::ZERO;
    }

    Size::new(
        (f64::from(image.width) * factor).round().max(1.0) as u32,
        (f64::from(image.height) * factor).round().max(1.0) as u32,
    )
}

/// Scales `image` to fit `viewport` using nearest-neighbor resampling.
///
/// Returns `None` for degenerate geometry. An image already at its display
/// size is copied unscaled.
#[must_use]
pub fn scale_to_viewport(image: &RgbaImage, viewport: Size) -> Option<RgbaImage> {
    let source = Size::new(image.width(), image.height());
    let factor = fit_scale(viewport, source);
    let target = scaled_size(source, factor);

    if target.is_empty() {
        return None;
    }

    if target == source {
        return Some(image.clone());
    }

    Some(imageops::resize(
        image,
        target.width,
        target.height,
        FilterType::Nearest,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn oversized_image_is_scaled_down() {
        // 1600x900 into 800x600: min(0.5, 0.667) = 0.5
        let factor = fit_scale(Size::new(800, 600), Size::new(1600, 900));
        assert_abs_diff_eq!(factor, 0.5);
        assert_eq!(scaled_size(Size::new(1600, 900), factor), Size::new(800, 450));
    }

    #[test]
    fn small_image_is_never_upscaled() {
        let factor = fit_scale(Size::new(800, 600), Size::new(200, 100));
        assert_abs_diff_eq!(factor, 1.0);
        assert_eq!(scaled_size(Size::new(200, 100), factor), Size::new(200, 100));
    }

    #[test]
    fn degenerate_geometry_yields_zero() {
        assert_abs_diff_eq!(fit_scale(Size::ZERO, Size::new(10, 10)), 0.0);
        assert_abs_diff_eq!(fit_scale(Size::new(10, 10), Size::ZERO), 0.0);
        assert_eq!(scaled_size(Size::new(10, 10), 0.0), Size::ZERO);
    }

    #[test]
    fn scaled_size_rounds_within_one_pixel() {
        let image = Size::new(1333, 777);
        let factor = fit_scale(Size::new(640, 480), image);
        let result = scaled_size(image, factor);

        let exact_w = f64::from(image.width) * factor;
        let exact_h = f64::from(image.height) * factor;
        assert!((f64::from(result.width) - exact_w).abs() <= 1.0);
        assert!((f64::from(result.height) - exact_h).abs() <= 1.0);
    }

    #[test]
    fn scale_to_viewport_resizes_buffer() {
        let image = RgbaImage::from_pixel(1600, 900, image_rs::Rgba([9, 9, 9, 255]));
        let scaled = scale_to_viewport(&image, Size::new(800, 600)).expect("scaled");
        assert_eq!((scaled.width(), scaled.height()), (800, 450));
        // Nearest-neighbor of a solid image stays solid.
        assert_eq!(scaled[(399, 224)].0, [9, 9, 9, 255]);
    }

    #[test]
    fn scale_to_viewport_passes_small_image_through() {
        let image = RgbaImage::new(100, 80);
        let scaled = scale_to_viewport(&image, Size::new(800, 600)).expect("scaled");
        assert_eq!((scaled.width(), scaled.height()), (100, 80));
    }

    #[test]
    fn scale_to_viewport_rejects_empty_viewport() {
        let image = RgbaImage::new(100, 80);
        assert!(scale_to_viewport(&image, Size::ZERO).is_none());
    }
}
