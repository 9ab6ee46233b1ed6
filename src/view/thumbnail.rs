// SPDX-License-Identifier: MPL-2.0
//! Thumbnail generation for the secondary image.
//!
//! The thumbnail targets a fixed box (340x220 by default, configurable),
//! clamped so the target never exceeds the source image's own dimensions.
//! Width is scaled to fit, height follows proportionally, and a result
//! taller than the box is cropped to the box height from the top — never
//! padded and never upscaled past the natural aspect. An optional crop
//! rectangle selects the source region instead of the whole image, provided
//! it fits entirely inside the image bounds.

use image_rs::imageops::{self, FilterType};
use image_rs::RgbaImage;

use crate::domain::{Rect, Size};

/// Final thumbnail dimensions for a source of `source` size and a configured
/// `target_box`.
///
/// Componentwise, the result never exceeds `min(target_box, source)`.
#[must_use]
pub fn target_size(source: Size, target_box: Size) -> Size {
    let box_w = target_box.width.min(source.width);
    let box_h = target_box.height.min(source.height);

    if box_w == 0 || box_h == 0 || source.is_empty() {
        return Size::ZERO;
    }

    let factor = f64::from(box_w) / f64::from(source.width);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let scaled_h = (f64::from(source.height) * factor).round() as u32;

    if scaled_h == 0 {
        return Size::ZERO;
    }

    Size::new(box_w, scaled_h.min(box_h))
}

/// Generates the thumbnail bitmap.
///
/// `crop` selects the source region; it is honored only when it fits
/// entirely inside the image bounds, otherwise the whole image is used.
/// Returns `None` for degenerate geometry.
#[must_use]
pub fn generate(image: &RgbaImage, target_box: Size, crop: Option<Rect>) -> Option<RgbaImage> {
    let full = Size::new(image.width(), image.height());
    let region = crop.filter(|r| r.contained_in(full));

    let (source, source_size) = match region {
        Some(rect) => {
            #[allow(clippy::cast_sign_loss)]
            let sub = imageops::crop_imm(
                image,
                rect.origin.x as u32,
                rect.origin.y as u32,
                rect.size.width,
                rect.size.height,
            );
            (sub.to_image(), rect.size)
        }
        None => (image.clone(), full),
    };

    let target = target_size(source_size, target_box);
    if target.is_empty() {
        return None;
    }

    // Scale width to fit, height proportionally.
    let factor = f64::from(target.width) / f64::from(source_size.width);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let scaled_h = ((f64::from(source_size.height) * factor).round() as u32).max(1);

    let scaled = if Size::new(target.width, scaled_h) == source_size {
        source
    } else {
        imageops::resize(&source, target.width, scaled_h, FilterType::Nearest)
    };

    if scaled_h > target.height {
        // Proportional height overflows the box: crop to it from the top.
        Some(imageops::crop_imm(&scaled, 0, 0, target.width, target.height).to_image())
    } else {
        Some(scaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Point;

    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            image_rs::Rgba([(x % 256) as u8, (y % 256) as u8, 0, 255])
        })
    }

    #[test]
    fn target_never_exceeds_box_or_source() {
        let cases = [
            (Size::new(1600, 900), Size::new(340, 220)),
            (Size::new(100, 80), Size::new(340, 220)),
            (Size::new(340, 1000), Size::new(340, 220)),
            (Size::new(4000, 50), Size::new(340, 220)),
        ];

        for (source, target_box) in cases {
            let target = target_size(source, target_box);
            assert!(target.width <= target_box.width.min(source.width));
            assert!(target.height <= target_box.height.min(source.height));
        }
    }

    #[test]
    fn wide_source_shrinks_box_height() {
        // 1600x400 at width 340 scales height to 85, below the 220 box.
        let target = target_size(Size::new(1600, 400), Size::new(340, 220));
        assert_eq!(target, Size::new(340, 85));
    }

    #[test]
    fn tall_source_is_capped_at_box_height() {
        // 400x1600 at width 340 would be 1360 tall; capped at 220.
        let target = target_size(Size::new(400, 1600), Size::new(340, 220));
        assert_eq!(target, Size::new(340, 220));
    }

    #[test]
    fn small_source_clamps_box_to_itself() {
        let target = target_size(Size::new(100, 60), Size::new(340, 220));
        assert_eq!(target, Size::new(100, 60));
    }

    #[test]
    fn degenerate_source_yields_zero() {
        assert_eq!(target_size(Size::ZERO, Size::new(340, 220)), Size::ZERO);
        assert_eq!(target_size(Size::new(10, 10), Size::ZERO), Size::ZERO);
    }

    #[test]
    fn generate_produces_target_sized_bitmap() {
        let image = gradient(1600, 400);
        let thumb = generate(&image, Size::new(340, 220), None).expect("thumbnail");
        assert_eq!((thumb.width(), thumb.height()), (340, 85));
    }

    #[test]
    fn generate_crops_tall_result_to_box() {
        let image = gradient(400, 1600);
        let thumb = generate(&image, Size::new(340, 220), None).expect("thumbnail");
        assert_eq!((thumb.width(), thumb.height()), (340, 220));
    }

    #[test]
    fn generate_uses_contained_crop_region() {
        let image = gradient(800, 600);
        let crop = Rect::new(Point::new(100, 50), Size::new(340, 220));
        let thumb = generate(&image, Size::new(340, 220), Some(crop)).expect("thumbnail");

        // Crop already matches the box, so no resampling happens and the
        // top-left pixel comes straight from (100, 50).
        assert_eq!((thumb.width(), thumb.height()), (340, 220));
        assert_eq!(thumb[(0, 0)].0, image[(100, 50)].0);
    }

    #[test]
    fn generate_ignores_out_of_bounds_crop() {
        let image = gradient(300, 200);
        let crop = Rect::new(Point::new(200, 100), Size::new(340, 220));
        let thumb = generate(&image, Size::new(340, 220), Some(crop)).expect("thumbnail");

        // Falls back to the whole 300x200 image, which fits the box as-is.
        assert_eq!((thumb.width(), thumb.height()), (300, 200));
        assert_eq!(thumb[(0, 0)].0, image[(0, 0)].0);
    }

    #[test]
    fn generate_is_deterministic() {
        let image = gradient(1234, 777);
        let a = generate(&image, Size::new(340, 220), None).expect("thumbnail");
        let b = generate(&image, Size::new(340, 220), None).expect("thumbnail");
        assert_eq!(a.as_raw(), b.as_raw());
    }
}
