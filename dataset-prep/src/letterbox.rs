use crate::common::*;
use bbox::{LetterboxGeometry, Size};
use image::{
    imageops::{self, FilterType},
    DynamicImage, GenericImageView, Rgb, RgbImage,
};

/// Canvas fill used by the YOLO family of detectors.
pub const DEFAULT_FILL: u8 = 114;

/// Resize `img` to fit `target` while preserving aspect ratio, centered on
/// a canvas uniformly filled with `fill`.
///
/// The placement comes from the same [`LetterboxGeometry`] the coordinate
/// transforms use, so boxes mapped with it land exactly on the pasted
/// image region.
pub fn letterbox(img: &DynamicImage, target: &Size<u32>, fill: u8) -> Result<RgbImage> {
    let original = Size::try_new(img.width(), img.height(), 3u32)
        .context("letterbox input image has no pixels")?;
    let geometry = LetterboxGeometry::try_new(&original.cast::<f64>(), &target.clone().cast())?;

    // A pathological aspect ratio can round a scaled dimension down to
    // zero; the resize still needs at least one pixel per axis.
    let scaled_w = (geometry.scaled_w() as u32).max(1);
    let scaled_h = (geometry.scaled_h() as u32).max(1);

    let resized = imageops::resize(&img.to_rgb8(), scaled_w, scaled_h, FilterType::Triangle);

    let mut canvas = RgbImage::from_pixel(target.w(), target.h(), Rgb([fill; 3]));
    imageops::overlay(
        &mut canvas,
        &resized,
        geometry.offset_x() as i64,
        geometry.offset_y() as i64,
    );
    Ok(canvas)
}

/// Plain resize to `target` without aspect-ratio preservation.
pub fn resize_exact(img: &DynamicImage, target: &Size<u32>) -> RgbImage {
    imageops::resize(&img.to_rgb8(), target.w(), target.h(), FilterType::Triangle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bbox::CornerRect;

    #[test]
    fn letterbox_centers_and_fills() {
        // 4x2 into 8x8 scales to 8x4 with two rows of padding on both top
        // and bottom.
        let src = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 2, Rgb([255, 255, 255])));
        let canvas = letterbox(&src, &Size::from_wh(8, 8), DEFAULT_FILL).unwrap();

        assert_eq!(canvas.dimensions(), (8, 8));
        assert_eq!(canvas.get_pixel(0, 0), &Rgb([114, 114, 114]));
        assert_eq!(canvas.get_pixel(7, 1), &Rgb([114, 114, 114]));
        assert_eq!(canvas.get_pixel(0, 2), &Rgb([255, 255, 255]));
        assert_eq!(canvas.get_pixel(7, 5), &Rgb([255, 255, 255]));
        assert_eq!(canvas.get_pixel(0, 6), &Rgb([114, 114, 114]));
        assert_eq!(canvas.get_pixel(7, 7), &Rgb([114, 114, 114]));
    }

    #[test]
    fn pasted_region_matches_transformed_frame() {
        let src = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 2, Rgb([255, 255, 255])));
        let target = Size::from_wh(8u32, 8);
        let canvas = letterbox(&src, &target, DEFAULT_FILL).unwrap();

        let geometry = LetterboxGeometry::new(
            &Size::from_wh(4.0, 2.0),
            &target.cast::<f64>(),
        );
        let frame = geometry.to_canvas(&CornerRect::new([0.0, 0.0, 4.0, 2.0]));

        for y in 0..8u32 {
            for x in 0..8u32 {
                let inside = (x as f64) >= frame.x1()
                    && (x as f64) < frame.x2()
                    && (y as f64) >= frame.y1()
                    && (y as f64) < frame.y2();
                let expected = if inside { 255 } else { 114 };
                assert_eq!(canvas.get_pixel(x, y), &Rgb([expected; 3]), "at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn resize_exact_ignores_aspect_ratio() {
        let src = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 2, Rgb([10, 20, 30])));
        let resized = resize_exact(&src, &Size::from_wh(6, 6));
        assert_eq!(resized.dimensions(), (6, 6));
        assert_eq!(resized.get_pixel(3, 3), &Rgb([10, 20, 30]));
    }

    #[test]
    fn degenerate_input_is_rejected() {
        let src = DynamicImage::ImageRgb8(RgbImage::new(0, 0));
        assert!(letterbox(&src, &Size::from_wh(8, 8), DEFAULT_FILL).is_err());
    }
}
