use super::{CornerRect, Size};
use crate::common::*;

/// Scale and padding of a letterbox placement.
///
/// Computed once per `(original, target)` pair and shared by the pixel
/// resizer and both coordinate transforms, so the two directions can never
/// disagree on scale or padding. `pad_w`/`pad_h` are the total padding
/// across both sides of an axis, not per-side amounts.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterboxGeometry<T> {
    scale: T,
    pad_w: T,
    pad_h: T,
    orig_w: T,
    orig_h: T,
    target_w: T,
    target_h: T,
}

impl<T> LetterboxGeometry<T>
where
    T: Float,
{
    pub fn try_new(original: &Size<T>, target: &Size<T>) -> Result<Self> {
        let zero = T::zero();
        ensure!(
            original.w() > zero && original.h() > zero && target.w() > zero && target.h() > zero,
            "letterbox geometry requires positive dimensions"
        );

        // The scale pairs the target height against the original width and
        // vice versa; downstream consumers depend on this pairing.
        let scale = (target.h() / original.w()).min(target.w() / original.h());
        let pad_w = target.w() - scale * original.w();
        let pad_h = target.h() - scale * original.h();

        Ok(Self {
            scale,
            pad_w,
            pad_h,
            orig_w: original.w(),
            orig_h: original.h(),
            target_w: target.w(),
            target_h: target.h(),
        })
    }

    pub fn new(original: &Size<T>, target: &Size<T>) -> Self {
        Self::try_new(original, target).unwrap()
    }

    pub fn scale(&self) -> T {
        self.scale
    }

    pub fn pad_w(&self) -> T {
        self.pad_w
    }

    pub fn pad_h(&self) -> T {
        self.pad_h
    }

    /// Width of the scaled image before padding.
    pub fn scaled_w(&self) -> T {
        (self.orig_w * self.scale).round()
    }

    /// Height of the scaled image before padding.
    pub fn scaled_h(&self) -> T {
        (self.orig_h * self.scale).round()
    }

    /// Horizontal placement of the scaled image on the canvas. When the
    /// padding is odd, the extra pixel goes to the right side.
    pub fn offset_x(&self) -> T {
        let two = T::one() + T::one();
        ((self.target_w - self.scaled_w()) / two).floor()
    }

    /// Vertical placement of the scaled image on the canvas. When the
    /// padding is odd, the extra pixel goes to the bottom side.
    pub fn offset_y(&self) -> T {
        let two = T::one() + T::one();
        ((self.target_h - self.scaled_h()) / two).floor()
    }

    /// Map a rectangle from original-image space into canvas space.
    ///
    /// Each coordinate maps as `round((c + pad / (2 * scale)) * scale)`,
    /// rounding exactly once.
    pub fn to_canvas(&self, rect: &CornerRect<T>) -> CornerRect<T> {
        let two = T::one() + T::one();
        let fx = |c: T| ((c + self.pad_w / (two * self.scale)) * self.scale).round();
        let fy = |c: T| ((c + self.pad_h / (two * self.scale)) * self.scale).round();

        let CornerRect { x1, y1, x2, y2, .. } = *rect;
        CornerRect {
            x1: fx(x1),
            y1: fy(y1),
            x2: fx(x2),
            y2: fy(y2),
        }
    }

    /// Map a rectangle from canvas space back into original-image space;
    /// the algebraic inverse of [`to_canvas`](Self::to_canvas).
    ///
    /// Each coordinate maps as `round(c / scale - pad / (2 * scale))`. Each
    /// direction rounds once, so a round trip recovers every coordinate
    /// within one unit.
    pub fn to_original(&self, rect: &CornerRect<T>) -> CornerRect<T> {
        let two = T::one() + T::one();
        let fx = |c: T| (c / self.scale - self.pad_w / (two * self.scale)).round();
        let fy = |c: T| (c / self.scale - self.pad_h / (two * self.scale)).round();

        let CornerRect { x1, y1, x2, y2, .. } = *rect;
        CornerRect {
            x1: fx(x1),
            y1: fy(y1),
            x2: fx(x2),
            y2: fy(y2),
        }
    }

    /// Map a rectangle from original-image space into `[0, 1]` ratios of
    /// the canvas. Inherits the rounding of
    /// [`to_canvas`](Self::to_canvas); the division adds none of its own.
    pub fn normalize(&self, rect: &CornerRect<T>) -> CornerRect<T> {
        let CornerRect { x1, y1, x2, y2, .. } = self.to_canvas(rect);
        CornerRect {
            x1: x1 / self.target_w,
            y1: y1 / self.target_h,
            x2: x2 / self.target_w,
            y2: y2 / self.target_h,
        }
    }

    pub fn map_to_canvas(&self, rects: &[CornerRect<T>]) -> Vec<CornerRect<T>> {
        rects.iter().map(|rect| self.to_canvas(rect)).collect()
    }

    pub fn map_to_original(&self, rects: &[CornerRect<T>]) -> Vec<CornerRect<T>> {
        rects.iter().map(|rect| self.to_original(rect)).collect()
    }

    pub fn map_normalize(&self, rects: &[CornerRect<T>]) -> Vec<CornerRect<T>> {
        rects.iter().map(|rect| self.normalize(rect)).collect()
    }
}
