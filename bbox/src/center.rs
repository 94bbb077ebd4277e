use super::CornerRect;
use crate::common::*;

/// Bounding box in center form: center point `(cx, cy)` plus width and
/// height.
///
/// Conversion to and from [`CornerRect`] is plain arithmetic with no
/// rounding, so the two forms convert back and forth without loss.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CenterRect<T> {
    pub(crate) cx: T,
    pub(crate) cy: T,
    pub(crate) w: T,
    pub(crate) h: T,
}

impl<T> CenterRect<T> {
    pub fn try_cast<V>(self) -> Option<CenterRect<V>>
    where
        T: ToPrimitive,
        V: NumCast,
    {
        Some(CenterRect {
            cx: V::from(self.cx)?,
            cy: V::from(self.cy)?,
            w: V::from(self.w)?,
            h: V::from(self.h)?,
        })
    }

    pub fn cast<V>(self) -> CenterRect<V>
    where
        T: ToPrimitive,
        V: NumCast,
    {
        self.try_cast().unwrap()
    }
}

impl<T> CenterRect<T>
where
    T: Copy,
{
    pub fn cx(&self) -> T {
        self.cx
    }

    pub fn cy(&self) -> T {
        self.cy
    }

    pub fn w(&self) -> T {
        self.w
    }

    pub fn h(&self) -> T {
        self.h
    }

    pub fn cxcywh(&self) -> [T; 4] {
        [self.cx, self.cy, self.w, self.h]
    }
}

impl<T> CenterRect<T>
where
    T: Copy + Num + PartialOrd,
{
    pub fn try_new(cxcywh: [T; 4]) -> Result<Self> {
        let [cx, cy, w, h] = cxcywh;
        let zero = T::zero();
        ensure!(w >= zero && h >= zero, "w and h must be non-negative");

        Ok(Self { cx, cy, w, h })
    }

    pub fn new(cxcywh: [T; 4]) -> Self {
        Self::try_new(cxcywh).unwrap()
    }
}

impl<T> From<CornerRect<T>> for CenterRect<T>
where
    T: Copy + Num,
{
    fn from(from: CornerRect<T>) -> Self {
        Self::from(&from)
    }
}

impl<T> From<&CornerRect<T>> for CenterRect<T>
where
    T: Copy + Num,
{
    fn from(from: &CornerRect<T>) -> Self {
        let two = T::one() + T::one();
        let CornerRect { x1, y1, x2, y2, .. } = *from;
        let cx = (x1 + x2) / two;
        let cy = (y1 + y2) / two;
        let w = x2 - x1;
        let h = y2 - y1;
        Self { cx, cy, w, h }
    }
}
