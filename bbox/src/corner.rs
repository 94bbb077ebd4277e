use super::CenterRect;
use crate::common::*;

/// Bounding box in corner form: top-left `(x1, y1)` and bottom-right
/// `(x2, y2)`.
///
/// The coordinate space the corners live in is tracked by the caller; the
/// same type holds pixel coordinates of either space as well as normalized
/// ratios.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CornerRect<T> {
    pub(crate) x1: T,
    pub(crate) y1: T,
    pub(crate) x2: T,
    pub(crate) y2: T,
}

impl<T> CornerRect<T> {
    pub fn try_cast<V>(self) -> Option<CornerRect<V>>
    where
        T: ToPrimitive,
        V: NumCast,
    {
        Some(CornerRect {
            x1: V::from(self.x1)?,
            y1: V::from(self.y1)?,
            x2: V::from(self.x2)?,
            y2: V::from(self.y2)?,
        })
    }

    pub fn cast<V>(self) -> CornerRect<V>
    where
        T: ToPrimitive,
        V: NumCast,
    {
        self.try_cast().unwrap()
    }
}

impl<T> CornerRect<T>
where
    T: Copy,
{
    pub fn x1(&self) -> T {
        self.x1
    }

    pub fn y1(&self) -> T {
        self.y1
    }

    pub fn x2(&self) -> T {
        self.x2
    }

    pub fn y2(&self) -> T {
        self.y2
    }

    pub fn xyxy(&self) -> [T; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }
}

impl<T> CornerRect<T>
where
    T: Copy + Num + PartialOrd,
{
    pub fn try_new(xyxy: [T; 4]) -> Result<Self> {
        let [x1, y1, x2, y2] = xyxy;
        ensure!(x2 >= x1 && y2 >= y1, "x2 >= x1 and y2 >= y1 must hold");

        Ok(Self { x1, y1, x2, y2 })
    }

    pub fn new(xyxy: [T; 4]) -> Self {
        Self::try_new(xyxy).unwrap()
    }

    pub fn w(&self) -> T {
        self.x2 - self.x1
    }

    pub fn h(&self) -> T {
        self.y2 - self.y1
    }

    pub fn area(&self) -> T {
        self.w() * self.h()
    }
}

impl<T> From<CenterRect<T>> for CornerRect<T>
where
    T: Copy + Num,
{
    fn from(from: CenterRect<T>) -> Self {
        Self::from(&from)
    }
}

impl<T> From<&CenterRect<T>> for CornerRect<T>
where
    T: Copy + Num,
{
    fn from(from: &CenterRect<T>) -> Self {
        let two = T::one() + T::one();
        let CenterRect { cx, cy, w, h, .. } = *from;
        let x1 = cx - w / two;
        let y1 = cy - h / two;
        let x2 = cx + w / two;
        let y2 = cy + h / two;
        Self { x1, y1, x2, y2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_rect_rejects_inverted_corners() {
        assert!(CornerRect::try_new([10.0, 10.0, 5.0, 20.0]).is_err());
        assert!(CornerRect::try_new([10.0, 10.0, 20.0, 5.0]).is_err());
        assert!(CornerRect::try_new([10.0, 10.0, 10.0, 10.0]).is_ok());
    }

    #[test]
    fn corner_rect_extents() {
        let rect = CornerRect::new([100.0, 100.0, 200.0, 250.0]);
        assert_eq!(rect.w(), 100.0);
        assert_eq!(rect.h(), 150.0);
        assert_eq!(rect.area(), 15000.0);
        assert_eq!(rect.xyxy(), [100.0, 100.0, 200.0, 250.0]);
    }
}
