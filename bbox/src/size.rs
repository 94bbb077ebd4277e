use crate::common::*;

/// Image or canvas extent in pixels: width, height and channel count.
///
/// All dimensions are strictly positive; the checked constructors reject
/// anything else, so downstream geometry never divides by zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Size<T> {
    w: T,
    h: T,
    c: T,
}

impl<T> Size<T> {
    pub fn try_cast<U>(self) -> Option<Size<U>>
    where
        T: ToPrimitive,
        U: NumCast,
    {
        Some(Size {
            w: U::from(self.w)?,
            h: U::from(self.h)?,
            c: U::from(self.c)?,
        })
    }

    pub fn cast<U>(self) -> Size<U>
    where
        T: ToPrimitive,
        U: NumCast,
    {
        self.try_cast().unwrap()
    }
}

impl<T> Size<T>
where
    T: Num + PartialOrd + Copy,
{
    pub fn try_new(w: T, h: T, c: T) -> Result<Self> {
        let zero = T::zero();
        ensure!(
            w > zero && h > zero && c > zero,
            "size dimensions must be positive"
        );
        Ok(Self { w, h, c })
    }

    pub fn new(w: T, h: T, c: T) -> Self {
        Self::try_new(w, h, c).unwrap()
    }

    /// Width and height with the usual three color channels.
    pub fn try_from_wh(w: T, h: T) -> Result<Self> {
        let three = T::one() + T::one() + T::one();
        Self::try_new(w, h, three)
    }

    pub fn from_wh(w: T, h: T) -> Self {
        Self::try_from_wh(w, h).unwrap()
    }

    pub fn w(&self) -> T {
        self.w
    }

    pub fn h(&self) -> T {
        self.h
    }

    pub fn c(&self) -> T {
        self.c
    }

    pub fn area(&self) -> T {
        self.w * self.h
    }
}
