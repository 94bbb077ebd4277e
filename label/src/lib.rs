//! Annotation records and the plain-text label line format.
//!
//! A label file carries one annotation per line, fields separated by
//! whitespace: `class x1 y1 x2 y2` in corner form, or `class cx cy w h`
//! after center-form conversion. No header, no trailing metadata.

use anyhow::{ensure, Context, Result};
use bbox::{CenterRect, CornerRect, LetterboxGeometry};
use num_traits::{Float, Num};
use std::fmt;

/// A single annotation: a class id and a rectangle in some coordinate
/// space.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label<R> {
    pub class: usize,
    pub rect: R,
}

impl<R> Label<R> {
    pub fn new(class: usize, rect: R) -> Self {
        Self { class, rect }
    }

    pub fn map_rect<S>(self, f: impl FnOnce(R) -> S) -> Label<S> {
        Label {
            class: self.class,
            rect: f(self.rect),
        }
    }
}

impl<T> Label<CornerRect<T>>
where
    T: Float,
{
    /// Map the rectangle into canvas space, keeping the class id.
    pub fn to_canvas(&self, geometry: &LetterboxGeometry<T>) -> Self {
        Self {
            class: self.class,
            rect: geometry.to_canvas(&self.rect),
        }
    }

    /// Map the rectangle back into original-image space, keeping the class
    /// id.
    pub fn to_original(&self, geometry: &LetterboxGeometry<T>) -> Self {
        Self {
            class: self.class,
            rect: geometry.to_original(&self.rect),
        }
    }

    /// Map the rectangle into normalized canvas ratios, keeping the class
    /// id.
    pub fn normalize(&self, geometry: &LetterboxGeometry<T>) -> Self {
        Self {
            class: self.class,
            rect: geometry.normalize(&self.rect),
        }
    }
}

impl<T> Label<CornerRect<T>>
where
    T: Copy + Num,
{
    pub fn to_center(&self) -> Label<CenterRect<T>> {
        Label {
            class: self.class,
            rect: CenterRect::from(&self.rect),
        }
    }
}

impl Label<CornerRect<f64>> {
    /// Parse a `class x1 y1 x2 y2` line.
    pub fn from_corner_line(line: &str) -> Result<Self> {
        let fields: Vec<_> = line.split_whitespace().collect();
        ensure!(
            fields.len() == 5,
            "expected 5 whitespace-separated fields, found {}",
            fields.len()
        );

        let class = fields[0]
            .parse()
            .with_context(|| format!("invalid class id '{}'", fields[0]))?;

        let mut coords = [0f64; 4];
        for (slot, field) in coords.iter_mut().zip(&fields[1..]) {
            *slot = field
                .parse()
                .with_context(|| format!("invalid coordinate '{}'", field))?;
        }

        Ok(Self {
            class,
            rect: CornerRect::try_new(coords)?,
        })
    }
}

impl<T> fmt::Display for Label<CornerRect<T>>
where
    T: Copy + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.class,
            self.rect.x1(),
            self.rect.y1(),
            self.rect.x2(),
            self.rect.y2()
        )
    }
}

impl<T> fmt::Display for Label<CenterRect<T>>
where
    T: Copy + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.class,
            self.rect.cx(),
            self.rect.cy(),
            self.rect.w(),
            self.rect.h()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bbox::Size;

    #[test]
    fn parses_corner_lines() {
        let label = Label::from_corner_line("2 100 100 200 250.5").unwrap();
        assert_eq!(label.class, 2);
        assert_eq!(label.rect, CornerRect::new([100.0, 100.0, 200.0, 250.5]));
    }

    #[test]
    fn rejects_wrong_field_counts() {
        assert!(Label::from_corner_line("").is_err());
        assert!(Label::from_corner_line("0 1 2 3").is_err());
        assert!(Label::from_corner_line("0 1 2 3 4 5").is_err());
    }

    #[test]
    fn rejects_unparseable_fields() {
        assert!(Label::from_corner_line("cat 1 2 3 4").is_err());
        assert!(Label::from_corner_line("0 one 2 3 4").is_err());
    }

    #[test]
    fn rejects_inverted_corners() {
        assert!(Label::from_corner_line("0 30 10 20 40").is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let label = Label::new(7, CornerRect::new([1.5, 2.0, 3.5, 4.0]));
        let restored = Label::from_corner_line(&label.to_string()).unwrap();
        assert_eq!(restored, label);
    }

    #[test]
    fn center_form_keeps_the_class_id() {
        let label = Label::new(3, CornerRect::new([10.0, 20.0, 30.0, 60.0]));
        let center = label.to_center();
        assert_eq!(center.class, 3);
        assert_eq!(center.to_string(), "3 20 40 20 40");
    }

    #[test]
    fn geometry_application_keeps_the_class_id() {
        let geometry = LetterboxGeometry::new(
            &Size::from_wh(1000.0, 500.0),
            &Size::from_wh(640.0, 640.0),
        );
        let label = Label::new(5, CornerRect::new([100.0, 100.0, 200.0, 200.0]));

        let canvas = label.to_canvas(&geometry);
        assert_eq!(canvas.class, 5);
        assert_eq!(canvas.rect.xyxy(), [64.0, 224.0, 128.0, 288.0]);

        let restored = canvas.to_original(&geometry);
        assert_eq!(restored.class, 5);
        assert_eq!(restored.rect.xyxy(), [100.0, 100.0, 200.0, 200.0]);

        let normalized = label.normalize(&geometry);
        assert_eq!(normalized.class, 5);
        assert_eq!(normalized.rect.xyxy(), [0.1, 0.35, 0.2, 0.45]);
    }
}
