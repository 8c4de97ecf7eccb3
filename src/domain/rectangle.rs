//! Rectangle and its equal-sided specialization, Square

use super::dimension::{Dimension, DimensionError};
use super::shape::{Geometry, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: Dimension,
    height: Dimension,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Result<Self, DimensionError> {
        Ok(Self {
            width: Dimension::new("width", width)?,
            height: Dimension::new("height", height)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width.get()
    }

    pub fn height(&self) -> f64 {
        self.height.get()
    }
}

impl Geometry for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn area(&self) -> f64 {
        self.width() * self.height()
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width() + self.height())
    }
}

/// A rectangle with equal width and height
///
/// Area and perimeter come straight from the wrapped [`Rectangle`], so a
/// square and the matching rectangle always agree to the last bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    inner: Rectangle,
}

impl Square {
    pub fn new(side: f64) -> Result<Self, DimensionError> {
        let side = Dimension::new("side", side)?;
        Ok(Self {
            inner: Rectangle {
                width: side,
                height: side,
            },
        })
    }

    pub fn side(&self) -> f64 {
        self.inner.width()
    }

    pub fn as_rectangle(&self) -> &Rectangle {
        &self.inner
    }
}

impl Geometry for Square {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
    }

    fn area(&self) -> f64 {
        self.inner.area()
    }

    fn perimeter(&self) -> f64 {
        self.inner.perimeter()
    }
}
