//! Right triangles
//!
//! [`RightTriangle`] is described by its two legs. [`IsoscelesRightTriangle`]
//! is the equal-legged case and delegates every formula to a wrapped
//! [`RightTriangle`].

use super::dimension::{Dimension, DimensionError};
use super::shape::{Geometry, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RightTriangle {
    base: Dimension,
    height: Dimension,
}

impl RightTriangle {
    pub fn new(base: f64, height: f64) -> Result<Self, DimensionError> {
        Ok(Self {
            base: Dimension::new("base", base)?,
            height: Dimension::new("height", height)?,
        })
    }

    pub fn base(&self) -> f64 {
        self.base.get()
    }

    pub fn height(&self) -> f64 {
        self.height.get()
    }

    /// Length of the side opposite the right angle
    pub fn hypotenuse(&self) -> f64 {
        let (b, h) = (self.base(), self.height());
        (b * b + h * h).sqrt()
    }
}

impl Geometry for RightTriangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::RightTriangle
    }

    fn area(&self) -> f64 {
        0.5 * self.base() * self.height()
    }

    fn perimeter(&self) -> f64 {
        self.base() + self.height() + self.hypotenuse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoscelesRightTriangle {
    inner: RightTriangle,
}

impl IsoscelesRightTriangle {
    pub fn new(side: f64) -> Result<Self, DimensionError> {
        let side = Dimension::new("side", side)?;
        Ok(Self {
            inner: RightTriangle {
                base: side,
                height: side,
            },
        })
    }

    pub fn side(&self) -> f64 {
        self.inner.base()
    }

    pub fn as_right_triangle(&self) -> &RightTriangle {
        &self.inner
    }
}

impl Geometry for IsoscelesRightTriangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::IsoscelesRightTriangle
    }

    fn area(&self) -> f64 {
        self.inner.area()
    }

    fn perimeter(&self) -> f64 {
        self.inner.perimeter()
    }
}
