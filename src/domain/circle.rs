//! Circle

use std::f64::consts::PI;

use super::dimension::{Dimension, DimensionError};
use super::shape::{Geometry, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: Dimension,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self, DimensionError> {
        Ok(Self {
            radius: Dimension::new("radius", radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius.get()
    }
}

impl Geometry for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn area(&self) -> f64 {
        let r = self.radius();
        PI * r * r
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius()
    }
}
