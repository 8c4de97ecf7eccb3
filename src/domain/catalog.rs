//! Ordered collection of shapes
//!
//! The catalog is built once and then only read. Every report pass starts a
//! fresh iteration, so passes always see the shapes in insertion order.

use super::circle::Circle;
use super::dimension::DimensionError;
use super::rectangle::{Rectangle, Square};
use super::shape::{Geometry, Measurement, Shape};
use super::triangle::{IsoscelesRightTriangle, RightTriangle};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    shapes: Vec<Shape>,
}

impl Catalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed sample set reported by the CLI
    pub fn sample() -> Result<Self, DimensionError> {
        let mut catalog = Self::new();
        catalog.push(Circle::new(5.0)?);
        catalog.push(Rectangle::new(4.0, 6.0)?);
        catalog.push(RightTriangle::new(3.0, 4.0)?);
        catalog.push(Square::new(5.0)?);
        catalog.push(IsoscelesRightTriangle::new(4.0)?);
        Ok(catalog)
    }

    /// Appends a shape at the end of the catalog
    pub fn push(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// Lazily measures each shape, in insertion order
    pub fn measurements(&self) -> impl Iterator<Item = Measurement> + '_ {
        self.shapes.iter().map(<Shape as Geometry>::measure)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

impl<S: Into<Shape>> FromIterator<S> for Catalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            shapes: iter.into_iter().map(Into::into).collect(),
        }
    }
}
