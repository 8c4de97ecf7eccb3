//! Domain models for the shapes report
//!
//! Pure geometry: no output, no terminal concerns.

mod dimension;
mod shape;
mod circle;
mod rectangle;
mod triangle;
mod catalog;
pub mod check;

pub use dimension::{Dimension, DimensionError};
pub use shape::{Geometry, Measurement, Shape, ShapeKind};
pub use circle::Circle;
pub use rectangle::{Rectangle, Square};
pub use triangle::{IsoscelesRightTriangle, RightTriangle};
pub use catalog::Catalog;
pub use check::{CheckError, CheckSummary};
