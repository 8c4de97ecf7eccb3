//! Shapes - area and perimeter report for a small catalog of shapes
//!
//! The [`domain`] module holds the geometry: a closed set of shape kinds
//! behind the [`Geometry`] trait, an ordered [`Catalog`] and a startup
//! self-check. The [`cli`] module drives the report and owns all terminal
//! presentation.

pub mod domain;
pub mod cli;

pub use domain::{Catalog, Geometry, Measurement, Shape, ShapeKind};
