//! Validated lengths for shape construction
//!
//! Every shape stores its sizes as [`Dimension`]s, so a shape that exists
//! always has positive, finite measurements.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DimensionError {
    #[error("Invalid dimension '{name}': must be greater than zero, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("Invalid dimension '{name}': must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}

/// A positive, finite length
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dimension(f64);

impl Dimension {
    /// Validates `value` as the dimension called `name`
    pub fn new(name: &'static str, value: f64) -> Result<Self, DimensionError> {
        if !value.is_finite() {
            return Err(DimensionError::NonFinite { name, value });
        }
        if value <= 0.0 {
            return Err(DimensionError::NonPositive { name, value });
        }
        Ok(Self(value))
    }

    /// Returns the raw length
    pub fn get(self) -> f64 {
        self.0
    }
}
