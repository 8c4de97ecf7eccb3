//! Startup self-check
//!
//! A fixed battery of known shapes with hand-computed figures. The CLI runs it
//! before any report output and aborts on the first mismatch.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::circle::Circle;
use super::dimension::DimensionError;
use super::rectangle::{Rectangle, Square};
use super::shape::{Geometry, Shape};
use super::triangle::{IsoscelesRightTriangle, RightTriangle};

/// Largest accepted absolute difference between expected and computed values
pub const TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Area,
    Perimeter,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Area => f.write_str("area"),
            Quantity::Perimeter => f.write_str("perimeter"),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CheckError {
    #[error("Self-check failed: {label} {quantity} expected {expected:.4}, got {actual:.4}")]
    Mismatch {
        label: &'static str,
        quantity: Quantity,
        expected: f64,
        actual: f64,
    },

    #[error("Self-check shape could not be built: {0}")]
    Dimension(#[from] DimensionError),
}

/// A shape paired with the figures it must produce
#[derive(Debug, Clone)]
pub struct Expectation {
    pub shape: Shape,
    pub area: f64,
    pub perimeter: f64,
}

impl Expectation {
    pub fn new(shape: impl Into<Shape>, area: f64, perimeter: f64) -> Self {
        Self {
            shape: shape.into(),
            area,
            perimeter,
        }
    }

    /// Compares both quantities against the shape's computed values
    pub fn verify(&self) -> Result<(), CheckError> {
        let label = self.shape.kind().label();
        compare(label, Quantity::Area, self.area, self.shape.area())?;
        compare(label, Quantity::Perimeter, self.perimeter, self.shape.perimeter())
    }
}

fn compare(label: &'static str, quantity: Quantity, expected: f64, actual: f64) -> Result<(), CheckError> {
    // NaN fails the comparison, so it is reported as a mismatch too
    if (expected - actual).abs() <= TOLERANCE {
        Ok(())
    } else {
        Err(CheckError::Mismatch {
            label,
            quantity,
            expected,
            actual,
        })
    }
}

/// Outcome of a successful battery
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CheckSummary {
    /// Number of individual comparisons that passed
    pub passed: usize,
    pub tolerance: f64,
}

/// The built-in battery
pub fn battery() -> Result<Vec<Expectation>, DimensionError> {
    Ok(vec![
        Expectation::new(Circle::new(5.0)?, 78.5398, 31.4159),
        Expectation::new(Rectangle::new(4.0, 6.0)?, 24.0, 20.0),
        Expectation::new(Square::new(5.0)?, 25.0, 20.0),
        Expectation::new(RightTriangle::new(3.0, 4.0)?, 6.0, 12.0),
        Expectation::new(IsoscelesRightTriangle::new(4.0)?, 8.0, 13.6569),
    ])
}

/// Verifies every expectation, stopping at the first failure
pub fn verify_all(expectations: &[Expectation]) -> Result<CheckSummary, CheckError> {
    for expectation in expectations {
        expectation.verify()?;
    }
    Ok(CheckSummary {
        passed: expectations.len() * 2,
        tolerance: TOLERANCE,
    })
}

/// Builds and runs the built-in battery
pub fn run() -> Result<CheckSummary, CheckError> {
    let expectations = battery()?;
    verify_all(&expectations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_battery_passes() {
        let summary = run().unwrap();
        assert_eq!(summary.passed, 10);
        assert_eq!(summary.tolerance, TOLERANCE);
    }

    #[test]
    fn battery_covers_every_kind() {
        let kinds: Vec<_> = battery().unwrap().iter().map(|e| e.shape.kind()).collect();
        for kind in crate::domain::ShapeKind::ALL {
            assert!(kinds.contains(&kind), "missing {:?}", kind);
        }
    }

    #[test]
    fn within_tolerance_passes() {
        let expectation = Expectation::new(Rectangle::new(4.0, 6.0).unwrap(), 24.009, 19.991);
        assert!(expectation.verify().is_ok());
    }

    #[test]
    fn area_mismatch_is_reported() {
        let expectation = Expectation::new(Rectangle::new(4.0, 6.0).unwrap(), 25.0, 20.0);
        assert_eq!(
            expectation.verify(),
            Err(CheckError::Mismatch {
                label: "Rectangle",
                quantity: Quantity::Area,
                expected: 25.0,
                actual: 24.0,
            })
        );
    }

    #[test]
    fn perimeter_mismatch_is_reported() {
        let expectation = Expectation::new(RightTriangle::new(3.0, 4.0).unwrap(), 6.0, 13.0);
        let err = expectation.verify().unwrap_err();
        assert!(matches!(
            err,
            CheckError::Mismatch { quantity: Quantity::Perimeter, .. }
        ));
        assert_eq!(
            err.to_string(),
            "Self-check failed: Right Triangle perimeter expected 13.0000, got 12.0000"
        );
    }

    #[test]
    fn verify_all_stops_at_first_failure() {
        let expectations = vec![
            Expectation::new(Square::new(2.0).unwrap(), 4.0, 8.0),
            Expectation::new(Circle::new(1.0).unwrap(), 1.0, 1.0),
            Expectation::new(Square::new(3.0).unwrap(), 0.0, 0.0),
        ];
        let err = verify_all(&expectations).unwrap_err();
        assert!(matches!(err, CheckError::Mismatch { label: "Circle", .. }));
    }

    #[test]
    fn empty_battery_passes_nothing() {
        let summary = verify_all(&[]).unwrap();
        assert_eq!(summary.passed, 0);
    }
}
