//! Shape capability and the closed set of shape kinds
//!
//! [`Geometry`] is the one interface every shape answers to. [`Shape`] is the
//! sum type the catalog stores; it dispatches to the concrete kind.

use std::fmt;

use serde::Serialize;

use super::circle::Circle;
use super::rectangle::{Rectangle, Square};
use super::triangle::{IsoscelesRightTriangle, RightTriangle};

/// Kind tag for each shape variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Square,
    RightTriangle,
    IsoscelesRightTriangle,
}

impl ShapeKind {
    /// All kinds, in catalog order
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Circle,
        ShapeKind::Rectangle,
        ShapeKind::RightTriangle,
        ShapeKind::Square,
        ShapeKind::IsoscelesRightTriangle,
    ];

    /// Returns the human-readable display label
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Square => "Square",
            ShapeKind::RightTriangle => "Right Triangle",
            ShapeKind::IsoscelesRightTriangle => "Isosceles Right Triangle",
        }
    }

    /// Returns the machine tag used in JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
            ShapeKind::RightTriangle => "right_triangle",
            ShapeKind::IsoscelesRightTriangle => "isosceles_right_triangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Computed figures for one shape, detached from the shape itself
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub kind: ShapeKind,
    pub label: &'static str,
    pub area: f64,
    pub perimeter: f64,
}

/// Area, perimeter and description of a shape
pub trait Geometry {
    fn kind(&self) -> ShapeKind;

    fn area(&self) -> f64;

    fn perimeter(&self) -> f64;

    /// One-line summary, e.g. `Circle - Area: 78.54, Perimeter: 31.42`
    fn describe(&self) -> String {
        format!(
            "{} - Area: {:.2}, Perimeter: {:.2}",
            self.kind().label(),
            self.area(),
            self.perimeter()
        )
    }

    fn measure(&self) -> Measurement {
        let kind = self.kind();
        Measurement {
            kind,
            label: kind.label(),
            area: self.area(),
            perimeter: self.perimeter(),
        }
    }
}

/// Any shape in the catalog
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    Square(Square),
    RightTriangle(RightTriangle),
    IsoscelesRightTriangle(IsoscelesRightTriangle),
}

impl Shape {
    fn as_geometry(&self) -> &dyn Geometry {
        match self {
            Shape::Circle(s) => s,
            Shape::Rectangle(s) => s,
            Shape::Square(s) => s,
            Shape::RightTriangle(s) => s,
            Shape::IsoscelesRightTriangle(s) => s,
        }
    }
}

impl Geometry for Shape {
    fn kind(&self) -> ShapeKind {
        self.as_geometry().kind()
    }

    fn area(&self) -> f64 {
        self.as_geometry().area()
    }

    fn perimeter(&self) -> f64 {
        self.as_geometry().perimeter()
    }
}

impl From<Circle> for Shape {
    fn from(shape: Circle) -> Self {
        Shape::Circle(shape)
    }
}

impl From<Rectangle> for Shape {
    fn from(shape: Rectangle) -> Self {
        Shape::Rectangle(shape)
    }
}

impl From<Square> for Shape {
    fn from(shape: Square) -> Self {
        Shape::Square(shape)
    }
}

impl From<RightTriangle> for Shape {
    fn from(shape: RightTriangle) -> Self {
        Shape::RightTriangle(shape)
    }
}

impl From<IsoscelesRightTriangle> for Shape {
    fn from(shape: IsoscelesRightTriangle) -> Self {
        Shape::IsoscelesRightTriangle(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_static_per_kind() {
        let labels: Vec<_> = ShapeKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Circle",
                "Rectangle",
                "Right Triangle",
                "Square",
                "Isosceles Right Triangle"
            ]
        );
    }

    #[test]
    fn kind_display_uses_label() {
        assert_eq!(ShapeKind::RightTriangle.to_string(), "Right Triangle");
    }

    #[test]
    fn kind_serializes_as_snake_case() {
        let json = serde_json::to_value(ShapeKind::IsoscelesRightTriangle).unwrap();
        assert_eq!(json, "isosceles_right_triangle");
        assert_eq!(ShapeKind::IsoscelesRightTriangle.as_str(), "isosceles_right_triangle");
    }

    #[test]
    fn shape_dispatches_to_variant() {
        let shape: Shape = Rectangle::new(4.0, 6.0).unwrap().into();
        assert_eq!(shape.kind(), ShapeKind::Rectangle);
        assert_eq!(shape.area(), 24.0);
        assert_eq!(shape.perimeter(), 20.0);
    }

    #[test]
    fn square_keeps_its_own_kind() {
        let shape: Shape = Square::new(5.0).unwrap().into();
        assert_eq!(shape.kind(), ShapeKind::Square);
        assert_eq!(shape.kind().label(), "Square");
    }

    #[test]
    fn describe_uses_two_decimals() {
        let shape: Shape = Circle::new(5.0).unwrap().into();
        assert_eq!(shape.describe(), "Circle - Area: 78.54, Perimeter: 31.42");

        let shape: Shape = RightTriangle::new(3.0, 4.0).unwrap().into();
        assert_eq!(shape.describe(), "Right Triangle - Area: 6.00, Perimeter: 12.00");
    }

    #[test]
    fn measurement_serializes_kind_and_label() {
        let shape: Shape = IsoscelesRightTriangle::new(4.0).unwrap().into();
        let json = serde_json::to_value(shape.measure()).unwrap();

        assert_eq!(json["kind"], "isosceles_right_triangle");
        assert_eq!(json["label"], "Isosceles Right Triangle");
        assert_eq!(json["area"], 8.0);
        assert!((json["perimeter"].as_f64().unwrap() - 13.6569).abs() < 0.01);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let shape: Shape = Circle::new(2.5).unwrap().into();
        let first = shape.measure();
        for _ in 0..3 {
            assert_eq!(shape.measure(), first);
            assert_eq!(shape.area().to_bits(), first.area.to_bits());
            assert_eq!(shape.perimeter().to_bits(), first.perimeter.to_bits());
        }
    }
}
