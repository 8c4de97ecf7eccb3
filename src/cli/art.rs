//! Per-kind colors and ASCII figures for the text report

use crossterm::style::Color;

use crate::domain::ShapeKind;

const CIRCLE: &[&str] = &[
    "    ****    ",
    "  **    **  ",
    " *        * ",
    "*          *",
    "*          *",
    " *        * ",
    "  **    **  ",
    "    ****    ",
];

const RECTANGLE: &[&str] = &[
    "+--------+",
    "|        |",
    "|        |",
    "|        |",
    "|        |",
    "|        |",
    "+--------+",
];

const SQUARE: &[&str] = &[
    "+------+",
    "|      |",
    "|      |",
    "|      |",
    "+------+",
];

const RIGHT_TRIANGLE: &[&str] = &[
    "*        ",
    "**       ",
    "* *      ",
    "*  *     ",
    "*****",
];

const ISOSCELES_RIGHT_TRIANGLE: &[&str] = &[
    "*    ",
    "**   ",
    "* *  ",
    "*  * ",
    "*****",
];

/// Figure drawn under the describe line
pub fn figure(kind: ShapeKind) -> &'static [&'static str] {
    match kind {
        ShapeKind::Circle => CIRCLE,
        ShapeKind::Rectangle => RECTANGLE,
        ShapeKind::Square => SQUARE,
        ShapeKind::RightTriangle => RIGHT_TRIANGLE,
        ShapeKind::IsoscelesRightTriangle => ISOSCELES_RIGHT_TRIANGLE,
    }
}

/// Color used for a kind's describe line and figure
pub fn color(kind: ShapeKind) -> Color {
    match kind {
        ShapeKind::Circle => Color::Red,
        ShapeKind::Rectangle | ShapeKind::Square => Color::Blue,
        ShapeKind::RightTriangle | ShapeKind::IsoscelesRightTriangle => Color::Green,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_figure() {
        for kind in ShapeKind::ALL {
            assert!(!figure(kind).is_empty(), "no figure for {:?}", kind);
        }
    }

    #[test]
    fn specialized_kinds_share_family_color() {
        assert_eq!(color(ShapeKind::Square), color(ShapeKind::Rectangle));
        assert_eq!(
            color(ShapeKind::IsoscelesRightTriangle),
            color(ShapeKind::RightTriangle)
        );
        assert_ne!(color(ShapeKind::Circle), color(ShapeKind::Rectangle));
    }
}
