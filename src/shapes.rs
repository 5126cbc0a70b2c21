// Shapes + points for the demonstration set
//
// Shape is a closed enum, so describe() is an exhaustive match: there is no
// null and no unknown variant to branch on.

use serde::{Deserialize, Serialize};

// ============================================================================
// POINT
// ============================================================================

/// 2D point with integer coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }

    /// Both coordinates at once
    pub fn coordinates(&self) -> (i64, i64) {
        (self.x, self.y)
    }
}

// ============================================================================
// SHAPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle { radius: f64 },
    Rectangle { length: f64, height: f64 },
}

impl Shape {
    /// Human-readable description; a rectangle with equal sides reads as a
    /// square
    pub fn describe(&self) -> String {
        match self {
            Shape::Circle { radius } => format!("circle with radius {}", radius),
            Shape::Rectangle { length, height } if length == height => {
                format!("{} x {} square", length, height)
            }
            Shape::Rectangle { length, height } => {
                format!("{} x {} rectangle", length, height)
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_coordinates() {
        let (x, y) = Point::new(3, -4).coordinates();

        assert_eq!(x, 3);
        assert_eq!(y, -4);
    }

    #[test]
    fn test_default_point_is_origin() {
        assert_eq!(Point::default().coordinates(), (0, 0));
    }

    #[test]
    fn test_circle_description() {
        let shape = Shape::Circle { radius: 2.5 };
        assert_eq!(shape.describe(), "circle with radius 2.5");
    }

    #[test]
    fn test_equal_sides_read_as_square() {
        let shape = Shape::Rectangle {
            length: 4.0,
            height: 4.0,
        };
        assert_eq!(shape.describe(), "4 x 4 square");
    }

    #[test]
    fn test_rectangle_description() {
        let shape = Shape::Rectangle {
            length: 4.0,
            height: 3.0,
        };
        assert_eq!(shape.describe(), "4 x 3 rectangle");
    }
}
