use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::{GridError, Result};

/// A cell coordinate in grid space.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// The four orthogonal neighbors in the order +x, +y, -y, -x.
    pub fn neighbors4(self) -> [Point; 4] {
        [
            Point::new(self.x + 1, self.y),
            Point::new(self.x, self.y + 1),
            Point::new(self.x, self.y - 1),
            Point::new(self.x - 1, self.y),
        ]
    }

    /// True if `other` touches this point horizontally, vertically or diagonally.
    pub fn is_adjacent8(self, other: Point) -> bool {
        self != other && (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl Add<Point> for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Point> for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A segment between two cells, both endpoints included.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Line {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// A circle outline around `center`.
///
/// The radius is signed so that malformed input can be represented and
/// rejected with [`GridError::InvalidRadius`] instead of wrapping around.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: i32,
}

impl Circle {
    pub fn new(center: impl Into<Point>, radius: i32) -> Self {
        Circle { center: center.into(), radius }
    }

    pub fn validate(&self) -> Result<()> {
        if self.radius < 0 {
            return Err(GridError::InvalidRadius { radius: self.radius });
        }
        Ok(())
    }
}
