//! Circle stepping
//!
//! Midpoint circle algorithm: only the first octant is computed, the other
//! seven come from sign and swap symmetry.

use std::collections::HashSet;

use crate::{Circle, Point};

/// Offsets `(x, y)` of the first octant, from `(0, radius)` while `x < y`.
///
/// The decision variable starts at `5/4 - radius`. It is kept scaled by 4 so
/// the stepping stays in integer arithmetic without changing any decision.
/// Offsets are `i64`: the scaled variable and the mirrored coordinates of a
/// large radius don't fit in `i32`.
pub(super) fn octant_points(radius: i32) -> Octant {
    let radius = i64::from(radius);
    Octant {
        x: 0,
        y: radius,
        d: 5 - 4 * radius,
        done: radius < 0,
    }
}

pub(super) struct Octant {
    x: i64,
    y: i64,
    d: i64,
    done: bool,
}

impl Iterator for Octant {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = (self.x, self.y);
        if self.y > self.x {
            if self.d < 0 {
                self.d += 4 * (2 * self.x + 3);
            } else {
                self.d += 4 * (2 * (self.x - self.y) + 5);
                self.y -= 1;
            }
            self.x += 1;
        } else {
            self.done = true;
        }
        Some(current)
    }
}

/// The eight symmetric cells of an octant offset around `center`.
pub(super) fn mirror8(center: Point, x: i64, y: i64) -> [(i64, i64); 8] {
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));
    [
        (cx + x, cy + y),
        (cx + x, cy - y),
        (cx - x, cy + y),
        (cx - x, cy - y),
        (cx + y, cy + x),
        (cx + y, cy - x),
        (cx - y, cy - x),
        (cx - y, cy + x),
    ]
}

/// All distinct outline cells of a circle with a unit stroke, in plotting
/// order.
///
/// Negative radii produce no points; use [`Circle::validate`] to reject them.
/// Cells whose coordinates don't fit in `i32` are left out.
pub fn circle_points(circle: Circle) -> Vec<Point> {
    let mut seen = HashSet::new();
    let mut points = Vec::new();
    for (x, y) in octant_points(circle.radius) {
        for (px, py) in mirror8(circle.center, x, y) {
            let (Ok(px), Ok(py)) = (i32::try_from(px), i32::try_from(py)) else {
                continue;
            };
            let pt = Point::new(px, py);
            if seen.insert(pt) {
                points.push(pt);
            }
        }
    }
    points
}
