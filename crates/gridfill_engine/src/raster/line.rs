//! Line stepping
//!
//! Implements Bresenham's line algorithm with one loop for all octants.

use crate::{Line, Point};

/// Generate all cells of a line from `line.start` to `line.end`.
///
/// The first and last entries are the endpoints and consecutive entries are
/// always 8-adjacent. Direction is handled with independent sign multipliers
/// for x and y, so the stepping itself only ever works on the first octant
/// pair (dominant x or dominant y).
pub fn line_points(line: Line) -> Vec<Point> {
    let (x1, y1) = (line.start.x, line.start.y);
    let (x2, y2) = (line.end.x, line.end.y);

    let mult_x: i64 = if x2 < x1 { -1 } else { 1 };
    let mult_y: i64 = if y2 < y1 { -1 } else { 1 };
    // Differences of far apart endpoints don't fit in i32.
    let dx = (i64::from(x2) - i64::from(x1)).abs();
    let dy = (i64::from(y2) - i64::from(y1)).abs();

    let mut points = Vec::with_capacity(dx.max(dy) as usize + 1);
    points.push(line.start);

    if dx >= dy {
        // x is the dominant axis
        let incr_e = 2 * dy;
        let incr_ne = 2 * (dy - dx);
        let mut e = 2 * dy - dx;
        let mut y = y1;
        for step in 1..=dx {
            if e <= 0 {
                e += incr_e;
            } else {
                e += incr_ne;
                y += mult_y as i32;
            }
            points.push(Point::new(step_toward(x1, step, mult_x), y));
        }
    } else {
        // y is the dominant axis
        let incr_e = 2 * dx;
        let incr_ne = 2 * (dx - dy);
        let mut e = 2 * dx - dy;
        let mut x = x1;
        for step in 1..=dy {
            if e <= 0 {
                e += incr_e;
            } else {
                e += incr_ne;
                x += mult_x as i32;
            }
            points.push(Point::new(x, step_toward(y1, step, mult_y)));
        }
    }

    points
}

/// `from + step * sign`, which always lies between the two endpoints.
fn step_toward(from: i32, step: i64, sign: i64) -> i32 {
    (i64::from(from) + step * sign) as i32
}
