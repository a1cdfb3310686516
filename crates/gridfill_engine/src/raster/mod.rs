//! Rasterization of points, lines and circles onto a [`Grid`]
//!
//! The stepping algorithms are pure and exposed as point generators
//! ([`line_points`], [`circle_points`]); [`Rasterizer`] writes their output
//! into a grid with a configurable stroke width and reports newly marked
//! cells to a [`MarkObserver`].
//!
//! # Example
//! ```
//! use gridfill_engine::{Grid, Line, NoopObserver, raster::draw_line};
//!
//! let mut grid = Grid::new(10, 10)?;
//! draw_line(&mut grid, Line::new((0, 0), (9, 4)), &mut NoopObserver)?;
//! assert!(grid.is_marked(9, 4)?);
//! # Ok::<(), gridfill_engine::GridError>(())
//! ```

mod circle;
mod line;

pub use circle::circle_points;
pub use line::line_points;

use crate::{Circle, Grid, Line, MarkObserver, MarkSource, Point, Result};

/// Result of a successful draw call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// The primitive was rasterized; `marked` counts cells that were not
    /// marked before.
    Drawn { marked: usize },
    /// An endpoint was outside the grid, nothing was drawn.
    SkippedOutOfRange,
}

impl DrawOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, DrawOutcome::SkippedOutOfRange)
    }
}

/// Writes primitives into a grid with one stroke width shared by every
/// primitive kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rasterizer {
    stroke_width: u32,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self { stroke_width: 1 }
    }
}

impl Rasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stroke width in cells, 0 is treated as 1.
    pub fn with_stroke_width(mut self, width: u32) -> Self {
        self.stroke_width = width.max(1);
        self
    }

    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    /// Cells added next to each computed cell.
    fn extra_cells(&self) -> i64 {
        i64::from(self.stroke_width) - 1
    }

    /// Mark a single dot; out of range dots are skipped like lines.
    pub fn draw_point(&self, grid: &mut Grid, pos: Point, observer: &mut dyn MarkObserver) -> Result<DrawOutcome> {
        if !grid.contains_point(pos) {
            log::warn!("Point {pos} could not be drawn (out of range)");
            return Ok(DrawOutcome::SkippedOutOfRange);
        }
        // Cells past the right edge are clipped anyway.
        let extra = self.extra_cells().min(i64::from(grid.columns()));
        let mut pen = Pen::new(grid, observer);
        for k in 0..=extra {
            pen.plot_clipped(i64::from(pos.x) + k, i64::from(pos.y))?;
        }
        Ok(DrawOutcome::Drawn { marked: pen.marked })
    }

    /// Draw a line with Bresenham stepping.
    ///
    /// If either endpoint is outside the grid the whole line is skipped,
    /// it is never clipped.
    pub fn draw_line(&self, grid: &mut Grid, line: Line, observer: &mut dyn MarkObserver) -> Result<DrawOutcome> {
        if !grid.contains_point(line.start) || !grid.contains_point(line.end) {
            log::warn!("Line {} -> {} could not be drawn (out of range)", line.start, line.end);
            return Ok(DrawOutcome::SkippedOutOfRange);
        }

        let delta = line.end - line.start;
        // Widen across the dominant axis.
        let widen = if delta.x.abs() >= delta.y.abs() { Point::new(0, 1) } else { Point::new(1, 0) };

        let extra = self.extra_cells().min(i64::from(grid.columns().max(grid.rows())));

        let mut pen = Pen::new(grid, observer);
        for pt in line_points(line) {
            pen.plot(pt)?;
            for k in 1..=extra {
                pen.plot_clipped(i64::from(pt.x) + i64::from(widen.x) * k, i64::from(pt.y) + i64::from(widen.y) * k)?;
            }
        }
        Ok(DrawOutcome::Drawn { marked: pen.marked })
    }

    /// Draw a circle outline with midpoint stepping.
    ///
    /// Cells falling outside the grid are clipped one by one, the center may
    /// lie anywhere. A circle whose outline can't reach the grid, because it
    /// lies beside it or encloses it, marks nothing.
    pub fn draw_circle(&self, grid: &mut Grid, circle: Circle, observer: &mut dyn MarkObserver) -> Result<DrawOutcome> {
        circle.validate()?;

        let extra = self.extra_cells();
        let reach = circle_reach(grid, circle.center);
        if reach.nearest > i64::from(circle.radius) + extra || encloses_grid(grid, circle) {
            log::debug!(
                "Circle at {} with radius {} does not touch the grid",
                circle.center,
                circle.radius
            );
            return Ok(DrawOutcome::Drawn { marked: 0 });
        }

        let mut pen = Pen::new(grid, observer);
        for (x, y) in circle::octant_points(circle.radius) {
            // Mirrored cells are `y + k` away from the center on one axis.
            let widen = extra.min(reach.farthest - y);
            for k in 0..=widen {
                for (px, py) in circle::mirror8(circle.center, x, y + k) {
                    pen.plot_clipped(px, py)?;
                }
            }
        }
        if pen.clipped > 0 {
            log::debug!(
                "Circle at {} with radius {}: {} cells clipped at the grid edge",
                circle.center,
                circle.radius,
                pen.clipped
            );
        }
        Ok(DrawOutcome::Drawn { marked: pen.marked })
    }
}

/// Marks cells and forwards the new ones to the observer.
struct Pen<'a> {
    grid: &'a mut Grid,
    observer: &'a mut dyn MarkObserver,
    marked: usize,
    clipped: usize,
}

impl<'a> Pen<'a> {
    fn new(grid: &'a mut Grid, observer: &'a mut dyn MarkObserver) -> Self {
        Self {
            grid,
            observer,
            marked: 0,
            clipped: 0,
        }
    }

    fn plot(&mut self, pos: Point) -> Result<()> {
        if self.grid.mark(pos.x, pos.y)? {
            self.marked += 1;
            self.observer.on_mark(pos, MarkSource::Stroke);
        }
        Ok(())
    }

    fn plot_clipped(&mut self, x: i64, y: i64) -> Result<()> {
        match (i32::try_from(x), i32::try_from(y)) {
            (Ok(x), Ok(y)) if self.grid.contains(x, y) => self.plot(Point::new(x, y)),
            _ => {
                self.clipped += 1;
                Ok(())
            }
        }
    }
}

/// Chebyshev distances from a center to the grid.
struct Reach {
    /// To the closest grid cell, 0 if the center is on the grid.
    nearest: i64,
    /// To the farthest grid cell.
    farthest: i64,
}

fn circle_reach(grid: &Grid, center: Point) -> Reach {
    let axis = |c: i32, len: i32| {
        let (c, last) = (i64::from(c), i64::from(len) - 1);
        let nearest = if c < 0 {
            -c
        } else if c > last {
            c - last
        } else {
            0
        };
        (nearest, c.abs().max((last - c).abs()))
    };
    let (near_x, far_x) = axis(center.x, grid.columns());
    let (near_y, far_y) = axis(center.y, grid.rows());
    Reach {
        nearest: near_x.max(near_y),
        farthest: far_x.max(far_y),
    }
}

/// Check if every grid cell lies well inside the circle.
///
/// Outline cells are never closer than `radius - 1` to the center and
/// widening only moves them outwards, so nothing can be marked then.
fn encloses_grid(grid: &Grid, circle: Circle) -> bool {
    let inner = i128::from(circle.radius) - 2;
    if inner <= 0 {
        return false;
    }
    let (cx, cy) = (i128::from(circle.center.x), i128::from(circle.center.y));
    let (last_x, last_y) = (i128::from(grid.columns()) - 1, i128::from(grid.rows()) - 1);
    [(0, 0), (last_x, 0), (0, last_y), (last_x, last_y)].iter().all(|&(x, y)| {
        let (dx, dy) = (x - cx, y - cy);
        dx * dx + dy * dy < inner * inner
    })
}

/// Draw a single point with a unit stroke.
pub fn draw_point(grid: &mut Grid, pos: Point, observer: &mut dyn MarkObserver) -> Result<DrawOutcome> {
    Rasterizer::default().draw_point(grid, pos, observer)
}

/// Draw a line with a unit stroke.
pub fn draw_line(grid: &mut Grid, line: Line, observer: &mut dyn MarkObserver) -> Result<DrawOutcome> {
    Rasterizer::default().draw_line(grid, line, observer)
}

/// Draw a circle with a unit stroke.
pub fn draw_circle(grid: &mut Grid, circle: Circle, observer: &mut dyn MarkObserver) -> Result<DrawOutcome> {
    Rasterizer::default().draw_circle(grid, circle, observer)
}
