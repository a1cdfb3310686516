//! Ordered drawing session
//!
//! A scene is a list of primitives followed by a list of fill requests. It is
//! validated as a whole before the grid is touched, then drawn in order.
//! Primitives that are skipped (out of range lines or points) are reported
//! and the session continues with the next one.

use crate::{fill, Circle, FillRequest, FillTrace, Grid, GridError, Line, MarkObserver, Point, Rasterizer, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Primitive {
    Point(Point),
    Line(Line),
    Circle(Circle),
}

impl From<Point> for Primitive {
    fn from(value: Point) -> Self {
        Primitive::Point(value)
    }
}

impl From<Line> for Primitive {
    fn from(value: Line) -> Self {
        Primitive::Line(value)
    }
}

impl From<Circle> for Primitive {
    fn from(value: Circle) -> Self {
        Primitive::Circle(value)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scene {
    pub primitives: Vec<Primitive>,
    pub fills: Vec<FillRequest>,
    pub rasterizer: Rasterizer,
}

/// What happened while running a scene.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SceneReport {
    /// Primitives that were rasterized.
    pub drawn: usize,
    /// Primitives skipped because they were out of range.
    pub skipped: usize,
    /// One trace per fill request, in request order.
    pub traces: Vec<FillTrace>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stroke_width(mut self, width: u32) -> Self {
        self.rasterizer = self.rasterizer.with_stroke_width(width);
        self
    }

    pub fn add(&mut self, primitive: impl Into<Primitive>) -> &mut Self {
        self.primitives.push(primitive.into());
        self
    }

    pub fn add_point(&mut self, x: i32, y: i32) -> &mut Self {
        self.add(Point::new(x, y))
    }

    pub fn add_line(&mut self, line: Line) -> &mut Self {
        self.add(line)
    }

    pub fn add_circle(&mut self, circle: Circle) -> &mut Self {
        self.add(circle)
    }

    pub fn add_fill(&mut self, request: FillRequest) -> &mut Self {
        self.fills.push(request);
        self
    }

    /// Check every precondition that would otherwise fail mid session.
    pub fn validate(&self, grid: &Grid) -> Result<()> {
        for primitive in &self.primitives {
            if let Primitive::Circle(circle) = primitive {
                if let Err(err) = circle.validate() {
                    log::warn!("Circle at {} rejected: {err}", circle.center);
                    return Err(err);
                }
            }
        }
        for request in &self.fills {
            if !grid.contains_point(request.seed) {
                log::warn!("Fill seed {} is outside the grid", request.seed);
                return Err(GridError::OutOfBoundsSeed {
                    x: request.seed.x,
                    y: request.seed.y,
                });
            }
        }
        Ok(())
    }

    /// Validate, then draw all primitives and run all fills in order.
    pub fn run(&self, grid: &mut Grid, observer: &mut dyn MarkObserver) -> Result<SceneReport> {
        self.validate(grid)?;

        let mut report = SceneReport::default();
        for primitive in &self.primitives {
            let outcome = match *primitive {
                Primitive::Point(pos) => self.rasterizer.draw_point(grid, pos, observer)?,
                Primitive::Line(line) => self.rasterizer.draw_line(grid, line, observer)?,
                Primitive::Circle(circle) => self.rasterizer.draw_circle(grid, circle, observer)?,
            };
            if outcome.is_skipped() {
                report.skipped += 1;
            } else {
                report.drawn += 1;
            }
        }

        for request in &self.fills {
            let trace = fill(grid, *request, observer)?;
            log::info!("Fill at {}: {trace}", request.seed);
            report.traces.push(trace);
        }

        if report.skipped > 0 {
            log::warn!("{} of {} primitives skipped", report.skipped, self.primitives.len());
        }
        Ok(report)
    }
}
