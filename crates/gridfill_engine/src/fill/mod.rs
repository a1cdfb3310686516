//! Flood fill strategies
//!
//! All strategies mark the region of unmarked cells that is 4-connected to
//! the seed. Marked cells are impermeable, every cell of the region is marked
//! exactly once and the seed is always the first cell marked. The strategies
//! only differ in visit order and in how their frontier grows:
//!
//! - [`FillStrategy::Recursive`] - one native call per probed cell. Stack
//!   bound: large open regions can overflow the thread's call stack. Kept as
//!   a baseline; use one of the others when the region size is unknown.
//! - [`FillStrategy::DepthFirstStack`] - explicit LIFO of pending cells.
//! - [`FillStrategy::BreadthFirstQueue`] - explicit FIFO of pending cells.
//! - [`FillStrategy::ScanlineSpan`] - explicit LIFO of horizontal spans.

mod breadth_first;
mod depth_first;
mod recursive;
mod scanline;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Grid, GridError, MarkObserver, MarkSource, Point, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillStrategy {
    Recursive,
    DepthFirstStack,
    BreadthFirstQueue,
    ScanlineSpan,
}

impl FillStrategy {
    pub const ALL: [FillStrategy; 4] = [
        FillStrategy::Recursive,
        FillStrategy::DepthFirstStack,
        FillStrategy::BreadthFirstQueue,
        FillStrategy::ScanlineSpan,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FillStrategy::Recursive => "recursive",
            FillStrategy::DepthFirstStack => "depth_first_stack",
            FillStrategy::BreadthFirstQueue => "breadth_first_queue",
            FillStrategy::ScanlineSpan => "scanline_span",
        }
    }

    /// What the frontier of this strategy consists of.
    pub fn frontier_name(&self) -> &'static str {
        match self {
            FillStrategy::Recursive => "recursion depth",
            FillStrategy::DepthFirstStack => "stack size",
            FillStrategy::BreadthFirstQueue => "queue size",
            FillStrategy::ScanlineSpan => "pending spans",
        }
    }
}

impl std::fmt::Display for FillStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FillStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "recursive" => Ok(FillStrategy::Recursive),
            "depth_first_stack" | "depth_first" | "dfs" => Ok(FillStrategy::DepthFirstStack),
            "breadth_first_queue" | "breadth_first" | "bfs" => Ok(FillStrategy::BreadthFirstQueue),
            "scanline_span" | "scanline" | "span" => Ok(FillStrategy::ScanlineSpan),
            _ => Err(format!(
                "unknown fill strategy '{s}' (expected recursive, depth_first_stack, breadth_first_queue or scanline_span)"
            )),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillRequest {
    pub seed: Point,
    pub strategy: FillStrategy,
}

impl FillRequest {
    pub fn new(seed: impl Into<Point>, strategy: FillStrategy) -> Self {
        Self { seed: seed.into(), strategy }
    }
}

/// Diagnostics of a single fill run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FillTrace {
    pub strategy: FillStrategy,
    /// Cells marked by this run.
    pub marked: usize,
    /// Largest frontier observed: recursion depth, stack size, queue size or
    /// pending span count depending on the strategy.
    pub max_frontier_size: usize,
}

impl std::fmt::Display for FillTrace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} cells marked, max {} {}",
            self.strategy,
            self.marked,
            self.strategy.frontier_name(),
            self.max_frontier_size
        )
    }
}

/// Fill the region around `request.seed`.
///
/// Fails with [`GridError::OutOfBoundsSeed`] before touching the grid if the
/// seed is outside it. A seed that is already marked is a no-op.
pub fn fill(grid: &mut Grid, request: FillRequest, observer: &mut dyn MarkObserver) -> Result<FillTrace> {
    let seed = request.seed;
    if !grid.contains_point(seed) {
        return Err(GridError::OutOfBoundsSeed { x: seed.x, y: seed.y });
    }

    let mut run = FillRun::new(grid, observer, request.strategy);
    if run.grid.is_free(seed.x, seed.y) {
        match request.strategy {
            FillStrategy::Recursive => recursive::fill(&mut run, seed),
            FillStrategy::DepthFirstStack => depth_first::fill(&mut run, seed),
            FillStrategy::BreadthFirstQueue => breadth_first::fill(&mut run, seed),
            FillStrategy::ScanlineSpan => scanline::fill(&mut run, seed),
        }
    }

    let trace = run.trace();
    log::debug!("Fill from {seed}: {trace}");
    Ok(trace)
}

/// Per invocation state shared by the strategies.
pub(crate) struct FillRun<'a> {
    grid: &'a mut Grid,
    observer: &'a mut dyn MarkObserver,
    strategy: FillStrategy,
    marked: usize,
    max_frontier_size: usize,
}

impl<'a> FillRun<'a> {
    fn new(grid: &'a mut Grid, observer: &'a mut dyn MarkObserver, strategy: FillStrategy) -> Self {
        Self {
            grid,
            observer,
            strategy,
            marked: 0,
            max_frontier_size: 0,
        }
    }

    pub(crate) fn is_free(&self, pos: Point) -> bool {
        self.grid.is_free(pos.x, pos.y)
    }

    pub(crate) fn columns(&self) -> i32 {
        self.grid.columns()
    }

    pub(crate) fn rows(&self) -> i32 {
        self.grid.rows()
    }

    /// Mark `pos` if it is free and notify the observer.
    pub(crate) fn mark(&mut self, pos: Point) -> bool {
        if !matches!(self.grid.mark(pos.x, pos.y), Ok(true)) {
            return false;
        }
        self.marked += 1;
        self.observer.on_mark(pos, MarkSource::Fill(self.strategy));
        true
    }

    pub(crate) fn observe_frontier(&mut self, size: usize) {
        self.max_frontier_size = self.max_frontier_size.max(size);
    }

    fn trace(&self) -> FillTrace {
        FillTrace {
            strategy: self.strategy,
            marked: self.marked,
            max_frontier_size: self.max_frontier_size,
        }
    }
}
