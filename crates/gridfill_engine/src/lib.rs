//! Dot grid rasterization and flood fill
//!
//! Lines and circles are stepped onto a fixed size boolean [`Grid`], then
//! regions bounded by the drawn marks are filled with one of four
//! strategies. Renderers follow along through [`MarkObserver`].
//!
//! ```
//! use gridfill_engine::{fill, raster::draw_line, FillRequest, FillStrategy, Grid, Line, NoopObserver};
//!
//! let mut grid = Grid::new(30, 30)?;
//! for (a, b) in [((5, 5), (25, 5)), ((25, 5), (25, 25)), ((25, 25), (5, 25)), ((5, 25), (5, 5))] {
//!     draw_line(&mut grid, Line::new(a, b), &mut NoopObserver)?;
//! }
//! let trace = fill(&mut grid, FillRequest::new((15, 15), FillStrategy::ScanlineSpan), &mut NoopObserver)?;
//! assert_eq!(trace.marked, 19 * 19);
//! # Ok::<(), gridfill_engine::GridError>(())
//! ```

mod error;
pub use error::*;

mod position;
pub use position::{Circle, Line, Point};

mod grid;
pub use grid::Grid;

mod observer;
pub use observer::{MarkObserver, MarkRecorder, MarkSource, NoopObserver};

pub mod raster;
pub use raster::{circle_points, line_points, DrawOutcome, Rasterizer};

mod fill;
pub use fill::{fill, FillRequest, FillStrategy, FillTrace};

mod scene;
pub use scene::{Primitive, Scene, SceneReport};
