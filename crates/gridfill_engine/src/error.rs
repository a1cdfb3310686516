//! Unified error type for gridfill_engine

use thiserror::Error;

/// Precondition failures reported by grid, rasterizer and fill operations.
///
/// Every variant is raised before the grid is touched, so an `Err` never
/// leaves a half drawn primitive or a partial fill behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Invalid grid dimensions {columns}x{rows}: both must be positive")]
    InvalidDimensions { columns: i32, rows: i32 },

    #[error("Cell ({x}, {y}) is outside the grid")]
    OutOfBounds { x: i32, y: i32 },

    #[error("Invalid circle radius {radius}: must not be negative")]
    InvalidRadius { radius: i32 },

    #[error("Fill seed ({x}, {y}) is outside the grid")]
    OutOfBoundsSeed { x: i32, y: i32 },
}

/// Result type alias for gridfill_engine operations
pub type Result<T> = std::result::Result<T, GridError>;
