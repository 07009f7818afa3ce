//! Error types.

use thiserror::Error;

use crate::maze::Point;

/// Why a click could not be turned into a start cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClickRejected {
    /// The click landed outside the grid's bounding box.
    #[error("click is outside the maze")]
    OutsideGrid,

    /// The click landed on a wall of the given cell.
    #[error("click landed on a wall of cell {0}")]
    OnWall(Point),
}

/// Errors from the grid model, generator and path finder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// Rows or columns not positive.
    #[error("invalid maze dimensions {rows}x{cols}: rows and cols must be positive")]
    InvalidDimension { rows: i32, cols: i32 },

    /// Cell lookup outside the grid.
    #[error("cell {point} is outside the {rows}x{cols} grid")]
    OutOfRange { point: Point, rows: i32, cols: i32 },

    /// Path finding requested from a cell that is not part of the maze.
    #[error("cannot start a path at {0}: not a cell of the maze")]
    InvalidStart(Point),

    /// A route was requested before any start cell was chosen.
    #[error("no start position has been chosen yet")]
    NoStartPosition,

    /// Input mapping failure.
    #[error(transparent)]
    ClickRejected(#[from] ClickRejected),
}

/// Errors surfaced by the binaries.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Maze(#[from] MazeError),
}
