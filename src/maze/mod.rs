mod cell;
mod grid;
mod point;

pub use cell::Cell;
pub use grid::Grid;
pub use point::{Direction, Point};

use crate::{
    error::MazeError,
    generators::{ShuffleSource, recursive_backtrack, rng},
    input::{LayoutMetrics, map_click},
    solvers::{find_path, shortest_path},
};

/// A generated maze plus the outcome of the last accepted search.
///
/// The grid is carved once at construction and is read-only afterwards. Start, farthest
/// point and path are replaced wholesale by each successful search.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    path: Vec<Point>,
    farthest_point: Option<Point>,
    start_position: Option<Point>,
}

impl Maze {
    /// Creates and carves a `rows` x `cols` maze. `seed` makes the layout reproducible.
    ///
    /// # Errors
    /// [`MazeError::InvalidDimension`] if either dimension is not positive.
    pub fn new(rows: i32, cols: i32, seed: Option<u64>) -> Result<Self, MazeError> {
        Maze::with_shuffle(rows, cols, &mut rng(seed))
    }

    /// Creates and carves a maze using the given direction shuffle.
    ///
    /// # Errors
    /// [`MazeError::InvalidDimension`] if either dimension is not positive.
    pub fn with_shuffle<S: ShuffleSource + ?Sized>(
        rows: i32,
        cols: i32,
        shuffle: &mut S,
    ) -> Result<Self, MazeError> {
        let mut grid = Grid::new(rows, cols)?;
        let passages = recursive_backtrack(&mut grid, shuffle);
        tracing::info!(
            "[maze] generated {}x{} maze with {} passages",
            rows,
            cols,
            passages
        );
        Ok(Maze {
            grid,
            path: Vec::new(),
            farthest_point: None,
            start_position: None,
        })
    }

    /// Read-only view of the cells, for drawing.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Path of the last search, empty until the first one succeeds.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    pub fn farthest_point(&self) -> Option<Point> {
        self.farthest_point
    }

    pub fn start_position(&self) -> Option<Point> {
        self.start_position
    }

    /// Searches from `start` and records the result.
    ///
    /// # Errors
    /// [`MazeError::InvalidStart`] if `start` is not a cell; the previous state is kept.
    pub fn find_path(&mut self, start: Point) -> Result<&[Point], MazeError> {
        let result = find_path(&self.grid, start)?;
        self.start_position = Some(start);
        self.farthest_point = Some(result.farthest_point);
        self.path = result.path;
        Ok(&self.path)
    }

    /// Handles a click from the presentation layer: the clicked cell becomes the new start.
    ///
    /// # Errors
    /// [`MazeError::ClickRejected`] for clicks outside the grid or on a wall. Nothing changes then.
    pub fn on_click(
        &mut self,
        x: i32,
        y: i32,
        metrics: &LayoutMetrics,
    ) -> Result<&[Point], MazeError> {
        let start = map_click(x, y, metrics, &self.grid)?;
        tracing::debug!("[maze] click at ({}, {}) selects start {}", x, y, start);
        self.find_path(start)
    }

    /// Replaces the path with the route from the current start to the clicked cell.
    /// The farthest point is kept.
    ///
    /// # Errors
    /// [`MazeError::NoStartPosition`] before any start was chosen, or
    /// [`MazeError::ClickRejected`] for a rejected click.
    pub fn route_to(
        &mut self,
        x: i32,
        y: i32,
        metrics: &LayoutMetrics,
    ) -> Result<&[Point], MazeError> {
        let start = self.start_position.ok_or(MazeError::NoStartPosition)?;
        let goal = map_click(x, y, metrics, &self.grid)?;
        self.path = shortest_path(&self.grid, start, goal)?;
        tracing::debug!(
            "[maze] route from {} to {} has {} cells",
            start,
            goal,
            self.path.len()
        );
        Ok(&self.path)
    }
}
