use std::fmt;

use super::{Cell, Direction, Point};
use crate::error::MazeError;

/// Fixed-size, row-major array of maze cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Cell]>,
    rows: i32,
    cols: i32,
}

impl Grid {
    /// Creates a `rows` x `cols` grid with every wall standing and no cell visited.
    ///
    /// # Errors
    /// [`MazeError::InvalidDimension`] if either dimension is not positive.
    pub fn new(rows: i32, cols: i32) -> Result<Self, MazeError> {
        if rows <= 0 || cols <= 0 {
            return Err(MazeError::InvalidDimension { rows, cols });
        }
        let data = vec![Cell::WALLED; rows as usize * cols as usize].into_boxed_slice();
        Ok(Grid { data, rows, cols })
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Never true: a grid always holds at least one cell.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_in_bounds(&self, point: Point) -> bool {
        (0..self.rows).contains(&point.row) && (0..self.cols).contains(&point.col)
    }

    /// Row-major index of an in-bounds point.
    pub(crate) fn ravel_index(&self, point: Point) -> usize {
        point.row as usize * self.cols as usize + point.col as usize
    }

    /// Looks up a cell.
    ///
    /// # Errors
    /// [`MazeError::OutOfRange`] if `point` lies outside the grid.
    pub fn get(&self, point: Point) -> Result<&Cell, MazeError> {
        if !self.is_in_bounds(point) {
            return Err(self.out_of_range(point));
        }
        Ok(&self.data[self.ravel_index(point)])
    }

    fn out_of_range(&self, point: Point) -> MazeError {
        MazeError::OutOfRange {
            point,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// The in-bounds cell one step from `point`, if any.
    pub fn neighbor(&self, point: Point, direction: Direction) -> Option<Point> {
        let next = point + direction;
        self.is_in_bounds(next).then_some(next)
    }

    /// Whether a wall keeps `point` from moving in `direction`.
    /// Points outside the grid are always blocked.
    pub fn is_blocked(&self, point: Point, direction: Direction) -> bool {
        self.get(point)
            .map_or(true, |cell| cell.has_wall(direction))
    }

    /// Removes the wall pair between `point` and its neighbour in `direction`.
    /// Returns the neighbour.
    pub(crate) fn remove_wall_between(
        &mut self,
        point: Point,
        direction: Direction,
    ) -> Result<Point, MazeError> {
        if !self.is_in_bounds(point) {
            return Err(self.out_of_range(point));
        }
        let next = point + direction;
        if !self.is_in_bounds(next) {
            return Err(self.out_of_range(next));
        }
        self.open_passage(point, next, direction);
        Ok(next)
    }

    /// Opens the wall pair between `point` and `neighbor`, its in-bounds neighbour in `direction`.
    pub(crate) fn open_passage(&mut self, point: Point, neighbor: Point, direction: Direction) {
        debug_assert_eq!(point + direction, neighbor);
        self[point].set_wall(direction, false);
        self[neighbor].set_wall(direction.opposite(), false);
    }

    /// Number of open wall pairs. Each shared edge is counted once.
    pub fn passages(&self) -> usize {
        self.points()
            .map(|p| {
                let cell = &self[p];
                let right = p.col + 1 < self.cols && !cell.right_wall;
                let down = p.row + 1 < self.rows && !cell.bottom_wall;
                usize::from(right) + usize::from(down)
            })
            .sum()
    }

    /// All points of the grid in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let (rows, cols) = (self.rows, self.cols);
        (0..rows).flat_map(move |row| (0..cols).map(move |col| Point::new(row, col)))
    }
}

impl std::ops::Index<Point> for Grid {
    type Output = Cell;

    fn index(&self, point: Point) -> &Self::Output {
        assert!(
            self.is_in_bounds(point),
            "point {point} is outside the {}x{} grid",
            self.rows,
            self.cols
        );
        &self.data[self.ravel_index(point)]
    }
}

impl std::ops::IndexMut<Point> for Grid {
    fn index_mut(&mut self, point: Point) -> &mut Self::Output {
        assert!(
            self.is_in_bounds(point),
            "point {point} is outside the {}x{} grid",
            self.rows,
            self.cols
        );
        let idx = self.ravel_index(point);
        &mut self.data[idx]
    }
}

/// ASCII drawing: `+--+` for horizontal walls and `|` for vertical ones.
/// The top border comes from row 0's top walls; every other line from bottom/right walls.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+")?;
        for col in 0..self.cols {
            let top = self[Point::new(0, col)].top_wall;
            write!(f, "{}+", if top { "--" } else { "  " })?;
        }
        writeln!(f)?;

        for row in 0..self.rows {
            let left = self[Point::new(row, 0)].left_wall;
            write!(f, "{}", if left { '|' } else { ' ' })?;
            for col in 0..self.cols {
                let right = self[Point::new(row, col)].right_wall;
                write!(f, "  {}", if right { '|' } else { ' ' })?;
            }
            writeln!(f)?;

            write!(f, "+")?;
            for col in 0..self.cols {
                let bottom = self[Point::new(row, col)].bottom_wall;
                write!(f, "{}+", if bottom { "--" } else { "  " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_fully_walled() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.len(), 12);
        assert!(grid.points().all(|p| grid[p] == Cell::WALLED));
        assert_eq!(grid.passages(), 0);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Grid::new(0, 5),
            Err(MazeError::InvalidDimension { rows: 0, cols: 5 })
        );
        assert_eq!(
            Grid::new(5, -1),
            Err(MazeError::InvalidDimension { rows: 5, cols: -1 })
        );
    }

    #[test]
    fn test_get_out_of_range() {
        let grid = Grid::new(2, 3).unwrap();
        assert!(grid.get(Point::new(1, 2)).is_ok());
        for p in [
            Point::new(2, 0),
            Point::new(0, 3),
            Point::new(-1, 0),
            Point::new(0, -1),
        ] {
            assert_eq!(
                grid.get(p),
                Err(MazeError::OutOfRange {
                    point: p,
                    rows: 2,
                    cols: 3
                })
            );
        }
    }

    #[test]
    fn test_remove_wall_is_symmetric() {
        let mut grid = Grid::new(3, 3).unwrap();
        let next = grid
            .remove_wall_between(Point::new(1, 1), Direction::Up)
            .unwrap();
        assert_eq!(next, Point::new(0, 1));
        assert!(!grid[Point::new(1, 1)].top_wall);
        assert!(!grid[Point::new(0, 1)].bottom_wall);
        assert!(!grid.is_blocked(Point::new(1, 1), Direction::Up));
        assert!(!grid.is_blocked(Point::new(0, 1), Direction::Down));
        assert_eq!(grid.passages(), 1);

        // The border has no neighbour to open into
        assert!(
            grid.remove_wall_between(Point::new(0, 0), Direction::Left)
                .is_err()
        );
        assert!(grid[Point::new(0, 0)].left_wall);
    }

    #[test]
    fn test_open_passage() {
        let mut grid = Grid::new(2, 3).unwrap();
        let (p, n) = (Point::new(1, 1), Point::new(1, 2));
        grid.open_passage(p, n, Direction::Right);
        assert!(!grid[p].right_wall);
        assert!(!grid[n].left_wall);
        assert_eq!(grid[p].wall_count(), 3);
        assert_eq!(grid.passages(), 1);
    }

    #[test]
    fn test_neighbor_respects_bounds() {
        let grid = Grid::new(2, 2).unwrap();
        assert_eq!(grid.neighbor(Point::new(0, 0), Direction::Up), None);
        assert_eq!(grid.neighbor(Point::new(0, 0), Direction::Left), None);
        assert_eq!(
            grid.neighbor(Point::new(0, 0), Direction::Right),
            Some(Point::new(0, 1))
        );
        assert_eq!(grid.neighbor(Point::new(1, 1), Direction::Down), None);
        assert!(grid.is_blocked(Point::new(7, 7), Direction::Down));
    }

    #[test]
    fn test_display_walled_grid() {
        let grid = Grid::new(1, 2).unwrap();
        assert_eq!(grid.to_string(), "+--+--+\n|  |  |\n+--+--+\n");
    }

    #[test]
    #[should_panic(expected = "outside the 2x2 grid")]
    fn test_index_out_of_bounds_panics() {
        let grid = Grid::new(2, 2).unwrap();
        let _ = grid[Point::new(2, 0)];
    }
}
