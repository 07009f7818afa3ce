use crate::maze::Direction;

/// A single maze cell: one flag per wall plus the generation-time visited mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub top_wall: bool,
    pub left_wall: bool,
    pub bottom_wall: bool,
    pub right_wall: bool,
    /// Only meaningful while the generator runs.
    pub visited: bool,
}

impl Cell {
    /// All four walls standing, not yet visited.
    pub const WALLED: Cell = Cell {
        top_wall: true,
        left_wall: true,
        bottom_wall: true,
        right_wall: true,
        visited: false,
    };

    /// Whether the wall on the `direction` side of this cell is present.
    pub fn has_wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.top_wall,
            Direction::Down => self.bottom_wall,
            Direction::Left => self.left_wall,
            Direction::Right => self.right_wall,
        }
    }

    pub(crate) fn set_wall(&mut self, direction: Direction, present: bool) {
        let wall = match direction {
            Direction::Up => &mut self.top_wall,
            Direction::Down => &mut self.bottom_wall,
            Direction::Left => &mut self.left_wall,
            Direction::Right => &mut self.right_wall,
        };
        *wall = present;
    }

    /// Number of walls still standing around this cell.
    pub fn wall_count(&self) -> usize {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.has_wall(direction))
            .count()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::WALLED
    }
}
