use crate::{
    generators::ShuffleSource,
    maze::{Direction, Grid, Point},
};

/// A cell on the carving stack together with the directions it still has to try.
struct Frame {
    cell: Point,
    directions: [Direction; 4],
    next: usize,
}

impl Frame {
    /// Marks `cell` visited and draws a fresh direction order for it.
    fn enter<S: ShuffleSource + ?Sized>(grid: &mut Grid, cell: Point, shuffle: &mut S) -> Self {
        let mut directions = Direction::ALL;
        shuffle.shuffle_directions(&mut directions);
        grid[cell].visited = true;
        Frame {
            cell,
            directions,
            next: 0,
        }
    }
}

/// Carves a perfect maze into a freshly walled grid, starting from the top-left cell.
///
/// Randomized depth-first search: each cell tries its shuffled directions in order,
/// opens the wall to the first unvisited neighbour and continues from there before
/// coming back for the remaining directions. The stack lives on the heap, so the
/// depth is not limited by the call stack.
///
/// Returns the number of passages carved, `rows * cols - 1` for a fresh grid.
pub fn recursive_backtrack<S: ShuffleSource + ?Sized>(grid: &mut Grid, shuffle: &mut S) -> usize {
    let start = Point::new(0, 0);
    let mut carved = 0;
    let mut max_depth = 1;

    let mut stack = vec![Frame::enter(grid, start, shuffle)];

    while let Some(frame) = stack.last_mut() {
        let Some(&direction) = frame.directions.get(frame.next) else {
            // Every direction tried, backtrack
            stack.pop();
            continue;
        };
        frame.next += 1;
        let cell = frame.cell;

        let Some(neighbor) = grid.neighbor(cell, direction) else {
            continue;
        };
        if grid[neighbor].visited {
            continue;
        }

        grid.open_passage(cell, neighbor, direction);
        carved += 1;
        stack.push(Frame::enter(grid, neighbor, shuffle));
        max_depth = max_depth.max(stack.len());
    }

    tracing::debug!(
        "[generator] carved {} passages in a {}x{} grid, max stack depth {}",
        carved,
        grid.rows(),
        grid.cols(),
        max_depth
    );
    carved
}
