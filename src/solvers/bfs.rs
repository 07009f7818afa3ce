use std::collections::{HashMap, VecDeque};

use crate::{
    error::MazeError,
    maze::{Direction, Grid, Point},
};

/// Outcome of a farthest-point search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    /// Dequeued cell with the largest Manhattan distance from the start.
    pub farthest_point: Point,
    /// Cells from the start to `farthest_point`, both included.
    pub path: Vec<Point>,
    /// Number of cells the search dequeued.
    pub explored: usize,
}

/// State left behind by one breadth-first sweep.
struct Sweep {
    predecessors: HashMap<Point, Point>,
    farthest_point: Point,
    explored: usize,
    goal_reached: bool,
}

/// Breadth-first search from `start` through open walls, stopping early once `goal` is dequeued.
fn sweep(grid: &Grid, start: Point, goal: Option<Point>) -> Sweep {
    // Separate from the generation-time visited flags, which stay untouched
    let mut visited = vec![false; grid.len()];
    visited[grid.ravel_index(start)] = true;

    let mut predecessors = HashMap::new();
    let mut queue = VecDeque::from([start]);
    let mut farthest_point = start;
    let mut max_distance = 0;
    let mut explored = 0;

    while let Some(current) = queue.pop_front() {
        explored += 1;

        // Strictly greater: the first cell to reach a new maximum keeps it
        let distance = current.manhattan_distance(start);
        if distance > max_distance {
            max_distance = distance;
            farthest_point = current;
        }

        if Some(current) == goal {
            return Sweep {
                predecessors,
                farthest_point,
                explored,
                goal_reached: true,
            };
        }

        for direction in Direction::ALL {
            if grid.is_blocked(current, direction) {
                continue;
            }
            let Some(next) = grid.neighbor(current, direction) else {
                continue;
            };
            let idx = grid.ravel_index(next);
            if visited[idx] {
                continue;
            }
            visited[idx] = true;
            predecessors.insert(next, current);
            queue.push_back(next);
        }
    }

    Sweep {
        predecessors,
        farthest_point,
        explored,
        goal_reached: false,
    }
}

/// Walks the predecessor map back from `end` to `start` and returns the path in start-to-end order.
fn trace_back(predecessors: &HashMap<Point, Point>, start: Point, end: Point) -> Vec<Point> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        match predecessors.get(&current) {
            Some(&previous) => {
                path.push(previous);
                current = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// Finds the cell farthest (by Manhattan distance) from `start` and the maze path leading to it.
///
/// Ties go to the cell the search reaches first. On a single-cell maze the result is
/// `start` with the path `[start]`.
///
/// # Errors
/// [`MazeError::InvalidStart`] if `start` is not a cell of `grid`.
pub fn find_path(grid: &Grid, start: Point) -> Result<PathResult, MazeError> {
    if !grid.is_in_bounds(start) {
        return Err(MazeError::InvalidStart(start));
    }

    let sweep = sweep(grid, start, None);
    let path = trace_back(&sweep.predecessors, start, sweep.farthest_point);

    tracing::debug!(
        "[bfs] from {} explored {} cells, farthest {} at path length {}",
        start,
        sweep.explored,
        sweep.farthest_point,
        path.len()
    );

    Ok(PathResult {
        farthest_point: sweep.farthest_point,
        path,
        explored: sweep.explored,
    })
}

/// Shortest maze path from `start` to `goal`, both included.
/// Returns an empty path if the goal cannot be reached.
///
/// # Errors
/// [`MazeError::InvalidStart`] for a bad start, [`MazeError::OutOfRange`] for a bad goal.
pub fn shortest_path(grid: &Grid, start: Point, goal: Point) -> Result<Vec<Point>, MazeError> {
    if !grid.is_in_bounds(start) {
        return Err(MazeError::InvalidStart(start));
    }
    grid.get(goal)?;

    let sweep = sweep(grid, start, Some(goal));
    if !sweep.goal_reached {
        tracing::debug!("[bfs] {} is unreachable from {}", goal, start);
        return Ok(Vec::new());
    }
    Ok(trace_back(&sweep.predecessors, start, goal))
}
