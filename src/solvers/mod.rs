mod bfs;

pub use bfs::{PathResult, find_path, shortest_path};
