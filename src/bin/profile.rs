use std::time::{Duration, Instant};

use algoviz::{
    config::MAX_DIMENSION,
    error::MazeError,
    maze::{Maze, Point},
};
use clap::Parser;

/// Times maze generation and farthest-point search on large mazes.
#[derive(Debug, Parser)]
#[command(about)]
struct ProfileArgs {
    /// Side length of the profiled mazes
    #[arg(
        default_value_t = 255,
        value_parser = clap::value_parser!(i32).range(1..=MAX_DIMENSION)
    )]
    size: i32,

    /// Number of mazes to generate and search
    #[arg(default_value_t = 1)]
    iterations: u64,
}

fn main() -> Result<(), MazeError> {
    tracing_subscriber::fmt().init();
    let ProfileArgs { size, iterations } = ProfileArgs::parse();

    let mut generate_total = Duration::ZERO;
    let mut search_total = Duration::ZERO;
    for iteration in 0..iterations {
        let started = Instant::now();
        let mut maze = Maze::new(size, size, Some(iteration))?;
        let generated = Instant::now();
        let path_len = maze.find_path(Point::new(0, 0))?.len();
        let searched = Instant::now();

        generate_total += generated - started;
        search_total += searched - generated;
        tracing::info!(
            "[profile] iteration {}: {}x{} generated in {:?}, farthest {:?} reached in {} cells after {:?}",
            iteration,
            size,
            size,
            generated - started,
            maze.farthest_point(),
            path_len,
            searched - generated
        );
    }

    if iterations > 0 {
        let runs = u32::try_from(iterations).unwrap_or(u32::MAX);
        tracing::info!(
            "[profile] average over {} runs: generation {:?}, search {:?}",
            iterations,
            generate_total / runs,
            search_total / runs
        );
    }
    Ok(())
}
