//! Runtime settings from the command line and the environment.

use std::{fmt, time::Duration};

use clap::{Parser, ValueEnum, builder::RangedU64ValueParser};

/// Environment variable holding the log level (trace, debug, info, warn, error).
pub const LOG_ENV_VAR: &str = "ALGOVIZ_LOG";

/// Largest accepted maze side; bigger grids cannot be drawn in any terminal.
pub const MAX_DIMENSION: i64 = 1000;
/// Largest accepted number of sort bars.
pub const MAX_BARS: u64 = 1000;

const DEFAULT_ROWS: i32 = 7;
const DEFAULT_COLS: i32 = 12;
const DEFAULT_BARS: usize = 40;
const DEFAULT_FPS: u32 = 30;

/// Which animation to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    Maze,
    #[value(name = "bubble")]
    BubbleSort,
    #[value(name = "insertion")]
    InsertionSort,
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneKind::Maze => write!(f, "Maze generation and farthest-point search"),
            SceneKind::BubbleSort => write!(f, "Bubble sort"),
            SceneKind::InsertionSort => write!(f, "Insertion sort"),
        }
    }
}

/// Maze generation, farthest-point search and sorting animations for the terminal.
///
/// Logs go to algoviz.log; set ALGOVIZ_LOG to trace, debug, info, warn or error.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(version, about)]
pub struct Config {
    /// Animation to show
    #[arg(long, value_enum, ignore_case = true, default_value_t = SceneKind::Maze)]
    pub scene: SceneKind,

    /// Maze rows
    #[arg(
        long,
        default_value_t = DEFAULT_ROWS,
        value_parser = clap::value_parser!(i32).range(1..=MAX_DIMENSION)
    )]
    pub rows: i32,

    /// Maze columns
    #[arg(
        long,
        default_value_t = DEFAULT_COLS,
        value_parser = clap::value_parser!(i32).range(1..=MAX_DIMENSION)
    )]
    pub cols: i32,

    /// Seed for maze layout and sort input. Random when not given.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of bars in the sort scenes
    #[arg(
        long,
        default_value_t = DEFAULT_BARS,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_BARS)
    )]
    pub bars: usize,

    /// Target frames per second
    #[arg(
        long,
        default_value_t = DEFAULT_FPS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub fps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scene: SceneKind::Maze,
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: None,
            bars: DEFAULT_BARS,
            fps: DEFAULT_FPS,
        }
    }
}

impl Config {
    /// Time budget of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    /// Log level from [`LOG_ENV_VAR`], `INFO` when unset or unparsable.
    pub fn log_level() -> tracing::Level {
        std::env::var(LOG_ENV_VAR)
            .ok()
            .and_then(|level| level.parse().ok())
            .unwrap_or(tracing::Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, error::ErrorKind};

    fn parse(args: &str) -> Result<Config, clap::Error> {
        Config::try_parse_from(std::iter::once("algoviz").chain(args.split_whitespace()))
    }

    fn error_kind(args: &str) -> ErrorKind {
        match parse(args) {
            Ok(config) => panic!("'{args}' parsed as {config:?}"),
            Err(e) => e.kind(),
        }
    }

    #[test]
    fn test_command_is_well_formed() {
        Config::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.frame_duration(), Duration::from_secs(1) / 30);
    }

    #[test]
    fn test_all_flags() {
        let config =
            parse("--scene insertion --rows 20 --cols 60 --seed 7 --bars 15 --fps 60").unwrap();
        assert_eq!(
            config,
            Config {
                scene: SceneKind::InsertionSort,
                rows: 20,
                cols: 60,
                seed: Some(7),
                bars: 15,
                fps: 60,
            }
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(error_kind("--speed 3"), ErrorKind::UnknownArgument);
        assert_eq!(error_kind("--rows"), ErrorKind::InvalidValue);
        assert_eq!(error_kind("--cols many"), ErrorKind::ValueValidation);
        assert_eq!(error_kind("--fps 0"), ErrorKind::ValueValidation);
        assert_eq!(error_kind("--scene tetris"), ErrorKind::InvalidValue);
        assert_eq!(error_kind("--help"), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_dimensions_are_capped() {
        assert_eq!(parse("--rows 1000 --cols 1000").unwrap().cols, 1000);
        assert_eq!(error_kind("--cols 2000000000"), ErrorKind::ValueValidation);
        assert_eq!(error_kind("--rows 1001"), ErrorKind::ValueValidation);
        assert_eq!(error_kind("--rows 0"), ErrorKind::ValueValidation);
        assert_eq!(error_kind("--bars 1001"), ErrorKind::ValueValidation);
        assert_eq!(parse("--bars 0").unwrap().bars, 0);
    }

    #[test]
    fn test_scene_names_are_case_insensitive() {
        assert_eq!(parse("--scene Bubble").unwrap().scene, SceneKind::BubbleSort);
        assert_eq!(parse("--scene MAZE").unwrap().scene, SceneKind::Maze);
    }
}
