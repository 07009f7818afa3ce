use std::{collections::HashMap, io};

use crossterm::{
    cursor,
    event::{KeyCode, MouseButton},
    queue,
    style::{self, Color, StyledContent, Stylize},
};

use crate::{
    app::{
        layout,
        renderer::{self, screen_coord},
        scene::Scene,
    },
    config::Config,
    error::MazeError,
    input::LayoutMetrics,
    maze::{Maze, Point},
};

const HELP: &str = "Left click: pick start  Right click: route to cell  r: new maze  q/Esc: quit";

/// Path cells revealed per frame after a search.
const REVEAL_PER_FRAME: usize = 1;

/// Interactive maze: click a cell to search from it, watch the path to the farthest cell grow.
pub struct MazeScene {
    maze: Maze,
    rows: i32,
    cols: i32,
    seed: Option<u64>,
    /// Number of regenerations so far, mixed into a fixed seed
    generation: u64,
    /// `None` while the terminal is too small for the maze
    layout: Option<LayoutMetrics>,
    /// Position of every path cell along the path
    path_index: HashMap<Point, usize>,
    revealed: usize,
    message: String,
}

impl MazeScene {
    pub fn new(config: &Config, area: (u16, u16)) -> Result<Self, MazeError> {
        let maze = Maze::new(config.rows, config.cols, config.seed)?;
        Ok(MazeScene {
            maze,
            rows: config.rows,
            cols: config.cols,
            seed: config.seed,
            generation: 0,
            layout: layout::fit(config.rows, config.cols, area.0, area.1),
            path_index: HashMap::new(),
            revealed: 0,
            message: HELP.to_string(),
        })
    }

    fn regenerate(&mut self) {
        self.generation += 1;
        let seed = self.seed.map(|seed| seed.wrapping_add(self.generation));
        match Maze::new(self.rows, self.cols, seed) {
            Ok(maze) => {
                self.maze = maze;
                self.path_changed();
                self.message = HELP.to_string();
            }
            Err(e) => {
                tracing::error!("[maze scene] failed to regenerate maze: {}", e);
                self.message = e.to_string();
            }
        }
    }

    /// Restarts the reveal animation for a new path.
    fn path_changed(&mut self) {
        self.path_index = self
            .maze
            .path()
            .iter()
            .enumerate()
            .map(|(i, &point)| (point, i))
            .collect();
        self.revealed = 0;
    }

    fn describe_path(&self, label: &str) -> String {
        let path = self.maze.path();
        match (path.first(), path.last()) {
            (Some(first), Some(last)) => {
                format!("{} {} -> {}: {} cells", label, first, last, path.len())
            }
            _ => "No route between these cells".to_string(),
        }
    }

    fn fill_color(&self, point: Point) -> Option<Color> {
        if self.maze.start_position() == Some(point) {
            Some(Color::Green)
        } else if self.maze.farthest_point() == Some(point) {
            Some(Color::Red)
        } else {
            match self.path_index.get(&point) {
                Some(&i) if i < self.revealed => Some(Color::Yellow),
                _ => None,
            }
        }
    }

    fn marker(&self, point: Point) -> Option<StyledContent<&'static str>> {
        if self.maze.start_position() == Some(point) {
            Some("S".with(Color::Black).on(Color::Green))
        } else if self.maze.farthest_point() == Some(point) {
            Some("F".with(Color::White).on(Color::Red))
        } else {
            None
        }
    }
}

impl Scene for MazeScene {
    fn update(&mut self) {
        let len = self.maze.path().len();
        if self.revealed < len {
            self.revealed = (self.revealed + REVEAL_PER_FRAME).min(len);
        }
    }

    fn render(&self, frame: &mut Vec<u8>, area: (u16, u16)) -> io::Result<()> {
        let Some(metrics) = self.layout else {
            return renderer::draw_too_small(frame, layout::min_area(self.rows, self.cols), area);
        };
        let grid = self.maze.grid();
        for point in grid.points() {
            let cell = &grid[point];
            let (x, y) = metrics.cell_origin(point);
            let fill = self.fill_color(point);
            for local_y in 0..metrics.cell_height {
                queue!(frame, cursor::MoveTo(screen_coord(x), screen_coord(y + local_y)))?;
                for local_x in 0..metrics.cell_width {
                    // Same test as click mapping, so drawn walls are exactly the rejected areas
                    let glyph = if metrics.hits_wall(cell, local_x, local_y) {
                        "█".with(Color::DarkGrey)
                    } else {
                        match fill {
                            Some(color) => " ".on(color),
                            None => " ".stylize(),
                        }
                    };
                    queue!(frame, style::PrintStyledContent(glyph))?;
                }
            }
            if let Some(marker) = self.marker(point) {
                let (cx, cy) = metrics.cell_center(point);
                queue!(
                    frame,
                    cursor::MoveTo(screen_coord(cx), screen_coord(cy)),
                    style::PrintStyledContent(marker)
                )?;
            }
        }
        Ok(())
    }

    fn on_click(&mut self, x: i32, y: i32, button: MouseButton) {
        let Some(metrics) = self.layout else {
            return;
        };
        let (result, label) = match button {
            MouseButton::Left => (self.maze.on_click(x, y, &metrics).map(<[Point]>::len), "Farthest"),
            MouseButton::Right => (self.maze.route_to(x, y, &metrics).map(<[Point]>::len), "Route"),
            MouseButton::Middle => return,
        };
        match result {
            Ok(len) => {
                tracing::debug!("[maze scene] {:?} click produced a path of {} cells", button, len);
                self.path_changed();
                self.message = self.describe_path(label);
            }
            Err(e) => {
                tracing::debug!("[maze scene] click at ({}, {}) rejected: {}", x, y, e);
                self.message = e.to_string();
            }
        }
    }

    fn on_key(&mut self, code: KeyCode) {
        if let KeyCode::Char('r') = code {
            self.regenerate();
        }
    }

    fn resize(&mut self, area: (u16, u16)) {
        self.layout = layout::fit(self.rows, self.cols, area.0, area.1);
        if self.layout.is_none() {
            tracing::debug!("[maze scene] area {}x{} too small", area.0, area.1);
        }
    }

    fn status(&self) -> String {
        self.message.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene(seed: u64) -> MazeScene {
        let config = Config {
            rows: 3,
            cols: 3,
            seed: Some(seed),
            ..Config::default()
        };
        MazeScene::new(&config, (80, 23)).unwrap()
    }

    fn center(scene: &MazeScene, point: Point) -> (i32, i32) {
        scene.layout.unwrap().cell_center(point)
    }

    #[test]
    fn test_left_click_starts_search() {
        let mut scene = scene(5);
        let (x, y) = center(&scene, Point::new(0, 0));
        scene.on_click(x, y, MouseButton::Left);

        assert_eq!(scene.maze.start_position(), Some(Point::new(0, 0)));
        assert!(scene.status().starts_with("Farthest (0, 0) -> "));
        assert_eq!(scene.path_index.len(), scene.maze.path().len());

        // The path is revealed one cell per frame
        assert_eq!(scene.revealed, 0);
        scene.update();
        assert_eq!(scene.revealed, 1);
        for _ in 0..20 {
            scene.update();
        }
        assert_eq!(scene.revealed, scene.maze.path().len());
    }

    #[test]
    fn test_rejected_click_shows_reason() {
        let mut scene = scene(5);
        scene.on_click(0, 0, MouseButton::Left);
        assert_eq!(scene.status(), "click is outside the maze");
        assert_eq!(scene.maze.start_position(), None);

        let (x, y) = center(&scene, Point::new(1, 1));
        scene.on_click(x, y, MouseButton::Right);
        assert_eq!(scene.status(), "no start position has been chosen yet");
    }

    #[test]
    fn test_route_after_start() {
        let mut scene = scene(9);
        let (x, y) = center(&scene, Point::new(2, 2));
        scene.on_click(x, y, MouseButton::Left);
        let (x, y) = center(&scene, Point::new(0, 0));
        scene.on_click(x, y, MouseButton::Right);

        let path = scene.maze.path();
        assert_eq!(path.first(), Some(&Point::new(2, 2)));
        assert_eq!(path.last(), Some(&Point::new(0, 0)));
        assert!(scene.status().starts_with("Route (2, 2) -> (0, 0)"));
    }

    #[test]
    fn test_regenerate_clears_search() {
        let mut scene = scene(5);
        let (x, y) = center(&scene, Point::new(0, 0));
        scene.on_click(x, y, MouseButton::Left);
        scene.on_key(KeyCode::Char('r'));

        assert_eq!(scene.generation, 1);
        assert!(scene.maze.path().is_empty());
        assert!(scene.path_index.is_empty());
        assert_eq!(scene.status(), HELP);
    }

    #[test]
    fn test_render_marks_start() {
        let mut scene = scene(5);
        let (x, y) = center(&scene, Point::new(1, 1));
        scene.on_click(x, y, MouseButton::Left);
        let mut frame = Vec::new();
        scene.render(&mut frame, (80, 23)).unwrap();
        let text = String::from_utf8_lossy(&frame);
        assert!(text.contains('S'));
        assert!(text.contains('█'));
    }

    #[test]
    fn test_too_small_area() {
        let mut scene = scene(5);
        scene.resize((10, 5));
        assert!(scene.layout.is_none());

        // Clicks are ignored without a layout
        scene.on_click(3, 3, MouseButton::Left);
        assert_eq!(scene.status(), HELP);

        let mut frame = Vec::new();
        scene.render(&mut frame, (10, 5)).unwrap();
        assert!(String::from_utf8_lossy(&frame).contains("Terminal"));
    }
}
