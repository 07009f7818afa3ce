mod fps;
mod layout;
mod maze_scene;
mod renderer;
mod scene;
mod sort_scene;

pub use fps::FpsCounter;
pub use maze_scene::MazeScene;
pub use scene::Scene;
pub use sort_scene::{SortKind, SortScene};

use std::{
    io::{Stdout, Write},
    time::Instant,
};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, MouseEventKind},
    queue,
    terminal::{self, ClearType},
};

use crate::{
    config::{Config, SceneKind},
    error::AppError,
};

pub struct App {
    config: Config,
}

impl App {
    /// Rows reserved below the scene for the status line
    const STATUS_ROWS: u16 = 1;

    pub fn new(config: Config) -> Self {
        App { config }
    }

    /// Set a panic hook to restore terminal state on panic
    /// This ensures that the terminal is not left in raw mode or alternate screen on panic
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode, enter alternate screen and capture the mouse
    /// Also sets a panic hook to restore terminal on panic
    pub fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            event::EnableMouseCapture,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Restore terminal to original state
    /// Release the mouse, leave alternate screen and disable raw mode
    pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(
            stdout,
            event::DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        )?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Drawable area of a scene in a terminal of the given size
    fn scene_area((width, height): (u16, u16)) -> (u16, u16) {
        (width, height.saturating_sub(App::STATUS_ROWS))
    }

    fn build_scene(&self, area: (u16, u16)) -> Result<Box<dyn Scene>, AppError> {
        let scene: Box<dyn Scene> = match self.config.scene {
            SceneKind::Maze => Box::new(MazeScene::new(&self.config, area)?),
            SceneKind::BubbleSort => Box::new(SortScene::new(
                SortKind::Bubble,
                self.config.bars,
                self.config.seed,
            )),
            SceneKind::InsertionSort => Box::new(SortScene::new(
                SortKind::Insertion,
                self.config.bars,
                self.config.seed,
            )),
        };
        tracing::info!("[app] started scene: {}", self.config.scene);
        Ok(scene)
    }

    /// Main application loop: input, update and render once per frame until Esc or q
    pub fn run(&self, stdout: &mut Stdout) -> Result<(), AppError> {
        let mut size = terminal::size()?;
        let mut scene = self.build_scene(App::scene_area(size))?;
        let mut fps = FpsCounter::new(Instant::now());
        let frame_duration = self.config.frame_duration();
        let mut frame = Vec::new();

        tracing::info!("[app loop] started, frame budget {:?}", frame_duration);
        'frames: loop {
            let deadline = Instant::now() + frame_duration;

            // Handle every event that arrives before the frame is due
            loop {
                let remaining = deadline.saturating_duration_since(Instant::now());
                if !event::poll(remaining)? {
                    break;
                }
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                        KeyCode::Esc | KeyCode::Char('q') => {
                            tracing::debug!("[app loop] quit key pressed");
                            break 'frames;
                        }
                        code => scene.on_key(code),
                    },
                    Event::Mouse(mouse) => {
                        if let MouseEventKind::Down(button) = mouse.kind {
                            scene.on_click(i32::from(mouse.column), i32::from(mouse.row), button);
                        }
                    }
                    Event::Resize(width, height) => {
                        size = (width, height);
                        scene.resize(App::scene_area(size));
                    }
                    _ => {}
                }
            }

            scene.update();
            fps.tick(Instant::now());

            frame.clear();
            queue!(
                frame,
                terminal::BeginSynchronizedUpdate,
                terminal::Clear(ClearType::All)
            )?;
            scene.render(&mut frame, App::scene_area(size))?;
            renderer::draw_status(
                &mut frame,
                size.0,
                size.1.saturating_sub(1),
                &scene.status(),
                &fps.to_string(),
            )?;
            queue!(frame, terminal::EndSynchronizedUpdate)?;
            stdout.write_all(&frame)?;
            stdout.flush()?;
        }
        tracing::info!("[app loop] exiting");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_area_reserves_status_line() {
        assert_eq!(App::scene_area((80, 24)), (80, 23));
        assert_eq!(App::scene_area((80, 0)), (80, 0));
    }

    #[test]
    fn test_build_scene_per_kind() {
        for scene in [SceneKind::Maze, SceneKind::BubbleSort, SceneKind::InsertionSort] {
            let app = App::new(Config {
                scene,
                seed: Some(1),
                ..Config::default()
            });
            let built = app.build_scene((80, 23)).unwrap();
            assert!(!built.status().is_empty());
        }
    }

    #[test]
    fn test_build_scene_rejects_bad_maze() {
        let app = App::new(Config {
            rows: 0,
            ..Config::default()
        });
        assert!(matches!(app.build_scene((80, 23)), Err(AppError::Maze(_))));
    }
}
