use std::io;

use crossterm::event::{KeyCode, MouseButton};

/// Something the frame loop can drive: updated and rendered once per frame, fed with input.
///
/// Rendering goes into an in-memory frame that the loop writes out in one go.
pub trait Scene {
    /// Advances the animation by one frame.
    fn update(&mut self);

    /// Draws the scene into `frame`, within `area` (width, height) starting at the top-left corner.
    fn render(&self, frame: &mut Vec<u8>, area: (u16, u16)) -> io::Result<()>;

    /// Mouse press at terminal column `x`, row `y`.
    fn on_click(&mut self, _x: i32, _y: i32, _button: MouseButton) {}

    fn on_key(&mut self, _code: KeyCode) {}

    /// The drawable area changed.
    fn resize(&mut self, _area: (u16, u16)) {}

    /// Text for the status line.
    fn status(&self) -> String;
}
