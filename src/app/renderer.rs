use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

/// Converts a layout coordinate to a terminal coordinate. Negative values clamp to 0.
pub fn screen_coord<T: TryInto<u16>>(value: T) -> u16 {
    value.try_into().unwrap_or(0)
}

/// Bottom line: scene message on the left, frame rate on the right.
/// The message is truncated so both fit into `width` columns.
pub fn draw_status<W: Write>(
    out: &mut W,
    width: u16,
    row: u16,
    message: &str,
    fps: &str,
) -> io::Result<()> {
    let width = usize::from(width);
    let fps_width = fps.width();
    // Keep one column between message and frame rate
    let room = width.saturating_sub(fps_width + 1);
    let (message, message_width) = message.unicode_truncate(room);
    let padding = width.saturating_sub(message_width + fps_width);

    queue!(
        out,
        cursor::MoveTo(0, row),
        terminal::Clear(ClearType::CurrentLine),
        style::PrintStyledContent(message.with(Color::Cyan)),
        style::Print(" ".repeat(padding)),
    )?;
    if fps_width < width {
        queue!(
            out,
            style::PrintStyledContent(fps.with(Color::Yellow).attribute(Attribute::Bold))
        )?;
    }
    Ok(())
}

/// Shown instead of a scene that does not fit into the terminal.
pub fn draw_too_small<W: Write>(
    out: &mut W,
    needed: (i32, i32),
    area: (u16, u16),
) -> io::Result<()> {
    let msg = format!(
        "Terminal area is too small ({}x{}) for this maze, it needs at least {}x{}. Please resize the terminal.",
        area.0, area.1, needed.0, needed.1
    );
    let (msg, _) = msg.unicode_truncate(usize::from(area.0));
    queue!(
        out,
        cursor::MoveTo(0, 0),
        style::PrintStyledContent(msg.with(Color::Yellow).attribute(Attribute::Bold)),
    )?;
    Ok(())
}
