//! Screen coordinates to maze cells.

use crate::{
    error::ClickRejected,
    maze::{Cell, Direction, Grid, Point},
};

/// Where the presentation layer put the grid on screen, in screen units.
///
/// Cell (row, col) covers `cell_width` x `cell_height` units starting at
/// `(origin_x + col * cell_width, origin_y + row * cell_height)`. Walls are drawn
/// inside that rectangle, `wall_thickness` units deep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    pub origin_x: i32,
    pub origin_y: i32,
    pub cell_width: i32,
    pub cell_height: i32,
    pub wall_thickness: i32,
}

impl LayoutMetrics {
    /// Top-left screen coordinate of a cell.
    /// Saturates at the `i32` range for layouts that do not fit on any screen.
    pub fn cell_origin(&self, point: Point) -> (i32, i32) {
        (
            self.origin_x
                .saturating_add(point.col.saturating_mul(self.cell_width)),
            self.origin_y
                .saturating_add(point.row.saturating_mul(self.cell_height)),
        )
    }

    /// Screen coordinate of the middle of a cell.
    pub fn cell_center(&self, point: Point) -> (i32, i32) {
        let (x, y) = self.cell_origin(point);
        (
            x.saturating_add(self.cell_width / 2),
            y.saturating_add(self.cell_height / 2),
        )
    }

    /// Whether the offset `(local_x, local_y)` inside a cell falls on one of its standing walls.
    pub fn hits_wall(&self, cell: &Cell, local_x: i32, local_y: i32) -> bool {
        let thickness = self.wall_thickness;
        [
            (Direction::Up, local_y < thickness),
            (Direction::Down, local_y >= self.cell_height.saturating_sub(thickness)),
            (Direction::Left, local_x < thickness),
            (Direction::Right, local_x >= self.cell_width.saturating_sub(thickness)),
        ]
        .into_iter()
        .any(|(direction, within)| within && cell.has_wall(direction))
    }

    /// Width and height of the whole grid on screen. Wider than `i32` so huge cells cannot overflow.
    pub fn grid_extent(&self, grid: &Grid) -> (i64, i64) {
        (
            i64::from(grid.cols()) * i64::from(self.cell_width),
            i64::from(grid.rows()) * i64::from(self.cell_height),
        )
    }
}

/// Maps a click to the cell under it.
///
/// # Errors
/// * [`ClickRejected::OutsideGrid`] if the click is outside the grid's bounding box.
/// * [`ClickRejected::OnWall`] if it lands within `wall_thickness` of a wall present on that cell.
pub fn map_click(
    x: i32,
    y: i32,
    metrics: &LayoutMetrics,
    grid: &Grid,
) -> Result<Point, ClickRejected> {
    if metrics.cell_width <= 0 || metrics.cell_height <= 0 {
        return Err(ClickRejected::OutsideGrid);
    }

    // Offsets are taken in i64: any i32 click minus any i32 origin fits
    let dx = i64::from(x) - i64::from(metrics.origin_x);
    let dy = i64::from(y) - i64::from(metrics.origin_y);
    let (width, height) = metrics.grid_extent(grid);
    if !(0..width).contains(&dx) || !(0..height).contains(&dy) {
        return Err(ClickRejected::OutsideGrid);
    }

    let (cell_width, cell_height) = (i64::from(metrics.cell_width), i64::from(metrics.cell_height));
    // Inside the extent, quotients are below rows/cols and remainders below the cell size
    let narrow = |v: i64| i32::try_from(v).map_err(|_| ClickRejected::OutsideGrid);
    let point = Point::new(narrow(dy / cell_height)?, narrow(dx / cell_width)?);
    let cell = grid.get(point).map_err(|_| ClickRejected::OutsideGrid)?;

    // Offset inside the clicked cell
    let local_x = narrow(dx % cell_width)?;
    let local_y = narrow(dy % cell_height)?;
    if metrics.hits_wall(cell, local_x, local_y) {
        return Err(ClickRejected::OnWall(point));
    }

    Ok(point)
}
