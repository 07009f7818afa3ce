use crate::input::LayoutMetrics;

/// Walls are one terminal character deep.
pub const WALL_THICKNESS: i32 = 1;
/// Room for a top wall, one interior row and a bottom wall.
pub const MIN_CELL_HEIGHT: i32 = 3;
/// Terminal characters are about twice as tall as they are wide.
pub const CELL_ASPECT: i32 = 2;

/// Largest square-looking cells that fit `rows` x `cols` into the area, centered.
/// Returns `None` if the area is too small for even the minimum cell size.
pub fn fit(rows: i32, cols: i32, area_width: u16, area_height: u16) -> Option<LayoutMetrics> {
    if rows <= 0 || cols <= 0 {
        return None;
    }
    let (width, height) = (i32::from(area_width), i32::from(area_height));
    let cell_height = (height / rows).min(width / cols.saturating_mul(CELL_ASPECT));
    if cell_height < MIN_CELL_HEIGHT {
        return None;
    }
    let cell_width = cell_height * CELL_ASPECT;
    Some(LayoutMetrics {
        origin_x: (width - cell_width * cols) / 2,
        origin_y: (height - cell_height * rows) / 2,
        cell_width,
        cell_height,
        wall_thickness: WALL_THICKNESS,
    })
}

/// Smallest area `fit` accepts for the given maze, as (width, height).
pub fn min_area(rows: i32, cols: i32) -> (i32, i32) {
    (
        cols.saturating_mul(MIN_CELL_HEIGHT * CELL_ASPECT),
        rows.saturating_mul(MIN_CELL_HEIGHT),
    )
}
