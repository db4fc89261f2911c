//! Horizontal wood grain with a sparse speckle overlay

use crate::draw::Canvas;
use crate::io::configuration::{
    CANVAS_SIZE, GRAIN_ACCENT_COLOR, GRAIN_ACCENT_PERIOD, GRAIN_DEFAULT_COLOR, GRAIN_SPACING,
    GRAIN_THICKNESS, SPECKLE_COLOR, SPECKLE_COLUMN_STEP, SPECKLE_OFFSET_PERIOD,
    SPECKLE_ROW_FILTER, SPECKLE_ROW_STEP, WOOD_BASE_COLOR,
};
use image::Rgb;

/// Color of the grain line starting at row `y`
pub const fn grain_color(y: u32) -> Rgb<u8> {
    if y % GRAIN_ACCENT_PERIOD == 0 {
        GRAIN_ACCENT_COLOR
    } else {
        GRAIN_DEFAULT_COLOR
    }
}

/// Start row and color of every grain line
pub fn grain_lines() -> impl Iterator<Item = (u32, Rgb<u8>)> {
    (0..CANVAS_SIZE)
        .step_by(GRAIN_SPACING as usize)
        .map(|y| (y, grain_color(y)))
}

/// Coordinates of every speckle point
pub fn speckles() -> impl Iterator<Item = (u32, u32)> {
    (0..CANVAS_SIZE)
        .step_by(SPECKLE_COLUMN_STEP as usize)
        .flat_map(|column| {
            (0..CANVAS_SIZE)
                .step_by(SPECKLE_ROW_STEP as usize)
                .filter(|row| row % SPECKLE_ROW_FILTER == 0)
                .map(move |row| (column + row % SPECKLE_OFFSET_PERIOD, row))
        })
}

/// Render the wood grain texture
pub fn render() -> Canvas {
    let mut canvas = Canvas::new(CANVAS_SIZE, CANVAS_SIZE, WOOD_BASE_COLOR);

    let mut lines = 0_usize;
    for (y, color) in grain_lines() {
        canvas.draw_hline(y, GRAIN_THICKNESS, color);
        lines += 1;
    }

    let mut points = 0_usize;
    for (x, y) in speckles() {
        canvas.plot(x, y, SPECKLE_COLOR);
        points += 1;
    }

    log::debug!("wood: drew {lines} grain lines and {points} speckles");
    canvas
}
