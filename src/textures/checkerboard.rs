//! Alternating two-color tile grid

use crate::draw::Canvas;
use crate::io::configuration::{
    CANVAS_SIZE, CHECKER_ALTERNATE_COLOR, CHECKER_BASE_COLOR, CHECKER_TILE_SIZE,
};
use image::Rgb;

/// Fill color of the tile at the given tile column and row
pub const fn tile_color(column: u32, row: u32) -> Rgb<u8> {
    if (column + row) % 2 == 1 {
        CHECKER_ALTERNATE_COLOR
    } else {
        CHECKER_BASE_COLOR
    }
}

/// Render the checkerboard texture
pub fn render() -> Canvas {
    let mut canvas = Canvas::new(CANVAS_SIZE, CANVAS_SIZE, CHECKER_BASE_COLOR);
    let mut drawn = 0_u32;

    for y in (0..CANVAS_SIZE).step_by(CHECKER_TILE_SIZE as usize) {
        for x in (0..CANVAS_SIZE).step_by(CHECKER_TILE_SIZE as usize) {
            let color = tile_color(x / CHECKER_TILE_SIZE, y / CHECKER_TILE_SIZE);
            // Base color is already the background
            if color != CHECKER_BASE_COLOR {
                canvas.fill_rect(x, y, CHECKER_TILE_SIZE, CHECKER_TILE_SIZE, color);
                drawn += 1;
            }
        }
    }

    log::debug!("checkerboard: drew {drawn} alternate tiles");
    canvas
}
