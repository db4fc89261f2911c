//! Running-bond brick wall over a mortar background
//!
//! Courses advance by brick height plus mortar. Odd courses are shifted right
//! by half a brick, and each course keeps placing bricks until one full brick
//! past the right edge so the partial bricks at both sides are covered.

use crate::draw::Canvas;
use crate::io::configuration::{
    BRICK_EVEN_COLOR, BRICK_HEIGHT, BRICK_ODD_COLOR, BRICK_WIDTH, CANVAS_SIZE, MORTAR_COLOR,
    MORTAR_WIDTH,
};
use image::Rgb;

/// Top-left corner and fill of one brick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickPlacement {
    /// Course index, counted from the top
    pub course: u32,
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
    /// Fill color
    pub color: Rgb<u8>,
}

/// Horizontal start of the first brick in a course
pub const fn course_offset(course: u32) -> u32 {
    if course % 2 == 1 { BRICK_WIDTH / 2 } else { 0 }
}

/// Brick color of a course
pub const fn course_color(course: u32) -> Rgb<u8> {
    if course % 2 == 0 {
        BRICK_EVEN_COLOR
    } else {
        BRICK_ODD_COLOR
    }
}

/// Every brick drawn by [`render`], in drawing order
pub fn layout() -> Vec<BrickPlacement> {
    let mut placements = Vec::new();
    let mut y = 0;
    let mut course = 0;

    while y < CANVAS_SIZE {
        let color = course_color(course);
        let mut x = course_offset(course);

        while x < CANVAS_SIZE + BRICK_WIDTH {
            placements.push(BrickPlacement {
                course,
                x,
                y,
                color,
            });
            x += BRICK_WIDTH + MORTAR_WIDTH;
        }

        y += BRICK_HEIGHT + MORTAR_WIDTH;
        course += 1;
    }

    placements
}

/// Render the brick texture
pub fn render() -> Canvas {
    let mut canvas = Canvas::new(CANVAS_SIZE, CANVAS_SIZE, MORTAR_COLOR);
    let placements = layout();

    for brick in &placements {
        canvas.fill_rect(brick.x, brick.y, BRICK_WIDTH, BRICK_HEIGHT, brick.color);
    }

    log::debug!("brick: drew {} bricks", placements.len());
    canvas
}
