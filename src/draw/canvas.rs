//! RGB pixel canvas with clipped drawing primitives

use image::{Rgb, RgbImage};

/// Fixed-size RGB pixel grid owned by a single texture routine
///
/// Every drawing primitive clips against the canvas bounds, so callers may
/// over-draw past the edges without special-casing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: RgbImage,
}

impl Canvas {
    /// Create a canvas with every pixel set to `background`
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            pixels: RgbImage::from_pixel(width, height, background),
        }
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Fill the half-open rectangle `[x, x + width) × [y, y + height)`
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgb<u8>) {
        let x_end = x.saturating_add(width).min(self.width());
        let y_end = y.saturating_add(height).min(self.height());

        for py in y..y_end {
            for px in x..x_end {
                self.pixels.put_pixel(px, py, color);
            }
        }
    }

    /// Draw a full-width horizontal band covering rows `y..y + thickness`
    pub fn draw_hline(&mut self, y: u32, thickness: u32, color: Rgb<u8>) {
        let width = self.width();
        self.fill_rect(0, y, width, thickness, color);
    }

    /// Set a single pixel, ignoring coordinates outside the canvas
    pub fn plot(&mut self, x: u32, y: u32, color: Rgb<u8>) {
        if let Some(pixel) = self.pixels.get_pixel_mut_checked(x, y) {
            *pixel = color;
        }
    }

    /// Read a pixel, `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        self.pixels.get_pixel_checked(x, y).copied()
    }

    /// Borrow the underlying image buffer
    pub const fn as_image(&self) -> &RgbImage {
        &self.pixels
    }

    /// Consume the canvas, returning the underlying image buffer
    pub fn into_image(self) -> RgbImage {
        self.pixels
    }
}
