//! Tests for checkerboard tile parity and rendering

#[cfg(test)]
mod tests {
    use texturegen::io::configuration::{
        CANVAS_SIZE, CHECKER_ALTERNATE_COLOR, CHECKER_BASE_COLOR, CHECKER_TILE_SIZE,
    };
    use texturegen::textures::checkerboard::{render, tile_color};

    // Tests parity rule for every tile on the board
    // Verified by swapping the two colors
    #[test]
    fn test_tile_color_parity() {
        for row in 0..8 {
            for column in 0..8 {
                let expected = if (column + row) % 2 == 1 {
                    CHECKER_ALTERNATE_COLOR
                } else {
                    CHECKER_BASE_COLOR
                };
                assert_eq!(tile_color(column, row), expected);
            }
        }
    }

    // Tests every pixel of every tile matches its tile color
    // Verified by drawing tiles one pixel too wide
    #[test]
    fn test_render_fills_whole_tiles() {
        let canvas = render();
        assert_eq!(canvas.width(), CANVAS_SIZE);
        assert_eq!(canvas.height(), CANVAS_SIZE);

        for y in 0..CANVAS_SIZE {
            for x in 0..CANVAS_SIZE {
                let expected = tile_color(x / CHECKER_TILE_SIZE, y / CHECKER_TILE_SIZE);
                assert_eq!(canvas.pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    // Tests the two reference pixels at the first tile boundary
    // Verified by starting with a gray tile
    #[test]
    fn test_render_reference_pixels() {
        let canvas = render();

        assert_eq!(canvas.pixel(0, 0), Some(CHECKER_BASE_COLOR));
        assert_eq!(canvas.pixel(31, 0), Some(CHECKER_BASE_COLOR));
        assert_eq!(canvas.pixel(32, 0), Some(CHECKER_ALTERNATE_COLOR));
        assert_eq!(canvas.pixel(0, 32), Some(CHECKER_ALTERNATE_COLOR));
        assert_eq!(canvas.pixel(32, 32), Some(CHECKER_BASE_COLOR));
    }
}
