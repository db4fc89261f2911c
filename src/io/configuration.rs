//! Texture constants and runtime configuration defaults

use image::Rgb;

// Shared canvas and output settings
/// Width and height of every generated texture
pub const CANVAS_SIZE: u32 = 256;
/// Directory the textures are written to when no override is given
pub const DEFAULT_OUTPUT_DIR: &str = "assets/textures";
/// File extension of every generated texture
pub const OUTPUT_EXTENSION: &str = "png";

// Checkerboard
/// Edge length of a single checkerboard tile
pub const CHECKER_TILE_SIZE: u32 = 32;
/// Background color, used for tiles with even index sum
pub const CHECKER_BASE_COLOR: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);
/// Color of tiles with odd index sum
pub const CHECKER_ALTERNATE_COLOR: Rgb<u8> = Rgb([0xcc, 0xcc, 0xcc]);

// Brick
/// Nominal width of a brick
pub const BRICK_WIDTH: u32 = 30;
/// Nominal height of a brick
pub const BRICK_HEIGHT: u32 = 14;
/// Width of the mortar joint between bricks and courses
pub const MORTAR_WIDTH: u32 = 2;
/// Background color visible between bricks
pub const MORTAR_COLOR: Rgb<u8> = Rgb([0x65, 0x43, 0x21]);
/// Brick color of even courses
pub const BRICK_EVEN_COLOR: Rgb<u8> = Rgb([0x8b, 0x45, 0x13]);
/// Brick color of odd courses
pub const BRICK_ODD_COLOR: Rgb<u8> = Rgb([0xa0, 0x52, 0x2d]);

// Wood grain
/// Vertical distance between grain lines
pub const GRAIN_SPACING: u32 = 8;
/// Lines at multiples of this period use the accent color
pub const GRAIN_ACCENT_PERIOD: u32 = 16;
/// Thickness of every grain line
pub const GRAIN_THICKNESS: u32 = 2;
/// Base fill of the wood texture
pub const WOOD_BASE_COLOR: Rgb<u8> = Rgb([0x8b, 0x45, 0x13]);
/// Color of accented grain lines
pub const GRAIN_ACCENT_COLOR: Rgb<u8> = Rgb([0xa0, 0x52, 0x2d]);
/// Color of regular grain lines
pub const GRAIN_DEFAULT_COLOR: Rgb<u8> = Rgb([0x65, 0x43, 0x21]);
/// Horizontal step between speckle columns
pub const SPECKLE_COLUMN_STEP: u32 = 32;
/// Vertical step of the speckle scan
pub const SPECKLE_ROW_STEP: u32 = 4;
/// Only scan rows divisible by this value receive a speckle
pub const SPECKLE_ROW_FILTER: u32 = 8;
/// Period of the horizontal speckle offset
pub const SPECKLE_OFFSET_PERIOD: u32 = 16;
/// Color of speckle points
pub const SPECKLE_COLOR: Rgb<u8> = Rgb([0xd2, 0x69, 0x1e]);

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
