//! The three fixed texture patterns

/// Running-bond brick wall
pub mod brick;
/// Two-color tile grid
pub mod checkerboard;
/// Wood grain stripes with speckles
pub mod wood;

use crate::draw::Canvas;
use crate::io::configuration::OUTPUT_EXTENSION;
use std::fmt;

/// One of the generated textures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Texture {
    /// White and light gray tiles
    Checkerboard,
    /// Brick courses over mortar
    Brick,
    /// Wood grain lines
    Wood,
}

impl Texture {
    /// All textures in generation order
    pub const ALL: [Self; 3] = [Self::Checkerboard, Self::Brick, Self::Wood];

    /// Stable name, also the output file stem
    pub const fn name(self) -> &'static str {
        match self {
            Self::Checkerboard => "checkerboard",
            Self::Brick => "brick",
            Self::Wood => "wood",
        }
    }

    /// Output file name including extension
    pub fn file_name(self) -> String {
        format!("{}.{OUTPUT_EXTENSION}", self.name())
    }

    /// Draw the texture into a fresh canvas
    pub fn render(self) -> Canvas {
        match self {
            Self::Checkerboard => checkerboard::render(),
            Self::Brick => brick::render(),
            Self::Wood => wood::render(),
        }
    }
}

impl fmt::Display for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
