//! Procedural generator for three fixed textures: checkerboard, brick and wood grain
//!
//! Each texture is drawn into its own 256×256 RGB canvas from compile-time
//! constants and written to disk as a PNG. Output is a pure function of those
//! constants, so repeated runs produce identical files.

#![forbid(unsafe_code)]

/// In-memory RGB canvas and drawing primitives
pub mod draw;
/// Input/output operations, configuration and error handling
pub mod io;
/// Texture pattern routines
pub mod textures;

pub use io::error::{Result, TextureError};
pub use textures::Texture;
