//! In-memory drawing surface shared by the texture routines

/// RGB canvas and clipped drawing primitives
pub mod canvas;

pub use canvas::Canvas;
