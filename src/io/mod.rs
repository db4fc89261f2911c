//! Command-line handling, configuration and file output

/// Argument parsing and the generation driver
pub mod cli;
/// Texture constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// Output directory preparation and PNG export
pub mod image;
/// Status lines and progress display
pub mod progress;
