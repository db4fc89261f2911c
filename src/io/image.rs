//! Output directory preparation and PNG export

use crate::draw::Canvas;
use crate::io::error::{Result, TextureError, file_system_error};
use image::ImageFormat;
use std::path::Path;

/// Create the output directory and any missing parents
///
/// # Errors
///
/// Returns an error if the directory cannot be created
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| file_system_error(dir, "create directory", e))
}

/// Write a canvas to `output_path` as an RGB PNG, replacing any existing file
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_canvas_as_png(canvas: &Canvas, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_output_dir(parent)?;
        }
    }

    canvas
        .as_image()
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| TextureError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
