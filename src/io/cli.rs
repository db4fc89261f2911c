//! Command-line interface and the generation driver

use crate::io::configuration::DEFAULT_OUTPUT_DIR;
use crate::io::error::Result;
use crate::io::image::{ensure_output_dir, export_canvas_as_png};
use crate::io::progress::ProgressReporter;
use crate::textures::Texture;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "texturegen")]
#[command(
    author,
    version,
    about = "Generate checkerboard, brick and wood grain PNG textures"
)]
/// Command-line arguments for the texture generator
pub struct Cli {
    /// Directory the textures are written to
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Suppress status output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Log level selected by the verbosity flag
    pub const fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }

    /// Check if status lines should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Renders every texture and writes it to the output directory
pub struct TextureGenerator {
    cli: Cli,
    reporter: ProgressReporter,
}

impl TextureGenerator {
    /// Create a generator for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let reporter = ProgressReporter::new(Texture::ALL.len(), !cli.should_show_progress());
        Self { cli, reporter }
    }

    /// Generate all textures in order, returning the written paths
    ///
    /// Stops at the first failure; textures written before it stay on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory cannot be created or a
    /// texture cannot be saved
    pub fn process(&self) -> Result<Vec<PathBuf>> {
        ensure_output_dir(&self.cli.output_dir)?;

        let mut written = Vec::with_capacity(Texture::ALL.len());
        for texture in Texture::ALL {
            written.push(self.process_texture(texture)?);
        }

        self.reporter.finish();
        Ok(written)
    }

    fn process_texture(&self, texture: Texture) -> Result<PathBuf> {
        self.reporter.start_texture(texture);

        let output_path = self.output_path(texture);
        let canvas = texture.render();
        export_canvas_as_png(&canvas, &output_path)?;

        self.reporter.texture_written(texture, &output_path);
        Ok(output_path)
    }

    /// Path a texture is written to
    pub fn output_path(&self, texture: Texture) -> PathBuf {
        self.cli.output_dir.join(texture.file_name())
    }
}
