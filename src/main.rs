//! CLI entry point for the texture generator

use clap::Parser;
use simple_logger::SimpleLogger;
use texturegen::io::cli::{Cli, TextureGenerator};

fn main() -> texturegen::Result<()> {
    let cli = Cli::parse();
    SimpleLogger::new().with_level(cli.log_level()).init()?;

    let generator = TextureGenerator::new(cli);
    generator.process()?;
    Ok(())
}
