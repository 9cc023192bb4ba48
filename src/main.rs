//! CLI entry point for the tile map tool

use clap::Parser;
use tilemap_editor::io::cli::{Cli, MapProcessor};

fn main() -> tilemap_editor::Result<()> {
    let cli = Cli::parse();
    let mut processor = MapProcessor::new(cli);
    processor.process()
}
