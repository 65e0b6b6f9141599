use std::fs;

use anyhow::Result;
use clap::Parser;
use log::debug;

use chess_splitter::cli::{CliArgs, Settings, init_logging};
use chess_splitter::extract::extract_pieces;
use chess_splitter::sheet::load_sheet;

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();
    let settings = Settings::resolve(&cli)?;
    init_logging(settings.verbose);

    let sheet = load_sheet(&settings.sheet)?;

    if !settings.output.output_dir.exists() {
        fs::create_dir_all(&settings.output.output_dir)?;
    }

    let written = extract_pieces(&sheet, &settings.pieces, &settings.output)?;
    debug!("Wrote {} piece images", written.len());

    Ok(())
}
