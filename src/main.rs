//! This crate contains the source code for the binary of the maze-astar solver.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::process::ExitCode;

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use maze_astar::Cli;

fn main() -> Result<ExitCode> {
    install()?;

    let cli = Cli::parse();
    maze_astar::init_logging(cli.log_level())?;

    if let Err(report) = maze_astar::run(&cli) {
        eprintln!("{}", maze_astar::diagnostic(&report));
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
