//! png2svg CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the directory
//! conversion, and exit with a status reflecting the outcome.
//! For programmatic use, prefer the library API (`png2svg::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error processing directory: {e}");
            ExitCode::FAILURE
        }
    }
}
