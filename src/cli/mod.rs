//! Command Line Interface (CLI) layer for png2svg.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for a directory run: logging
//! setup, console progress and the summary line.
//!
//! If you are embedding png2svg into another application, prefer the
//! library API (`png2svg::api`) over the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
