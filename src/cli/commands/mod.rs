//! Command implementations for the parameter loader CLI
//!
//! This module contains the command execution logic and error handling for
//! the CLI interface. Each command is implemented in its own module:
//! - `show`: load parameter sets and print them (human or JSON)
//! - `check`: load every table and report per-table status

pub mod check;
pub mod shared;
pub mod show;

use crate::cli::args::{Args, Commands};
use std::process::ExitCode;

/// Main command runner for the parameter loader
///
/// Dispatches to the appropriate subcommand handler based on CLI args and
/// returns the process exit code.
pub fn run(args: Args) -> anyhow::Result<ExitCode> {
    match args.get_command() {
        Commands::Show(show_args) => show::run_show(show_args),
        Commands::Check(check_args) => check::run_check(check_args),
    }
}
