use aero_params::cli::{args::Args, commands};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        return ExitCode::SUCCESS;
    }

    match commands::run(args) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Aero Params - Aerodynamic Simulation Parameter Loader");
    println!("=====================================================");
    println!();
    println!("Load aerodynamic simulation parameter sets from a SQLite");
    println!("configuration database and print or validate them.");
    println!();
    println!("USAGE:");
    println!("    aero-params <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    show     Load parameter sets and print their contents");
    println!("    check    Load every parameter table and report per-table status");
    println!("    help     Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Print every parameter set for record 1 (reads AERO_SIM_DATA_DIR):");
    println!("    aero-params show");
    println!();
    println!("    # One table as JSON, with an explicit directory:");
    println!("    aero-params show --table bspline-aero --data-dir /srv/aero --format json");
    println!();
    println!("    # Validate that every table loads:");
    println!("    aero-params check");
    println!();
    println!("For detailed help on any command, use:");
    println!("    aero-params <COMMAND> --help");
}
