//! Check command implementation for the parameter loader CLI
//!
//! Attempts to load every parameter table for a record key and prints a
//! per-table pass/fail report. The process exits non-zero when any table
//! fails to load, so the command doubles as a deployment smoke test for a
//! parameter database.

use super::shared::setup_logging;
use crate::app::models::{BsplineAeroParams, LiftDragParams, PhiParams};
use crate::cli::args::CheckArgs;
use crate::config::Config;
use crate::{ParamTable, RecordReader, Result};
use colored::Colorize;
use std::process::ExitCode;
use tracing::info;

/// Check command runner
pub fn run_check(args: CheckArgs) -> anyhow::Result<ExitCode> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    let config = args.resolve_config()?;
    println!(
        "Checking parameter database {} (record {})",
        config.database_path().display(),
        args.id
    );

    let results = [
        (LiftDragParams::TABLE, check_table::<LiftDragParams>(&config, args.id)),
        (
            BsplineAeroParams::TABLE,
            check_table::<BsplineAeroParams>(&config, args.id),
        ),
        (PhiParams::TABLE, check_table::<PhiParams>(&config, args.id)),
    ];

    let mut failures = 0;
    for (table, result) in results {
        match result {
            Ok(()) => println!("  {} {}", "ok".green().bold(), table),
            Err(error) => {
                failures += 1;
                println!("  {} {}: {}", "fail".red().bold(), table, error);
            }
        }
    }

    if failures == 0 {
        info!("All parameter tables loaded successfully");
        println!("{}", "All parameter tables loaded successfully".green());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{}",
            format!("{} of 3 parameter tables failed to load", failures).red()
        );
        Ok(ExitCode::FAILURE)
    }
}

fn check_table<T: ParamTable>(config: &Config, id: i64) -> Result<()> {
    RecordReader::<T>::new(config)?.load(id).map(|_| ())
}
