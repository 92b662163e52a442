//! Command-line argument definitions for the parameter loader CLI
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::models::{BsplineAeroParams, LiftDragParams, PhiParams};
use crate::app::services::record_reader::ParamTable;
use crate::config::Config;
use crate::constants::DEFAULT_RECORD_ID;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the aerodynamic parameter loader
///
/// Loads simulation parameter sets from a SQLite configuration database and
/// prints or validates them.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "aero-params",
    version,
    about = "Load and inspect aerodynamic simulation parameter sets from a SQLite database"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the parameter loader
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Load parameter sets and print their contents
    Show(ShowArgs),
    /// Load every parameter table and report per-table status
    Check(CheckArgs),
}

/// Arguments for the show command
#[derive(Debug, Clone, Parser)]
pub struct ShowArgs {
    /// Directory containing the parameter database
    ///
    /// Defaults to the AERO_SIM_DATA_DIR environment variable.
    #[arg(
        long = "data-dir",
        value_name = "PATH",
        help = "Directory containing aero_sim_params.db (defaults to $AERO_SIM_DATA_DIR)"
    )]
    pub data_dir: Option<PathBuf>,

    /// Parameter table to load; all tables when omitted
    #[arg(short = 't', long = "table", value_enum, help = "Parameter table to load")]
    pub table: Option<TableKind>,

    /// Record key selecting which row to load
    #[arg(
        long = "id",
        value_name = "ID",
        default_value_t = DEFAULT_RECORD_ID,
        help = "Record key selecting the parameter row"
    )]
    pub id: i64,

    /// Output format for the loaded parameter sets
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the check command
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Directory containing the parameter database
    ///
    /// Defaults to the AERO_SIM_DATA_DIR environment variable.
    #[arg(
        long = "data-dir",
        value_name = "PATH",
        help = "Directory containing aero_sim_params.db (defaults to $AERO_SIM_DATA_DIR)"
    )]
    pub data_dir: Option<PathBuf>,

    /// Record key selecting which row to load
    #[arg(
        long = "id",
        value_name = "ID",
        default_value_t = DEFAULT_RECORD_ID,
        help = "Record key selecting the parameter row"
    )]
    pub id: i64,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for the show command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Parameter tables addressable from the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableKind {
    /// Advanced lift/drag coefficients
    LiftDrag,
    /// B-spline aerodynamic control data
    BsplineAero,
    /// Sideslip attitude matrix
    PhiAero,
}

impl TableKind {
    /// Database table backing this parameter set
    pub fn table_name(self) -> &'static str {
        match self {
            TableKind::LiftDrag => LiftDragParams::TABLE,
            TableKind::BsplineAero => BsplineAeroParams::TABLE,
            TableKind::PhiAero => PhiParams::TABLE,
        }
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ShowArgs {
    /// Validate the show command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_data_dir(self.data_dir.as_deref())
    }

    /// Resolve the configuration from the data-dir flag or the environment
    pub fn resolve_config(&self) -> Result<Config> {
        resolve_config(self.data_dir.as_deref())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose)
    }
}

impl CheckArgs {
    /// Validate the check command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_data_dir(self.data_dir.as_deref())
    }

    /// Resolve the configuration from the data-dir flag or the environment
    pub fn resolve_config(&self) -> Result<Config> {
        resolve_config(self.data_dir.as_deref())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose)
    }
}

fn validate_data_dir(data_dir: Option<&std::path::Path>) -> Result<()> {
    if let Some(data_dir) = data_dir {
        if !data_dir.exists() {
            return Err(Error::configuration(format!(
                "Data directory does not exist: {}",
                data_dir.display()
            )));
        }

        if !data_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Data directory is not a directory: {}",
                data_dir.display()
            )));
        }
    }

    Ok(())
}

fn resolve_config(data_dir: Option<&std::path::Path>) -> Result<Config> {
    match data_dir {
        Some(dir) => Ok(Config::new(dir)),
        None => Config::from_env(),
    }
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(log_level(0), "warn");
        assert_eq!(log_level(1), "info");
        assert_eq!(log_level(2), "debug");
        assert_eq!(log_level(3), "trace");
        assert_eq!(log_level(9), "trace");
    }

    #[test]
    fn test_table_kind_names() {
        assert_eq!(TableKind::LiftDrag.table_name(), "advanced_lift_drag_config");
        assert_eq!(TableKind::BsplineAero.table_name(), "bspline_aero_config");
        assert_eq!(TableKind::PhiAero.table_name(), "phi_aero_config");
    }

    #[test]
    fn test_validate_rejects_missing_data_dir() {
        let args = ShowArgs {
            data_dir: Some(PathBuf::from("/nonexistent/path")),
            table: None,
            id: 1,
            output_format: OutputFormat::Human,
            verbose: 0,
        };
        assert!(matches!(
            args.validate(),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_validate_accepts_existing_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let args = CheckArgs {
            data_dir: Some(temp_dir.path().to_path_buf()),
            id: 1,
            verbose: 0,
        };
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_explicit_data_dir_overrides_environment() {
        let args = ShowArgs {
            data_dir: Some(PathBuf::from("/srv/aero")),
            table: None,
            id: 1,
            output_format: OutputFormat::Human,
            verbose: 0,
        };
        let config = args.resolve_config().unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/aero"));
    }
}
