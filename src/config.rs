//! Configuration for locating the parameter database.
//!
//! The database directory is process-wide external state supplied through a
//! single environment variable. To keep reader construction deterministic
//! and testable it is resolved here, once, into an explicit [`Config`] value
//! that is passed into every reader.

use crate::constants::{DATA_DIR_ENV, DB_FILE_NAME};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing::debug;

/// Location of the simulation parameter database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory containing the parameter database file
    pub data_dir: PathBuf,

    /// Database file name within the data directory
    pub database_file: String,
}

impl Config {
    /// Create a configuration pointing at an explicit data directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            database_file: DB_FILE_NAME.to_string(),
        }
    }

    /// Resolve the data directory from the `AERO_SIM_DATA_DIR` environment
    /// variable
    ///
    /// # Errors
    /// * Returns `Error::Configuration` if the variable is unset or empty
    pub fn from_env() -> Result<Self> {
        let data_dir = env::var(DATA_DIR_ENV).map_err(|_| {
            Error::configuration(format!("{} environment variable is not set", DATA_DIR_ENV))
        })?;

        if data_dir.trim().is_empty() {
            return Err(Error::configuration(format!(
                "{} environment variable is empty",
                DATA_DIR_ENV
            )));
        }

        debug!("Resolved parameter data directory from {}: {}", DATA_DIR_ENV, data_dir);
        Ok(Self::new(data_dir))
    }

    /// Override the database file name
    pub fn with_database_file(mut self, name: impl Into<String>) -> Self {
        self.database_file = name.into();
        self
    }

    /// Full path of the parameter database file
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.database_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_path_composition() {
        let config = Config::new("/srv/aero");
        assert_eq!(
            config.database_path(),
            PathBuf::from("/srv/aero").join(DB_FILE_NAME)
        );
    }

    #[test]
    fn test_with_database_file() {
        let config = Config::new("/srv/aero").with_database_file("other.db");
        assert_eq!(config.database_path(), PathBuf::from("/srv/aero/other.db"));
    }

    // Single test for all from_env scenarios: the variable is process-global,
    // so splitting these across test functions would race under the parallel
    // test runner.
    #[test]
    fn test_from_env_resolution() {
        unsafe { env::remove_var(DATA_DIR_ENV) };
        let result = Config::from_env();
        assert!(matches!(result, Err(Error::Configuration { .. })));

        unsafe { env::set_var(DATA_DIR_ENV, "") };
        let result = Config::from_env();
        assert!(matches!(result, Err(Error::Configuration { .. })));

        unsafe { env::set_var(DATA_DIR_ENV, "/srv/aero") };
        let config = Config::from_env().unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/aero"));
        assert_eq!(config.database_file, DB_FILE_NAME);

        unsafe { env::remove_var(DATA_DIR_ENV) };
    }
}
