//! Aerodynamic Simulation Parameter Loader
//!
//! A Rust library for loading numeric simulation-parameter records from a
//! local SQLite database into strongly-typed in-memory structures consumed
//! by an aerodynamics simulator.
//!
//! This library provides tools for:
//! - Decoding comma-separated numeric columns with skip-and-warn handling
//!   of malformed tokens
//! - A generic fetch/parse/validate pipeline shared by every parameter
//!   table ([`RecordReader`] over [`ParamTable`])
//! - Schema-specific readers enforcing per-table shape invariants
//!   (lift/drag scalars, B-spline knot/coefficient counts, 3x3 matrices)
//! - Comprehensive error reporting with backend diagnostics

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod bspline_aero_reader;
        pub mod lift_drag_reader;
        pub mod phi_aero_reader;
        pub mod record_reader;
        pub mod value_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{BsplineAeroParams, LiftDragParams, PhiParams};
pub use app::services::record_reader::{ParamTable, RecordReader};
pub use config::Config;

use std::path::PathBuf;

/// Result type alias for parameter loading operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for parameter loading operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Required configuration value missing or unusable
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Composed database path does not exist on disk
    #[error("Parameter database not found: {}", .path.display())]
    DatabaseMissing { path: PathBuf },

    /// Backend failed to open the database file
    #[error("Failed to open parameter database '{}': {source}", .path.display())]
    Connection {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Statement preparation or parameter binding failed
    #[error("Failed to prepare query against table '{table}': {source}")]
    Statement {
        table: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Backend reported an error while executing the query
    #[error("Query against table '{table}' failed: {source}")]
    Query {
        table: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Query executed but returned no row for the requested key
    #[error("No parameter record found in table '{table}' for id {id}")]
    NoData { table: String, id: i64 },

    /// NULL column, empty value list, or violated shape invariant
    #[error("Data integrity error in table '{table}': {message}")]
    DataIntegrity { table: String, message: String },
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a missing-database error
    pub fn database_missing(path: impl Into<PathBuf>) -> Self {
        Self::DatabaseMissing { path: path.into() }
    }

    /// Create a connection error wrapping the backend failure
    pub fn connection(path: impl Into<PathBuf>, source: rusqlite::Error) -> Self {
        Self::Connection {
            path: path.into(),
            source,
        }
    }

    /// Create a statement preparation/binding error
    pub fn statement(table: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Statement {
            table: table.into(),
            source,
        }
    }

    /// Create a query execution error
    pub fn query(table: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Query {
            table: table.into(),
            source,
        }
    }

    /// Create a no-data error for a key that matched no row
    pub fn no_data(table: impl Into<String>, id: i64) -> Self {
        Self::NoData {
            table: table.into(),
            id,
        }
    }

    /// Create a data-integrity error naming the violated expectation
    pub fn data_integrity(table: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DataIntegrity {
            table: table.into(),
            message: message.into(),
        }
    }
}
