//! Application constants for the parameter loader
//!
//! This module contains the external configuration names, database layout
//! constants, and shape-invariant values used throughout the crate.

// =============================================================================
// External Configuration
// =============================================================================

/// Environment variable naming the directory that holds the parameter database
pub const DATA_DIR_ENV: &str = "AERO_SIM_DATA_DIR";

/// Parameter database file name within the data directory
pub const DB_FILE_NAME: &str = "aero_sim_params.db";

/// Record key used when the caller does not select one
pub const DEFAULT_RECORD_ID: i64 = 1;

// =============================================================================
// Shape Invariants
// =============================================================================

/// Degree of the aerodynamic B-splines stored in the database
pub const BSPLINE_DEGREE: usize = 3;

/// Required difference between knot count and coefficient count per axis
pub const KNOT_COEF_OFFSET: usize = BSPLINE_DEGREE + 1;

/// Element count of a flattened 3x3 attitude matrix
pub const PHI_MATRIX_LEN: usize = 9;
