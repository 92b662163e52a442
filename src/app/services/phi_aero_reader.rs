//! Reader for the sideslip attitude matrix table.
//!
//! The matrix is stored flattened in a single column and must decode to
//! exactly nine values.

use crate::app::models::PhiParams;
use crate::app::services::record_reader::ParamTable;
use crate::app::services::value_parser::parse_numeric_list;
use crate::constants::PHI_MATRIX_LEN;
use crate::{Error, Result};

const TABLE_NAME: &str = "phi_aero_config";

const PHI_COEFS_COL: &str = "phi_coefs";

impl ParamTable for PhiParams {
    const TABLE: &'static str = TABLE_NAME;

    const COLUMNS: &'static [&'static str] = &[PHI_COEFS_COL];

    fn from_row(columns: &[String]) -> Result<Self> {
        let phi = parse_numeric_list(&columns[0]);

        if phi.len() != PHI_MATRIX_LEN {
            return Err(Error::data_integrity(
                Self::TABLE,
                format!(
                    "column '{}' must decode to exactly {} values, got {}",
                    PHI_COEFS_COL,
                    PHI_MATRIX_LEN,
                    phi.len()
                ),
            ));
        }

        Ok(Self { phi })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::constants::DB_FILE_NAME;
    use crate::RecordReader;
    use rusqlite::Connection;
    use std::path::Path;
    use tempfile::TempDir;

    fn create_database(dir: &Path, phi: &str) {
        let conn = Connection::open(dir.join(DB_FILE_NAME)).unwrap();
        conn.execute_batch(
            "CREATE TABLE phi_aero_config (id INTEGER PRIMARY KEY, phi_coefs TEXT)",
        )
        .unwrap();
        conn.execute(
            "INSERT INTO phi_aero_config (id, phi_coefs) VALUES (1, ?1)",
            rusqlite::params![phi],
        )
        .unwrap();
    }

    #[test]
    fn test_loads_nine_element_matrix() {
        let temp_dir = TempDir::new().unwrap();
        create_database(temp_dir.path(), "1,0,0,0,1,0,0,0,1");

        let config = Config::new(temp_dir.path());
        let reader = RecordReader::<PhiParams>::new(&config).unwrap();
        let params = reader.load_default().unwrap();

        assert_eq!(params.phi().len(), 9);
        assert_eq!(params.matrix()[1], [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_eight_elements_fail() {
        let temp_dir = TempDir::new().unwrap();
        create_database(temp_dir.path(), "1,0,0,0,1,0,0,0");

        let config = Config::new(temp_dir.path());
        let reader = RecordReader::<PhiParams>::new(&config).unwrap();

        match reader.load_default().unwrap_err() {
            Error::DataIntegrity { message, .. } => {
                assert!(message.contains("exactly 9"));
                assert!(message.contains("got 8"));
            }
            other => panic!("Expected DataIntegrity error, got {other:?}"),
        }
    }

    #[test]
    fn test_ten_elements_fail() {
        let temp_dir = TempDir::new().unwrap();
        create_database(temp_dir.path(), "1,0,0,0,1,0,0,0,1,5");

        let config = Config::new(temp_dir.path());
        let reader = RecordReader::<PhiParams>::new(&config).unwrap();

        assert!(matches!(
            reader.load_default(),
            Err(Error::DataIntegrity { .. })
        ));
    }

    #[test]
    fn test_malformed_token_shrinks_sequence_and_fails_shape_check() {
        // The bad token is skipped by the list decoder, leaving eight
        // values; the exact-count check is what rejects the row.
        let temp_dir = TempDir::new().unwrap();
        create_database(temp_dir.path(), "1,0,0,bad,1,0,0,0,1");

        let config = Config::new(temp_dir.path());
        let reader = RecordReader::<PhiParams>::new(&config).unwrap();

        assert!(matches!(
            reader.load_default(),
            Err(Error::DataIntegrity { .. })
        ));
    }
}
