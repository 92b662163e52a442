//! Reader for the advanced lift/drag coefficient table.
//!
//! Every column of this table is single-valued: the decoder takes the first
//! value of each column's numeric sequence and rejects the row if any
//! column decodes to nothing.

use crate::app::models::LiftDragParams;
use crate::app::services::record_reader::{ParamTable, first_value};
use crate::Result;

const TABLE_NAME: &str = "advanced_lift_drag_config";

// Column names
const SIGMOID_BLEND_COL: &str = "sigmoid_blend";
const CL_ALPHA_0_COL: &str = "cl_alpha_0";
const CL_ALPHA_COL: &str = "cl_alpha";
const ALPHA_STALL_COL: &str = "alpha_stall";
const EFF_COL: &str = "eff";
const CD_0_COL: &str = "cd_0";
const CD_FLAT_PLATE_COL: &str = "cd_flat_plate";
const CY_BETA_COL: &str = "cy_beta";
const CL_BETA_LOSS_COL: &str = "cl_beta_loss";
const SCALE_FACTOR_COL: &str = "scale_factor";

impl ParamTable for LiftDragParams {
    const TABLE: &'static str = TABLE_NAME;

    const COLUMNS: &'static [&'static str] = &[
        SIGMOID_BLEND_COL,
        CL_ALPHA_0_COL,
        CL_ALPHA_COL,
        ALPHA_STALL_COL,
        EFF_COL,
        CD_0_COL,
        CD_FLAT_PLATE_COL,
        CY_BETA_COL,
        CL_BETA_LOSS_COL,
        SCALE_FACTOR_COL,
    ];

    fn from_row(columns: &[String]) -> Result<Self> {
        let mut values = [0.0f64; 10];
        for (slot, (column, raw)) in values
            .iter_mut()
            .zip(Self::COLUMNS.iter().zip(columns.iter()))
        {
            *slot = first_value(Self::TABLE, column, raw)?;
        }

        let [
            sigmoid_blend,
            cl_alpha_0,
            cl_alpha,
            alpha_stall,
            eff,
            cd_0,
            cd_flat_plate,
            cy_beta,
            cl_beta_loss,
            scale_factor,
        ] = values;

        Ok(Self {
            sigmoid_blend,
            cl_alpha_0,
            cl_alpha,
            alpha_stall,
            eff,
            cd_0,
            cd_flat_plate,
            cy_beta,
            cl_beta_loss,
            scale_factor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::constants::DB_FILE_NAME;
    use crate::{Error, RecordReader};
    use rusqlite::Connection;
    use std::path::Path;
    use tempfile::TempDir;

    fn create_database(dir: &Path, values: &[&str; 10]) {
        let conn = Connection::open(dir.join(DB_FILE_NAME)).unwrap();
        conn.execute_batch(
            "CREATE TABLE advanced_lift_drag_config (
                id INTEGER PRIMARY KEY,
                sigmoid_blend TEXT, cl_alpha_0 TEXT, cl_alpha TEXT,
                alpha_stall TEXT, eff TEXT, cd_0 TEXT, cd_flat_plate TEXT,
                cy_beta TEXT, cl_beta_loss TEXT, scale_factor TEXT
            )",
        )
        .unwrap();
        conn.execute(
            "INSERT INTO advanced_lift_drag_config
             (id, sigmoid_blend, cl_alpha_0, cl_alpha, alpha_stall, eff,
              cd_0, cd_flat_plate, cy_beta, cl_beta_loss, scale_factor)
             VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            rusqlite::params![
                values[0], values[1], values[2], values[3], values[4], values[5], values[6],
                values[7], values[8], values[9]
            ],
        )
        .unwrap();
    }

    #[test]
    fn test_each_accessor_returns_its_column_value() {
        let temp_dir = TempDir::new().unwrap();
        create_database(
            temp_dir.path(),
            &[
                "0.5", "0.1", "5.7", "0.3", "0.9", "0.02", "1.28", "-0.3", "0.2", "1.0",
            ],
        );

        let config = Config::new(temp_dir.path());
        let reader = RecordReader::<LiftDragParams>::new(&config).unwrap();
        let params = reader.load_default().unwrap();

        assert_eq!(params.sigmoid_blend(), 0.5);
        assert_eq!(params.cl_alpha_0(), 0.1);
        assert_eq!(params.cl_alpha(), 5.7);
        assert_eq!(params.alpha_stall(), 0.3);
        assert_eq!(params.eff(), 0.9);
        assert_eq!(params.cd_0(), 0.02);
        assert_eq!(params.cd_flat_plate(), 1.28);
        assert_eq!(params.cy_beta(), -0.3);
        assert_eq!(params.cl_beta_loss(), 0.2);
        assert_eq!(params.scale_factor(), 1.0);
    }

    #[test]
    fn test_multi_valued_column_takes_first_value() {
        let temp_dir = TempDir::new().unwrap();
        create_database(
            temp_dir.path(),
            &[
                "0.5,9.9", "0.1", "5.7", "0.3", "0.9", "0.02", "1.28", "-0.3", "0.2", "1.0",
            ],
        );

        let config = Config::new(temp_dir.path());
        let reader = RecordReader::<LiftDragParams>::new(&config).unwrap();
        let params = reader.load_default().unwrap();

        assert_eq!(params.sigmoid_blend(), 0.5);
    }

    #[test]
    fn test_malformed_leading_token_falls_through_to_next_value() {
        // A garbage token is skipped by the list decoder, so the first
        // surviving value is what the accessor reports.
        let temp_dir = TempDir::new().unwrap();
        create_database(
            temp_dir.path(),
            &[
                "x,0.5", "0.1", "5.7", "0.3", "0.9", "0.02", "1.28", "-0.3", "0.2", "1.0",
            ],
        );

        let config = Config::new(temp_dir.path());
        let reader = RecordReader::<LiftDragParams>::new(&config).unwrap();
        let params = reader.load_default().unwrap();

        assert_eq!(params.sigmoid_blend(), 0.5);
    }

    #[test]
    fn test_entirely_malformed_column_fails_fetch() {
        let temp_dir = TempDir::new().unwrap();
        create_database(
            temp_dir.path(),
            &[
                "0.5", "0.1", "5.7", "garbage", "0.9", "0.02", "1.28", "-0.3", "0.2", "1.0",
            ],
        );

        let config = Config::new(temp_dir.path());
        let reader = RecordReader::<LiftDragParams>::new(&config).unwrap();

        match reader.load_default().unwrap_err() {
            Error::DataIntegrity { message, .. } => assert!(message.contains("alpha_stall")),
            other => panic!("Expected DataIntegrity error, got {other:?}"),
        }
    }
}
