//! Reader for the B-spline aerodynamic control table.
//!
//! The cx and cz axes each store a coefficient sequence and a knot
//! sequence. For a degree-3 spline the knot vector must be exactly
//! degree + 1 entries longer than the coefficient vector, so the decoder
//! rejects any row where that offset does not hold on both axes.

use crate::app::models::BsplineAeroParams;
use crate::app::services::record_reader::{ParamTable, first_value, require_values};
use crate::constants::KNOT_COEF_OFFSET;
use crate::{Error, Result};

const TABLE_NAME: &str = "bspline_aero_config";

// Column names
const CX_COEFS_COL: &str = "cx_coefs";
const CX_KNOTS_COL: &str = "cx_knots";
const CZ_COEFS_COL: &str = "cz_coefs";
const CZ_KNOTS_COL: &str = "cz_knots";
const SCALE_FACTOR_COL: &str = "scale_factor";

impl ParamTable for BsplineAeroParams {
    const TABLE: &'static str = TABLE_NAME;

    const COLUMNS: &'static [&'static str] = &[
        CX_COEFS_COL,
        CX_KNOTS_COL,
        CZ_COEFS_COL,
        CZ_KNOTS_COL,
        SCALE_FACTOR_COL,
    ];

    fn from_row(columns: &[String]) -> Result<Self> {
        let cx_coefs = require_values(Self::TABLE, CX_COEFS_COL, &columns[0])?;
        let cx_knots = require_values(Self::TABLE, CX_KNOTS_COL, &columns[1])?;
        let cz_coefs = require_values(Self::TABLE, CZ_COEFS_COL, &columns[2])?;
        let cz_knots = require_values(Self::TABLE, CZ_KNOTS_COL, &columns[3])?;
        let scale_factor = first_value(Self::TABLE, SCALE_FACTOR_COL, &columns[4])?;

        // Knot count must be consistent with coefficient count on both axes.
        if cx_knots.len() != cx_coefs.len() + KNOT_COEF_OFFSET
            || cz_knots.len() != cz_coefs.len() + KNOT_COEF_OFFSET
        {
            return Err(Error::data_integrity(
                Self::TABLE,
                format!(
                    "knot counts must exceed coefficient counts by {}: \
                     got cx_knots: {}, cx_coefs: {}, cz_knots: {}, cz_coefs: {}",
                    KNOT_COEF_OFFSET,
                    cx_knots.len(),
                    cx_coefs.len(),
                    cz_knots.len(),
                    cz_coefs.len()
                ),
            ));
        }

        Ok(Self {
            cx_coefs,
            cx_knots,
            cz_coefs,
            cz_knots,
            scale_factor,
        })
    }
}
