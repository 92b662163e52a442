//! Parameter set models loaded from the simulation database.
//!
//! Each struct is the decoded, validated in-memory representation of one
//! configuration table row. Instances are built only by the schema readers
//! after every shape check has passed, so a value you hold is always fully
//! populated; fields are exposed through read-only accessors.

use crate::constants::PHI_MATRIX_LEN;
use serde::Serialize;

/// Advanced lift/drag coefficients for the fixed-wing aerodynamic model
///
/// Ten independent scalars, each stored as the first value of its column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiftDragParams {
    /// Sigmoid blending parameter
    pub(crate) sigmoid_blend: f64,
    /// Lift coefficient at zero angle of attack
    pub(crate) cl_alpha_0: f64,
    /// Lift curve slope (per radian)
    pub(crate) cl_alpha: f64,
    /// Stall angle (radians)
    pub(crate) alpha_stall: f64,
    /// Wing efficiency factor
    pub(crate) eff: f64,
    /// Zero-lift drag coefficient
    pub(crate) cd_0: f64,
    /// Flat plate drag coefficient
    pub(crate) cd_flat_plate: f64,
    /// Side force derivative with sideslip
    pub(crate) cy_beta: f64,
    /// Lift loss factor with sideslip
    pub(crate) cl_beta_loss: f64,
    /// Scale factor applied to aerodynamic forces
    pub(crate) scale_factor: f64,
}

impl LiftDragParams {
    pub fn sigmoid_blend(&self) -> f64 {
        self.sigmoid_blend
    }

    pub fn cl_alpha_0(&self) -> f64 {
        self.cl_alpha_0
    }

    pub fn cl_alpha(&self) -> f64 {
        self.cl_alpha
    }

    pub fn alpha_stall(&self) -> f64 {
        self.alpha_stall
    }

    pub fn eff(&self) -> f64 {
        self.eff
    }

    pub fn cd_0(&self) -> f64 {
        self.cd_0
    }

    pub fn cd_flat_plate(&self) -> f64 {
        self.cd_flat_plate
    }

    pub fn cy_beta(&self) -> f64 {
        self.cy_beta
    }

    pub fn cl_beta_loss(&self) -> f64 {
        self.cl_beta_loss
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }
}

/// B-spline control data for the longitudinal aerodynamic force model
///
/// Coefficient and knot sequences for the cx and cz axes plus a force scale
/// factor. Invariant: each knot sequence is exactly
/// [`KNOT_COEF_OFFSET`](crate::constants::KNOT_COEF_OFFSET) entries longer
/// than its coefficient sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BsplineAeroParams {
    /// Spline coefficients for the x-axis force component
    pub(crate) cx_coefs: Vec<f64>,
    /// Knot vector for the x-axis spline
    pub(crate) cx_knots: Vec<f64>,
    /// Spline coefficients for the z-axis force component
    pub(crate) cz_coefs: Vec<f64>,
    /// Knot vector for the z-axis spline
    pub(crate) cz_knots: Vec<f64>,
    /// Scale factor applied to aerodynamic forces
    pub(crate) scale_factor: f64,
}

impl BsplineAeroParams {
    pub fn cx_coefs(&self) -> &[f64] {
        &self.cx_coefs
    }

    pub fn cx_knots(&self) -> &[f64] {
        &self.cx_knots
    }

    pub fn cz_coefs(&self) -> &[f64] {
        &self.cz_coefs
    }

    pub fn cz_knots(&self) -> &[f64] {
        &self.cz_knots
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }
}

/// Sideslip attitude matrix, stored flattened in row-major order
///
/// Invariant: exactly nine values (a 3x3 matrix).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhiParams {
    /// Flattened 3x3 attitude matrix
    pub(crate) phi: Vec<f64>,
}

impl PhiParams {
    /// Flattened matrix values in row-major order
    pub fn phi(&self) -> &[f64] {
        &self.phi
    }

    /// The attitude matrix in 3x3 form
    pub fn matrix(&self) -> [[f64; 3]; 3] {
        debug_assert_eq!(self.phi.len(), PHI_MATRIX_LEN);
        let mut matrix = [[0.0; 3]; 3];
        for (i, row) in matrix.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.phi[i * 3 + j];
            }
        }
        matrix
    }
}
