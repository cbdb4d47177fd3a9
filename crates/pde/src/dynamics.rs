//! Interface between a PDE environment and the integrator that advances it.
//!
//! The integrator combines the two operators each step: the linear operator
//! is diagonal in Fourier space and applied element-wise, the nonlinear
//! operator is evaluated at every stage of the time-integration scheme.

use ndarray::{Array1, ArrayView1};
use spectral::Complex64;

use crate::env::PdeEnv;
use crate::error::PdeError;

/// Right-hand-side contribution that is not diagonal in Fourier space.
pub trait NonlinearOp {
    /// Evaluate the contribution for one spectral state and action.
    ///
    /// # Errors
    ///
    /// Returns [`PdeError::DimensionMismatch`] if either input does not match
    /// the environment dimensions.
    fn apply(
        &self,
        state_fourier: ArrayView1<'_, Complex64>,
        action: ArrayView1<'_, f64>,
    ) -> Result<Array1<Complex64>, PdeError>;
}

/// Dynamics supplied by a concrete PDE environment.
pub trait PdeDynamics {
    type Nonlinear: NonlinearOp;
    type Params;

    /// Shared base state.
    fn base(&self) -> &PdeEnv;

    /// Per-wavenumber linear operator.
    fn fourier_linear_op(&self) -> Array1<f64>;

    /// Nonlinear operator over the environment's fixed grid and actuators.
    ///
    /// # Errors
    ///
    /// Returns an error if the spectral transforms cannot be planned.
    fn fourier_nonlinear_op(&self) -> Result<Self::Nonlinear, PdeError>;

    /// Parameter dictionary suitable for reconstructing the environment.
    fn params(&self) -> Self::Params;
}
