//! # Dealiased Advection and Control Forcing
//!
//! The advection term `-u du/dx` is evaluated pseudo-spectrally through the
//! identity `u du/dx = ½ d(u²)/dx`. Squaring a field band-limited to `n/2`
//! modes produces content up to mode `n`; on the native grid that content
//! would fold back onto the retained modes. The square is therefore formed
//! on a grid oversampled by [`ANTI_ALIASING_FACTOR`] and truncated back
//! before differentiation (the 3/2 rule).

use ndarray::{s, Array1, Array2, ArrayView1};
use pde::{check_len, Domain, NonlinearOp, PdeError};
use spectral::{Complex64, RealFft};

/// Oversampling factor of the dealiasing grid. Fixed by the 3/2 rule.
pub const ANTI_ALIASING_FACTOR: f64 = 1.5;

/// Size of the dealiasing grid for `n_state` points, rounded down.
#[must_use]
pub const fn oversampled_len(n_state: usize) -> usize {
    n_state * 3 / 2
}

/// Nonlinear part of the Burgers right-hand side in Fourier space.
///
/// Holds only immutable data derived from the grid and the control support:
/// the wavenumbers, the column-wise spectrum of the control support, and the
/// planned transform for the oversampled grid.
#[derive(Clone, Debug)]
pub struct FourierNonlinearOp {
    wavenumbers: Array1<f64>,
    control_sup_fourier: Array2<Complex64>,
    oversampled: RealFft,
}

impl FourierNonlinearOp {
    /// # Errors
    ///
    /// Returns [`PdeError::DimensionMismatch`] if `control_sup` does not have
    /// one row per grid point.
    pub fn new(domain: &Domain, control_sup: &Array2<f64>) -> Result<Self, PdeError> {
        let n_state = domain.n_state();
        check_len("control_sup rows", n_state, control_sup.nrows())?;

        let grid = RealFft::new(n_state)?;
        let control_sup_fourier = grid.rfft_columns(control_sup.view())?;
        let oversampled = RealFft::new(oversampled_len(n_state))?;

        tracing::debug!(
            n_state,
            n_action = control_sup.ncols(),
            oversampled_len = oversampled.len(),
            "built fourier nonlinear operator"
        );
        Ok(Self {
            wavenumbers: domain.wavenumbers().clone(),
            control_sup_fourier,
            oversampled,
        })
    }

    /// Number of retained Fourier modes.
    #[must_use]
    pub fn n_modes(&self) -> usize {
        self.wavenumbers.len()
    }

    #[must_use]
    pub fn n_action(&self) -> usize {
        self.control_sup_fourier.ncols()
    }

    /// Spectrum of the control support, one column per actuator.
    #[must_use]
    pub fn control_sup_fourier(&self) -> &Array2<Complex64> {
        &self.control_sup_fourier
    }

    /// Advection term `-½ ik · FFT(u²)` with the square formed on the
    /// oversampled grid.
    ///
    /// # Errors
    ///
    /// Returns [`PdeError::DimensionMismatch`] if `state_fourier` does not
    /// have one entry per retained mode.
    pub fn advection(&self, state_fourier: ArrayView1<'_, Complex64>) -> Result<Array1<Complex64>, PdeError> {
        let n_modes = self.n_modes();
        check_len("state_fourier", n_modes, state_fourier.len())?;

        // Scaling by the factor keeps the physical amplitude on the finer grid.
        let aa_state = self.oversampled.irfft(state_fourier) * ANTI_ALIASING_FACTOR;
        let squared = aa_state.mapv(|u| u * u);
        let squared_fourier = self.oversampled.rfft(squared.view())?;

        let scale = Complex64::new(0.0, -0.5) / ANTI_ALIASING_FACTOR;
        let retained = squared_fourier.slice(s![..n_modes]);
        Ok(Array1::from_shape_fn(n_modes, |m| {
            scale * self.wavenumbers[m] * retained[m]
        }))
    }

    /// Control forcing `FFT(control_sup) · action`.
    ///
    /// # Errors
    ///
    /// Returns [`PdeError::DimensionMismatch`] if `action` does not have one
    /// entry per actuator.
    pub fn control_forcing(&self, action: ArrayView1<'_, f64>) -> Result<Array1<Complex64>, PdeError> {
        check_len("action", self.n_action(), action.len())?;
        let action = action.mapv(|a| Complex64::new(a, 0.0));
        Ok(self.control_sup_fourier.dot(&action))
    }
}

impl NonlinearOp for FourierNonlinearOp {
    fn apply(
        &self,
        state_fourier: ArrayView1<'_, Complex64>,
        action: ArrayView1<'_, f64>,
    ) -> Result<Array1<Complex64>, PdeError> {
        Ok(self.advection(state_fourier)? + self.control_forcing(action)?)
    }
}
