//! # PDE Environment Base
//!
//! State and fixed operators shared by every PDE environment. A concrete
//! environment supplies its initial condition through a resolver closure;
//! everything else (grid, target, actuation and sensing matrices, projected
//! target) is assembled here in a fixed order:
//!
//! 1. validate the configuration and build the [`Domain`],
//! 2. resolve the target state (zeros by default),
//! 3. resolve the initial state and set the state to it,
//! 4. compute the control support and observation matrices,
//! 5. cache the projected target `C · target_state`.

use ndarray::{Array1, Array2, ArrayView1};
use serde::{Deserialize, Serialize};
use spectral::{Complex64, RealFft};

use crate::config::PdeConfig;
use crate::domain::Domain;
use crate::error::{check_len, PdeError};
use crate::operators::{compute_control_sup, compute_observation_matrix};

/// Parameter dictionary of the base environment.
///
/// Serializes flat: `id` next to every [`PdeConfig`] key, with the target
/// state always spelled out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PdeParams {
    pub id: String,
    #[serde(flatten)]
    pub config: PdeConfig,
}

/// Shared state of a PDE environment
#[derive(Clone, Debug)]
pub struct PdeEnv {
    id: String,
    config: PdeConfig,
    domain: Domain,
    fft: RealFft,
    target_state: Array1<f64>,
    init_state: Array1<f64>,
    state: Array1<f64>,
    control_sup: Array2<f64>,
    c: Array2<f64>,
    c_target_state: Array1<f64>,
}

impl PdeEnv {
    /// Assemble the base environment.
    ///
    /// `resolve_init_state` runs once the grid exists and before any
    /// operator is computed.
    ///
    /// # Errors
    ///
    /// Returns any validation error from the configuration, any error from
    /// the resolver, and [`PdeError::DimensionMismatch`] if the resolved
    /// initial state does not have `n_state` entries.
    pub fn new<F>(id: impl Into<String>, config: PdeConfig, resolve_init_state: F) -> Result<Self, PdeError>
    where
        F: FnOnce(&PdeConfig, &Domain) -> Result<Array1<f64>, PdeError>,
    {
        config.validate()?;
        let id = id.into();
        let domain = Domain::new(config.domain_length, config.n_state);
        let fft = RealFft::new(config.n_state)?;
        let target_state = config
            .target_state
            .as_ref()
            .map_or_else(|| Array1::zeros(config.n_state), |t| Array1::from(t.clone()));

        let init_state = resolve_init_state(&config, &domain)?;
        check_len("init_state", config.n_state, init_state.len())?;
        let state = init_state.clone();

        let control_sup = compute_control_sup(&domain, config.n_action, config.control_sup_width);
        let c = compute_observation_matrix(config.n_observation, config.n_state);
        let c_target_state = c.dot(&target_state);

        tracing::debug!(
            id = %id,
            n_state = config.n_state,
            n_action = config.n_action,
            n_observation = config.n_observation,
            "assembled pde environment"
        );

        Ok(Self {
            id,
            config,
            domain,
            fft,
            target_state,
            init_state,
            state,
            control_sup,
            c,
            c_target_state,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn config(&self) -> &PdeConfig {
        &self.config
    }

    #[must_use]
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    #[must_use]
    pub fn n_state(&self) -> usize {
        self.config.n_state
    }

    #[must_use]
    pub fn n_action(&self) -> usize {
        self.config.n_action
    }

    #[must_use]
    pub fn n_observation(&self) -> usize {
        self.config.n_observation
    }

    #[must_use]
    pub fn state(&self) -> &Array1<f64> {
        &self.state
    }

    /// Replace the current state, e.g. after an integration step.
    ///
    /// # Errors
    ///
    /// Returns [`PdeError::DimensionMismatch`] if `state` has the wrong length.
    pub fn set_state(&mut self, state: Array1<f64>) -> Result<(), PdeError> {
        check_len("state", self.config.n_state, state.len())?;
        self.state = state;
        Ok(())
    }

    #[must_use]
    pub fn init_state(&self) -> &Array1<f64> {
        &self.init_state
    }

    /// Restore the state to the initial state.
    pub fn reset(&mut self) {
        self.state.assign(&self.init_state);
    }

    #[must_use]
    pub fn target_state(&self) -> &Array1<f64> {
        &self.target_state
    }

    /// Replace the target state and refresh the projected target.
    ///
    /// # Errors
    ///
    /// Returns [`PdeError::DimensionMismatch`] if `target` has the wrong length.
    pub fn set_target_state(&mut self, target: Array1<f64>) -> Result<(), PdeError> {
        check_len("target_state", self.config.n_state, target.len())?;
        self.c_target_state = self.c.dot(&target);
        self.config.target_state = Some(target.to_vec());
        self.target_state = target;
        Ok(())
    }

    /// Control support matrix, `n_state x n_action`.
    #[must_use]
    pub fn control_sup(&self) -> &Array2<f64> {
        &self.control_sup
    }

    /// Observation matrix `C`, `n_observation x n_state`.
    #[must_use]
    pub fn observation_matrix(&self) -> &Array2<f64> {
        &self.c
    }

    /// Cached `C · target_state`.
    #[must_use]
    pub fn c_target_state(&self) -> &Array1<f64> {
        &self.c_target_state
    }

    /// Noise-free projection `C · state` of an arbitrary state vector.
    ///
    /// # Errors
    ///
    /// Returns [`PdeError::DimensionMismatch`] if `state` has the wrong length.
    pub fn project(&self, state: ArrayView1<'_, f64>) -> Result<Array1<f64>, PdeError> {
        check_len("state", self.config.n_state, state.len())?;
        Ok(self.c.dot(&state))
    }

    /// Real FFT of a state vector over this environment's grid.
    ///
    /// # Errors
    ///
    /// Returns [`PdeError::Spectral`] if `state` has the wrong length.
    pub fn to_fourier(&self, state: ArrayView1<'_, f64>) -> Result<Array1<Complex64>, PdeError> {
        Ok(self.fft.rfft(state)?)
    }

    /// Inverse real FFT back onto this environment's grid.
    #[must_use]
    pub fn inverse_fourier(&self, state_fourier: ArrayView1<'_, Complex64>) -> Array1<f64> {
        self.fft.irfft(state_fourier)
    }

    /// Parameter dictionary with the target state filled in.
    #[must_use]
    pub fn params(&self) -> PdeParams {
        let mut config = self.config.clone();
        config.target_state = Some(self.target_state.to_vec());
        PdeParams {
            id: self.id.clone(),
            config,
        }
    }
}
