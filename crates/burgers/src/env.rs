use ndarray::Array1;
use pde::config::positive;
use pde::{PdeDynamics, PdeEnv, PdeError};

use crate::config::{BurgersConfig, BurgersParams};
use crate::init::{resolve_initial_state, InitMode};
use crate::linear::fourier_linear_op;
use crate::nonlinear::FourierNonlinearOp;

/// Identifier reported in the parameter dictionary.
pub const ENV_ID: &str = "burgers";

/// Viscous Burgers' equation on a periodic domain:
///
/// `du/dt = d u_xx - u u_x + control forcing`
#[derive(Clone, Debug)]
pub struct BurgersEnv {
    base: PdeEnv,
    diffusivity_constant: f64,
    init_mode: InitMode,
}

impl BurgersEnv {
    /// Build the environment: validate, resolve the initial state, then
    /// assemble the actuation and sensing operators.
    ///
    /// # Errors
    ///
    /// Returns [`PdeError::InvalidParameter`] for out-of-range options and
    /// [`PdeError::DimensionMismatch`] for vectors of the wrong length.
    pub fn new(config: BurgersConfig) -> Result<Self, PdeError> {
        positive("diffusivity_constant", config.diffusivity_constant)?;
        let BurgersConfig {
            pde,
            diffusivity_constant,
            init_state,
            init_mode,
        } = config;
        let init_source = if init_state.is_some() {
            "explicit"
        } else {
            init_mode.as_str()
        };

        let base = PdeEnv::new(ENV_ID, pde, |cfg, domain| {
            resolve_initial_state(init_state.as_deref(), init_mode, cfg, domain)
        })?;

        tracing::info!(
            n_state = base.n_state(),
            n_action = base.n_action(),
            n_observation = base.n_observation(),
            diffusivity_constant,
            init = init_source,
            "constructed burgers environment"
        );
        Ok(Self {
            base,
            diffusivity_constant,
            init_mode,
        })
    }

    /// Rebuild an environment from an exported parameter dictionary.
    ///
    /// # Errors
    ///
    /// Same as [`BurgersEnv::new`].
    pub fn from_params(params: BurgersParams) -> Result<Self, PdeError> {
        Self::new(params.into())
    }

    /// Mutable access to the shared state, for the integrator.
    pub fn base_mut(&mut self) -> &mut PdeEnv {
        &mut self.base
    }

    #[must_use]
    pub fn diffusivity_constant(&self) -> f64 {
        self.diffusivity_constant
    }

    #[must_use]
    pub fn init_mode(&self) -> InitMode {
        self.init_mode
    }
}

impl PdeDynamics for BurgersEnv {
    type Nonlinear = FourierNonlinearOp;
    type Params = BurgersParams;

    fn base(&self) -> &PdeEnv {
        &self.base
    }

    fn fourier_linear_op(&self) -> Array1<f64> {
        fourier_linear_op(self.base.domain().wavenumbers(), self.diffusivity_constant)
    }

    fn fourier_nonlinear_op(&self) -> Result<FourierNonlinearOp, PdeError> {
        FourierNonlinearOp::new(self.base.domain(), self.base.control_sup())
    }

    fn params(&self) -> BurgersParams {
        BurgersParams {
            pde: self.base.params(),
            diffusivity_constant: self.diffusivity_constant,
        }
    }
}
