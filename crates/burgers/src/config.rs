//! # Burgers Configuration
//!
//! The Burgers environment extends the shared [`PdeConfig`] with the
//! diffusivity constant and the initial-condition options. Both the
//! construction options and the exported parameter dictionary embed the base
//! structure with `#[serde(flatten)]`, so they serialize as one flat map.

use pde::{PdeConfig, PdeParams};
use serde::{Deserialize, Serialize};

use crate::init::InitMode;

/// Default diffusivity constant of the benchmark environment.
pub const DEFAULT_DIFFUSIVITY: f64 = 0.001;

/// Construction options for [`crate::BurgersEnv`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurgersConfig {
    #[serde(flatten)]
    pub pde: PdeConfig,
    /// Viscosity `d` in `du/dt = d u_xx - u u_x`
    pub diffusivity_constant: f64,
    /// Explicit initial state, used verbatim when present
    pub init_state: Option<Vec<f64>>,
    /// Initial condition used when `init_state` is absent
    pub init_mode: InitMode,
}

impl Default for BurgersConfig {
    fn default() -> Self {
        Self {
            pde: PdeConfig::default(),
            diffusivity_constant: DEFAULT_DIFFUSIVITY,
            init_state: None,
            init_mode: InitMode::default(),
        }
    }
}

/// Parameter dictionary of a Burgers environment: the base keys plus
/// `diffusivity_constant`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BurgersParams {
    #[serde(flatten)]
    pub pde: PdeParams,
    pub diffusivity_constant: f64,
}

impl From<BurgersParams> for BurgersConfig {
    fn from(params: BurgersParams) -> Self {
        Self {
            pde: params.pde.config,
            diffusivity_constant: params.diffusivity_constant,
            ..Self::default()
        }
    }
}
