//! # Initial Conditions
//!
//! The documented default initial condition of the Burgers environment is a
//! hyperbolic-secant pulse centered on the domain. Historically the pulse
//! was always replaced by uniform noise in `[-1, 1]` before use, so that is
//! what every published benchmark run actually started from. Both behaviors
//! are available through [`InitMode`]; the historical one is the default.

use std::fmt;
use std::str::FromStr;

use ndarray::Array1;
use pde::{check_len, Domain, PdeConfig, PdeError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Initial condition used when no explicit initial state is given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitMode {
    /// `1 / cosh(10 (x - L/2))`
    FixedPulse,
    /// Independent uniform draws in `[-1, 1]`, seeded from the config seed
    #[default]
    RandomUniform,
}

impl InitMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            InitMode::FixedPulse => "fixed_pulse",
            InitMode::RandomUniform => "random_uniform",
        }
    }
}

impl fmt::Display for InitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown init mode `{0}` (expected `fixed_pulse` or `random_uniform`)")]
pub struct ParseInitModeError(String);

impl FromStr for InitMode {
    type Err = ParseInitModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed_pulse" | "pulse" => Ok(InitMode::FixedPulse),
            "random_uniform" | "random" => Ok(InitMode::RandomUniform),
            other => Err(ParseInitModeError(other.to_owned())),
        }
    }
}

/// Hyperbolic-secant pulse centered at the domain midpoint.
#[must_use]
pub fn sech_pulse(domain: &Domain) -> Array1<f64> {
    let mid = domain.length() / 2.0;
    domain.coordinates().mapv(|x| 1.0 / (10.0 * (x - mid)).cosh())
}

/// `n_state` uniform draws in `[-1, 1]` from a generator seeded with `seed`.
#[must_use]
pub fn random_uniform(n_state: usize, seed: u64) -> Array1<f64> {
    let rng = fastrand::Rng::with_seed(seed);
    Array1::from_shape_fn(n_state, |_| 2.0 * rng.f64() - 1.0)
}

/// Pick the initial state: an explicit vector wins, otherwise `mode` decides.
///
/// # Errors
///
/// Returns [`PdeError::DimensionMismatch`] if an explicit initial state does
/// not have `n_state` entries.
pub fn resolve_initial_state(
    init_state: Option<&[f64]>,
    mode: InitMode,
    config: &PdeConfig,
    domain: &Domain,
) -> Result<Array1<f64>, PdeError> {
    if let Some(explicit) = init_state {
        check_len("init_state", config.n_state, explicit.len())?;
        tracing::debug!("using explicit initial state");
        return Ok(Array1::from(explicit.to_vec()));
    }
    tracing::debug!(mode = %mode, seed = config.seed, "generating initial state");
    Ok(match mode {
        InitMode::FixedPulse => sech_pulse(domain),
        InitMode::RandomUniform => random_uniform(config.n_state, config.seed),
    })
}
