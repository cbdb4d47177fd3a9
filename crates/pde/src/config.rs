//! # PDE Environment Configuration
//!
//! Construction options shared by every PDE environment. Field names
//! serialize with the keys the benchmark suite has always used, so a
//! parameter dump can be fed straight back into a constructor.

use serde::{Deserialize, Serialize};

use crate::error::{check_len, PdeError};

/// Configuration shared by all PDE environments
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdeConfig {
    /// Number of discrete-time steps per episode
    pub n_steps: usize,
    /// Length of the periodic spatial domain
    pub domain_length: f64,
    /// Numerical integration time step
    pub integration_time: f64,
    /// Duration represented by one discrete-time step
    pub sample_time: f64,
    /// Process noise covariance coefficient
    pub process_noise_cov: f64,
    /// Sensor noise covariance coefficient
    pub sensor_noise_cov: f64,
    /// Covariance of the random perturbation applied to the initial state
    pub random_init_state_cov: f64,
    /// State-tracking setpoint; `None` means all zeros
    pub target_state: Option<Vec<f64>>,
    /// Number of grid points (state dimension)
    pub n_state: usize,
    /// Observation dimension
    pub n_observation: usize,
    /// Control dimension (number of actuators)
    pub n_action: usize,
    /// Spatial extent of each actuator's influence
    pub control_sup_width: f64,
    /// Weight of the state tracking cost
    #[serde(rename = "Q_weight")]
    pub q_weight: f64,
    /// Weight of the control cost
    #[serde(rename = "R_weight")]
    pub r_weight: f64,
    pub action_limit: Option<f64>,
    pub observation_limit: Option<f64>,
    pub reward_limit: Option<f64>,
    /// Seed for every random draw made at construction
    pub seed: u64,
}

impl Default for PdeConfig {
    fn default() -> Self {
        Self {
            n_steps: 100,
            domain_length: 1.0,
            integration_time: 0.001,
            sample_time: 0.05,
            process_noise_cov: 0.0,
            sensor_noise_cov: 0.25,
            random_init_state_cov: 0.0,
            target_state: None,
            n_state: 256,
            n_observation: 10,
            n_action: 8,
            control_sup_width: 0.1,
            q_weight: 1.0,
            r_weight: 1.0,
            action_limit: None,
            observation_limit: None,
            reward_limit: None,
            seed: 0,
        }
    }
}

impl PdeConfig {
    /// Check every option before any operator is assembled.
    ///
    /// # Errors
    ///
    /// Returns [`PdeError::InvalidParameter`] for out-of-range scalars and
    /// [`PdeError::DimensionMismatch`] for a target state of the wrong length.
    pub fn validate(&self) -> Result<(), PdeError> {
        if self.n_state < 2 {
            return Err(PdeError::invalid("n_state", "must be at least 2"));
        }
        if self.n_action == 0 {
            return Err(PdeError::invalid("n_action", "must be at least 1"));
        }
        if self.n_observation == 0 || self.n_observation > self.n_state {
            return Err(PdeError::invalid(
                "n_observation",
                format!("must be in 1..={}", self.n_state),
            ));
        }
        positive("domain_length", self.domain_length)?;
        positive("integration_time", self.integration_time)?;
        positive("sample_time", self.sample_time)?;
        positive("control_sup_width", self.control_sup_width)?;
        non_negative("process_noise_cov", self.process_noise_cov)?;
        non_negative("sensor_noise_cov", self.sensor_noise_cov)?;
        non_negative("random_init_state_cov", self.random_init_state_cov)?;
        non_negative("Q_weight", self.q_weight)?;
        non_negative("R_weight", self.r_weight)?;
        for (name, limit) in [
            ("action_limit", self.action_limit),
            ("observation_limit", self.observation_limit),
            ("reward_limit", self.reward_limit),
        ] {
            if let Some(value) = limit {
                positive(name, value)?;
            }
        }
        if let Some(target) = &self.target_state {
            check_len("target_state", self.n_state, target.len())?;
        }
        Ok(())
    }
}

/// Fails unless `value` is finite and strictly positive.
///
/// # Errors
///
/// Returns [`PdeError::InvalidParameter`] tagged with `name`.
pub fn positive(name: &'static str, value: f64) -> Result<(), PdeError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PdeError::invalid(name, format!("must be positive and finite, got {value}")))
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), PdeError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PdeError::invalid(name, format!("must be non-negative and finite, got {value}")))
    }
}
