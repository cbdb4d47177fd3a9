//! # Actuation and Sensing Operators
//!
//! Builders for the two fixed matrices that couple a PDE state to an agent:
//! the control support (actions to spatial forcing) and the observation
//! matrix (state to measurements). Both depend only on the grid and the
//! construction options, never on the instantaneous state.

use ndarray::Array2;

use crate::domain::Domain;

/// Control support matrix of shape `n_state x n_action`.
///
/// Actuator `i` sits at `(i + 1/2) L / n_action` and acts through the smooth
/// compact bump `exp(1 - 1/(1 - r²))`, where `r` is the periodic distance to
/// the actuator center divided by half of `control_sup_width`. Entries lie in
/// `[0, 1]` and equal `1` exactly at a grid point coinciding with a center.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute_control_sup(domain: &Domain, n_action: usize, control_sup_width: f64) -> Array2<f64> {
    let spacing = domain.length() / n_action as f64;
    let half_width = 0.5 * control_sup_width;
    let x = domain.coordinates();

    let control_sup = Array2::from_shape_fn((domain.n_state(), n_action), |(j, i)| {
        let center = (i as f64 + 0.5) * spacing;
        let r = domain.periodic_distance(x[j], center) / half_width;
        bump(r)
    });
    tracing::debug!(n_action, control_sup_width, "computed control support");
    control_sup
}

/// Observation matrix of shape `n_observation x n_state`.
///
/// Sensors are point samplers: row `i` reads grid index
/// `floor((i + 1/2) n_state / n_observation)`.
#[must_use]
pub fn compute_observation_matrix(n_observation: usize, n_state: usize) -> Array2<f64> {
    let mut c = Array2::zeros((n_observation, n_state));
    for i in 0..n_observation {
        c[[i, sensor_index(i, n_observation, n_state)]] = 1.0;
    }
    tracing::debug!(n_observation, n_state, "computed observation matrix");
    c
}

/// Grid index read by sensor `i`.
#[must_use]
pub fn sensor_index(i: usize, n_observation: usize, n_state: usize) -> usize {
    ((2 * i + 1) * n_state) / (2 * n_observation)
}

fn bump(r: f64) -> f64 {
    if r < 1.0 {
        (1.0 - 1.0 / (1.0 - r * r)).exp()
    } else {
        0.0
    }
}
