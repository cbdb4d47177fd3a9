//! # Periodic Domain
//!
//! Grid coordinates and Fourier wavenumbers for a 1-D periodic domain.

use std::f64::consts::PI;

use ndarray::Array1;
use spectral::retained_modes;

/// Fixed spatial grid of a PDE environment.
///
/// Coordinates are `j * L / n` for `j = 0..n` (the right end point is the
/// periodic image of the left one). Wavenumbers are the angular frequencies
/// `2π m / L` of the `n/2 + 1` modes kept by a real FFT.
#[derive(Clone, Debug, PartialEq)]
pub struct Domain {
    length: f64,
    coordinates: Array1<f64>,
    wavenumbers: Array1<f64>,
}

impl Domain {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(length: f64, n_state: usize) -> Self {
        let spacing = length / n_state as f64;
        let coordinates = Array1::from_shape_fn(n_state, |j| j as f64 * spacing);
        let wavenumbers =
            Array1::from_shape_fn(retained_modes(n_state), |m| 2.0 * PI * m as f64 / length);
        Self {
            length,
            coordinates,
            wavenumbers,
        }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[must_use]
    pub fn n_state(&self) -> usize {
        self.coordinates.len()
    }

    /// Number of retained Fourier modes.
    #[must_use]
    pub fn n_modes(&self) -> usize {
        self.wavenumbers.len()
    }

    #[must_use]
    pub fn coordinates(&self) -> &Array1<f64> {
        &self.coordinates
    }

    #[must_use]
    pub fn wavenumbers(&self) -> &Array1<f64> {
        &self.wavenumbers
    }

    /// Shortest distance between two points on the periodic domain.
    #[must_use]
    pub fn periodic_distance(&self, a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(self.length);
        d.min(self.length - d)
    }
}
