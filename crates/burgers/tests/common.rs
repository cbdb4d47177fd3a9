#![allow(dead_code)]

use burgers::BurgersConfig;
use ndarray::Array1;
use pde::PdeConfig;
use spectral::Complex64;

pub fn small_config() -> BurgersConfig {
    BurgersConfig {
        pde: PdeConfig {
            n_state: 64,
            n_observation: 8,
            n_action: 4,
            ..PdeConfig::default()
        },
        ..BurgersConfig::default()
    }
}

pub fn max_abs_diff(a: &Array1<Complex64>, b: &Array1<Complex64>) -> f64 {
    assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).norm()).fold(0.0, f64::max)
}
