#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Spectral Transforms
//!
//! Real-signal FFT plumbing for the pseudo-spectral PDE environments.
//!
//! The transforms follow the numpy conventions the benchmark environments
//! were calibrated against:
//!
//! -   [`RealFft::rfft`] is unnormalized and keeps the `n/2 + 1`
//!     non-negative frequency modes of a real signal.
//! -   [`RealFft::irfft`] is normalized by `1/n`, zero pads or truncates the
//!     incoming spectrum to `n/2 + 1` modes, and drops the imaginary part of
//!     the self-conjugate modes (DC, and Nyquist for even `n`).
//!
//! Because [`RealFft::irfft`] accepts a spectrum planned for a different
//! grid size, the same type covers both regular transforms and the
//! oversampled evaluations used for dealiasing.

mod real_fft;

pub use num_complex::Complex64;
pub use real_fft::{retained_modes, RealFft};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpectralError {
    #[error("signal length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("cannot plan a transform over zero points")]
    EmptyTransform,
}
