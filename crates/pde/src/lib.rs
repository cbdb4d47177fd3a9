#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # PDE Environments
//!
//! Base layer for the pseudo-spectral PDE control environments.
//!
//! A PDE environment evolves a real field sampled on a periodic 1-D grid.
//! Agents act on the field through a fixed set of actuators and observe it
//! through a fixed set of sensors. This crate provides the pieces every
//! such environment shares:
//!
//! -   **Configuration:** [`PdeConfig`] carries the construction options and
//!     validates them before anything is assembled.
//! -   **Grid:** [`Domain`] holds the coordinates and Fourier wavenumbers.
//! -   **Operators:** [`compute_control_sup`] and
//!     [`compute_observation_matrix`] build the actuation and sensing
//!     matrices.
//! -   **Environment:** [`PdeEnv`] owns the state, the target and the cached
//!     projections.
//! -   **Dynamics:** the [`PdeDynamics`] and [`NonlinearOp`] traits are the
//!     seam between a concrete equation and the integrator.

pub mod config;
pub mod domain;
pub mod dynamics;
pub mod env;
pub mod error;
pub mod operators;

pub use config::PdeConfig;
pub use domain::Domain;
pub use dynamics::{NonlinearOp, PdeDynamics};
pub use env::{PdeEnv, PdeParams};
pub use error::{check_len, PdeError};
pub use operators::{compute_control_sup, compute_observation_matrix, sensor_index};
