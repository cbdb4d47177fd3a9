#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Burgers Environment
//!
//! Fourier-space dynamics of the viscous Burgers' equation
//!
//! `du/dt = d u_xx - u u_x + B a`
//!
//! on a periodic domain, where `B` is the control support and `a` the
//! action. The environment exposes the two operators an exponential or
//! Runge-Kutta integrator needs:
//!
//! -   the diagonal diffusion operator `-d k²` ([`fourier_linear_op`]), and
//! -   the dealiased advection plus control forcing
//!     ([`FourierNonlinearOp`]).
//!
//! ```rust,ignore
//! use burgers::{BurgersConfig, BurgersEnv};
//! use pde::{NonlinearOp, PdeDynamics};
//!
//! let env = BurgersEnv::new(BurgersConfig::default())?;
//! let linear = env.fourier_linear_op();
//! let nonlinear = env.fourier_nonlinear_op()?;
//! let u_hat = env.base().to_fourier(env.base().state().view())?;
//! let rhs = nonlinear.apply(u_hat.view(), ndarray::Array1::zeros(8).view())?;
//! ```

pub mod config;
pub mod env;
pub mod init;
pub mod linear;
pub mod nonlinear;

pub use config::{BurgersConfig, BurgersParams, DEFAULT_DIFFUSIVITY};
pub use env::{BurgersEnv, ENV_ID};
pub use init::{random_uniform, resolve_initial_state, sech_pulse, InitMode, ParseInitModeError};
pub use linear::fourier_linear_op;
pub use nonlinear::{oversampled_len, FourierNonlinearOp, ANTI_ALIASING_FACTOR};
