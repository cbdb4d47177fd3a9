//! # pdegym Application Logic
//!
//! Parses the command line, loads the environment configuration and runs the
//! selected report. Configuration comes from an optional JSON file in the
//! same flat format as the parameter dictionary; `--seed` and `--init-mode`
//! override the file.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use burgers::{oversampled_len, BurgersConfig, BurgersEnv, InitMode};
use clap::{Args, Parser, Subcommand};
use ndarray::Array1;
use pde::{NonlinearOp, PdeDynamics};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "pdegym", version, about = "Burgers' equation control environment")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the parameter dictionary of the configured environment
    Params(EnvArgs),
    /// Evaluate the Fourier-space operators at the initial state
    Operators(EnvArgs),
}

#[derive(Args, Debug)]
pub struct EnvArgs {
    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Override the configured seed
    #[arg(long)]
    pub seed: Option<u64>,
    /// Override the initial condition (`fixed_pulse` or `random_uniform`)
    #[arg(long)]
    pub init_mode: Option<InitMode>,
}

/// Summary of the operators at the initial state with zero action
#[derive(Serialize, Debug)]
struct OperatorReport {
    n_state: usize,
    n_modes: usize,
    oversampled_len: usize,
    diffusivity_constant: f64,
    init_mode: InitMode,
    max_linear_decay: f64,
    advection_l2: f64,
    rhs_max_abs: f64,
    projected_target: Vec<f64>,
}

/// Run the command selected on the command line.
///
/// # Errors
///
/// Returns configuration, construction and output errors.
pub fn run(cli: Cli) -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    match cli.command {
        Command::Params(args) => {
            let env = build_env(&args)?;
            emit(&env.params())
        }
        Command::Operators(args) => {
            let env = build_env(&args)?;
            emit(&operator_report(&env)?)
        }
    }
}

fn load_config(args: &EnvArgs) -> Result<BurgersConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => BurgersConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.pde.seed = seed;
    }
    if let Some(mode) = args.init_mode {
        config.init_mode = mode;
    }
    Ok(config)
}

fn build_env(args: &EnvArgs) -> Result<BurgersEnv> {
    let config = load_config(args)?;
    BurgersEnv::new(config).context("invalid environment configuration")
}

fn operator_report(env: &BurgersEnv) -> Result<OperatorReport> {
    let base = env.base();
    let linear = env.fourier_linear_op();
    let nonlinear = env.fourier_nonlinear_op()?;
    let u_hat = base.to_fourier(base.state().view())?;
    let zero_action = Array1::<f64>::zeros(base.n_action());

    let advection = nonlinear.advection(u_hat.view())?;
    let rhs = nonlinear.apply(u_hat.view(), zero_action.view())?;

    let report = OperatorReport {
        n_state: base.n_state(),
        n_modes: linear.len(),
        oversampled_len: oversampled_len(base.n_state()),
        diffusivity_constant: env.diffusivity_constant(),
        init_mode: env.init_mode(),
        max_linear_decay: linear.iter().fold(0.0_f64, |acc, &l| acc.max(-l)),
        advection_l2: advection.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt(),
        rhs_max_abs: rhs.iter().fold(0.0_f64, |acc, c| acc.max(c.norm())),
        projected_target: base.c_target_state().to_vec(),
    };
    tracing::info!(
        advection_l2 = report.advection_l2,
        rhs_max_abs = report.rhs_max_abs,
        "evaluated operators at initial state"
    );
    Ok(report)
}

fn emit<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
