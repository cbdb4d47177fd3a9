//! # pdegym
//!
//! Command-line front end for the PDE control environments. Builds an
//! environment from a JSON configuration and reports either its parameter
//! dictionary or a summary of its Fourier-space operators evaluated at the
//! initial state. Reports go to stdout as JSON, logs go to stderr.

mod app;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = app::Cli::parse();
    app::run(cli)
}
