//! Solves a random SPD system with conjugate gradient and prints the result.

use std::process::ExitCode;

use clap::Parser;
use conjugate_gradient::demo::{self, DemoConfig, RESIDUAL_CHECK_EPSILON};
use conjugate_gradient::errors::CgError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cg-demo")]
#[command(about = "Solve a random symmetric positive-definite system with conjugate gradient", long_about = None)]
struct Cli {
    /// Number of rows (and columns) of the positive-definite matrix A
    #[arg(short = 'n', long = "dimension", default_value_t = 10)]
    dimension: usize,

    /// RNG seed; omit for a fresh random system
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stopping tolerance on ||A x - b||
    #[arg(short, long, default_value_t = 1e-6)]
    tol: f64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<&Cli> for DemoConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            dimension: cli.dimension,
            seed: cli.seed,
            tolerance: cli.tol,
        }
    }
}

fn main() -> Result<ExitCode, CgError> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let outcome = demo::run(&DemoConfig::from(&cli))?;

    println!("A = {:.4}", outcome.matrix);
    println!("b transpose: {:.4}", outcome.rhs.transpose());
    println!("xhat transpose: {:.6}", outcome.report.solution().transpose());

    if !outcome.report.converged() {
        tracing::warn!("not converged ({:?})", outcome.report.status());
        return Ok(ExitCode::FAILURE);
    }

    println!(
        "A @ xhat = b ?: {} (eps = {RESIDUAL_CHECK_EPSILON:e}, ||A xhat - b|| = {:.3e}, iterations = {})",
        outcome.matches_rhs,
        outcome.residual_norm,
        outcome.report.iterations(),
    );

    Ok(ExitCode::SUCCESS)
}
