#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod logging;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, compute, print_output};

    let args = Args::parse();
    logging::init_cli_logger(args.verbose);
    tracing::debug!(command = ?args.command, json = args.json, "parsed arguments");

    let out = compute(&args.command)?;

    print_output(&out, &args)?;

    Ok(())
}
