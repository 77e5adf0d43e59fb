//! # Armatura CLI
//!
//! Command-line front end for the `armatura_core` section design engine.
//!
//! ```text
//! armatura reference
//! armatura design --h 0.7 --b 0.5 --c 0.07 --c-prime 0.07 --class C40/50 --med 700
//! armatura design --input section.json --json
//! armatura project new job.arm --engineer "Jane" --job-id 25-042 --client ACME
//! armatura project add job.arm --input section.json
//! armatura project run job.arm
//! ```
//!
//! Logs go to stderr. `--verbose` enables debug output; `ARMATURA_LOG`
//! accepts any `tracing` filter directive and takes precedence.

mod cli;
mod output;

use anyhow::Result;
use armatura_core::calculations::{calculate, SectionInput};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

const LOG_ENV: &str = "ARMATURA_LOG";

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "armatura=debug,armatura_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Design(args) => cli::design::run(args),
        Commands::Reference(args) => output::emit(&calculate(&SectionInput::reference()), args.json),
        Commands::Project(args) => cli::project::run(args),
    }
}
