//! # CLI
//!
//! Command-line definition using `clap` derive.
//!
//! ## Commands
//! - `design`: design one section from a JSON file or from flags
//! - `reference`: design the documented reference section
//! - `project`: create, edit and run `.arm` project files

pub mod design;
pub mod project;

use clap::{Args, Parser, Subcommand};

/// Armatura - reinforced-concrete section design (EN 1992-1-1)
#[derive(Parser, Debug)]
#[command(name = "armatura")]
#[command(version)]
#[command(about = "Design longitudinal reinforcement of rectangular RC sections", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (overridden by ARMATURA_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Design a single section
    Design(design::DesignArgs),

    /// Design the reference section (0.5 x 0.7 m, C40/50, Med = 700 kN·m)
    Reference(ReferenceArgs),

    /// Manage project files
    Project(project::ProjectArgs),
}

#[derive(Args, Debug)]
pub struct ReferenceArgs {
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}
