//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Trunk-and-branch project timeline renderer.
///
/// Reads a JSON list of projects and draws a horizontal trunk whose
/// thickness tracks how many projects are active at once, with a labeled
/// branch mark at each project's end date.
#[derive(Debug, Parser)]
#[command(name = "tl", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render projects to an SVG document.
    Render {
        /// Path to the projects JSON file.
        projects: PathBuf,

        /// Output file (stdout when omitted).
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Canvas width override.
        #[arg(long)]
        width: Option<f64>,

        /// Canvas height override.
        #[arg(long)]
        height: Option<f64>,

        /// Horizontal padding override.
        #[arg(long)]
        padding: Option<f64>,
    },

    /// Show the computed timeline entries without rendering.
    Entries {
        /// Path to the projects JSON file.
        projects: PathBuf,

        /// Output as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}
