//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "georeg")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect, validate and render geodetic registry items")]
pub(crate) struct Cli {
    /// Configuration file (TOML, JSON or YAML); `GEOREG__*` variables override it
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// List the registered item classes
    Classes {},
    /// Print the default payload of a class
    Defaults {
        /// Class id, e.g. `crs--vertical`
        class: String,
    },
    /// Check a payload; exits with status 1 when it is rejected
    Validate { class: String, file: PathBuf },
    /// Print the sanitized form of a payload
    Sanitize { class: String, file: PathBuf },
    /// Render the detail view of a payload as text
    Show {
        class: String,
        file: PathBuf,
        /// Item directory laid out as `<classID>/<itemID>.json`, used to resolve references
        #[arg(short, long)]
        items: Option<PathBuf>,
    },
}
