//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Replay a gesture script on a board and write the result as SVG.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "sketchboard", version, about)]
pub struct CliArgs {
    /// Gesture script to replay.
    #[arg(required_unless_present = "shortcuts")]
    pub script: Option<PathBuf>,

    /// Host configuration file (JSON).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output file (stdout if unset).
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Print the shortcut table.
    #[arg(long)]
    pub shortcuts: bool,
}
