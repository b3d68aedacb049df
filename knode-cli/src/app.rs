use std::path::PathBuf;

use clap::Parser;

/// knode - inspect Kronark node (.knode) files
#[derive(Debug, Parser)]
#[command(name = "knode", version, about, long_about = None)]
pub struct Cli {
    /// Path to the .knode file.
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Emit output as JSON instead of human-readable text.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long)]
    pub verbose: bool,
}
