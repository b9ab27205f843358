//! Command-line interface for connect6.

use clap::Parser;
use connect6::Topology;

/// Connect6 - place two stones per turn, six in a row wins
#[derive(Parser, Debug)]
#[command(name = "connect6")]
#[command(about = "Two-player stone placement game on standard or torus boards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board topology: standard (hard edges) or torus (wrap around)
    #[arg(short, long)]
    pub mode: Option<Topology>,

    /// Board side length
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Stones in a row needed to win
    #[arg(short, long)]
    pub win_length: Option<usize>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Log filter, e.g. "debug" or "connect6_engine=trace" (overrides RUST_LOG)
    #[arg(long)]
    pub log_level: Option<String>,
}
