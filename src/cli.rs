//! Command-line options for the `strategos` binary.

use std::path::PathBuf;

use clap::Parser;

/// Two-player terminal board game: chess moves, go-style territory
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "strategos")]
#[command(about = "Chess moves on an 11x11 board, scored by territory", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Write logs to this file (no logging otherwise; the terminal is taken by the game)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `strategos_core=trace`; overrides RUST_LOG
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Start on the board instead of the title screen
    #[arg(long)]
    pub skip_title: bool,
}
