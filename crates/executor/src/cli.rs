use clap::Parser;
use std::path::PathBuf;

use super::types::InputFormat;

/// Find the minimum-weight directed cycle of a weighted graph file
#[derive(Parser, Debug)]
#[command(name = "shortest-cycle")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Find the minimum-weight directed cycle of a weighted graph file", long_about = None)]
pub struct Cli {
    /// Graph file (`u: v w ...` lines, or `from,to,weight` CSV)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Input format; detected from the file extension when omitted
    #[arg(long = "format", short = 'f', value_enum)]
    pub format: Option<InputFormat>,

    /// Number of search workers (0 = one per core)
    #[arg(long = "workers", short = 'w')]
    pub workers: Option<usize>,

    /// Give up after this many milliseconds (0 = no deadline)
    #[arg(long = "deadline-ms")]
    pub deadline_ms: Option<u64>,

    /// Also print the vertices of the cycle
    #[arg(long = "show-path")]
    pub show_path: bool,

    /// Configuration file (defaults to crates/executor/Config.toml if present)
    #[arg(long = "config", short = 'c')]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,
}

impl Cli {
    pub fn input_format(&self) -> InputFormat {
        self.format
            .unwrap_or_else(|| InputFormat::detect(&self.input))
    }
}
