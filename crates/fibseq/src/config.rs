//! Application configuration from CLI flags and environment.

use clap::Parser;

/// fibseq — Fibonacci sequence cache with a closed-form consistency scan.
#[derive(Parser, Debug)]
#[command(name = "fibseq", version, about)]
pub struct AppConfig {
    /// Highest index to probe before stopping a clean scan.
    #[arg(short, long, default_value = "1000", env = "FIBSEQ_LIMIT")]
    pub limit: u64,

    /// Verbose output (per-index scan trace on stderr).
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (suppress the sequence dump and the clean-scan notice).
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the sequence dump to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
