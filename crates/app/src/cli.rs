//! Command-line argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// diskcheck - conformance checks for the Yandex Disk folder API
///
/// Creates, reads and deletes folders through the resource endpoint and
/// checks the status codes the service answers with. Needs
/// `YANDEX_DISK_TOKEN` in the environment or in a `.env` file.
#[derive(Parser, Debug)]
#[command(name = "diskcheck")]
#[command(version)]
#[command(about = "Conformance checks for the Yandex Disk folder API", long_about = None)]
pub struct Cli {
    /// Run only scenarios whose id or title contains this text
    #[arg(short, long, value_name = "TEXT")]
    pub filter: Option<String>,

    /// List scenarios without running them
    #[arg(long)]
    pub list: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Env file to load instead of searching for `.env`
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Resource endpoint (overrides `DISKCHECK_BASE_URL`)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Increase log verbosity on stderr (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// How the suite report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per scenario, then failures and a summary.
    Text,
    /// The full report as JSON.
    Json,
}

impl Cli {
    /// Default log filter for the chosen verbosity. `RUST_LOG` wins.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
