use clap::Parser;
use plx_config::GeneralConfig;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `plx` binary.
#[derive(Debug, Parser)]
#[command(name = "plx", version, about = "PlatifyX - developer portal from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to general.default_output)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self, general: &GeneralConfig) -> GlobalFlags {
        let format = self.format.unwrap_or_else(|| {
            OutputFormat::from_config(&general.default_output).unwrap_or_else(|| {
                tracing::warn!(
                    value = %general.default_output,
                    "unknown general.default_output, using json"
                );
                OutputFormat::Json
            })
        });
        GlobalFlags {
            format,
            limit: self.limit,
            default_limit: general.default_limit,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
