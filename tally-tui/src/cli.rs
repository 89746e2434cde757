use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "tally-tui")]
#[command(about = "Terminal time tracker for a handful of tasks")]
pub struct Cli {
    /// Override the configured log level (e.g. "debug")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the tracker (default)
    Run,
    /// Print config path and create default file if missing
    ConfigPath,
}
