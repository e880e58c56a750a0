use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "feedwatch")]
#[command(version)]
#[command(about = "Forward new community feed activity to a notifier")]
pub struct Cli {
    /// Config file (defaults to ~/.feedwatch/feedwatch.json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Poll the feed on the configured interval until interrupted
    Run,

    /// Run a single polling cycle and exit
    Check,

    /// Show seen-store status
    Status,

    /// Print version information
    Version,
}
