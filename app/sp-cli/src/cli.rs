use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "support-plus")]
#[command(about = "Support Plus identity, profile and benefits shell")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
