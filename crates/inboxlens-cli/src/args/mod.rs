mod commands;
mod common;
mod enums;
pub mod hints;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "inboxlens")]
#[command(about = "Review automated email classification results", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Config file [default: $INBOXLENS_CONFIG or <config dir>/inboxlens/config.toml]"
    )]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(
        long,
        global = true,
        help = "Fail on an unreadable payload instead of showing the default record"
    )]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}
