use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "fp")]
#[command(about = "Administration portal CLI: sessions, users, form results")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Backend URL (overrides the configured api.base_url)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,
}
