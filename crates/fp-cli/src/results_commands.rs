use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ResultsCommands {
    /// Show the form links assigned to the logged-in account
    Links {
        /// Re-read the links from the backend instead of the stored session
        #[arg(long)]
        refresh: bool,
    },

    /// Fetch a form's result sheet and print it
    Fetch {
        /// Form slot to fetch (1-3)
        #[arg(long)]
        form: usize,

        /// Also export the results as CSV
        #[arg(long)]
        csv: bool,

        /// Also export the results as PDF
        #[arg(long)]
        pdf: bool,

        /// Directory exports are written into (default: configured export dir)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}
