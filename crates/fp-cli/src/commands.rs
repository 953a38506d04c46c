use crate::{results_commands::ResultsCommands, user_commands::UserCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Authenticate and persist the session
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Drop the persisted session
    Logout,

    /// Show the active session
    Whoami,

    /// User administration (superuser only)
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Published-form results: list links, fetch, export
    Results {
        #[command(subcommand)]
        action: ResultsCommands,
    },

    /// Print the assigned Power BI dashboard link
    Dashboard,

    /// Print the informational page on staff turnover
    Blog,
}
