use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// List all accounts
    List,

    /// Update an account's editable fields
    Update {
        /// User ID
        id: i64,

        /// New username
        #[arg(long)]
        username: Option<String>,

        /// New email
        #[arg(long)]
        email: Option<String>,

        /// Published-form link, slot 1 (empty string clears it)
        #[arg(long)]
        form_link1: Option<String>,

        /// Published-form link, slot 2 (empty string clears it)
        #[arg(long)]
        form_link2: Option<String>,

        /// Published-form link, slot 3 (empty string clears it)
        #[arg(long)]
        form_link3: Option<String>,

        /// Power BI dashboard link (empty string clears it)
        #[arg(long)]
        powerbi_link: Option<String>,
    },

    /// Delete an account
    Delete {
        /// User ID
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Register a new account
    Register {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account username
        #[arg(long)]
        username: String,

        /// Account password
        #[arg(long)]
        password: String,
    },
}
