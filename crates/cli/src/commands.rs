use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the incremental lead sync and emit CSV rows.
    Sync {
        /// Path to the JSON sync configuration.
        #[arg(short, long)]
        config: String,

        /// Write rows here instead of stdout.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Derive output columns from the remote field catalog.
    Guess {
        /// Path to the JSON sync configuration.
        #[arg(short, long)]
        config: String,
    },

    /// Print lead-change activity since the configured watermark.
    Activities {
        /// Path to the JSON sync configuration.
        #[arg(short, long)]
        config: String,
    },
}
