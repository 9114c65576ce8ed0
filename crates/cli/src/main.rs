use crate::{commands::Commands, error::CliError};
use clap::Parser;
use engine::{
    config::SyncConfig,
    session::{SyncControl, SyncSession},
};
use tracing::{Level, error, info};

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(name = "leadsync", version = "0.1.0", about = "Incremental Marketo lead sync")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sync { config, output } => {
            let session = load_session(&config).await?;
            let columns = session.sync_columns()?;
            let mut writer = output::RowWriter::create(&columns, output)?;

            let stats = session
                .sync_leads(|row| match writer.write_row(&row) {
                    Ok(()) => SyncControl::Continue,
                    Err(err) => {
                        error!("Failed to write row: {err}");
                        SyncControl::Stop
                    }
                })
                .await?;
            writer.finish()?;

            info!(
                pages = stats.pages,
                records = stats.records,
                "sync finished"
            );
        }
        Commands::Guess { config } => {
            let session = load_session(&config).await?;
            let columns = session.guess_schema().await?;
            let json = serde_json::to_string_pretty(&columns).map_err(CliError::JsonSerialize)?;
            println!("{json}");
        }
        Commands::Activities { config } => {
            let session = load_session(&config).await?;
            for activity in session.fetch_activities().await? {
                let json = serde_json::to_string(&activity).map_err(CliError::JsonSerialize)?;
                println!("{json}");
            }
        }
    }

    Ok(())
}

async fn load_session(path: &str) -> Result<SyncSession, CliError> {
    let raw = tokio::fs::read_to_string(path).await?;
    let config = SyncConfig::from_json(&raw)?;
    Ok(SyncSession::new(config)?)
}
