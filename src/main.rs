use barkeep::{
    cli::{commands, Cli, Commands},
    config::Settings,
    Result,
};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    // Silently ignore if file doesn't exist
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,barkeep=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let mut settings = Settings::from_env()?;
    settings.validate()?;

    // Handle commands
    match cli.command {
        Commands::Ingest { page_size } => {
            if let Some(page_size) = page_size {
                settings.source.page_size = page_size;
                settings.validate()?;
            }
            commands::ingest(&settings).await?;
        }
        Commands::Enrich { query } => {
            commands::enrich(&query)?;
        }
    }

    Ok(())
}
