use crate::config::Settings;
use crate::enrich::{QueryEnricher, Vocabulary};
use crate::ingest::{MemorySink, Pipeline};
use crate::source::RecipeSource;
use crate::{Error, Result};
use tracing::{error, info};

/// Fetch the full recipe catalog and ingest it into the memory store.
pub async fn ingest(settings: &Settings) -> Result<()> {
    // The listing endpoint rejects unauthenticated requests, so fail
    // before any network activity
    if settings.source.token.is_empty() {
        eprintln!("RECIPE_SOURCE_TOKEN is not set.");
        eprintln!("Set it as an environment variable:");
        eprintln!("  export RECIPE_SOURCE_TOKEN='your_token_here'");
        eprintln!("\nTo get a token:");
        eprintln!("  1. Start the recipe API backend");
        eprintln!("  2. Login to the UI");
        eprintln!("  3. Open browser DevTools > Application > Local Storage");
        eprintln!("  4. Copy the 'token' value");
        return Err(Error::Config(
            "RECIPE_SOURCE_TOKEN is required for ingestion".to_string(),
        ));
    }

    info!("Starting recipe ingestion");

    let source = RecipeSource::new(&settings.source)?;
    let recipes = match source.fetch_all().await {
        Ok(recipes) => recipes,
        Err(e) => {
            // A fetch failure aborts the whole run but is not a process
            // failure: nothing is ingested and we exit cleanly
            error!("Failed to fetch recipes: {}", e.log_safe());
            error!("Ensure the recipe API is running and the token is valid");
            return Ok(());
        }
    };

    if recipes.is_empty() {
        info!("Source has no recipes, nothing to ingest");
        return Ok(());
    }

    info!("Ingesting {} recipes into the knowledge base", recipes.len());

    let sink = MemorySink::new(&settings.sink)?;
    let report = Pipeline::new(sink).run(&recipes).await;

    println!(
        "Ingestion complete: {} ingested, {} failed",
        report.ingested, report.failed
    );

    Ok(())
}

/// Print the enriched search string for a raw user query.
pub fn enrich(query: &str) -> Result<()> {
    let enricher = QueryEnricher::new(Vocabulary::default());
    let enriched = enricher.enrich(query);

    println!("{enriched}");

    Ok(())
}
