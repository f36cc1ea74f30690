// Recipe ingestion pipeline
// Turns recipes into descriptive text and writes them to the memory store

use crate::config::SinkConfig;
use crate::error::{Error, Result};
use crate::source::models::{Ingredients, Recipe};
use reqwest::Client;
use std::time::Duration;
use tracing::{error, info};

/// Build the text representation of a recipe for semantic search.
/// The more descriptive this is, the better the search results.
pub fn recipe_text(recipe: &Recipe) -> String {
    format!(
        "Recipe for {}. Category: {}. Glass: {}. Ingredients: {}. Instructions: {}",
        recipe.display_name(),
        recipe.category.as_deref().unwrap_or("Classic Cocktail"),
        recipe.glass.as_deref().unwrap_or("N/A"),
        joined_ingredients(recipe),
        recipe.instructions.as_deref().unwrap_or("N/A"),
    )
}

/// Normalize ingredients into a ", "-joined string.
///
/// A string value may itself be a JSON-encoded list; if it parses, it is
/// treated as that list, otherwise the whole string is a single ingredient.
fn joined_ingredients(recipe: &Recipe) -> String {
    match &recipe.ingredients {
        None => String::new(),
        Some(Ingredients::List(items)) => items.join(", "),
        Some(Ingredients::Text(raw)) => match serde_json::from_str::<Vec<String>>(raw) {
            Ok(items) => items.join(", "),
            Err(_) => raw.clone(),
        },
    }
}

/// Client for the memory store's ingestion endpoint.
pub struct MemorySink {
    client: Client,
    url: String,
    user_id: String,
    timeout: Duration,
}

impl MemorySink {
    pub fn new(config: &SinkConfig) -> Result<Self> {
        let client = Client::builder().build().map_err(Error::Http)?;

        Ok(Self {
            client,
            url: config.url.clone(),
            user_id: config.knowledge_base_user.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        })
    }

    /// Write one free-text memory under the knowledge-base identity.
    pub async fn store(&self, text: &str) -> Result<()> {
        let response = self
            .client
            .post(&self.url)
            .query(&[("user_id", self.user_id.as_str()), ("query", text)])
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Sink(format!(
                "HTTP {} from memory endpoint",
                response.status()
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub ingested: usize,
    pub failed: usize,
}

/// Sequential ingestion of fetched recipes.
pub struct Pipeline {
    sink: MemorySink,
}

impl Pipeline {
    pub fn new(sink: MemorySink) -> Self {
        Self { sink }
    }

    /// Ingest every recipe, one write per record, in fetch order.
    ///
    /// Failures are isolated per record: a failed write is logged with the
    /// recipe's name and skipped, never aborting the rest of the run.
    pub async fn run(&self, recipes: &[Recipe]) -> IngestReport {
        let mut report = IngestReport::default();

        for recipe in recipes {
            let text = recipe_text(recipe);
            info!("Ingesting: {}", recipe.display_name());

            match self.sink.store(&text).await {
                Ok(()) => {
                    info!("Ingested recipe: {}", recipe.display_name());
                    report.ingested += 1;
                }
                Err(e) => {
                    error!(
                        "Failed to ingest {}: {}",
                        recipe.display_name(),
                        e.log_safe()
                    );
                    report.failed += 1;
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(json: &str) -> Recipe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_recipe_text_joins_ingredient_list() {
        let r = recipe(
            r#"{
                "name": "Negroni",
                "category": "Aperitif",
                "glass": "Rocks",
                "ingredients": ["1 oz gin", "1 oz campari", "1 oz sweet vermouth"],
                "instructions": "Stir over ice and strain."
            }"#,
        );

        let text = recipe_text(&r);
        assert!(text.contains("1 oz gin, 1 oz campari, 1 oz sweet vermouth"));
        assert!(text.starts_with("Recipe for Negroni."));
        assert!(text.contains("Category: Aperitif."));
        assert!(text.contains("Glass: Rocks."));
        assert!(text.contains("Instructions: Stir over ice and strain."));
    }

    #[test]
    fn test_recipe_text_parses_serialized_ingredient_list() {
        let r = recipe(r#"{"name": "Daiquiri", "ingredients": "[\"rum\", \"lime\", \"sugar\"]"}"#);
        assert!(recipe_text(&r).contains("Ingredients: rum, lime, sugar."));
    }

    #[test]
    fn test_recipe_text_keeps_unparseable_string_as_one_ingredient() {
        let r = recipe(r#"{"name": "Mystery", "ingredients": "rum, lime, sugar"}"#);
        assert!(recipe_text(&r).contains("Ingredients: rum, lime, sugar."));

        let r = recipe(r#"{"name": "Mystery", "ingredients": "[not json"}"#);
        assert!(recipe_text(&r).contains("Ingredients: [not json."));
    }

    #[test]
    fn test_recipe_text_defaults_for_missing_fields() {
        let r = recipe(r#"{"name": "Bare Bones"}"#);
        let text = recipe_text(&r);

        assert!(text.contains("Category: Classic Cocktail."));
        assert!(text.contains("Glass: N/A."));
        assert!(text.ends_with("Instructions: N/A"));
    }

    #[test]
    fn test_recipe_text_missing_name() {
        let r = recipe(r#"{"category": "Sour"}"#);
        assert!(recipe_text(&r).starts_with("Recipe for N/A."));
    }
}
