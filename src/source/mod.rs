// Recipe source client
// Pulls the full recipe catalog from the paginated listing endpoint

pub mod models;

use crate::config::SourceConfig;
use crate::error::{Error, Result};
use models::{ListingResponse, Recipe};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// HTTP client for the recipe listing API.
pub struct RecipeSource {
    client: Client,
    url: String,
    token: String,
    page_size: usize,
}

impl RecipeSource {
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(Error::Http)?;

        Ok(Self {
            client,
            url: config.url.clone(),
            token: config.token.clone(),
            page_size: config.page_size,
        })
    }

    /// Fetch every recipe the source knows about, following pagination.
    ///
    /// Pages are requested starting at 1 and accumulated in fetch order
    /// until the pagination metadata reports no next page. Responses
    /// without pagination metadata are treated as a single page. Any
    /// transport or parse failure aborts the whole fetch; an `Ok` with an
    /// empty vec means the source genuinely has nothing to offer.
    pub async fn fetch_all(&self) -> Result<Vec<Recipe>> {
        info!("Fetching recipes from {}", self.url);

        let mut all_recipes = Vec::new();
        let mut page: usize = 1;

        loop {
            let listing = self.fetch_page(page).await?;

            match listing {
                ListingResponse::Paged { data, pagination } => {
                    let fetched = data.len();
                    all_recipes.extend(data);
                    info!(
                        "Fetched page {}: {} recipes (total so far: {})",
                        page,
                        fetched,
                        all_recipes.len()
                    );

                    match pagination {
                        Some(p) if p.has_next_page => page += 1,
                        // No next page, or no pagination metadata at all
                        _ => break,
                    }
                }
                ListingResponse::Wrapped { recipes } => {
                    all_recipes = recipes;
                    break;
                }
                ListingResponse::Bare(recipes) => {
                    all_recipes = recipes;
                    break;
                }
            }
        }

        info!("Successfully fetched {} recipes total", all_recipes.len());
        Ok(all_recipes)
    }

    async fn fetch_page(&self, page: usize) -> Result<ListingResponse> {
        debug!("Requesting page {} (limit {})", page, self.page_size);

        let response = self
            .client
            .get(&self.url)
            .bearer_auth(&self.token)
            .query(&[("limit", self.page_size), ("page", page)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Source(format!(
                "HTTP {} from listing endpoint",
                response.status()
            )));
        }

        let listing = response.json::<ListingResponse>().await?;
        Ok(listing)
    }
}
