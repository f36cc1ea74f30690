use serde::Deserialize;

/// A drink recipe as served by the recipe API.
///
/// Every field is optional; the API has no schema guarantees and the
/// ingestion text falls back to placeholder values for anything missing.
#[derive(Debug, Clone, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub glass: Option<String>,
    #[serde(default)]
    pub ingredients: Option<Ingredients>,
    #[serde(default)]
    pub instructions: Option<String>,
}

impl Recipe {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("N/A")
    }
}

/// Ingredients arrive either as a proper list or as a single string,
/// which may itself be a JSON-encoded list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Ingredients {
    List(Vec<String>),
    Text(String),
}

/// The listing endpoint responds in one of three shapes: a paginated
/// envelope, a `recipes` wrapper, or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListingResponse {
    Paged {
        data: Vec<Recipe>,
        #[serde(default)]
        pagination: Option<Pagination>,
    },
    Wrapped {
        recipes: Vec<Recipe>,
    },
    Bare(Vec<Recipe>),
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(rename = "hasNextPage", default)]
    pub has_next_page: bool,
}
