use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Recipe source error: {0}")]
    Source(String),

    #[error("Memory sink error: {0}")]
    Sink(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get a sanitized error message safe for logging
    /// Filters out potentially sensitive information
    pub fn log_safe(&self) -> String {
        match self {
            // HTTP errors might contain internal URLs or authentication info
            Error::Http(_) => "External HTTP request failed".to_string(),

            // These errors are generally safe to log as-is
            Error::Source(msg) => format!("Recipe source error: {msg}"),
            Error::Sink(msg) => format!("Memory sink error: {msg}"),
            Error::Json(e) => format!("JSON error: {e}"),
            Error::InvalidUrl(_) => "Invalid URL provided".to_string(),
            Error::Config(msg) => {
                // Filter out common sensitive patterns
                if msg.to_lowercase().contains("token")
                    || msg.to_lowercase().contains("secret")
                    || msg.to_lowercase().contains("key")
                {
                    "Configuration error (details redacted)".to_string()
                } else {
                    format!("Configuration error: {msg}")
                }
            }
        }
    }
}
