use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub source: SourceConfig,
    pub sink: SinkConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub url: String,
    pub token: String,
    pub page_size: usize,
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinkConfig {
    pub url: String,
    pub timeout_seconds: u64,
    pub knowledge_base_user: String,
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let source_url = std::env::var("RECIPE_SOURCE_URL")
            .unwrap_or_else(|_| "http://localhost:3000/api/recipes".to_string());

        let token = std::env::var("RECIPE_SOURCE_TOKEN").unwrap_or_default();

        let page_size = std::env::var("PAGE_SIZE")
            .unwrap_or_else(|_| "100".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid PAGE_SIZE value".to_string()))?;

        let sink_url = std::env::var("MEMORY_SINK_URL")
            .unwrap_or_else(|_| "http://localhost:8001/memory".to_string());

        let timeout_seconds = std::env::var("SINK_TIMEOUT")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid SINK_TIMEOUT value".to_string()))?;

        // A system-level namespace so ingested recipes are retrievable by all users
        let knowledge_base_user = std::env::var("KNOWLEDGE_BASE_USER")
            .unwrap_or_else(|_| "system_knowledge_base".to_string());

        Ok(Settings {
            source: SourceConfig {
                url: source_url,
                token,
                page_size,
                user_agent: format!("Barkeep/{}", env!("CARGO_PKG_VERSION")),
            },
            sink: SinkConfig {
                url: sink_url,
                timeout_seconds,
                knowledge_base_user,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.source.page_size == 0 {
            return Err(Error::Config("Page size must be non-zero".to_string()));
        }

        if self.sink.timeout_seconds == 0 {
            return Err(Error::Config("Sink timeout must be non-zero".to_string()));
        }

        validate_endpoint("RECIPE_SOURCE_URL", &self.source.url)?;
        validate_endpoint("MEMORY_SINK_URL", &self.sink.url)?;

        Ok(())
    }
}

fn validate_endpoint(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value)?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::Config(format!(
            "{name} must use http or https, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings() -> Settings {
        Settings {
            source: SourceConfig {
                url: "http://localhost:3000/api/recipes".to_string(),
                token: "test-token".to_string(),
                page_size: 100,
                user_agent: "test".to_string(),
            },
            sink: SinkConfig {
                url: "http://localhost:8001/memory".to_string(),
                timeout_seconds: 30,
                knowledge_base_user: "system_knowledge_base".to_string(),
            },
        }
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = test_settings();
        assert!(settings.validate().is_ok());

        settings.source.page_size = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_validation_rejects_zero_timeout() {
        let mut settings = test_settings();
        settings.sink.timeout_seconds = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_validation_rejects_bad_scheme() {
        let mut settings = test_settings();
        settings.sink.url = "ftp://localhost/memory".to_string();
        assert!(settings.validate().is_err());

        settings.sink.url = "not a url".to_string();
        assert!(settings.validate().is_err());
    }
}
