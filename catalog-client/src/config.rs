//! Client configuration

use crate::{ClientResult, RestCatalogClient};

/// Default catalog API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.escuelajs.co/api/v1";

/// Client configuration for connecting to the catalog API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base resource URL (e.g., "https://api.escuelajs.co/api/v1")
    pub base_url: String,

    /// Optional bearer token
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            timeout: 30,
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create the network client from this configuration
    pub fn build(&self) -> ClientResult<RestCatalogClient> {
        RestCatalogClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::new("http://localhost:8080/api/v1/");
        assert_eq!(config.base_url, "http://localhost:8080/api/v1");
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::default().with_token("abc").with_timeout(5);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.timeout, 5);
    }
}
