use catalog_client::ClientConfig;
use catalog_client::config::DEFAULT_BASE_URL;

use crate::debounce::DEFAULT_DEBOUNCE;
use crate::store::DEFAULT_PAGE_SIZE;

/// Console configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | CATALOG_API_URL | https://api.escuelajs.co/api/v1 | Catalog API base URL |
/// | CATALOG_API_TOKEN | (none) | Bearer token sent with every request |
/// | CATALOG_PAGE_SIZE | 10 | Rows per page |
/// | CATALOG_SEARCH_DEBOUNCE_MS | 300 | `browse` search quiet window |
/// | CATALOG_REQUEST_TIMEOUT_SECS | 30 | HTTP timeout |
/// | LOG_LEVEL | info | tracing level |
/// | LOG_DIR | (none) | Daily rolling log directory |
///
/// Unparsable or zero numeric values fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub api_url: String,
    pub api_token: Option<String>,
    pub page_size: usize,
    pub search_debounce_ms: u64,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl ConsoleConfig {
    /// Load from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let positive = |key: &str| {
            non_empty(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|n| *n > 0)
        };

        Self {
            api_url: non_empty("CATALOG_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            api_token: non_empty("CATALOG_API_TOKEN"),
            page_size: positive("CATALOG_PAGE_SIZE")
                .map(|n| n as usize)
                .unwrap_or(DEFAULT_PAGE_SIZE),
            search_debounce_ms: positive("CATALOG_SEARCH_DEBOUNCE_MS")
                .unwrap_or(DEFAULT_DEBOUNCE.as_millis() as u64),
            request_timeout_secs: positive("CATALOG_REQUEST_TIMEOUT_SECS").unwrap_or(30),
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: non_empty("LOG_DIR"),
        }
    }

    /// HTTP client settings derived from this config
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(&self.api_url).with_timeout(self.request_timeout_secs);
        match &self.api_token {
            Some(token) => config.with_token(token),
            None => config,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
