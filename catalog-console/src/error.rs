//! Console error types

use catalog_client::ClientError;
use shared::ValidationError;
use thiserror::Error;

/// Console error type
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Remote catalog call failed
    #[error(transparent)]
    Remote(#[from] ClientError),

    /// Form input rejected before any network call
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Page size of zero
    #[error("Page size must be at least 1")]
    InvalidPageSize,

    /// Edit/save/cancel without an open product
    #[error("No product is open")]
    NoActiveProduct,

    /// Product id not present in the loaded catalog
    #[error("Product {0} not found")]
    UnknownProduct(i64),

    /// Unparsable command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON output encoding failed
    #[error("Encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    /// IO error (export file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConsoleError {
    /// Whether this error came from local validation
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type for console operations
pub type ConsoleResult<T> = Result<T, ConsoleError>;
