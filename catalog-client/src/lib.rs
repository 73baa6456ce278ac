//! Catalog Client - HTTP client for the remote product catalog API
//!
//! Wraps the product/category REST resources behind the [`CatalogApi`]
//! trait. No retries and no caching: each call either returns parsed data
//! or fails with a [`ClientError`].

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::CatalogApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::RestCatalogClient;

// Re-export shared types for convenience
pub use shared::{Category, NewProduct, Product, ProductPatch};
