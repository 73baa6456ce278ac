//! Shared types for the catalog console
//!
//! Catalog models exchanged with the remote product API, request payloads,
//! and the validation helpers used before any create/update call.

pub mod models;
pub mod util;
pub mod validation;

// Re-exports
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};

pub use models::{Category, NewProduct, Product, ProductPatch};
pub use validation::ValidationError;
