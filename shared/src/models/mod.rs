//! Data models
//!
//! Mirror the JSON shapes of the remote catalog API. Unknown upstream
//! fields are ignored on decode. All IDs are `i64`.

pub mod category;
pub mod product;
pub mod serde_helpers;

// Re-exports
pub use category::*;
pub use product::*;
