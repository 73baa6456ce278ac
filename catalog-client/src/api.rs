//! Catalog API trait
//!
//! The seam between the console and the remote catalog service. The
//! network implementation is [`crate::RestCatalogClient`]; tests provide
//! in-memory implementations.

use async_trait::async_trait;
use shared::{Category, NewProduct, Product, ProductPatch};

use crate::ClientResult;

#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /products`
    async fn list_products(&self) -> ClientResult<Vec<Product>>;

    /// `GET /categories`
    async fn list_categories(&self) -> ClientResult<Vec<Category>>;

    /// `GET /products/{id}`, failing with `NotFound` for unknown ids
    async fn get_product(&self, id: i64) -> ClientResult<Product>;

    /// `PUT /products/{id}` with the present patch fields
    async fn update_product(&self, id: i64, patch: &ProductPatch) -> ClientResult<Product>;

    /// `POST /products`
    async fn create_product(&self, data: &NewProduct) -> ClientResult<Product>;
}
