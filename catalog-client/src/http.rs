// catalog-client/src/http.rs
// HTTP client - network calls against the catalog REST API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::{Category, NewProduct, Product, ProductPatch};

use crate::{CatalogApi, ClientConfig, ClientError, ClientResult};

/// Network catalog client
#[derive(Debug, Clone)]
pub struct RestCatalogClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl RestCatalogClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Base resource URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let req = self.client.request(method, self.url(path));
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(Method::GET, path, self.request(Method::GET, path))
            .await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.request(Method::PUT, path).json(body);
        self.send(Method::PUT, path, req).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.request(Method::POST, path).json(body);
        self.send(Method::POST, path, req).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        req: RequestBuilder,
    ) -> ClientResult<T> {
        let result = match req.send().await {
            Ok(response) => Self::handle_response(response).await,
            Err(e) => Err(e.into()),
        };
        if let Err(e) = &result {
            tracing::warn!(%method, path, error = %e, "Catalog request failed");
        }
        result
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(match status {
                StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
                StatusCode::FORBIDDEN => ClientError::Forbidden(text),
                StatusCode::NOT_FOUND => ClientError::NotFound(text),
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                    ClientError::Rejected(text)
                }
                _ => ClientError::Status {
                    status: status.as_u16(),
                    message: text,
                },
            });
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl CatalogApi for RestCatalogClient {
    async fn list_products(&self) -> ClientResult<Vec<Product>> {
        let products: Vec<Product> = self.get("products").await?;
        tracing::info!(count = products.len(), "Fetched products");
        Ok(products)
    }

    async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        let categories: Vec<Category> = self.get("categories").await?;
        tracing::info!(count = categories.len(), "Fetched categories");
        Ok(categories)
    }

    async fn get_product(&self, id: i64) -> ClientResult<Product> {
        self.get(&format!("products/{id}")).await
    }

    async fn update_product(&self, id: i64, patch: &ProductPatch) -> ClientResult<Product> {
        let product: Product = self.put(&format!("products/{id}"), patch).await?;
        tracing::info!(id, "Updated product");
        Ok(product)
    }

    async fn create_product(&self, data: &NewProduct) -> ClientResult<Product> {
        let product: Product = self.post("products", data).await?;
        tracing::info!(id = product.id, "Created product");
        Ok(product)
    }
}
