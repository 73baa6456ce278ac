// catalog-console/tests/common/mod.rs
// In-memory CatalogApi that records every call

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use catalog_client::{CatalogApi, ClientError, ClientResult};
use shared::{Category, Decimal, NewProduct, Product, ProductPatch};

pub fn category(id: i64, name: &str) -> Category {
    Category::new(id, name)
}

pub fn product(id: i64, title: &str, price: i64, category_id: i64, category_name: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        price: Decimal::from(price),
        description: format!("{title} description"),
        category: Some(category(category_id, category_name)),
        images: vec![format!("https://img.test/{id}.png")],
    }
}

/// Shirt, Pants, Shoes
pub fn sample_products() -> Vec<Product> {
    vec![
        product(1, "Shirt", 10, 1, "Clothes"),
        product(2, "Pants", 20, 1, "Clothes"),
        product(3, "Shoes", 50, 2, "Shoes"),
    ]
}

pub fn sample_categories() -> Vec<Category> {
    vec![category(1, "Clothes"), category(2, "Shoes"), category(3, "Electronics")]
}

fn server_error() -> ClientError {
    ClientError::Status {
        status: 500,
        message: "boom".to_string(),
    }
}

#[derive(Default)]
pub struct FakeCatalog {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub fail_products: bool,
    pub fail_categories: bool,
    pub fail_writes: bool,
    pub next_id: i64,
    pub calls: Mutex<Vec<String>>,
    pub updates: Mutex<Vec<(i64, ProductPatch)>>,
    pub creates: Mutex<Vec<NewProduct>>,
}

impl FakeCatalog {
    pub fn sample() -> Self {
        Self {
            products: sample_products(),
            categories: sample_categories(),
            next_id: 100,
            ..Default::default()
        }
    }

    pub fn with_products(count: i64) -> Self {
        Self {
            products: (1..=count)
                .map(|i| product(i, &format!("Item {i}"), i, 1, "Clothes"))
                .collect(),
            categories: sample_categories(),
            next_id: 1000,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.record("list_products");
        if self.fail_products {
            return Err(server_error());
        }
        Ok(self.products.clone())
    }

    async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.record("list_categories");
        if self.fail_categories {
            return Err(server_error());
        }
        Ok(self.categories.clone())
    }

    async fn get_product(&self, id: i64) -> ClientResult<Product> {
        self.record(format!("get_product {id}"));
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("product {id}")))
    }

    async fn update_product(&self, id: i64, patch: &ProductPatch) -> ClientResult<Product> {
        self.record(format!("update_product {id}"));
        if self.fail_writes {
            return Err(server_error());
        }
        self.updates.lock().unwrap().push((id, patch.clone()));
        let mut updated = self
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("product {id}")))?;
        updated.apply_patch(patch, &self.categories);
        Ok(updated)
    }

    async fn create_product(&self, data: &NewProduct) -> ClientResult<Product> {
        self.record("create_product");
        if self.fail_writes {
            return Err(ClientError::Rejected("price must be a positive number".into()));
        }
        self.creates.lock().unwrap().push(data.clone());
        // upstream echoes the payload without the category object
        Ok(Product {
            id: self.next_id,
            title: data.title.clone(),
            price: data.price,
            description: data.description.clone(),
            category: None,
            images: data.images.clone(),
        })
    }
}
