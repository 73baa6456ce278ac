//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::{Category, find_category};
use super::serde_helpers;

/// Thumbnail shown in the table when a product has no image
pub const THUMBNAIL_PLACEHOLDER_URL: &str = "https://via.placeholder.com/60?text=No+Image";

/// Image shown in the detail view when a product has no image
pub const DETAIL_PLACEHOLDER_URL: &str = "https://via.placeholder.com/300?text=No+Image";

/// Label used wherever a product has no category
pub const NO_CATEGORY_LABEL: &str = "N/A";

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned id
    pub id: i64,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub description: String,
    /// Category reference (nullable upstream)
    #[serde(default)]
    pub category: Option<Category>,
    /// Image URLs, in display order
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub images: Vec<String>,
}

impl Product {
    /// First image, or the table placeholder
    pub fn thumbnail(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(THUMBNAIL_PLACEHOLDER_URL)
    }

    /// Category name, or `N/A`
    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or(NO_CATEGORY_LABEL)
    }

    /// Shallow-merge the fields present in `patch` over this product.
    ///
    /// `category_id` is resolved against `categories`; an id that is not in
    /// the loaded set leaves the current category untouched.
    pub fn apply_patch(&mut self, patch: &ProductPatch, categories: &[Category]) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(images) = &patch.images {
            self.images = images.clone();
        }
        if let Some(category_id) = patch.category_id {
            self.attach_category(category_id, categories);
        }
    }

    /// Replace the category with the loaded entry matching `category_id`.
    pub fn attach_category(&mut self, category_id: i64, categories: &[Category]) {
        if let Some(category) = find_category(categories, category_id) {
            self.category = Some(category.clone());
        }
    }
}

/// Update product payload
///
/// Only the fields that are set are sent to the API and merged locally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl From<NewProduct> for ProductPatch {
    fn from(data: NewProduct) -> Self {
        Self {
            title: Some(data.title),
            price: Some(data.price),
            description: Some(data.description),
            category_id: Some(data.category_id),
            images: Some(data.images),
        }
    }
}

/// Create product payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: String,
    pub category_id: i64,
    pub images: Vec<String>,
}
