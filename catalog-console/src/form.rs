//! Create/edit form input
//!
//! Raw text as typed by the user. [`ProductForm::validate`] turns it into a
//! request payload or rejects it before anything is sent.

use shared::Product;
use shared::models::NewProduct;
use shared::validation::{
    ValidationError, parse_image_list, parse_price, validate_category_id, validate_required_text,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub title: String,
    pub price: String,
    pub description: String,
    pub category_id: Option<i64>,
    /// Comma-separated image URLs
    pub images: String,
}

impl ProductForm {
    /// Edit form prefilled from a local product
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            category_id: product.category.as_ref().map(|c| c.id),
            images: product.images.join(", "),
        }
    }

    pub fn validate(&self) -> Result<NewProduct, ValidationError> {
        let title = validate_required_text(&self.title, "title")?;
        let price = parse_price(&self.price)?;
        let description = validate_required_text(&self.description, "description")?;
        let category_id = validate_category_id(self.category_id)?;
        Ok(NewProduct {
            title,
            price,
            description,
            category_id,
            images: parse_image_list(&self.images),
        })
    }
}
