//! Input validation helpers
//!
//! Pre-flight checks run on create/edit form input before any request is
//! sent to the catalog API.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

/// Image sent when the submitted image list is empty
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300";

/// Local validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field is empty after trimming
    #[error("{field} must not be empty")]
    Required { field: &'static str },

    /// Price is not a number or not strictly positive
    #[error("price must be a positive number, got {0:?}")]
    InvalidPrice(String),

    /// No category (or a non-positive id) selected
    #[error("a category must be selected")]
    MissingCategory,
}

/// Validate that a required string is non-empty, returning it trimmed.
pub fn validate_required_text(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(trimmed.to_string())
}

/// Parse a price input. Must be a decimal strictly greater than zero.
pub fn parse_price(raw: &str) -> Result<Decimal, ValidationError> {
    let trimmed = raw.trim();
    match Decimal::from_str(trimmed) {
        Ok(price) if price > Decimal::ZERO => Ok(price),
        _ => Err(ValidationError::InvalidPrice(trimmed.to_string())),
    }
}

/// Validate a selected category id (present and positive).
pub fn validate_category_id(id: Option<i64>) -> Result<i64, ValidationError> {
    match id {
        Some(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::MissingCategory),
    }
}

/// Split comma-separated image URLs, trimming and dropping empty entries.
///
/// Falls back to a single placeholder URL when nothing remains.
pub fn parse_image_list(raw: &str) -> Vec<String> {
    let images: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect();

    if images.is_empty() {
        vec![PLACEHOLDER_IMAGE_URL.to_string()]
    } else {
        images
    }
}
