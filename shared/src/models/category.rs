//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity (read-only, loaded once at startup)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: None,
        }
    }
}

/// Look up a category by id in a loaded set
pub fn find_category(categories: &[Category], id: i64) -> Option<&Category> {
    categories.iter().find(|c| c.id == id)
}
