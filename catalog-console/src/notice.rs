//! User-visible notices (toasts)

use std::fmt;

use serde::Serialize;

pub const INIT_FAILED: &str = "Failed to load data. Please refresh the page.";
pub const FILL_REQUIRED: &str = "Please fill in all required fields";
pub const UPDATE_OK: &str = "Product updated successfully!";
pub const UPDATE_FAILED: &str = "Failed to update product";
pub const CREATE_OK: &str = "Product created successfully!";
pub const CREATE_FAILED: &str = "Failed to create product";
pub const DETAIL_FAILED: &str = "Failed to load product details";
pub const NOTHING_TO_EXPORT: &str = "No data to export";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn exported(count: usize) -> Self {
        Self::success(format!("Exported {count} products successfully!"))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.level {
            NoticeLevel::Success => "ok",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        };
        write!(f, "[{tag}] {}", self.message)
    }
}
