//! Sort directives
//!
//! One field is active at a time. Clicking a field cycles it
//! `none -> asc -> desc -> none`; clicking a different field starts that
//! field at `asc`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared::Product;

use crate::ConsoleError;

/// Sortable column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Id,
    Title,
    Price,
    Category,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Price => "price",
            Self::Category => "category",
        }
    }

    /// Ascending comparison of two products on this field.
    ///
    /// Text compares case-insensitively. A missing category orders first.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            Self::Price => a.price.cmp(&b.price),
            Self::Category => {
                let a = a.category.as_ref().map(|c| c.name.to_lowercase());
                let b = b.category.as_ref().map(|c| c.name.to_lowercase());
                a.cmp(&b)
            }
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "title" => Ok(Self::Title),
            "price" => Ok(Self::Price),
            "category" => Ok(Self::Category),
            other => Err(ConsoleError::InvalidArgument(format!(
                "unknown sort field '{other}'"
            ))),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ConsoleError::InvalidArgument(format!(
                "unknown sort direction '{other}'"
            ))),
        }
    }
}

/// Active `{field, direction}` selection. "Unsorted" is `None` at the
/// call sites, so field and direction are always set together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortDirective {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }

    /// Directive after the user clicks `field`.
    pub fn toggle(current: Option<Self>, field: SortField) -> Option<Self> {
        match current {
            Some(active) if active.field == field => match active.direction {
                SortDirection::Asc => Some(Self::desc(field)),
                SortDirection::Desc => None,
            },
            _ => Some(Self::asc(field)),
        }
    }

    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let ordering = self.field.compare(a, b);
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Stable in-place sort; equal keys keep their relative order.
    pub fn sort(&self, products: &mut [Product]) {
        products.sort_by(|a, b| self.compare(a, b));
    }
}

/// Parses `field` or `field:asc|desc`
impl FromStr for SortDirective {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((field, direction)) => Ok(Self {
                field: field.parse()?,
                direction: direction.parse()?,
            }),
            None => Ok(Self::asc(s.parse()?)),
        }
    }
}
