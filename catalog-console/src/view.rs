//! View composer
//!
//! Derives everything the rendering layer paints from a [`CatalogStore`]:
//! the current page's rows, the pagination controls and the summary.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use shared::Product;
use shared::models::DETAIL_PLACEHOLDER_URL;

use crate::store::{CatalogStore, PageControl};

/// One table row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRow {
    pub id: i64,
    pub title: String,
    pub price: Decimal,
    /// e.g. `$10.00`
    pub price_label: String,
    /// Category name or `N/A`
    pub category: String,
    pub thumbnail: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            price_label: format_price(&product.price),
            category: product.category_name().to_string(),
            thumbnail: product.thumbnail().to_string(),
        }
    }
}

/// "Showing `start` to `end` of `total`"; 1-based and inclusive, both zero
/// when there is nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

/// Everything needed to paint the table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub rows: Vec<ProductRow>,
    pub pagination: Vec<PageControl>,
    pub summary: Summary,
}

impl PageView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Detail pane content for one product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetail {
    pub id: i64,
    pub title: String,
    pub price_label: String,
    pub category: String,
    pub description: String,
    /// Carousel images; a single placeholder when the product has none
    pub images: Vec<String>,
}

impl From<&Product> for ProductDetail {
    fn from(product: &Product) -> Self {
        let images = if product.images.is_empty() {
            vec![DETAIL_PLACEHOLDER_URL.to_string()]
        } else {
            product.images.clone()
        };
        Self {
            id: product.id,
            title: product.title.clone(),
            price_label: format_price(&product.price),
            category: product.category_name().to_string(),
            description: product.description.clone(),
            images,
        }
    }
}

pub fn compose(store: &CatalogStore) -> PageView {
    PageView {
        rows: store.current_page_slice().iter().map(ProductRow::from).collect(),
        pagination: store.page_controls(),
        summary: summarize(store),
    }
}

pub fn summarize(store: &CatalogStore) -> Summary {
    let total = store.filtered().len();
    if total == 0 {
        return Summary {
            start: 0,
            end: 0,
            total,
        };
    }
    let page = store.page();
    let page_size = store.page_size();
    Summary {
        start: (page - 1) * page_size + 1,
        end: (page * page_size).min(total),
        total,
    }
}

/// Two-decimal dollar label
pub fn format_price(price: &Decimal) -> String {
    format!(
        "${:.2}",
        price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Category;
    use std::str::FromStr;

    fn product(id: i64, price: &str) -> Product {
        Product {
            id,
            title: format!("Item {id}"),
            price: Decimal::from_str(price).unwrap(),
            description: String::new(),
            category: None,
            images: vec![],
        }
    }

    fn store_with(count: i64, page_size: usize) -> CatalogStore {
        let mut store = CatalogStore::new(page_size).unwrap();
        store.load((1..=count).map(|i| product(i, "1")).collect(), vec![]);
        store
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(&Decimal::from(10)), "$10.00");
        assert_eq!(format_price(&Decimal::from_str("9.5").unwrap()), "$9.50");
        assert_eq!(format_price(&Decimal::from_str("0.125").unwrap()), "$0.13");
    }

    #[test]
    fn test_row_labels() {
        let mut p = product(1, "12.5");
        let row = ProductRow::from(&p);
        assert_eq!(row.category, "N/A");
        assert_eq!(row.price_label, "$12.50");
        assert!(row.thumbnail.contains("placeholder"));

        p.category = Some(Category::new(3, "Electronics"));
        p.images = vec!["https://img/a.png".into(), "https://img/b.png".into()];
        let row = ProductRow::from(&p);
        assert_eq!(row.category, "Electronics");
        assert_eq!(row.thumbnail, "https://img/a.png");
    }

    #[test]
    fn test_summary_bounds() {
        let mut store = store_with(23, 10);
        assert_eq!(summarize(&store), Summary { start: 1, end: 10, total: 23 });
        store.change_page(3);
        assert_eq!(summarize(&store), Summary { start: 21, end: 23, total: 23 });
    }

    #[test]
    fn test_summary_empty() {
        let mut store = store_with(5, 10);
        store.apply_search("nothing matches");
        let view = compose(&store);
        assert!(view.is_empty());
        assert!(view.pagination.is_empty());
        assert_eq!(view.summary, Summary { start: 0, end: 0, total: 0 });
    }

    #[test]
    fn test_compose_page() {
        let mut store = store_with(12, 5);
        store.change_page(2);
        let view = compose(&store);
        let ids: Vec<i64> = view.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![6, 7, 8, 9, 10]);
        assert_eq!(view.pagination.len(), 5); // prev, 1, 2, 3, next
    }

    #[test]
    fn test_detail_placeholder() {
        let detail = ProductDetail::from(&product(4, "3"));
        assert_eq!(detail.images, vec![DETAIL_PLACEHOLDER_URL.to_string()]);
        assert_eq!(detail.price_label, "$3.00");
    }
}
