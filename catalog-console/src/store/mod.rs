//! Collection state
//!
//! [`CatalogStore`] owns every loaded product plus the derived view
//! (`filtered`). The view is always recomputed from `all` under the current
//! query and sort directive; it is never patched on its own.

mod pagination;
mod sort;

pub use pagination::{MAX_VISIBLE_PAGES, PageControl, page_controls, page_range, total_pages};
pub use sort::{SortDirection, SortDirective, SortField};

use shared::{Category, Product, ProductPatch};

use crate::{ConsoleError, ConsoleResult};

/// Default rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone)]
pub struct CatalogStore {
    /// Source of truth, newest-first after creates
    all: Vec<Product>,
    /// `all` under the query and sort directive
    filtered: Vec<Product>,
    categories: Vec<Category>,
    /// Normalized (trimmed, lowercased) search query
    query: String,
    /// 1-based
    page: usize,
    page_size: usize,
    sort: Option<SortDirective>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self {
            all: Vec::new(),
            filtered: Vec::new(),
            categories: Vec::new(),
            query: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort: None,
        }
    }
}

impl CatalogStore {
    pub fn new(page_size: usize) -> ConsoleResult<Self> {
        if page_size == 0 {
            return Err(ConsoleError::InvalidPageSize);
        }
        Ok(Self {
            page_size,
            ..Default::default()
        })
    }

    /// Replace the catalog with freshly fetched data.
    pub fn load(&mut self, products: Vec<Product>, categories: Vec<Category>) {
        self.all = products;
        self.categories = categories;
        self.rederive();
        self.page = 1;
        tracing::debug!(
            products = self.all.len(),
            categories = self.categories.len(),
            "Catalog loaded"
        );
    }

    // ========== Accessors ==========

    pub fn products(&self) -> &[Product] {
        &self.all
    }

    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn product(&self, id: i64) -> Option<&Product> {
        self.all.iter().find(|p| p.id == id)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn sort(&self) -> Option<SortDirective> {
        self.sort
    }

    // ========== Search ==========

    /// Filter by title substring (case-insensitive) and go back to page 1.
    pub fn apply_search(&mut self, query: &str) {
        self.query = query.trim().to_lowercase();
        self.rederive();
        self.page = 1;
        tracing::debug!(query = %self.query, matches = self.filtered.len(), "Search applied");
    }

    /// Re-run the current search, e.g. after a create or update.
    pub fn refresh(&mut self) {
        let query = std::mem::take(&mut self.query);
        self.apply_search(&query);
    }

    // ========== Sort ==========

    /// Cycle the directive for `field` and re-derive the view.
    pub fn toggle_sort(&mut self, field: SortField) -> Option<SortDirective> {
        self.apply_sort(SortDirective::toggle(self.sort, field));
        self.sort
    }

    /// Set the directive directly. Does not change the page.
    pub fn apply_sort(&mut self, directive: Option<SortDirective>) {
        self.sort = directive;
        self.rederive();
        tracing::debug!(sort = ?self.sort, "Sort applied");
    }

    // ========== Pagination ==========

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), self.page_size)
    }

    /// Rows of the current page. Empty when the page is out of range.
    pub fn current_page_slice(&self) -> &[Product] {
        &self.filtered[page_range(self.filtered.len(), self.page, self.page_size)]
    }

    /// Move to `target`. Returns `false` (and changes nothing) when the
    /// target is outside `1..=total_pages()`.
    pub fn change_page(&mut self, target: usize) -> bool {
        if target < 1 || target > self.total_pages() {
            return false;
        }
        self.page = target;
        true
    }

    pub fn change_page_size(&mut self, page_size: usize) -> ConsoleResult<()> {
        if page_size == 0 {
            return Err(ConsoleError::InvalidPageSize);
        }
        self.page_size = page_size;
        self.page = 1;
        Ok(())
    }

    pub fn page_controls(&self) -> Vec<PageControl> {
        page_controls(self.page, self.total_pages())
    }

    // ========== Reconciliation ==========

    /// Prepend a product returned by create, attaching the loaded category
    /// for the submitted id, then re-run the search.
    pub fn insert_created(&mut self, mut product: Product, category_id: i64) {
        product.attach_category(category_id, &self.categories);
        self.all.insert(0, product);
        self.refresh();
    }

    /// Merge a submitted patch into the local product, then re-run the
    /// search. Returns `false` when no product has `id`.
    pub fn apply_update(&mut self, id: i64, patch: &ProductPatch) -> bool {
        let found = match self.all.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                product.apply_patch(patch, &self.categories);
                true
            }
            None => {
                tracing::warn!(id, "Updated product is not in the local catalog");
                false
            }
        };
        self.refresh();
        found
    }

    fn rederive(&mut self) {
        self.filtered = if self.query.is_empty() {
            self.all.clone()
        } else {
            self.all
                .iter()
                .filter(|p| p.title.to_lowercase().contains(&self.query))
                .cloned()
                .collect()
        };
        if let Some(directive) = &self.sort {
            directive.sort(&mut self.filtered);
        }
    }
}
