//! Interaction handlers
//!
//! [`ConsoleController`] turns user actions into store mutations or catalog
//! API calls followed by local reconciliation. Every handler runs to
//! completion on `&mut self`, so store mutations never interleave.
//!
//! Remote failures and validation failures leave the store untouched and
//! are reported both as the returned error and as the latest [`Notice`].

use catalog_client::CatalogApi;
use shared::models::ProductPatch;
use shared::{Category, util};

use crate::export;
use crate::form::ProductForm;
use crate::notice::{self, Notice};
use crate::store::{CatalogStore, SortDirective, SortField};
use crate::view::{self, PageView, ProductDetail};
use crate::{ConsoleError, ConsoleResult};

/// Which product the detail pane shows, if any
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailSession {
    #[default]
    Closed,
    Viewing(i64),
    Editing(i64),
}

impl DetailSession {
    pub fn product_id(&self) -> Option<i64> {
        match self {
            Self::Closed => None,
            Self::Viewing(id) | Self::Editing(id) => Some(*id),
        }
    }
}

/// CSV document produced by an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: String,
    pub content: String,
    pub rows: usize,
}

pub struct ConsoleController<A: CatalogApi> {
    api: A,
    store: CatalogStore,
    session: DetailSession,
    last_notice: Option<Notice>,
}

impl<A: CatalogApi> ConsoleController<A> {
    pub fn new(api: A, page_size: usize) -> ConsoleResult<Self> {
        Ok(Self {
            api,
            store: CatalogStore::new(page_size)?,
            session: DetailSession::Closed,
            last_notice: None,
        })
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn session(&self) -> DetailSession {
        self.session
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.last_notice.as_ref()
    }

    pub fn view(&self) -> PageView {
        view::compose(&self.store)
    }

    // ========== Initialization ==========

    /// Fetch products and categories concurrently. Both must succeed before
    /// anything is loaded.
    pub async fn initialize(&mut self) -> ConsoleResult<PageView> {
        let fetched = tokio::try_join!(self.api.list_products(), self.api.list_categories());
        match fetched {
            Ok((products, categories)) => {
                self.store.load(products, categories);
                tracing::info!(
                    products = self.store.products().len(),
                    categories = self.store.categories().len(),
                    "Console initialized"
                );
                Ok(self.view())
            }
            Err(e) => {
                tracing::error!(error = %e, "Error initializing console");
                self.notify(Notice::error(notice::INIT_FAILED));
                Err(e.into())
            }
        }
    }

    // ========== Table interactions ==========

    /// Apply a (debounced) search query.
    pub fn search(&mut self, query: &str) -> PageView {
        self.store.apply_search(query);
        self.view()
    }

    pub fn sort_by(&mut self, field: SortField) -> PageView {
        self.store.toggle_sort(field);
        self.view()
    }

    /// Replace the sort directive outright; `None` restores load order.
    pub fn set_sort(&mut self, directive: Option<SortDirective>) -> PageView {
        self.store.apply_sort(directive);
        self.view()
    }

    /// Out-of-range targets leave the page unchanged.
    pub fn go_to_page(&mut self, target: usize) -> PageView {
        if !self.store.change_page(target) {
            tracing::debug!(target, "Ignoring out-of-range page");
        }
        self.view()
    }

    pub fn set_page_size(&mut self, page_size: usize) -> ConsoleResult<PageView> {
        self.store.change_page_size(page_size)?;
        Ok(self.view())
    }

    /// Local description for hover previews
    pub fn description_of(&self, id: i64) -> Option<&str> {
        self.store
            .product(id)
            .map(|p| p.description.as_str())
            .filter(|d| !d.is_empty())
    }

    /// Options for the category selector: every loaded category
    pub fn category_options(&self) -> &[Category] {
        self.store.categories()
    }

    /// CSV of the current page. `None` (with a warning) when it is empty.
    pub fn export_csv(&mut self) -> Option<CsvExport> {
        let rows = self.store.current_page_slice();
        if rows.is_empty() {
            self.notify(Notice::warning(notice::NOTHING_TO_EXPORT));
            return None;
        }
        let export = CsvExport {
            file_name: export::export_file_name(util::now_millis()),
            content: export::to_csv(rows),
            rows: rows.len(),
        };
        self.notify(Notice::exported(export.rows));
        Some(export)
    }

    // ========== Detail / edit ==========

    /// Fetch one product for the detail pane.
    pub async fn open_detail(&mut self, id: i64) -> ConsoleResult<ProductDetail> {
        self.session = DetailSession::Viewing(id);
        match self.api.get_product(id).await {
            Ok(product) => Ok(ProductDetail::from(&product)),
            Err(e) => {
                tracing::warn!(id, error = %e, "Error fetching product");
                self.notify(Notice::error(notice::DETAIL_FAILED));
                Err(e.into())
            }
        }
    }

    /// Switch the open product to edit mode, prefilled from the local copy.
    pub fn begin_edit(&mut self) -> Option<ProductForm> {
        let id = self.session.product_id()?;
        let form = ProductForm::from_product(self.store.product(id)?);
        self.session = DetailSession::Editing(id);
        Some(form)
    }

    /// Validate, send the update, then merge the submitted fields locally.
    pub async fn save_edit(&mut self, form: &ProductForm) -> ConsoleResult<PageView> {
        let id = self
            .session
            .product_id()
            .ok_or(ConsoleError::NoActiveProduct)?;
        let patch = ProductPatch::from(self.validate(form)?);

        if let Err(e) = self.api.update_product(id, &patch).await {
            self.notify(Notice::error(notice::UPDATE_FAILED));
            return Err(e.into());
        }

        self.store.apply_update(id, &patch);
        self.session = DetailSession::Closed;
        self.notify(Notice::success(notice::UPDATE_OK));
        Ok(self.view())
    }

    /// Leave edit mode by reloading the detail view.
    pub async fn cancel_edit(&mut self) -> ConsoleResult<ProductDetail> {
        let id = self
            .session
            .product_id()
            .ok_or(ConsoleError::NoActiveProduct)?;
        self.open_detail(id).await
    }

    pub fn close_detail(&mut self) {
        self.session = DetailSession::Closed;
    }

    // ========== Create ==========

    /// Validate, create remotely, then prepend the new product locally.
    pub async fn create(&mut self, form: &ProductForm) -> ConsoleResult<PageView> {
        let data = self.validate(form)?;

        let created = match self.api.create_product(&data).await {
            Ok(product) => product,
            Err(e) => {
                self.notify(Notice::error(notice::CREATE_FAILED));
                return Err(e.into());
            }
        };

        self.store.insert_created(created, data.category_id);
        self.notify(Notice::success(notice::CREATE_OK));
        Ok(self.view())
    }

    fn validate(&mut self, form: &ProductForm) -> ConsoleResult<shared::NewProduct> {
        form.validate().map_err(|e| {
            tracing::debug!(error = %e, "Form rejected");
            self.notify(Notice::warning(notice::FILL_REQUIRED));
            ConsoleError::from(e)
        })
    }

    fn notify(&mut self, notice: Notice) {
        tracing::debug!(%notice, "Notice");
        self.last_notice = Some(notice);
    }
}
