//! Catalog Console - client-side state for the product catalog admin
//!
//! Holds the loaded catalog in a [`CatalogStore`], derives the paged table
//! view from it, and reconciles create/update results without re-fetching.
//! Rendering is left to the caller; the bundled binary prints text.

pub mod cli;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod export;
pub mod form;
pub mod logger;
pub mod notice;
pub mod render;
pub mod store;
pub mod view;

pub use config::ConsoleConfig;
pub use controller::{ConsoleController, CsvExport, DetailSession};
pub use debounce::SearchDebouncer;
pub use error::{ConsoleError, ConsoleResult};
pub use form::ProductForm;
pub use notice::{Notice, NoticeLevel};
pub use store::{CatalogStore, PageControl, SortDirection, SortDirective, SortField};
pub use view::{PageView, ProductDetail, ProductRow, Summary};
