//! Command-line front end
//!
//! Each invocation loads the catalog, applies one action through the
//! [`ConsoleController`] and prints the result. Notices go to stderr.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use catalog_client::CatalogApi;
use clap::{Args, Parser, Subcommand};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::controller::ConsoleController;
use crate::debounce::{DEFAULT_DEBOUNCE, SearchDebouncer};
use crate::form::ProductForm;
use crate::store::SortDirective;
use crate::{ConsoleConfig, ConsoleError, ConsoleResult, render};

#[derive(Debug, Parser)]
#[command(name = "catalog-console")]
#[command(about = "Browse and edit a remote product catalog")]
#[command(version)]
pub struct Cli {
    /// Catalog API base URL (overrides CATALOG_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print one page of the product table
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        view: ViewArgs,

        /// Print the page view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch and print one product
    Show {
        /// Product ID
        id: i64,
    },

    /// Write the selected page as CSV
    Export {
        #[command(flatten)]
        view: ViewArgs,

        /// Output path (default: products_export_<millis>.csv)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Create a product
    Create(FormArgs),

    /// Update a product; omitted fields keep their current values
    Update {
        /// Product ID
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        price: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Category ID
        #[arg(long)]
        category: Option<i64>,

        /// Comma-separated image URLs
        #[arg(long)]
        images: Option<String>,
    },

    /// List category options
    Categories,

    /// Live search: each stdin line is the query as typed so far
    Browse {
        /// Quiet window before a query is applied (overrides CATALOG_SEARCH_DEBOUNCE_MS)
        #[arg(long)]
        debounce_ms: Option<u64>,
    },
}

/// Search, sort and paging selection
#[derive(Debug, Clone, Default, Args)]
pub struct ViewArgs {
    /// Case-insensitive title filter
    #[arg(short, long)]
    pub search: Option<String>,

    /// `id`, `title`, `price` or `category`, optionally `:asc` / `:desc`
    #[arg(long)]
    pub sort: Option<SortDirective>,

    /// 1-based page number
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Rows per page (overrides CATALOG_PAGE_SIZE)
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(Debug, Clone, Args)]
pub struct FormArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub price: String,

    #[arg(long)]
    pub description: String,

    /// Category ID
    #[arg(long)]
    pub category: i64,

    /// Comma-separated image URLs
    #[arg(long, default_value = "")]
    pub images: String,
}

impl From<FormArgs> for ProductForm {
    fn from(args: FormArgs) -> Self {
        Self {
            title: args.title,
            price: args.price,
            description: args.description,
            category_id: Some(args.category),
            images: args.images,
        }
    }
}

/// Build the REST client from `config` and run `cli`.
pub async fn run(cli: Cli, mut config: ConsoleConfig) -> ConsoleResult<()> {
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    let command = apply_config_defaults(cli.command, &config);
    let client = config.client_config().build()?;
    let mut console = ConsoleController::new(client, config.page_size)?;
    let mut stdout = std::io::stdout().lock();
    execute(&mut console, command, &mut stdout).await
}

/// Fill options left unset on the command line from `config`.
pub fn apply_config_defaults(mut command: Command, config: &ConsoleConfig) -> Command {
    if let Command::Browse { debounce_ms } = &mut command {
        debounce_ms.get_or_insert(config.search_debounce_ms);
    }
    command
}

/// Run one command against `console`, writing results to `out`.
pub async fn execute<A, W>(
    console: &mut ConsoleController<A>,
    command: Command,
    out: &mut W,
) -> ConsoleResult<()>
where
    A: CatalogApi,
    W: Write,
{
    let result = dispatch(console, command, out).await;
    if let Some(notice) = console.last_notice() {
        eprintln!("{notice}");
    }
    result
}

async fn dispatch<A, W>(
    console: &mut ConsoleController<A>,
    command: Command,
    out: &mut W,
) -> ConsoleResult<()>
where
    A: CatalogApi,
    W: Write,
{
    if let Command::Show { id } = command {
        let detail = console.open_detail(id).await?;
        write!(out, "{}", render::render_detail(&detail))?;
        return Ok(());
    }

    console.initialize().await?;

    match command {
        Command::Show { .. } => Ok(()),
        Command::List { view, json } => {
            select(console, &view)?;
            let page = console.view();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&page)?)?;
            } else {
                write!(out, "{}", render::render_page(&page))?;
            }
            Ok(())
        }
        Command::Export { view, out: path } => {
            select(console, &view)?;
            let Some(export) = console.export_csv() else {
                return Ok(());
            };
            let path = path.unwrap_or_else(|| PathBuf::from(&export.file_name));
            std::fs::write(&path, &export.content)?;
            tracing::info!(path = %path.display(), rows = export.rows, "CSV exported");
            writeln!(out, "{}", path.display())?;
            Ok(())
        }
        Command::Create(args) => {
            let page = console.create(&ProductForm::from(args)).await?;
            write!(out, "{}", render::render_page(&page))?;
            Ok(())
        }
        Command::Update {
            id,
            title,
            price,
            description,
            category,
            images,
        } => {
            console.open_detail(id).await?;
            let mut form = console
                .begin_edit()
                .ok_or(ConsoleError::UnknownProduct(id))?;
            if let Some(title) = title {
                form.title = title;
            }
            if let Some(price) = price {
                form.price = price;
            }
            if let Some(description) = description {
                form.description = description;
            }
            if category.is_some() {
                form.category_id = category;
            }
            if let Some(images) = images {
                form.images = images;
            }
            let page = console.save_edit(&form).await?;
            write!(out, "{}", render::render_page(&page))?;
            Ok(())
        }
        Command::Categories => {
            write!(out, "{}", render::render_categories(console.category_options()))?;
            Ok(())
        }
        Command::Browse { debounce_ms } => {
            let window = debounce_ms
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_DEBOUNCE);
            browse(console, BufReader::new(tokio::io::stdin()), out, window).await
        }
    }
}

/// Print the table, then re-print it for each query that settles.
///
/// Lines arriving within `window` of each other collapse into the last
/// one. At end of input a pending query is still applied.
pub async fn browse<A, R, W>(
    console: &mut ConsoleController<A>,
    input: R,
    out: &mut W,
    window: Duration,
) -> ConsoleResult<()>
where
    A: CatalogApi,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (mut debouncer, mut settled) = SearchDebouncer::new(window);
    let mut lines = input.lines();
    let mut input_open = true;
    let mut pending = false;

    write!(out, "{}", render::render_page(&console.view()))?;
    out.flush()?;

    while input_open || pending {
        tokio::select! {
            line = lines.next_line(), if input_open => match line? {
                Some(query) => {
                    debouncer.push(query);
                    pending = true;
                }
                None => input_open = false,
            },
            Some(query) = settled.recv(), if pending => {
                pending = false;
                let page = console.search(&query);
                write!(out, "{}", render::render_page(&page))?;
                out.flush()?;
            }
            else => break,
        }
    }
    Ok(())
}

/// Page size first, then query and sort, then the page number.
fn select<A: CatalogApi>(console: &mut ConsoleController<A>, view: &ViewArgs) -> ConsoleResult<()> {
    if let Some(page_size) = view.page_size {
        console.set_page_size(page_size)?;
    }
    if let Some(query) = &view.search {
        console.search(query);
    }
    if view.sort.is_some() {
        console.set_sort(view.sort);
    }
    if let Some(page) = view.page {
        console.go_to_page(page);
    }
    Ok(())
}
