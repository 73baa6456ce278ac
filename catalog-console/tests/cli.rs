// catalog-console/tests/cli.rs
// Subcommands executed against an in-memory catalog

mod common;

use std::time::Duration;

use catalog_console::cli::{Cli, Command, browse, execute};
use catalog_console::{ConsoleController, ConsoleError};
use clap::Parser;
use common::FakeCatalog;
use shared::Decimal;

fn parse(args: &[&str]) -> Command {
    let mut argv = vec!["catalog-console"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap().command
}

async fn run(
    console: &mut ConsoleController<FakeCatalog>,
    args: &[&str],
) -> (Result<(), ConsoleError>, String) {
    let mut out = Vec::new();
    let result = execute(console, parse(args), &mut out).await;
    (result, String::from_utf8(out).unwrap())
}

fn console(api: FakeCatalog, page_size: usize) -> ConsoleController<FakeCatalog> {
    ConsoleController::new(api, page_size).unwrap()
}

#[tokio::test]
async fn test_list_prints_table() {
    let mut console = console(FakeCatalog::sample(), 10);
    let (result, out) = run(&mut console, &["list", "--sort", "price:desc"]).await;
    result.unwrap();

    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[1].contains("Shoes"));
    assert!(lines[3].contains("Shirt"));
    assert_eq!(lines.last().copied(), Some("Showing 1 to 3 of 3 products"));
}

#[tokio::test]
async fn test_list_pages() {
    let mut console = console(FakeCatalog::with_products(23), 10);
    let (result, out) = run(&mut console, &["list", "--page", "3"]).await;
    result.unwrap();

    assert!(out.contains("< 1 2 [3] -"));
    assert!(out.ends_with("Showing 21 to 23 of 23 products\n"));
}

#[tokio::test]
async fn test_list_json() {
    let mut console = console(FakeCatalog::sample(), 2);
    let (result, out) = run(&mut console, &["list", "--json", "--search", "s"]).await;
    result.unwrap();

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["summary"]["total"], 3);
    assert_eq!(value["rows"].as_array().unwrap().len(), 2);
    assert_eq!(value["pagination"][0]["kind"], "previous");
}

#[tokio::test]
async fn test_show_missing_product() {
    let mut console = console(FakeCatalog::sample(), 10);
    let (result, out) = run(&mut console, &["show", "42"]).await;

    assert!(matches!(result, Err(ConsoleError::Remote(ref e)) if e.is_not_found()));
    assert!(out.is_empty());
    // show never loads the catalog
    assert_eq!(console.api().calls(), vec!["get_product 42".to_string()]);
}

#[tokio::test]
async fn test_export_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.csv");
    let mut console = console(FakeCatalog::sample(), 10);

    let (result, out) = run(
        &mut console,
        &["export", "--search", "sh", "--out", path.to_str().unwrap()],
    )
    .await;
    result.unwrap();

    assert_eq!(out.trim(), path.display().to_string());
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 3); // header, Shirt, Shoes
}

#[tokio::test]
async fn test_export_empty_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.csv");
    let mut console = console(FakeCatalog::sample(), 10);

    let (result, out) = run(
        &mut console,
        &["export", "--search", "zzz", "--out", path.to_str().unwrap()],
    )
    .await;
    result.unwrap();

    assert!(out.is_empty());
    assert!(!path.exists());
}

#[tokio::test]
async fn test_update_overrides_only_given_fields() {
    let mut console = console(FakeCatalog::sample(), 10);
    let (result, _) = run(&mut console, &["update", "2", "--price", "25"]).await;
    result.unwrap();

    let updated = console.store().product(2).unwrap();
    assert_eq!(updated.price, Decimal::from(25));
    assert_eq!(updated.title, "Pants");
    assert_eq!(updated.description, "Pants description");
}

#[tokio::test]
async fn test_create_rejects_bad_price() {
    let mut console = console(FakeCatalog::sample(), 10);
    let (result, _) = run(
        &mut console,
        &[
            "create",
            "--title",
            "Lamp",
            "--price",
            "free",
            "--description",
            "Desk lamp",
            "--category",
            "3",
        ],
    )
    .await;

    assert!(result.unwrap_err().is_validation());
    assert!(console.api().creates.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_categories() {
    let mut console = console(FakeCatalog::sample(), 10);
    let (result, out) = run(&mut console, &["categories"]).await;
    result.unwrap();

    assert_eq!(out.lines().count(), 3);
    assert!(out.contains("Electronics"));
}

#[tokio::test]
async fn test_search_ignores_category_names() {
    let mut console = console(FakeCatalog::sample(), 10);
    let (result, out) = run(&mut console, &["list", "--search", "clothes"]).await;
    result.unwrap();

    assert!(out.starts_with("No products found."));
    assert!(out.ends_with("Showing 0 to 0 of 0 products\n"));
}

#[tokio::test(start_paused = true)]
async fn test_browse_applies_only_settled_query() {
    let mut console = console(FakeCatalog::sample(), 10);
    console.initialize().await.unwrap();

    let input: &[u8] = b"s\nsh\nshirt\n";
    let mut out = Vec::new();
    browse(&mut console, input, &mut out, Duration::from_millis(300))
        .await
        .unwrap();

    let out = String::from_utf8(out).unwrap();
    // initial table, then one page for the last query only
    assert_eq!(out.matches("Showing").count(), 2);
    assert!(out.ends_with("Showing 1 to 1 of 1 products\n"));
    assert_eq!(console.store().query(), "shirt");
}

#[tokio::test(start_paused = true)]
async fn test_browse_without_input_prints_once() {
    let mut console = console(FakeCatalog::sample(), 10);
    console.initialize().await.unwrap();

    let input: &[u8] = b"";
    let mut out = Vec::new();
    browse(&mut console, input, &mut out, Duration::from_millis(300))
        .await
        .unwrap();

    let out = String::from_utf8(out).unwrap();
    assert_eq!(out.matches("Showing").count(), 1);
    assert!(out.ends_with("Showing 1 to 3 of 3 products\n"));
}
