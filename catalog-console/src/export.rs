//! CSV export of the current page

use shared::Product;

pub const CSV_HEADER: &str = "ID,Title,Price,Category,Description";

/// Render `products` as CSV. Lines are joined with `\n`; text columns are
/// always quoted, id and price never are.
pub fn to_csv(products: &[Product]) -> String {
    let mut lines = Vec::with_capacity(products.len() + 1);
    lines.push(CSV_HEADER.to_string());
    lines.extend(products.iter().map(|p| {
        format!(
            "{},{},{},{},{}",
            p.id,
            quote(&p.title),
            p.price.normalize(),
            quote(p.category_name()),
            quote(&p.description)
        )
    }));
    lines.join("\n")
}

/// Suggested download name, e.g. `products_export_1700000000000.csv`
pub fn export_file_name(timestamp_millis: i64) -> String {
    format!("products_export_{timestamp_millis}.csv")
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}
