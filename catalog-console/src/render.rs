//! Plain-text rendering for the terminal front end

use std::fmt::Write as _;

use shared::Category;

use crate::store::PageControl;
use crate::view::{PageView, ProductDetail, Summary};

const TITLE_WIDTH: usize = 40;

/// Table, pagination strip and summary line
pub fn render_page(view: &PageView) -> String {
    let mut out = String::new();
    if view.is_empty() {
        out.push_str("No products found.\n");
    } else {
        let _ = writeln!(
            out,
            "{:>6}  {:<width$}  {:>10}  {}",
            "ID",
            "Title",
            "Price",
            "Category",
            width = TITLE_WIDTH
        );
        for row in &view.rows {
            let _ = writeln!(
                out,
                "{:>6}  {:<width$}  {:>10}  {}",
                row.id,
                truncate(&row.title, TITLE_WIDTH),
                row.price_label,
                row.category,
                width = TITLE_WIDTH
            );
        }
    }

    let strip = render_pagination(&view.pagination);
    if !strip.is_empty() {
        let _ = writeln!(out, "\n{strip}");
    }
    let _ = writeln!(out, "{}", render_summary(&view.summary));
    out
}

/// e.g. `< 1 ... 8 9 [10] 11 12 ... 20 >`. Disabled arrows render as `-`.
pub fn render_pagination(controls: &[PageControl]) -> String {
    controls
        .iter()
        .map(|control| match control {
            PageControl::Previous { disabled: true, .. } | PageControl::Next { disabled: true, .. } => {
                "-".to_string()
            }
            PageControl::Previous { .. } => "<".to_string(),
            PageControl::Next { .. } => ">".to_string(),
            PageControl::Page { number, active: true } => format!("[{number}]"),
            PageControl::Page { number, .. } => number.to_string(),
            PageControl::Ellipsis => "...".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_summary(summary: &Summary) -> String {
    format!(
        "Showing {} to {} of {} products",
        summary.start, summary.end, summary.total
    )
}

pub fn render_detail(detail: &ProductDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#{} {}", detail.id, detail.title);
    let _ = writeln!(out, "Price:    {}", detail.price_label);
    let _ = writeln!(out, "Category: {}", detail.category);
    if !detail.description.is_empty() {
        let _ = writeln!(out, "\n{}\n", detail.description);
    }
    let _ = writeln!(out, "Images:");
    for image in &detail.images {
        let _ = writeln!(out, "  {image}");
    }
    out
}

pub fn render_categories(categories: &[Category]) -> String {
    let mut out = String::new();
    for category in categories {
        let _ = writeln!(out, "{:>6}  {}", category.id, category.name);
    }
    out
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::page_controls;
    use crate::view::ProductRow;
    use shared::Decimal;

    fn row(id: i64, title: &str) -> ProductRow {
        ProductRow {
            id,
            title: title.to_string(),
            price: Decimal::from(10),
            price_label: "$10.00".to_string(),
            category: "Clothes".to_string(),
            thumbnail: String::new(),
        }
    }

    #[test]
    fn test_pagination_strip() {
        assert_eq!(
            render_pagination(&page_controls(10, 20)),
            "< 1 ... 8 9 [10] 11 12 ... 20 >"
        );
        assert_eq!(render_pagination(&page_controls(1, 3)), "- [1] 2 3 >");
        assert_eq!(render_pagination(&[]), "");
    }

    #[test]
    fn test_page_lists_rows_and_summary() {
        let view = PageView {
            rows: vec![row(1, "Shirt"), row(2, "Pants")],
            pagination: vec![],
            summary: Summary { start: 1, end: 2, total: 2 },
        };
        let text = render_page(&view);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("Shirt") && lines[1].contains("$10.00"));
        assert_eq!(lines[3], "Showing 1 to 2 of 2 products");
    }

    #[test]
    fn test_empty_page() {
        let view = PageView {
            rows: vec![],
            pagination: vec![],
            summary: Summary { start: 0, end: 0, total: 0 },
        };
        assert_eq!(
            render_page(&view),
            "No products found.\nShowing 0 to 0 of 0 products\n"
        );
    }

    #[test]
    fn test_long_titles_are_truncated() {
        let long = "x".repeat(60);
        let cut = truncate(&long, TITLE_WIDTH);
        assert_eq!(cut.chars().count(), TITLE_WIDTH);
        assert!(cut.ends_with("..."));
        assert_eq!(truncate("short", TITLE_WIDTH), "short");
    }

    #[test]
    fn test_detail() {
        let detail = ProductDetail {
            id: 7,
            title: "Lamp".to_string(),
            price_label: "$5.00".to_string(),
            category: "N/A".to_string(),
            description: String::new(),
            images: vec!["https://img/a.png".to_string()],
        };
        assert_eq!(
            render_detail(&detail),
            "#7 Lamp\nPrice:    $5.00\nCategory: N/A\nImages:\n  https://img/a.png\n"
        );
    }
}
