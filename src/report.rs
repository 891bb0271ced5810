//! Report Generator
//!
//! Serializes the current catalog snapshot into a self-contained,
//! printable RTL HTML document and opens it in a new window.

use crate::categories;
use crate::models::Item;

const REPORT_STYLE: &str = "
body {
  font-family: Arial, sans-serif;
  margin: 0;
  padding: 20px;
  direction: rtl;
}
.report-header {
  text-align: center;
  margin-bottom: 30px;
}
.items-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(250px, 1fr));
  gap: 20px;
  padding: 20px;
}
.item-card {
  border: 1px solid #ccc;
  border-radius: 8px;
  padding: 15px;
  background: white;
}
.item-image {
  width: 100%;
  height: 200px;
  object-fit: cover;
  border-radius: 4px;
  margin-bottom: 10px;
}
.item-category {
  color: #666;
  font-size: 0.9em;
}
@media print {
  .items-grid {
    grid-template-columns: repeat(2, 1fr);
  }
}
";

/// Render the printable inventory report. Deterministic for a given
/// item collection and generation date; no mutation, no network.
pub fn render_report(items: &[Item], generated_on: &str) -> String {
    let mut cards = String::new();
    for item in items {
        cards.push_str(&format!(
            r#"<div class="item-card">
  <img src="{image}" alt="{name}" class="item-image">
  <div class="item-details">
    <h3>{name}</h3>
    <p class="item-category">{category}</p>
    <p>כמות: {quantity}</p>
    <p>תאריך: {date}</p>
  </div>
</div>
"#,
            image = escape_html(&item.image),
            name = escape_html(&item.name),
            category = categories::category_label(&item.category),
            quantity = item.quantity,
            date = escape_html(&item.date),
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html dir="rtl" lang="he">
<head>
<meta charset="UTF-8">
<title>דו"ח מלאי</title>
<style>{style}</style>
</head>
<body>
<div class="report-header">
  <h1>דו"ח מלאי</h1>
  <p>נוצר בתאריך: {generated_on}</p>
</div>
<div class="items-grid">
{cards}</div>
<script>window.onload = () => {{ window.print(); URL.revokeObjectURL(location.href); }};</script>
</body>
</html>
"#,
        style = REPORT_STYLE,
        generated_on = escape_html(generated_on),
        cards = cards,
    )
}

/// Open the rendered report in a new window as a Blob URL. The print
/// call lives inside the document itself, which also revokes its own
/// Blob URL once loaded; this is a no-op when the window or popup is
/// unavailable.
pub fn open_print_window(html: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(html));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/html");

    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };
    let _ = window.open_with_url_and_target(&url, "_blank");
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, category: &str) -> Item {
        Item {
            id: 1,
            name: name.to_string(),
            quantity: 3,
            category: category.to_string(),
            image: "https://placehold.co/400x300/png".to_string(),
            date: "2026-08-29".to_string(),
        }
    }

    #[test]
    fn report_embeds_item_fields_and_header() {
        let html = render_report(&[item("מקדחה", "maintenance")], "29.8.2026");

        assert!(html.contains("נוצר בתאריך: 29.8.2026"));
        assert!(html.contains("<h3>מקדחה</h3>"));
        assert!(html.contains("אחזקה 🔧"));
        assert!(html.contains("כמות: 3"));
        assert!(html.contains("תאריך: 2026-08-29"));
        assert!(html.contains("window.print()"));
    }

    #[test]
    fn report_renders_one_card_per_item() {
        let items = vec![item("א", "general"), item("ב", "general"), item("ג", "av")];
        let html = render_report(&items, "29.8.2026");
        assert_eq!(html.matches("item-card").count(), items.len() + 1); // +1 for the CSS rule
    }

    #[test]
    fn unknown_category_renders_fallback_label() {
        let html = render_report(&[item("x", "nonexistent-category")], "29.8.2026");
        assert!(html.contains(categories::UNKNOWN_CATEGORY_LABEL));
    }

    #[test]
    fn item_names_are_html_escaped() {
        let html = render_report(&[item("<script>alert()</script>", "general")], "d");
        assert!(!html.contains("<script>alert()"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn document_prints_and_releases_its_own_blob_url() {
        let html = render_report(&[], "29.8.2026");
        let script_at = html.find("window.print()").unwrap();
        let revoke_at = html.find("URL.revokeObjectURL(location.href)").unwrap();
        assert!(script_at < revoke_at);
    }

    #[test]
    fn empty_catalog_still_renders_a_document() {
        let html = render_report(&[], "29.8.2026");
        assert!(html.contains("דו\"ח מלאי"));
        assert!(!html.contains("item-details"));
    }
}
