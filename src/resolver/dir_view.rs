//! Synthetic directory listing page.

use crate::backend::Listing;

/// Renders a minimal HTML index for `display_path`, linking each entry's
/// name to its path. Deterministic for a given input.
pub fn render(display_path: &str, listing: &Listing) -> String {
    let title = escape(display_path);

    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n");
    page.push_str(&format!("<title>Index of {title}</title>\n"));
    page.push_str("</head>\n<body>\n");
    page.push_str(&format!("<h1>Index of {title}</h1>\n<ul>\n"));

    for entry in listing {
        page.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            escape(&entry.path),
            escape(&entry.name)
        ));
    }

    page.push_str("</ul>\n</body>\n</html>\n");
    page
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
