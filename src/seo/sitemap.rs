use std::fmt::Write;

/// Canonical pages that exist independently of the catalog.
pub const STATIC_PAGES: &[&str] = &[
    "/",
    "/about",
    "/tours",
    "/contact",
    "/customize-tour",
    "/blog",
];

/// Render a sitemap urlset for the static pages and one entry per tour.
pub fn render_sitemap(base_url: &str, tour_slugs: &[String]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    let tour_paths = tour_slugs.iter().map(|slug| format!("/tour-details/{slug}"));
    let paths = STATIC_PAGES.iter().map(|p| p.to_string()).chain(tour_paths);

    for path in paths {
        // Writing to a String cannot fail.
        let _ = writeln!(
            xml,
            "  <url><loc>{}</loc></url>",
            escape_xml(&format!("{base_url}{path}"))
        );
    }

    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sitemap_lists_static_pages_and_tours() {
        let xml = render_sitemap("https://example.travel", &["golden-triangle".to_string()]);
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset"));
        assert!(xml.contains("<loc>https://example.travel/</loc>"));
        assert!(xml.contains("<loc>https://example.travel/customize-tour</loc>"));
        assert!(xml.contains("<loc>https://example.travel/tour-details/golden-triangle</loc>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
        assert_eq!(xml.matches("<url>").count(), STATIC_PAGES.len() + 1);
    }

    #[test]
    fn test_sitemap_escapes_locations() {
        let xml = render_sitemap("https://example.travel", &["a&b".to_string()]);
        assert!(xml.contains("/tour-details/a&amp;b</loc>"));
        assert!(!xml.contains("a&b"));
    }
}
