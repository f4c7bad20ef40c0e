/// Render robots.txt: crawl everything except the JSON API.
pub fn render_robots(base_url: &str) -> String {
    format!(
        "User-agent: *\n\
         Allow: /\n\
         Disallow: /api/\n\
         \n\
         Sitemap: {base_url}/sitemap.xml\n"
    )
}
