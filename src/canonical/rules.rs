//! Canonicalization rules and the ordered evaluator.
//!
//! # Rule Order
//! ```text
//! legacy pass
//!   1. legacy_suffix   path ends with ".html"      → mapped path, or path minus ".html"
//!   2. query_page      ?page=<value> present        → mapped path, or "/"
//! shortcut pass (only if the legacy pass did not redirect)
//!   3. home_alias      /home, /index (any case)     → "/"
//!   4. tour_slug       /tour/*, /tours/* (any case) → /tour-details/<slug>
//!   5. blog_slug       /blogs/*, /articles/*        → /blog/<slug>
//! otherwise PassThrough
//! ```
//!
//! # Design Decisions
//! - Prefix checks are case-insensitive, slugs keep their original case
//! - The slug is the text after the last `/`
//! - No input validation: every path yields exactly one decision

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use axum::http::StatusCode;
use thiserror::Error;

use super::tables::RedirectTables;

const HTML_SUFFIX: &str = ".html";

/// Outcome of canonicalizing one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Continue normal routing.
    PassThrough,
    /// Answer with a permanent redirect.
    Redirect(Redirect),
}

impl Decision {
    /// Target path if this is a redirect.
    pub fn target(&self) -> Option<&str> {
        match self {
            Decision::PassThrough => None,
            Decision::Redirect(r) => Some(r.target.as_str()),
        }
    }
}

/// A permanent redirect and the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub target: String,
    pub rule: &'static str,
}

impl Redirect {
    /// Always 301.
    pub fn status(&self) -> StatusCode {
        StatusCode::MOVED_PERMANENTLY
    }
}

/// Which of the two evaluation passes a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Legacy,
    Shortcut,
}

/// A rule list that would let a shortcut shadow a legacy rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("legacy rule `{legacy}` is listed after shortcut rule `{shortcut}`")]
pub struct RuleOrderError {
    pub legacy: &'static str,
    pub shortcut: &'static str,
}

/// The parts of a request the rules look at.
#[derive(Debug)]
pub struct RequestTarget<'a> {
    pub path: &'a str,
    pub lowered: String,
    pub query: &'a HashMap<String, String>,
}

impl<'a> RequestTarget<'a> {
    pub fn new(path: &'a str, query: &'a HashMap<String, String>) -> Self {
        Self {
            path,
            lowered: path.to_lowercase(),
            query,
        }
    }

    /// Text after the last `/` of the original path.
    fn slug(&self) -> &'a str {
        self.path
            .rsplit_once('/')
            .map(|(_, slug)| slug)
            .unwrap_or(self.path)
    }

    fn lowered_starts_with_any(&self, prefixes: &[&str]) -> bool {
        prefixes.iter().any(|p| self.lowered.starts_with(p))
    }
}

/// One predicate/action pair.
///
/// `evaluate` returns the redirect target when the rule applies.
pub trait Rule: Send + Sync + fmt::Debug {
    fn name(&self) -> &'static str;

    fn pass(&self) -> Pass;

    fn evaluate(&self, target: &RequestTarget<'_>, tables: &RedirectTables) -> Option<String>;
}

/// Rule 1: `.html` pages of the old site.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacySuffixRule;

impl Rule for LegacySuffixRule {
    fn name(&self) -> &'static str {
        "legacy_suffix"
    }

    fn pass(&self) -> Pass {
        Pass::Legacy
    }

    fn evaluate(&self, target: &RequestTarget<'_>, tables: &RedirectTables) -> Option<String> {
        let stripped = target.path.strip_suffix(HTML_SUFFIX)?;

        if let Some(mapped) = tables.legacy_paths.get(target.path) {
            return Some(mapped.to_string());
        }

        // Left unguarded: a bare ".html" yields an empty Location.
        if stripped.is_empty() || !stripped.starts_with('/') {
            tracing::warn!(
                path = %target.path,
                location = %stripped,
                "Stripping .html produced a degenerate redirect target"
            );
        }

        Some(stripped.to_string())
    }
}

/// Rule 2: `?page=<name>` style links.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryPageRule;

impl QueryPageRule {
    pub const PARAM: &'static str = "page";
}

impl Rule for QueryPageRule {
    fn name(&self) -> &'static str {
        "query_page"
    }

    fn pass(&self) -> Pass {
        Pass::Legacy
    }

    fn evaluate(&self, target: &RequestTarget<'_>, tables: &RedirectTables) -> Option<String> {
        let page = target.query.get(Self::PARAM)?;
        Some(tables.query_pages.resolve(page).to_string())
    }
}

/// Rule 3: `/home` and `/index` in any case.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomeAliasRule;

impl Rule for HomeAliasRule {
    fn name(&self) -> &'static str {
        "home_alias"
    }

    fn pass(&self) -> Pass {
        Pass::Shortcut
    }

    fn evaluate(&self, target: &RequestTarget<'_>, _tables: &RedirectTables) -> Option<String> {
        match target.lowered.as_str() {
            "/home" | "/index" => Some("/".to_string()),
            _ => None,
        }
    }
}

/// Rule 4: old tour URLs onto `/tour-details/<slug>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TourSlugRule;

impl Rule for TourSlugRule {
    fn name(&self) -> &'static str {
        "tour_slug"
    }

    fn pass(&self) -> Pass {
        Pass::Shortcut
    }

    fn evaluate(&self, target: &RequestTarget<'_>, _tables: &RedirectTables) -> Option<String> {
        if !target.lowered_starts_with_any(&["/tour/", "/tours/"]) {
            return None;
        }

        let slug = target.slug();
        if slug.is_empty() || slug == "tours" {
            return None;
        }

        Some(format!("/tour-details/{slug}"))
    }
}

/// Rule 5: old article URLs onto `/blog/<slug>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlogSlugRule;

impl Rule for BlogSlugRule {
    fn name(&self) -> &'static str {
        "blog_slug"
    }

    fn pass(&self) -> Pass {
        Pass::Shortcut
    }

    fn evaluate(&self, target: &RequestTarget<'_>, _tables: &RedirectTables) -> Option<String> {
        if !target.lowered_starts_with_any(&["/blogs/", "/articles/"]) {
            return None;
        }

        let slug = target.slug();
        if slug.is_empty() {
            return None;
        }

        Some(format!("/blog/{slug}"))
    }
}

/// Ordered, first-match-wins rule list over shared tables.
#[derive(Debug)]
pub struct Canonicalizer {
    tables: Arc<RedirectTables>,
    rules: Vec<Box<dyn Rule>>,
}

impl Canonicalizer {
    /// Canonicalizer with the standard rule order.
    pub fn new(tables: Arc<RedirectTables>) -> Self {
        Self {
            tables,
            rules: vec![
                Box::new(LegacySuffixRule),
                Box::new(QueryPageRule),
                Box::new(HomeAliasRule),
                Box::new(TourSlugRule),
                Box::new(BlogSlugRule),
            ],
        }
    }

    /// Canonicalizer with an explicit rule order.
    ///
    /// Every legacy-pass rule must come before the first shortcut-pass rule.
    pub fn with_rules(
        tables: Arc<RedirectTables>,
        rules: Vec<Box<dyn Rule>>,
    ) -> Result<Self, RuleOrderError> {
        let mut shortcut = None;
        for rule in &rules {
            match (rule.pass(), shortcut) {
                (Pass::Shortcut, None) => shortcut = Some(rule.name()),
                (Pass::Legacy, Some(shortcut)) => {
                    return Err(RuleOrderError {
                        legacy: rule.name(),
                        shortcut,
                    });
                }
                _ => {}
            }
        }
        Ok(Self { tables, rules })
    }

    pub fn tables(&self) -> &RedirectTables {
        &self.tables
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Decide what to do with a request.
    pub fn canonicalize(&self, path: &str, query: &HashMap<String, String>) -> Decision {
        let target = RequestTarget::new(path, query);

        for rule in &self.rules {
            if let Some(location) = rule.evaluate(&target, &self.tables) {
                return Decision::Redirect(Redirect {
                    target: location,
                    rule: rule.name(),
                });
            }
        }

        Decision::PassThrough
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonicalizer() -> Canonicalizer {
        Canonicalizer::new(Arc::new(RedirectTables::builtin()))
    }

    fn no_query() -> HashMap<String, String> {
        HashMap::new()
    }

    fn page(value: &str) -> HashMap<String, String> {
        HashMap::from([("page".to_string(), value.to_string())])
    }

    fn redirect(c: &Canonicalizer, path: &str) -> Option<String> {
        c.canonicalize(path, &no_query()).target().map(str::to_string)
    }

    #[test]
    fn test_every_legacy_key_maps_exactly() {
        let c = canonicalizer();
        for (key, target) in c.tables().legacy_paths.iter() {
            assert_eq!(redirect(&c, key).as_deref(), Some(target), "{key}");
        }
    }

    #[test]
    fn test_unmapped_html_is_stripped() {
        let c = canonicalizer();
        assert_eq!(redirect(&c, "/foo-bar.html").as_deref(), Some("/foo-bar"));
        assert_eq!(redirect(&c, "/a/b/c.html").as_deref(), Some("/a/b/c"));
    }

    #[test]
    fn test_html_strip_removes_one_suffix() {
        let c = canonicalizer();
        assert_eq!(redirect(&c, "/page.html.html").as_deref(), Some("/page.html"));
    }

    #[test]
    fn test_html_lookup_is_case_sensitive() {
        let c = canonicalizer();
        assert_eq!(redirect(&c, "/About.html").as_deref(), Some("/About"));
        // Uppercase suffix is not a legacy page at all.
        assert_eq!(c.canonicalize("/about.HTML", &no_query()), Decision::PassThrough);
    }

    #[test]
    fn test_degenerate_html_targets_are_unguarded() {
        let c = canonicalizer();
        assert_eq!(redirect(&c, ".html").as_deref(), Some(""));
        assert_eq!(redirect(&c, "/.html").as_deref(), Some("/"));
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn logged_while(f: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        buffer.contents()
    }

    #[test]
    fn test_degenerate_html_target_logs_warning() {
        let c = canonicalizer();

        let logs = logged_while(|| {
            assert_eq!(redirect(&c, ".html").as_deref(), Some(""));
        });
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("degenerate redirect target"), "{logs}");
        assert!(logs.contains("path=.html"), "{logs}");

        let logs = logged_while(|| {
            assert_eq!(redirect(&c, "/foo-bar.html").as_deref(), Some("/foo-bar"));
        });
        assert!(logs.is_empty(), "{logs}");
    }

    #[test]
    fn test_query_page_mapped_and_default() {
        let c = canonicalizer();
        let d = c.canonicalize("/anything", &page("about"));
        assert_eq!(d.target(), Some("/about"));

        let d = c.canonicalize("/anything", &page("unknown-value"));
        assert_eq!(d.target(), Some("/"));
    }

    #[test]
    fn test_query_page_fires_on_canonical_path() {
        let c = canonicalizer();
        let d = c.canonicalize("/", &page("about"));
        assert_eq!(d.target(), Some("/about"));
    }

    #[test]
    fn test_html_suffix_beats_query_page() {
        let c = canonicalizer();
        let d = c.canonicalize("/about-us.html", &page("contact"));
        assert_eq!(
            d,
            Decision::Redirect(Redirect {
                target: "/about".into(),
                rule: "legacy_suffix",
            })
        );
    }

    #[test]
    fn test_query_page_beats_shortcuts() {
        let c = canonicalizer();
        let d = c.canonicalize("/tour/golden-triangle", &page("contact"));
        assert_eq!(d.target(), Some("/contact"));
    }

    #[test]
    fn test_other_query_params_ignored() {
        let c = canonicalizer();
        let query = HashMap::from([("utm_source".to_string(), "mail".to_string())]);
        assert_eq!(c.canonicalize("/about", &query), Decision::PassThrough);
    }

    #[test]
    fn test_home_aliases_any_case() {
        let c = canonicalizer();
        assert_eq!(redirect(&c, "/HOME").as_deref(), Some("/"));
        assert_eq!(redirect(&c, "/Index").as_deref(), Some("/"));
        assert_eq!(redirect(&c, "/home").as_deref(), Some("/"));
        assert_eq!(c.canonicalize("/home/", &no_query()), Decision::PassThrough);
    }

    #[test]
    fn test_tour_slug_preserves_case() {
        let c = canonicalizer();
        assert_eq!(
            redirect(&c, "/tour/Golden-Triangle").as_deref(),
            Some("/tour-details/Golden-Triangle")
        );
        assert_eq!(
            redirect(&c, "/TOURS/kerala").as_deref(),
            Some("/tour-details/kerala")
        );
    }

    #[test]
    fn test_tour_slug_uses_last_segment() {
        let c = canonicalizer();
        assert_eq!(
            redirect(&c, "/tours/india/rajasthan-heritage").as_deref(),
            Some("/tour-details/rajasthan-heritage")
        );
    }

    #[test]
    fn test_tour_slug_skips_empty_and_tours() {
        let c = canonicalizer();
        assert_eq!(c.canonicalize("/tours/tours", &no_query()), Decision::PassThrough);
        assert_eq!(c.canonicalize("/tours/", &no_query()), Decision::PassThrough);
        assert_eq!(c.canonicalize("/tour/", &no_query()), Decision::PassThrough);
    }

    #[test]
    fn test_blog_slug() {
        let c = canonicalizer();
        assert_eq!(redirect(&c, "/blogs/my-post").as_deref(), Some("/blog/my-post"));
        assert_eq!(
            redirect(&c, "/Articles/Monsoon-Guide").as_deref(),
            Some("/blog/Monsoon-Guide")
        );
        assert_eq!(c.canonicalize("/blogs/", &no_query()), Decision::PassThrough);
    }

    #[test]
    fn test_rule_names_follow_order() {
        let c = canonicalizer();
        let names: Vec<_> = c.rules().iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            ["legacy_suffix", "query_page", "home_alias", "tour_slug", "blog_slug"]
        );
        let passes: Vec<_> = c.rules().iter().map(|r| r.pass()).collect();
        assert_eq!(
            passes,
            [Pass::Legacy, Pass::Legacy, Pass::Shortcut, Pass::Shortcut, Pass::Shortcut]
        );
    }

    #[test]
    fn test_canonical_paths_pass_through() {
        let c = canonicalizer();
        for path in ["/", "/about", "/tours", "/tour-details/x", "/blog/x", "/api/tours"] {
            assert_eq!(c.canonicalize(path, &no_query()), Decision::PassThrough, "{path}");
        }
    }

    #[test]
    fn test_redirect_targets_do_not_loop() {
        let c = canonicalizer();
        let mut inputs: Vec<(String, HashMap<String, String>)> = c
            .tables()
            .legacy_paths
            .iter()
            .map(|(k, _)| (k.to_string(), no_query()))
            .collect();
        inputs.extend(
            ["about", "tours", "contact", "nope"]
                .into_iter()
                .map(|p| ("/".to_string(), page(p))),
        );
        for path in [
            "/foo-bar.html",
            "/HOME",
            "/Index",
            "/tour/Golden-Triangle",
            "/blogs/my-post",
            "/articles/x",
        ] {
            inputs.push((path.to_string(), no_query()));
        }

        for (path, query) in inputs {
            let first = c.canonicalize(&path, &query);
            let target = first.target().expect("input should redirect").to_string();
            assert_eq!(
                c.canonicalize(&target, &no_query()),
                Decision::PassThrough,
                "{path} -> {target} redirected again"
            );
        }
    }

    #[test]
    fn test_redirect_status_is_permanent() {
        let c = canonicalizer();
        match c.canonicalize("/HOME", &no_query()) {
            Decision::Redirect(r) => assert_eq!(r.status(), StatusCode::MOVED_PERMANENTLY),
            Decision::PassThrough => panic!("expected redirect"),
        }
    }

    #[test]
    fn test_custom_rule_order() {
        let c = Canonicalizer::with_rules(
            Arc::new(RedirectTables::builtin()),
            vec![Box::new(HomeAliasRule)],
        )
        .unwrap();
        assert_eq!(c.canonicalize("/about.html", &no_query()), Decision::PassThrough);
        assert_eq!(c.canonicalize("/home", &no_query()).target(), Some("/"));
    }

    #[test]
    fn test_legacy_rule_after_shortcut_is_rejected() {
        let err = Canonicalizer::with_rules(
            Arc::new(RedirectTables::builtin()),
            vec![
                Box::new(QueryPageRule),
                Box::new(TourSlugRule),
                Box::new(LegacySuffixRule),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err,
            RuleOrderError {
                legacy: "legacy_suffix",
                shortcut: "tour_slug",
            }
        );
        assert_eq!(
            err.to_string(),
            "legacy rule `legacy_suffix` is listed after shortcut rule `tour_slug`"
        );
    }
}
