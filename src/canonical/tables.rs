//! Static redirect tables.
//!
//! # Responsibilities
//! - Hold the legacy `.html` path map (exact, case-sensitive keys)
//! - Hold the `?page=` query value map with its `/` default
//! - Merge built-in entries with entries from the `[redirects]` config
//!
//! # Design Decisions
//! - Built once at startup, never mutated afterwards
//! - Config entries override built-in entries with the same key

use std::collections::HashMap;

use crate::config::RedirectConfig;

/// Legacy pages of the previous static site and where they live now.
const BUILTIN_LEGACY_PATHS: &[(&str, &str)] = &[
    ("/index.html", "/"),
    ("/home.html", "/"),
    ("/about.html", "/about"),
    ("/about-us.html", "/about"),
    ("/contact.html", "/contact"),
    ("/contact-us.html", "/contact"),
    ("/tours.html", "/tours"),
    ("/packages.html", "/tours"),
    ("/tour-packages.html", "/tours"),
    ("/customize.html", "/customize-tour"),
    ("/customize-tour.html", "/customize-tour"),
    ("/blog.html", "/blog"),
    ("/golden-triangle.html", "/tour-details/golden-triangle"),
    ("/kerala-backwaters.html", "/tour-details/kerala-backwaters"),
    ("/rajasthan-heritage.html", "/tour-details/rajasthan-heritage"),
    ("/privacy-policy.html", "/privacy-policy"),
    ("/terms.html", "/terms-and-conditions"),
];

/// `?page=` values used by the old single-entry site.
const BUILTIN_QUERY_PAGES: &[(&str, &str)] = &[
    ("home", "/"),
    ("about", "/about"),
    ("contact", "/contact"),
    ("tours", "/tours"),
    ("packages", "/tours"),
    ("customize", "/customize-tour"),
    ("blog", "/blog"),
];

/// Exact legacy path → canonical path.
#[derive(Debug, Clone, Default)]
pub struct LegacyPathMap {
    entries: HashMap<String, String>,
}

impl LegacyPathMap {
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Case-sensitive exact lookup.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// `page` query value → canonical path.
#[derive(Debug, Clone, Default)]
pub struct QueryPageMap {
    entries: HashMap<String, String>,
}

impl QueryPageMap {
    /// Target for a `page` value with no entry.
    pub const DEFAULT_TARGET: &'static str = "/";

    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Resolve a `page` value, falling back to [`Self::DEFAULT_TARGET`].
    pub fn resolve(&self, page: &str) -> &str {
        self.entries
            .get(page)
            .map(String::as_str)
            .unwrap_or(Self::DEFAULT_TARGET)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Both lookup tables, frozen for the life of the process.
#[derive(Debug, Clone, Default)]
pub struct RedirectTables {
    pub legacy_paths: LegacyPathMap,
    pub query_pages: QueryPageMap,
}

impl RedirectTables {
    /// Tables for the site as shipped.
    pub fn builtin() -> Self {
        Self {
            legacy_paths: LegacyPathMap::new(BUILTIN_LEGACY_PATHS.iter().copied()),
            query_pages: QueryPageMap::new(BUILTIN_QUERY_PAGES.iter().copied()),
        }
    }

    /// Build tables from config, layered over the built-ins when enabled.
    pub fn from_config(config: &RedirectConfig) -> Self {
        let mut legacy: HashMap<String, String> = HashMap::new();
        let mut pages: HashMap<String, String> = HashMap::new();

        if config.use_builtin {
            legacy.extend(
                BUILTIN_LEGACY_PATHS
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string())),
            );
            pages.extend(
                BUILTIN_QUERY_PAGES
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string())),
            );
        }

        legacy.extend(config.legacy_paths.clone());
        pages.extend(config.query_pages.clone());

        Self {
            legacy_paths: LegacyPathMap { entries: legacy },
            query_pages: QueryPageMap { entries: pages },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_keys_are_legacy_shaped() {
        let tables = RedirectTables::builtin();
        for (key, target) in tables.legacy_paths.iter() {
            assert!(key.starts_with('/'), "{key}");
            assert!(key.ends_with(".html"), "{key}");
            assert!(target.starts_with('/'), "{target}");
        }
    }

    #[test]
    fn test_query_page_default() {
        let tables = RedirectTables::builtin();
        assert_eq!(tables.query_pages.resolve("about"), "/about");
        assert_eq!(tables.query_pages.resolve("About"), "/");
        assert_eq!(tables.query_pages.resolve(""), "/");
    }

    #[test]
    fn test_config_overrides_builtin() {
        let mut config = RedirectConfig::default();
        config
            .legacy_paths
            .insert("/about.html".into(), "/our-story".into());
        config.query_pages.insert("faq".into(), "/faq".into());

        let tables = RedirectTables::from_config(&config);
        assert_eq!(tables.legacy_paths.get("/about.html"), Some("/our-story"));
        assert_eq!(tables.legacy_paths.get("/contact.html"), Some("/contact"));
        assert_eq!(tables.query_pages.resolve("faq"), "/faq");
    }

    #[test]
    fn test_config_without_builtin() {
        let mut config = RedirectConfig {
            use_builtin: false,
            ..Default::default()
        };
        config.legacy_paths.insert("/old.html".into(), "/new".into());

        let tables = RedirectTables::from_config(&config);
        assert_eq!(tables.legacy_paths.len(), 1);
        assert!(tables.query_pages.is_empty());
        assert_eq!(tables.legacy_paths.get("/index.html"), None);
    }
}
