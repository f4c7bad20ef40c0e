//! In-memory tour catalog.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::RwLock;

use thiserror::Error;

use super::tour::Tour;

const SAMPLE_TOURS: &str = include_str!("../../data/tours.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read tour catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse tour catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("tour at position {0} has an empty slug")]
    EmptySlug(usize),

    #[error("duplicate tour slug `{0}`")]
    DuplicateSlug(String),

    #[error("position {index} is out of range for {len} tours")]
    OutOfRange { index: usize, len: usize },
}

/// Move the element at `from` to `to`, shifting the elements between.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<(), CatalogError> {
    let len = items.len();
    for index in [from, to] {
        if index >= len {
            return Err(CatalogError::OutOfRange { index, len });
        }
    }

    let item = items.remove(from);
    items.insert(to, item);
    Ok(())
}

/// Ordered tour list shared by all handlers.
#[derive(Debug)]
pub struct TourCatalog {
    tours: RwLock<Vec<Tour>>,
}

impl TourCatalog {
    /// Build a catalog, rejecting empty or duplicate slugs.
    pub fn new(tours: Vec<Tour>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (i, tour) in tours.iter().enumerate() {
            if tour.slug.trim().is_empty() {
                return Err(CatalogError::EmptySlug(i));
            }
            if !seen.insert(tour.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(tour.slug.clone()));
            }
        }

        Ok(Self {
            tours: RwLock::new(tours),
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let tours: Vec<Tour> = serde_json::from_str(raw)?;
        Self::new(tours)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// The sample catalog bundled with the binary.
    pub fn sample() -> Result<Self, CatalogError> {
        Self::from_json(SAMPLE_TOURS)
    }

    /// Load `path` when configured, otherwise the bundled sample.
    pub fn load_or_sample(path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => Self::load(path)?,
            None => Self::sample()?,
        };

        let source = path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in".to_string());
        tracing::info!(
            source = %source,
            tours = catalog.len(),
            "Tour catalog loaded"
        );
        Ok(catalog)
    }

    /// Tours in display order, optionally only featured ones.
    pub fn list(&self, featured_only: bool) -> Vec<Tour> {
        self.read()
            .iter()
            .filter(|t| !featured_only || t.featured)
            .cloned()
            .collect()
    }

    pub fn get(&self, slug: &str) -> Option<Tour> {
        self.read().iter().find(|t| t.slug == slug).cloned()
    }

    pub fn slugs(&self) -> Vec<String> {
        self.read().iter().map(|t| t.slug.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Move one tour in display order, returning the new slug order.
    pub fn reorder(&self, from: usize, to: usize) -> Result<Vec<String>, CatalogError> {
        let mut tours = self.tours.write().expect("tour catalog lock poisoned");
        array_move(&mut tours, from, to)?;

        tracing::info!(from, to, moved = %tours[to].slug, "Tour order changed");
        Ok(tours.iter().map(|t| t.slug.clone()).collect())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Tour>> {
        self.tours.read().expect("tour catalog lock poisoned")
    }
}
