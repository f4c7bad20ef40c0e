use serde::{Deserialize, Serialize};

/// A bookable tour package.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Tour {
    /// URL identifier, used in `/tour-details/{slug}`.
    pub slug: String,

    pub title: String,

    pub summary: String,

    pub duration_days: u32,

    /// Starting price per person, in whole currency units.
    pub price_from: u32,

    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub destinations: Vec<String>,

    #[serde(default)]
    pub highlights: Vec<String>,

    #[serde(default)]
    pub image: Option<String>,

    /// Shown on the home page.
    #[serde(default)]
    pub featured: bool,
}

fn default_currency() -> String {
    "USD".to_string()
}
