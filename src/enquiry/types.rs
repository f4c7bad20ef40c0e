use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validate::{require_email, require_text};

/// Common behaviour of the enquiry forms.
pub trait Enquiry {
    /// Label used in logs and metrics.
    fn kind(&self) -> &'static str;

    /// Every problem with the submission, or `Ok` when it can be accepted.
    fn validate(&self) -> Result<(), Vec<String>>;
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
}

impl Enquiry for ContactRequest {
    fn kind(&self) -> &'static str {
        "contact"
    }

    fn validate(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();
        require_text("name", &self.name, &mut problems);
        require_email(&self.email, &mut problems);
        require_text("message", &self.message, &mut problems);

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CustomizeTourRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub destinations: Vec<String>,
    pub travelers: u32,
    /// Preferred start date as entered (e.g. `2026-12-01`).
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub duration_days: Option<u32>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Enquiry for CustomizeTourRequest {
    fn kind(&self) -> &'static str {
        "customize_tour"
    }

    fn validate(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();
        require_text("name", &self.name, &mut problems);
        require_email(&self.email, &mut problems);

        if self.destinations.iter().all(|d| d.trim().is_empty()) {
            problems.push("destinations must list at least one place".to_string());
        }
        if self.travelers == 0 {
            problems.push("travelers must be at least 1".to_string());
        }
        if self.duration_days == Some(0) {
            problems.push("duration_days must be at least 1".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}

/// Acknowledgement returned for an accepted enquiry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Receipt {
    pub id: Uuid,
    pub status: String,
}

impl Receipt {
    pub fn received() -> Self {
        Self {
            id: Uuid::new_v4(),
            status: "received".to_string(),
        }
    }
}
