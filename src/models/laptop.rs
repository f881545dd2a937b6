//! Laptop model, its remarks and problem reports

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::enums::LaptopStatus;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Basic `local@domain.tld` shape check used for problem reporters
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Laptop record. Remarks and problems belong to the laptop and go away with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Laptop {
    pub id: Uuid,
    pub computer_name: String,
    pub cpu: String,
    pub ram: String,
    pub gpu: String,
    pub software_version: String,
    pub status: LaptopStatus,
    /// Oldest first
    pub remarks: Vec<String>,
    /// Newest first
    pub problems: Vec<Problem>,
}

impl Laptop {
    pub fn problem_mut(&mut self, problem_id: Uuid) -> Option<&mut Problem> {
        self.problems.iter_mut().find(|p| p.id == problem_id)
    }
}

/// Problem status. Resolution details only exist once resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProblemState {
    #[default]
    Open,
    Resolved {
        resolver_name: String,
        repair_details: String,
        date_resolved: DateTime<Utc>,
    },
}

/// Hardware problem reported against a laptop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub id: Uuid,
    pub description: String,
    pub reporter_name: String,
    pub reporter_email: String,
    pub date_reported: DateTime<Utc>,
    #[serde(flatten)]
    pub state: ProblemState,
}

impl Problem {
    pub fn is_open(&self) -> bool {
        matches!(self.state, ProblemState::Open)
    }

    pub fn is_resolved(&self) -> bool {
        !self.is_open()
    }

    pub fn date_resolved(&self) -> Option<DateTime<Utc>> {
        match &self.state {
            ProblemState::Open => None,
            ProblemState::Resolved { date_resolved, .. } => Some(*date_resolved),
        }
    }
}

/// Create laptop request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateLaptop {
    #[validate(length(min = 1, message = "Computer name is required"))]
    pub computer_name: String,
    #[validate(length(min = 1, message = "CPU is required"))]
    pub cpu: String,
    #[validate(length(min = 1, message = "RAM is required"))]
    pub ram: String,
    #[validate(length(min = 1, message = "GPU is required"))]
    pub gpu: String,
    #[validate(length(min = 1, message = "Software version is required"))]
    pub software_version: String,
}

impl CreateLaptop {
    /// Copy with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> Self {
        Self {
            computer_name: self.computer_name.trim().to_string(),
            cpu: self.cpu.trim().to_string(),
            ram: self.ram.trim().to_string(),
            gpu: self.gpu.trim().to_string(),
            software_version: self.software_version.trim().to_string(),
        }
    }

    /// Form check for the presentation layer: every field must be non-blank
    pub fn check(&self) -> crate::error::AppResult<()> {
        self.trimmed().validate()?;
        Ok(())
    }
}

/// Report problem request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportProblem {
    pub description: String,
    pub reporter_name: String,
    pub reporter_email: String,
}

/// Resolve problem request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResolveProblem {
    pub resolver_name: String,
    pub repair_details: String,
}
