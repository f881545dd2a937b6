//! Advice request model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::enums::AdviceType;
use super::workflow::{RequestStatus, Reviewable};

/// Free-form suggestion submitted for review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub advice_type: AdviceType,
    pub description: String,
    /// Selected requirements, subset of the type's vocabulary in vocabulary order
    pub requirements: Vec<String>,
    pub additional_notes: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub status: RequestStatus,
}

impl Reviewable for Advice {
    const KIND: &'static str = "Advice request";

    fn id(&self) -> Uuid {
        self.id
    }

    fn status(&self) -> &RequestStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut RequestStatus {
        &mut self.status
    }
}

/// Create advice request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAdvice {
    #[serde(rename = "type")]
    pub advice_type: AdviceType,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub additional_notes: String,
}
