//! Review workflow state shared by reservations and advice requests

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Review status of a request.
///
/// The processed timestamp only exists once a decision has been taken, and a
/// rejection reason only exists on rejected requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved {
        processed_at: DateTime<Utc>,
    },
    Rejected {
        processed_at: DateTime<Utc>,
        reason: String,
    },
}

impl RequestStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestStatus::Pending)
    }

    pub fn is_processed(&self) -> bool {
        !self.is_pending()
    }

    pub fn processed_at(&self) -> Option<DateTime<Utc>> {
        match self {
            RequestStatus::Pending => None,
            RequestStatus::Approved { processed_at }
            | RequestStatus::Rejected { processed_at, .. } => Some(*processed_at),
        }
    }

    pub fn rejection_reason(&self) -> Option<&str> {
        match self {
            RequestStatus::Rejected { reason, .. } => Some(reason),
            _ => None,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved { .. } => "approved",
            RequestStatus::Rejected { .. } => "rejected",
        }
    }
}

/// Target status requested by a reviewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Approved,
    Rejected,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Decision::Approved => "approved",
            Decision::Rejected => "rejected",
        };
        write!(f, "{}", label)
    }
}

/// Records that go through the pending -> approved/rejected review
pub trait Reviewable {
    /// Human-readable kind, used in messages
    const KIND: &'static str;

    fn id(&self) -> Uuid;
    fn status(&self) -> &RequestStatus;
    fn status_mut(&mut self) -> &mut RequestStatus;
}
