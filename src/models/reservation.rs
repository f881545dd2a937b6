//! Laptop reservation model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::workflow::{RequestStatus, Reviewable};

/// Reservation request for one or more laptops over a time slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    /// Laptop identifier as entered by the requester (e.g. its computer name)
    pub laptop_id: String,
    pub user_id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Number of laptops requested
    pub quantity: u32,
    /// Purpose of the reservation
    pub description: String,
    #[serde(flatten)]
    pub status: RequestStatus,
}

impl Reviewable for Reservation {
    const KIND: &'static str = "Reservation";

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

/// Create reservation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReservation {
    #[validate(length(min = 1, message = "Laptop is required"))]
    pub laptop_id: String,
    #[validate(length(min = 1, message = "User is required"))]
    pub user_id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: u32,
    pub description: String,
}
