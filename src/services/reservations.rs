//! Reservation review service

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use super::{queries, workflow};
use crate::{
    error::{AppError, AppResult},
    models::{
        reservation::{CreateReservation, Reservation},
        workflow::{Decision, RequestStatus},
    },
    repository::reservations::ReservationsRepository,
};

#[derive(Debug, Clone, Default)]
pub struct ReservationsService {
    repository: ReservationsRepository,
}

impl ReservationsService {
    pub fn new(repository: ReservationsRepository) -> Self {
        Self { repository }
    }

    pub fn list(&self) -> Vec<&Reservation> {
        self.repository.list().collect()
    }

    pub fn get_by_id(&self, id: Uuid) -> AppResult<&Reservation> {
        self.repository
            .get_by_id(id)
            .ok_or_else(|| AppError::NotFound(format!("Reservation {} not found", id)))
    }

    /// Record a new reservation request, pending review
    pub fn create(&mut self, data: &CreateReservation) -> AppResult<Reservation> {
        let data = CreateReservation {
            laptop_id: data.laptop_id.trim().to_string(),
            user_id: data.user_id.trim().to_string(),
            description: data.description.trim().to_string(),
            ..data.clone()
        };
        data.validate()?;

        if data.end < data.start {
            return Err(AppError::validation(
                "The reservation cannot end before it starts",
            ));
        }

        let reservation = Reservation {
            id: Uuid::new_v4(),
            laptop_id: data.laptop_id,
            user_id: data.user_id,
            start: data.start,
            end: data.end,
            quantity: data.quantity,
            description: data.description,
            status: RequestStatus::Pending,
        };

        tracing::info!(
            "Reservation {} created for {} x {} by {}",
            reservation.id,
            reservation.quantity,
            reservation.laptop_id,
            reservation.user_id
        );
        self.repository.insert(reservation.clone());
        Ok(reservation)
    }

    /// Approve or reject a pending reservation
    pub fn update_status(
        &mut self,
        id: Uuid,
        status: Decision,
        reason: Option<&str>,
    ) -> AppResult<Reservation> {
        let reservation = self
            .repository
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Reservation {} not found", id)))?;

        if let Err(e) = workflow::transition(reservation, status, reason, Utc::now()) {
            tracing::warn!("Reservation {} not {}: {}", id, status, e);
            return Err(e);
        }

        tracing::info!("Reservation {} {}", id, status);
        Ok(reservation.clone())
    }

    /// Reservations awaiting review
    pub fn pending(&self) -> Vec<&Reservation> {
        queries::pending_of(self.repository.list())
    }

    /// Approved and rejected reservations
    pub fn processed(&self) -> Vec<&Reservation> {
        queries::processed_of(self.repository.list())
    }

    pub fn count(&self) -> usize {
        self.repository.count()
    }
}
