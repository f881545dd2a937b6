//! Reservations repository

use indexmap::IndexMap;
use uuid::Uuid;

use crate::models::reservation::Reservation;

#[derive(Debug, Clone, Default)]
pub struct ReservationsRepository {
    rows: IndexMap<Uuid, Reservation>,
}

impl ReservationsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> impl Iterator<Item = &Reservation> {
        self.rows.values()
    }

    pub fn get_by_id(&self, id: Uuid) -> Option<&Reservation> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Reservation> {
        self.rows.get_mut(&id)
    }

    pub fn insert(&mut self, reservation: Reservation) {
        self.rows.insert(reservation.id, reservation);
    }

    pub fn count(&self) -> usize {
        self.rows.len()
    }
}
