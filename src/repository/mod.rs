//! In-memory entity store
//!
//! Each collection keeps insertion order so derived views can preserve store
//! order. Repositories only store records; business rules live in the services.

pub mod advice;
pub mod laptops;
pub mod reservations;

/// Main repository struct owning the collections
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub laptops: laptops::LaptopsRepository,
    pub reservations: reservations::ReservationsRepository,
    pub advice: advice::AdviceRepository,
}

impl Repository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}
