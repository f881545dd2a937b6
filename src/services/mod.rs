//! Business logic services

pub mod advice;
pub mod laptops;
pub mod queries;
pub mod reservations;
pub mod workflow;

use crate::repository::Repository;

/// Container for all services
#[derive(Debug, Clone, Default)]
pub struct Services {
    pub laptops: laptops::LaptopsService,
    pub reservations: reservations::ReservationsService,
    pub advice: advice::AdviceService,
}

impl Services {
    /// Create all services over the given store
    pub fn new(repository: Repository) -> Self {
        let Repository {
            laptops,
            reservations,
            advice,
        } = repository;

        Self {
            laptops: laptops::LaptopsService::new(laptops),
            reservations: reservations::ReservationsService::new(reservations),
            advice: advice::AdviceService::new(advice),
        }
    }
}
