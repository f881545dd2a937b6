//! Laptop Fleet
//!
//! Core of the laptop loan administration: the in-memory entity store for
//! laptops, problem reports, reservations and advice requests, the review
//! workflow they share, and the derived views a presentation layer renders.

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod seed;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::Repository;
use services::Services;

/// Session state handed to the presentation layer
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub services: Services,
}

impl AppState {
    /// Build a session over an empty store, seeding demo data if configured
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let mut services = Services::new(Repository::new());
        if config.store.seed_demo_data {
            seed::seed_demo_data(&mut services)?;
        }
        Ok(Self { config, services })
    }
}
