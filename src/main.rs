//! Laptop Fleet - session bootstrap
//!
//! Loads configuration, sets up logging, builds the store and reports the
//! overview a presentation layer would show first.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use laptop_fleet::{config::AppConfig, AppState};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("laptop_fleet={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.json_logs() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Laptop Fleet v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(config)?;
    let services = &state.services;

    for (status, count) in services.laptops.status_counts() {
        tracing::info!("Laptops {}: {}", status, count);
    }
    tracing::info!(
        "Reservations: {} pending, {} processed",
        services.reservations.pending().len(),
        services.reservations.processed().len()
    );
    tracing::info!(
        "Advice requests: {} pending, {} processed",
        services.advice.pending().len(),
        services.advice.processed().len()
    );

    let overview = serde_json::json!({
        "laptops": services.laptops.list(),
        "pending_reservations": services.reservations.pending(),
        "pending_advice": services.advice.pending(),
    });
    println!("{}", serde_json::to_string_pretty(&overview)?);

    Ok(())
}
