//! Sistema Mudancas Service
//!
//! Startup sequence for the mudancas service. It:
//! 1. Sets up structured logging (env-aware: JSON for prod, pretty for dev)
//! 2. Resolves the MongoDB target from `MONGODB_URI` (local default otherwise)
//! 3. Establishes the connection, exactly one attempt
//!
//! # Errors
//!
//! Returns an error if the MongoDB connection cannot be established; the
//! binary turns that into exit status 1. No retry, no degraded mode: an
//! unreachable database is fatal at startup.

use core_config::{Environment, FromEnv};
use database::mongodb::{self, MongoConfig};
use eyre::{Result, WrapErr};
use tracing::info;

/// Run the service startup sequence
pub async fn run() -> Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    core_config::tracing::install_color_eyre();

    let environment = Environment::from_env();
    core_config::tracing::init_tracing(&environment);

    info!("Starting sistema-mudancas service");
    info!("Environment: {:?}", environment);

    let config = MongoConfig::from_env().wrap_err("Failed to load MongoDB configuration")?;

    let mongo = mongodb::connect_from_config(&config)
        .await
        .wrap_err("Failed to connect to MongoDB")?;

    info!("Startup complete, using database '{}'", mongo.database.name());

    Ok(())
}
