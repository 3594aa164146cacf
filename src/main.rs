// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! ArtBlock API Server
//!
//! Serves curator and investor profiles from Firestore (or an in-memory
//! store for local development).

use artblock_api::{
    config::{Config, StorageBackend},
    db::{seed, FirestoreDb, MemoryStore},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting ArtBlock API");

    let db = match config.storage_backend {
        StorageBackend::Firestore => FirestoreDb::new(&config.gcp_project_id).await?,
        StorageBackend::Memory => FirestoreDb::new_in_memory(MemoryStore::new()),
    };
    tracing::info!(backend = db.backend_name(), "Storage ready");

    seed_if_configured(&config, &db).await?;

    // Build shared state
    let state = Arc::new(AppState::new(config.clone(), db));

    // Build router
    let app = artblock_api::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Load `SEED_FILE` into the memory backend or the Firestore emulator.
///
/// A real Firestore project is never seeded.
async fn seed_if_configured(config: &Config, db: &FirestoreDb) -> anyhow::Result<()> {
    let Some(path) = &config.seed_file else {
        if config.storage_backend == StorageBackend::Memory {
            tracing::warn!("Memory backend without SEED_FILE, every lookup will 404");
        }
        return Ok(());
    };

    let emulator = std::env::var("FIRESTORE_EMULATOR_HOST").is_ok();
    if config.storage_backend == StorageBackend::Firestore && !emulator {
        tracing::warn!(path = %path.display(), "Ignoring SEED_FILE outside the emulator");
        return Ok(());
    }

    tracing::info!(path = %path.display(), "Loading seed documents");
    let summary = seed::load_seed_file(path, db).await?;
    tracing::info!(
        curators = summary.curators,
        investors = summary.investors,
        "Seed documents loaded"
    );
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("artblock_api=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
