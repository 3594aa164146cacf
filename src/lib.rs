// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! ArtBlock directory API: read-only lookups of curators and investors.
//!
//! Each endpoint resolves an id or username against the document store and
//! returns the stored profile, or 404 when there is none.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod serde_utils;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;
use services::{CuratorService, InvestorService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub curator_service: CuratorService,
    pub investor_service: InvestorService,
}

impl AppState {
    /// Wire both lookup services to the same storage handle.
    pub fn new(config: Config, db: FirestoreDb) -> Self {
        Self {
            config,
            curator_service: CuratorService::new(db.clone()),
            investor_service: InvestorService::new(db),
        }
    }
}
