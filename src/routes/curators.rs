// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Curator lookup routes.

use crate::error::{AppError, Result};
use crate::models::{Curator, Entity};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/curators/{id}", get(get_curator_by_id))
        .route("/curators/username/{username}", get(get_curator_by_username))
}

/// Fetch a curator by document id.
async fn get_curator_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Curator>> {
    let curator = state
        .curator_service
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{} {} not found", Curator::KIND, id)))?;

    Ok(Json(curator.redacted()))
}

/// Fetch a curator by username.
async fn get_curator_by_username(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<Curator>> {
    let curator = state
        .curator_service
        .get_by_username(&username)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("{} '{}' not found", Curator::KIND, username))
        })?;

    Ok(Json(curator.redacted()))
}
