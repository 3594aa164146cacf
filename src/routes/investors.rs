// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Investor lookup routes.

use crate::error::{AppError, Result};
use crate::models::{Entity, Investor};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/investors/{id}", get(get_investor_by_id))
        .route(
            "/investors/username/{username}",
            get(get_investor_by_username),
        )
}

/// Fetch an investor by document id.
async fn get_investor_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Investor>> {
    let investor = state
        .investor_service
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{} {} not found", Investor::KIND, id)))?;

    Ok(Json(investor.redacted()))
}

/// Fetch an investor by username.
async fn get_investor_by_username(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<Investor>> {
    let investor = state
        .investor_service
        .get_by_username(&username)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("{} '{}' not found", Investor::KIND, username))
        })?;

    Ok(Json(investor.redacted()))
}
