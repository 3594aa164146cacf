// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fixture loading for local development and the emulator.
//!
//! Seed files look like `{"curators": [...], "investors": [...]}`. Each
//! document must carry its `id`.

use crate::db::FirestoreDb;
use crate::models::{Curator, Entity, Investor};
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
struct SeedFile {
    #[serde(default)]
    curators: Vec<Curator>,
    #[serde(default)]
    investors: Vec<Investor>,
}

/// Number of documents loaded per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub curators: usize,
    pub investors: usize,
}

/// Load a seed file from disk into `db`.
pub async fn load_seed_file(
    path: impl AsRef<Path>,
    db: &FirestoreDb,
) -> anyhow::Result<SeedSummary> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    load_seed_str(&raw, db)
        .await
        .with_context(|| format!("Invalid seed file {}", path.display()))
}

/// Load seed documents from a JSON string into `db`.
///
/// The whole file is parsed before anything is written, so a malformed
/// document leaves the store untouched.
pub async fn load_seed_str(raw: &str, db: &FirestoreDb) -> anyhow::Result<SeedSummary> {
    let seed: SeedFile = serde_json::from_str(raw)?;

    upsert_all(db, &seed.curators).await?;
    upsert_all(db, &seed.investors).await?;

    Ok(SeedSummary {
        curators: seed.curators.len(),
        investors: seed.investors.len(),
    })
}

async fn upsert_all<E: Entity>(db: &FirestoreDb, entities: &[E]) -> anyhow::Result<()> {
    let mut usernames = HashSet::new();
    for entity in entities {
        // Lookups by username return the first match, so flag ambiguous fixtures.
        if let Some(username) = entity.username() {
            if !usernames.insert(username) {
                tracing::warn!(kind = E::KIND, username, "Duplicate username in seed file");
            }
        }
        db.upsert(entity)
            .await
            .with_context(|| format!("Failed to store {} {}", E::KIND, entity.id()))?;
    }
    Ok(())
}
