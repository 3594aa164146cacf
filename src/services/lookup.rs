// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Entity lookups by id and by username.

use crate::db::{FirestoreDb, USERNAME_FIELD};
use crate::error::AppError;
use crate::models::{Curator, Entity, Investor};
use std::marker::PhantomData;

/// Read-only lookups over one entity collection.
pub struct LookupService<E> {
    db: FirestoreDb,
    _entity: PhantomData<fn() -> E>,
}

pub type CuratorService = LookupService<Curator>;
pub type InvestorService = LookupService<Investor>;

impl<E> Clone for LookupService<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> LookupService<E> {
    pub fn new(db: FirestoreDb) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Look up an entity by document id.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<E>, AppError> {
        let found = self.db.find_by_id::<E>(id).await?;
        tracing::debug!(
            collection = E::COLLECTION,
            id,
            found = found.is_some(),
            "Lookup by id"
        );
        Ok(found)
    }

    /// Look up an entity by its unique username.
    pub async fn get_by_username(&self, username: &str) -> Result<Option<E>, AppError> {
        let found = self
            .db
            .find_one_by_field::<E>(USERNAME_FIELD, username)
            .await?;
        tracing::debug!(
            collection = E::COLLECTION,
            username,
            found = found.is_some(),
            "Lookup by username"
        );
        Ok(found)
    }
}
