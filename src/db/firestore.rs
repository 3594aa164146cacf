// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed lookups.
//!
//! Provides two read operations over any [`Entity`] collection:
//! - by document id
//! - first document whose string field equals a value (e.g. `username`)
//!
//! plus `upsert`, used only to stage fixtures (seed files, emulator tests).
//!
//! Every backend hands back raw JSON and goes through [`decode`], which sets
//! `id` from the Firestore document name when there is one.

use crate::db::memory::MemoryStore;
use crate::error::AppError;
use crate::models::Entity;
use serde_json::Value;

#[derive(Clone)]
enum Backend {
    Firestore(firestore::FirestoreDb),
    Memory(MemoryStore),
    Offline,
}

/// Document database handle.
#[derive(Clone)]
pub struct FirestoreDb {
    backend: Backend,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            backend: Backend::Firestore(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            backend: Backend::Firestore(client),
        })
    }

    /// Serve documents from a process-local store.
    pub fn new_in_memory(store: MemoryStore) -> Self {
        Self {
            backend: Backend::Memory(store),
        }
    }

    /// Create a mock client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self {
            backend: Backend::Offline,
        }
    }

    /// Name of the active backend, for startup logs.
    pub fn backend_name(&self) -> &'static str {
        match self.backend {
            Backend::Firestore(_) => "firestore",
            Backend::Memory(_) => "memory",
            Backend::Offline => "offline",
        }
    }

    // ─── Lookups ─────────────────────────────────────────────────

    /// Get a document by its id. A missing document is `Ok(None)`.
    pub async fn find_by_id<T: Entity>(&self, id: &str) -> Result<Option<T>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .by_id_in(T::COLLECTION)
                .obj::<Value>()
                .one(id)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?
                .map(decode::<T>)
                .transpose(),
            Backend::Memory(store) => store.get(T::COLLECTION, id).map(decode::<T>).transpose(),
            Backend::Offline => Err(offline()),
        }
    }

    /// Get the first document whose `field` equals `value`.
    pub async fn find_one_by_field<T: Entity>(
        &self,
        field: &'static str,
        value: &str,
    ) -> Result<Option<T>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let value = value.to_string();
                let mut docs: Vec<Value> = client
                    .fluent()
                    .select()
                    .from(T::COLLECTION)
                    .filter(move |q| q.field(field).eq(value.clone()))
                    .limit(1)
                    .obj::<Value>()
                    .query()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
                docs.pop().map(decode::<T>).transpose()
            }
            Backend::Memory(store) => store
                .find_first(T::COLLECTION, field, value)
                .map(decode::<T>)
                .transpose(),
            Backend::Offline => Err(offline()),
        }
    }

    // ─── Fixtures ────────────────────────────────────────────────

    /// Create or replace a document under the entity's id.
    pub async fn upsert<T: Entity>(&self, entity: &T) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let mut doc = serde_json::to_value(entity)
                    .map_err(|e| AppError::Database(format!("Failed to encode document: {}", e)))?;
                // The id lives in the document name, never as a field.
                if let Some(fields) = doc.as_object_mut() {
                    fields.remove("id");
                }

                let _: () = client
                    .fluent()
                    .update()
                    .in_col(T::COLLECTION)
                    .document_id(entity.id())
                    .object(&doc)
                    .execute()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
                Ok(())
            }
            Backend::Memory(store) => store.insert(T::COLLECTION, entity.id(), entity),
            Backend::Offline => Err(offline()),
        }
    }
}

/// Field the Firestore client adds to carry the document name.
const DOCUMENT_ID_FIELD: &str = "_firestore_id";

fn decode<T: Entity>(mut doc: Value) -> Result<T, AppError> {
    // The document name wins over an `id` field stored in the body.
    if let Some(fields) = doc.as_object_mut() {
        if let Some(id) = fields.remove(DOCUMENT_ID_FIELD) {
            fields.insert("id".to_string(), id);
        }
    }
    serde_json::from_value(doc)
        .map_err(|e| AppError::Database(format!("Malformed {} document: {}", T::KIND, e)))
}

fn offline() -> AppError {
    AppError::Database("Database not connected (offline mode)".to_string())
}
