// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Process-local document store for tests and local development.
//!
//! Documents are kept as JSON values keyed by collection and document id,
//! mirroring the shape Firestore hands back.

use crate::error::AppError;
use dashmap::DashMap;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// In-memory document store. Clones share the same data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    collections: Arc<DashMap<String, DashMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a document under `id`, replacing any previous version.
    ///
    /// The serialized document must be a JSON object; its `id` field is set
    /// to the document id.
    pub fn insert<T: Serialize>(&self, collection: &str, id: &str, doc: &T) -> Result<(), AppError> {
        let mut value = serde_json::to_value(doc)
            .map_err(|e| AppError::Database(format!("Failed to encode document: {}", e)))?;

        let fields = value.as_object_mut().ok_or_else(|| {
            AppError::Database(format!("Document {}/{} is not an object", collection, id))
        })?;
        fields.insert("id".to_string(), Value::String(id.to_string()));

        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), value);
        Ok(())
    }

    /// Fetch a document by id.
    pub fn get(&self, collection: &str, id: &str) -> Option<Value> {
        let docs = self.collections.get(collection)?;
        let doc = docs.get(id)?;
        Some(doc.value().clone())
    }

    /// First document (lowest id) whose string `field` equals `value`.
    pub fn find_first(&self, collection: &str, field: &str, value: &str) -> Option<Value> {
        let docs = self.collections.get(collection)?;
        let found = docs
            .iter()
            .filter(|doc| doc.value().get(field).and_then(Value::as_str) == Some(value))
            .min_by(|a, b| a.key().cmp(b.key()))
            .map(|doc| doc.value().clone());
        found
    }

    /// Number of documents in a collection.
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .get(collection)
            .map(|docs| docs.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_sets_id_and_get_returns_copy() {
        let store = MemoryStore::new();
        store
            .insert("curators", "c1", &json!({ "username": "alice" }))
            .unwrap();

        let doc = store.get("curators", "c1").unwrap();
        assert_eq!(doc, json!({ "id": "c1", "username": "alice" }));
        assert!(store.get("curators", "c2").is_none());
        assert!(store.get("investors", "c1").is_none());
    }

    #[test]
    fn test_insert_replaces_existing() {
        let store = MemoryStore::new();
        store.insert("investors", "i1", &json!({ "username": "bob" })).unwrap();
        store.insert("investors", "i1", &json!({ "username": "robert" })).unwrap();

        assert_eq!(store.len("investors"), 1);
        assert_eq!(store.get("investors", "i1").unwrap()["username"], "robert");
    }

    #[test]
    fn test_insert_rejects_non_object() {
        let store = MemoryStore::new();
        let err = store.insert("curators", "c1", &json!(["not", "a", "doc"]));
        assert!(matches!(err, Err(AppError::Database(_))));
        assert!(store.is_empty("curators"));
    }

    #[test]
    fn test_find_first_matches_string_field() {
        let store = MemoryStore::new();
        store.insert("curators", "c2", &json!({ "username": "alice" })).unwrap();
        store.insert("curators", "c1", &json!({ "username": "alice" })).unwrap();
        store.insert("curators", "c3", &json!({ "username": "carol" })).unwrap();

        // Duplicates resolve to the lowest id
        let doc = store.find_first("curators", "username", "alice").unwrap();
        assert_eq!(doc["id"], "c1");

        assert!(store.find_first("curators", "username", "dave").is_none());
        assert!(store.find_first("galleries", "username", "alice").is_none());
    }

    #[test]
    fn test_find_first_ignores_non_string_values() {
        let store = MemoryStore::new();
        store.insert("investors", "i1", &json!({ "username": 42 })).unwrap();
        assert!(store.find_first("investors", "username", "42").is_none());
    }
}
