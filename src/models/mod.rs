// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod curator;
pub mod investor;

pub use curator::Curator;
pub use investor::Investor;

use serde::{de::DeserializeOwned, Serialize};

/// A document type stored in its own collection and looked up by id or username.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection holding documents of this type.
    const COLLECTION: &'static str;

    /// Human-readable kind, used in logs and not-found messages.
    const KIND: &'static str;

    /// Document id assigned by the store.
    fn id(&self) -> &str;

    fn username(&self) -> Option<&str>;

    /// Copy of the entity that is safe to put in an HTTP response.
    fn redacted(self) -> Self;
}
