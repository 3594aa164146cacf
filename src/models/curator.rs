// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Curator model for storage and API.

use crate::db::collections;
use crate::models::Entity;
use crate::serde_utils::whole_number;
use crate::time_utils::optional_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Curator document stored in the `curators` collection.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Curator {
    /// Document ID
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Stored as-is by whoever wrote the document; never hashed here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<CuratorContract>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<CuratorProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics: Option<CuratorAnalytics>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "optional_timestamp"
    )]
    #[cfg_attr(feature = "binding-generation", ts(type = "string | undefined"))]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "optional_timestamp"
    )]
    #[cfg_attr(feature = "binding-generation", ts(type = "string | undefined"))]
    pub updated_at: Option<DateTime<Utc>>,
}

/// On-chain contract details for a curator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CuratorContract {
    /// Network name (e.g. "sepolia")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    /// Gallery IDs owned by this curator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub galleries: Option<Vec<String>>,
    /// Revenue amounts are opaque strings (usually wei)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_revenue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_revenue: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CuratorProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "whole_number::deserialize"
    )]
    #[cfg_attr(feature = "binding-generation", ts(type = "number | undefined"))]
    pub galleries_count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CuratorAnalytics {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "whole_number::deserialize"
    )]
    #[cfg_attr(feature = "binding-generation", ts(type = "number | undefined"))]
    pub total_artists_curated: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "whole_number::deserialize"
    )]
    #[cfg_attr(feature = "binding-generation", ts(type = "number | undefined"))]
    pub total_visitors: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "whole_number::deserialize"
    )]
    #[cfg_attr(feature = "binding-generation", ts(type = "number | undefined"))]
    pub total_artworks_sold: Option<i64>,
}

impl Entity for Curator {
    const COLLECTION: &'static str = collections::CURATORS;
    const KIND: &'static str = "Curator";

    fn id(&self) -> &str {
        &self.id
    }

    fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    fn redacted(self) -> Self {
        Self {
            password: None,
            ..self
        }
    }
}

// Hand-written so the password never ends up in logs.
impl fmt::Debug for Curator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curator")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("wallet_address", &self.wallet_address)
            .field("role", &self.role)
            .field("contract", &self.contract)
            .field("profile", &self.profile)
            .field("analytics", &self.analytics)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}
