// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.
//!
//! Entity timestamps go out on the wire as `2024-01-15T10:00:00.000+0000`
//! (millisecond precision, numeric UTC offset). Incoming values may use that
//! shape or plain RFC3339, which is what Firestore hands back.

use chrono::{DateTime, DurationRound, FixedOffset, TimeDelta, Utc};

/// Wire format for entity timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Format a UTC timestamp in the entity wire format.
pub fn format_timestamp(date: DateTime<Utc>) -> String {
    date.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a timestamp in the wire format or RFC3339, truncated to milliseconds.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let parsed = DateTime::<FixedOffset>::parse_from_str(raw, TIMESTAMP_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()?
        .with_timezone(&Utc);

    // Sub-millisecond digits would not survive a trip through the wire format.
    parsed.duration_trunc(TimeDelta::milliseconds(1)).ok()
}

/// Serde adapter for `Option<DateTime<Utc>>` fields using the wire format.
///
/// Use together with `#[serde(default, skip_serializing_if = "Option::is_none")]`
/// so absent timestamps stay absent.
pub mod optional_timestamp {
    use super::{format_timestamp, parse_timestamp};
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&format_timestamp(*date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| {
            parse_timestamp(&s)
                .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", s)))
        })
        .transpose()
    }
}
