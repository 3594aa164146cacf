// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Serde adapters for fields written by other services.

/// Deserialize `Option<i64>` counters from any JSON number.
///
/// Documents are written by JavaScript code, so a count or amount may come
/// back as a double (`2.0`, `0.05`). Fractions are truncated toward zero and
/// out-of-range values saturate. Serialization is left to the default impl.
///
/// Use as `#[serde(default, deserialize_with = "whole_number::deserialize")]`.
pub mod whole_number {
    use serde::{Deserialize, Deserializer};
    use serde_json::Number;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<Number> = Option::deserialize(deserializer)?;
        Ok(raw.map(|n| to_i64(&n)))
    }

    fn to_i64(n: &Number) -> i64 {
        if let Some(v) = n.as_i64() {
            v
        } else if n.is_u64() {
            i64::MAX
        } else {
            // `as` truncates toward zero and saturates at the i64 bounds
            n.as_f64().map_or(0, |f| f as i64)
        }
    }
}
