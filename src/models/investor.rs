// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Investor model for storage and API.

use crate::db::collections;
use crate::models::Entity;
use crate::serde_utils::whole_number;
use crate::time_utils::optional_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Investor document stored in the `investors` collection.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Investor {
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
    pub profile: Option<InvestorProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics: Option<InvestorAnalytics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<Portfolio>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "optional_timestamp"
    )]
    #[cfg_attr(feature = "binding-generation", ts(type = "string | undefined"))]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct InvestorProfile {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "whole_number::deserialize"
    )]
    #[cfg_attr(feature = "binding-generation", ts(type = "number | undefined"))]
    pub followers_count: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "whole_number::deserialize"
    )]
    #[cfg_attr(feature = "binding-generation", ts(type = "number | undefined"))]
    pub investments_count: Option<i64>,
    /// Badge labels (often emoji)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badges: Option<Vec<String>>,
}

/// Investment totals, in whole units. Fractional values are truncated on read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct InvestorAnalytics {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "whole_number::deserialize"
    )]
    #[cfg_attr(feature = "binding-generation", ts(type = "number | undefined"))]
    pub total_invested: Option<i64>,
    #[serde(
        rename = "totalROI",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "whole_number::deserialize"
    )]
    #[cfg_attr(feature = "binding-generation", ts(type = "number | undefined"))]
    pub total_roi: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "whole_number::deserialize"
    )]
    #[cfg_attr(feature = "binding-generation", ts(type = "number | undefined"))]
    pub portfolio_value: Option<i64>,
}

/// Artwork IDs the investor follows or has bought.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Portfolio {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watchlist: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment_history: Option<Vec<String>>,
}

impl Entity for Investor {
    const COLLECTION: &'static str = collections::INVESTORS;
    const KIND: &'static str = "Investor";

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

impl fmt::Debug for Investor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Investor")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("wallet_address", &self.wallet_address)
            .field("role", &self.role)
            .field("profile", &self.profile)
            .field("analytics", &self.analytics)
            .field("portfolio", &self.portfolio)
            .field("created_at", &self.created_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_total_roi_keeps_upper_case_name() {
        let analytics = InvestorAnalytics {
            total_invested: Some(5000),
            total_roi: Some(-120),
            portfolio_value: Some(4880),
        };
        let value = serde_json::to_value(&analytics).unwrap();

        assert_eq!(
            value,
            json!({ "totalInvested": 5000, "totalROI": -120, "portfolioValue": 4880 })
        );
    }

    #[test]
    fn test_deserializes_stored_document() {
        let investor: Investor = serde_json::from_value(json!({
            "id": "i1",
            "username": "bob",
            "password": "plain",
            "walletAddress": "0xdef",
            "role": "investor",
            "profile": { "followersCount": 3, "investmentsCount": 2, "badges": ["💼", "🚀"] },
            "analytics": { "totalInvested": 900, "totalROI": 45, "portfolioValue": 945 },
            "portfolio": { "watchlist": ["n1"], "investmentHistory": ["n2", "n3"] },
            "createdAt": "2024-03-05T09:15:30.000+0000"
        }))
        .unwrap();

        assert_eq!(investor.username(), Some("bob"));
        let profile = investor.profile.as_ref().unwrap();
        assert_eq!(profile.badges.as_deref().unwrap(), ["💼", "🚀"]);
        assert_eq!(investor.analytics.as_ref().unwrap().total_roi, Some(45));
        assert_eq!(
            investor.portfolio.as_ref().unwrap().investment_history,
            Some(vec!["n2".to_string(), "n3".to_string()])
        );

        // And back again
        let back: Investor =
            serde_json::from_str(&serde_json::to_string(&investor).unwrap()).unwrap();
        assert_eq!(back, investor);
    }

    #[test]
    fn test_rfc3339_created_at_is_normalized() {
        let investor: Investor = serde_json::from_value(json!({
            "id": "i2",
            "createdAt": "2024-03-05T09:15:30.123456Z"
        }))
        .unwrap();

        let value = serde_json::to_value(&investor).unwrap();
        assert_eq!(value["createdAt"], "2024-03-05T09:15:30.123+0000");
    }

    #[test]
    fn test_invalid_created_at_is_rejected() {
        let result: Result<Investor, _> = serde_json::from_value(json!({
            "id": "i3",
            "createdAt": "last tuesday"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_fractional_amounts_are_truncated() {
        let investor: Investor = serde_json::from_value(json!({
            "id": "i5",
            "profile": { "followersCount": 4.0 },
            "analytics": { "totalInvested": 0.05, "totalROI": -1.5, "portfolioValue": 1200.75 }
        }))
        .unwrap();

        assert_eq!(investor.profile.unwrap().followers_count, Some(4));
        assert_eq!(
            investor.analytics,
            Some(InvestorAnalytics {
                total_invested: Some(0),
                total_roi: Some(-1),
                portfolio_value: Some(1200),
            })
        );
    }

    #[test]
    fn test_null_nested_objects_are_absent() {
        let investor: Investor = serde_json::from_value(json!({
            "id": "i4",
            "profile": null,
            "portfolio": { "watchlist": null }
        }))
        .unwrap();

        assert!(investor.profile.is_none());
        assert_eq!(investor.portfolio, Some(Portfolio::default()));
        assert_eq!(
            serde_json::to_value(&investor).unwrap(),
            json!({ "id": "i4", "portfolio": {} })
        );
    }
}
