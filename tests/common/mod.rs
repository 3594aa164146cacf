// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use artblock_api::config::Config;
use artblock_api::db::{seed, FirestoreDb, MemoryStore};
use artblock_api::routes::create_router;
use artblock_api::AppState;
use axum::body::Body;
use axum::http::{Request, Response};
use std::sync::Arc;
use tower::ServiceExt;

/// Documents shared by the HTTP tests.
#[allow(dead_code)]
pub const SEED_JSON: &str = r#"{
    "curators": [
        {
            "id": "c1",
            "username": "alice",
            "password": "plaintext-alice",
            "walletAddress": "0x1111111111111111111111111111111111111111",
            "role": "curator",
            "contract": {
                "network": "sepolia",
                "galleries": ["g1", "g2"],
                "totalRevenue": "2500000000000000000",
                "pendingRevenue": "0"
            },
            "profile": { "displayName": "Alice Curates", "galleriesCount": 2 },
            "analytics": { "totalArtistsCurated": 12, "totalVisitors": 840, "totalArtworksSold": 9 },
            "createdAt": "2024-01-15T10:00:00.000+0000",
            "updatedAt": "2024-02-01T08:30:00.000+0000"
        },
        { "id": "c-bare" }
    ],
    "investors": [
        {
            "id": "i1",
            "username": "bob",
            "password": "plaintext-bob",
            "role": "investor",
            "profile": { "followersCount": 5, "investmentsCount": 3, "badges": ["💼"] },
            "analytics": { "totalInvested": 3000, "totalROI": 450, "portfolioValue": 3450 },
            "portfolio": { "watchlist": ["n1", "n2"], "investmentHistory": ["n3"] },
            "createdAt": "2024-03-05T09:15:30.000+0000"
        },
        { "id": "i2", "username": "zoë" }
    ]
}"#;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection against the emulator.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// In-memory database loaded with [`SEED_JSON`].
#[allow(dead_code)]
pub async fn test_db_seeded() -> FirestoreDb {
    let db = FirestoreDb::new_in_memory(MemoryStore::new());
    seed::load_seed_str(SEED_JSON, &db)
        .await
        .expect("Seed fixture should load");
    db
}

/// Build the router over an arbitrary database handle.
#[allow(dead_code)]
pub fn create_test_app_with(db: FirestoreDb) -> axum::Router {
    let state = Arc::new(AppState::new(Config::test_default(), db));
    create_router(state)
}

/// Create a test app backed by the seeded in-memory store.
#[allow(dead_code)]
pub async fn create_test_app() -> axum::Router {
    create_test_app_with(test_db_seeded().await)
}

/// Issue a GET request against the router.
#[allow(dead_code)]
pub async fn get(app: axum::Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
