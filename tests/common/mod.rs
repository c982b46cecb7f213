// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use notekeep::config::Config;
use notekeep::db::FirestoreDb;
use notekeep::models::PublicProfile;
use notekeep::routes::create_router;
use notekeep::AppState;
use std::sync::Arc;

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

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a mock database connection (offline).
#[allow(dead_code)]
pub fn test_db_offline() -> FirestoreDb {
    FirestoreDb::new_mock()
}

/// Create a test app with an offline mock database.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = test_db_offline();

    let state = Arc::new(AppState { config, db });

    (create_router(state.clone()), state)
}

/// Create a test app backed by the Firestore emulator.
#[allow(dead_code)]
pub async fn create_test_app_with_emulator() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = test_db().await;

    let state = Arc::new(AppState { config, db });

    (create_router(state.clone()), state)
}

/// A user snapshot for embedding in test tokens.
#[allow(dead_code)]
pub fn test_profile(id: &str, email: &str) -> PublicProfile {
    PublicProfile {
        id: id.to_string(),
        full_name: "Test User".to_string(),
        email: email.to_string(),
        created_on: "2024-01-01T00:00:00Z".to_string(),
    }
}

/// Create a signed test JWT for the given snapshot.
#[allow(dead_code)]
pub fn create_test_jwt(profile: &PublicProfile, signing_key: &[u8]) -> String {
    notekeep::middleware::auth::create_jwt(profile, signing_key).expect("Failed to create JWT")
}

/// Unique suffix for test isolation (emails, ids).
#[allow(dead_code)]
pub fn unique_suffix() -> u128 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos()
}
