// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile routes.

use axum::{extract::State, routing::get, Extension, Json, Router};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::PublicProfile;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/get-user", get(get_user))
}

/// Current user response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserResponse {
    pub error: bool,
    pub user: PublicProfile,
    pub message: String,
}

/// Get the current user's profile.
///
/// Re-fetches the account from the store rather than echoing the token
/// snapshot, so a deleted account answers 401 even with a live token.
async fn get_user(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<UserResponse>> {
    let account = state
        .db
        .get_user(&user.id)
        .await?
        .ok_or(AppError::Unauthorized)?;

    Ok(Json(UserResponse {
        error: false,
        user: account.public_profile(),
        message: String::new(),
    }))
}
