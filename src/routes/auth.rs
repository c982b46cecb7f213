// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account registration and login routes.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use super::require_field;
use crate::error::{AppError, Result};
use crate::middleware::auth::create_jwt;
use crate::models::{PublicProfile, User};
use crate::services::password;
use crate::time_utils::now_rfc3339;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create-account", post(create_account))
        .route("/login", post(login))
}

// ─── Registration ────────────────────────────────────────────

/// Registration request body. Fields are optional so presence is
/// validated by the handler, not by deserialization.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    full_name: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CreateAccountResponse {
    pub error: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<PublicProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

/// Register a new account and issue an access token.
///
/// A duplicate email answers 200 with the error flag set, not an HTTP
/// error status. The frontend relies on this exact convention.
async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateAccountRequest>,
) -> Result<Json<CreateAccountResponse>> {
    let full_name = require_field(body.full_name, "Full Name is required")?;
    let email = require_field(body.email, "Email is required")?;
    let password = require_field(body.password, "Password is required")?;

    if state.db.find_user_by_email(&email).await?.is_some() {
        return Ok(Json(CreateAccountResponse {
            error: true,
            message: "User already exist".to_string(),
            user: None,
            access_token: None,
        }));
    }

    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        full_name,
        email,
        password_hash: password::hash(&password)?,
        created_on: now_rfc3339(),
    };

    state.db.create_user(&user).await?;
    tracing::info!(user_id = %user.id, "Account created");

    let profile = user.public_profile();
    let token = create_jwt(&profile, &state.config.jwt_signing_key)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("JWT creation failed: {}", e)))?;

    Ok(Json(CreateAccountResponse {
        error: false,
        message: "Registration Successful".to_string(),
        user: Some(profile),
        access_token: Some(token),
    }))
}

// ─── Login ───────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LoginResponse {
    pub error: bool,
    pub message: String,
    pub email: String,
    pub access_token: String,
}

/// Log in with email and password, issuing a fresh access token.
///
/// The token embeds the user snapshot as of now; earlier tokens keep
/// their stale snapshot until they expire.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let email = require_field(body.email, "Email is required")?;
    let password = require_field(body.password, "Password is required")?;

    let user = state
        .db
        .find_user_by_email(&email)
        .await?
        .ok_or_else(|| AppError::BadRequest("User not found".to_string()))?;

    if !password::verify(&password, &user.password_hash) {
        return Err(AppError::BadRequest("Invalid Credentials".to_string()));
    }

    let token = create_jwt(&user.public_profile(), &state.config.jwt_signing_key)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("JWT creation failed: {}", e)))?;

    tracing::info!(user_id = %user.id, "Login successful");

    Ok(Json(LoginResponse {
        error: false,
        message: "Login Successful".to_string(),
        email: user.email,
        access_token: token,
    }))
}
