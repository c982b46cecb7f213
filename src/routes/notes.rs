// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Note CRUD, pinning, and search routes.
//!
//! All routes here sit behind the auth middleware; every store operation
//! is scoped to the authenticated user's ID.

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use super::require_field;
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{Note, NotePatch};
use crate::time_utils::now_rfc3339;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/add-note", post(add_note))
        .route("/edit-note/{note_id}", put(edit_note))
        .route("/update-note-pinned/{note_id}", put(update_note_pinned))
        .route("/get-all-notes", get(get_all_notes))
        .route("/delete-note/{note_id}", delete(delete_note))
        .route("/search-notes", get(search_notes))
}

// ─── Responses ───────────────────────────────────────────────

/// Envelope for operations returning a single note.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct NoteResponse {
    pub error: bool,
    pub message: String,
    pub note: Note,
}

/// Envelope for operations returning a list of notes.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct NotesResponse {
    pub error: bool,
    pub message: String,
    pub notes: Vec<Note>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DeleteNoteResponse {
    pub error: bool,
    pub message: String,
}

// ─── Create ──────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddNoteRequest {
    title: Option<String>,
    content: Option<String>,
    tags: Option<Vec<String>>,
}

/// Create a note owned by the current user.
async fn add_note(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<AddNoteRequest>,
) -> Result<Json<NoteResponse>> {
    let title = require_field(body.title, "Title is required")?;
    let content = require_field(body.content, "Content is required")?;

    let note = Note {
        id: uuid::Uuid::new_v4().to_string(),
        title,
        content,
        tags: body.tags.unwrap_or_default(),
        is_pinned: false,
        user_id: user.id.clone(),
        created_on: now_rfc3339(),
    };

    state.db.create_note(&note).await?;
    tracing::debug!(user_id = %user.id, note_id = %note.id, "Note added");

    Ok(Json(NoteResponse {
        error: false,
        message: "Note added successfully".to_string(),
        note,
    }))
}

// ─── Edit ────────────────────────────────────────────────────

/// Apply a partial edit to a note.
///
/// Only fields present in the body change; an explicit `isPinned: false`
/// unpins while an absent `isPinned` leaves the pin state alone.
async fn edit_note(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(note_id): Path<String>,
    Json(patch): Json<NotePatch>,
) -> Result<Json<NoteResponse>> {
    if patch.is_empty() {
        return Err(AppError::BadRequest("No changes provided".to_string()));
    }

    let note = state.db.update_note(&user.id, &note_id, patch).await?;

    Ok(Json(NoteResponse {
        error: false,
        message: "Note updated successfully".to_string(),
        note,
    }))
}

// ─── Pin / Unpin ─────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePinnedRequest {
    is_pinned: Option<bool>,
}

/// Set the pinned flag of a note. Unlike edit, the flag is mandatory.
async fn update_note_pinned(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(note_id): Path<String>,
    Json(body): Json<UpdatePinnedRequest>,
) -> Result<Json<NoteResponse>> {
    let is_pinned = body
        .is_pinned
        .ok_or_else(|| AppError::BadRequest("isPinned is required".to_string()))?;

    let note = state
        .db
        .set_note_pinned(&user.id, &note_id, is_pinned)
        .await?;

    Ok(Json(NoteResponse {
        error: false,
        message: "Note updated successfully".to_string(),
        note,
    }))
}

// ─── List ────────────────────────────────────────────────────

/// Get all of the current user's notes, pinned notes first.
async fn get_all_notes(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<NotesResponse>> {
    let notes = state.db.notes_for_owner(&user.id).await?;

    Ok(Json(NotesResponse {
        error: false,
        message: "All notes retrieved successfully".to_string(),
        notes,
    }))
}

// ─── Delete ──────────────────────────────────────────────────

/// Delete a note owned by the current user.
async fn delete_note(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(note_id): Path<String>,
) -> Result<Json<DeleteNoteResponse>> {
    state.db.delete_note(&user.id, &note_id).await?;
    tracing::debug!(user_id = %user.id, note_id = %note_id, "Note deleted");

    Ok(Json(DeleteNoteResponse {
        error: false,
        message: "Note deleted successfully".to_string(),
    }))
}

// ─── Search ──────────────────────────────────────────────────

#[derive(Deserialize)]
struct SearchNotesQuery {
    query: Option<String>,
}

/// Search the current user's notes by title or content substring,
/// case-insensitively.
async fn search_notes(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<SearchNotesQuery>,
) -> Result<Json<NotesResponse>> {
    let query = require_field(params.query, "Search query is required")?;

    let notes = state.db.search_notes(&user.id, &query).await?;

    Ok(Json(NotesResponse {
        error: false,
        message: "Notes matching the search query retrieved successfully".to_string(),
        notes,
    }))
}
