// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (account storage, email lookup)
//! - Notes (owner-scoped CRUD, pinning, search)
//!
//! Every note operation is scoped to the owning user: a note that exists
//! but belongs to someone else behaves exactly like a note that does not
//! exist.

use crate::db::collections;
use crate::error::AppError;
use crate::models::note::{sort_pinned_first, Note, NotePatch};
use crate::models::User;

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        // Use ExternalJwtFunctionSource to provide a dummy token without needing async-trait
        // or a custom TokenSource implementation struct.
        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Get a user by document ID.
    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(user_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find a user by email address.
    ///
    /// Email uniqueness is enforced by a find-then-insert at registration;
    /// Firestore has no unique secondary indexes, so the check is not
    /// atomic with the insert.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let email = email.to_string();
        let users: Vec<User> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::USERS)
            .filter(move |q| q.field("email").eq(email.clone()))
            .limit(1)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(users.into_iter().next())
    }

    /// Store a user record, keyed by its ID.
    pub async fn create_user(&self, user: &User) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(&user.id)
            .object(user)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Note Operations ─────────────────────────────────────────

    /// Store a new note, keyed by its ID.
    pub async fn create_note(&self, note: &Note) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::NOTES)
            .document_id(&note.id)
            .object(note)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Get a note by ID, scoped to its owner.
    ///
    /// Returns `None` both for a missing note and for a note owned by a
    /// different user, so callers cannot distinguish the two.
    pub async fn get_note(&self, owner_id: &str, note_id: &str) -> Result<Option<Note>, AppError> {
        let note: Option<Note> = self
            .get_client()?
            .fluent()
            .select()
            .by_id_in(collections::NOTES)
            .obj()
            .one(note_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(note.filter(|n| n.user_id == owner_id))
    }

    /// Get all notes owned by a user, pinned notes first.
    pub async fn notes_for_owner(&self, owner_id: &str) -> Result<Vec<Note>, AppError> {
        let owner = owner_id.to_string();
        let mut notes: Vec<Note> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::NOTES)
            .filter(move |q| q.field("userId").eq(owner.clone()))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        sort_pinned_first(&mut notes);
        Ok(notes)
    }

    /// Apply a patch to a note owned by `owner_id` and return the result.
    ///
    /// The lookup and the write are two round trips; a concurrent delete
    /// can interleave between them, in which case the write recreates the
    /// document.
    pub async fn update_note(
        &self,
        owner_id: &str,
        note_id: &str,
        patch: NotePatch,
    ) -> Result<Note, AppError> {
        let mut note = self
            .get_note(owner_id, note_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Note not found".to_string()))?;

        patch.apply(&mut note);

        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::NOTES)
            .document_id(&note.id)
            .object(&note)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(note)
    }

    /// Set only the pinned flag of a note owned by `owner_id`.
    pub async fn set_note_pinned(
        &self,
        owner_id: &str,
        note_id: &str,
        is_pinned: bool,
    ) -> Result<Note, AppError> {
        self.update_note(
            owner_id,
            note_id,
            NotePatch {
                is_pinned: Some(is_pinned),
                ..NotePatch::default()
            },
        )
        .await
    }

    /// Delete a note owned by `owner_id`.
    pub async fn delete_note(&self, owner_id: &str, note_id: &str) -> Result<(), AppError> {
        // Owner-scoped lookup first: deleting someone else's note must be
        // indistinguishable from deleting a nonexistent one.
        let note = self
            .get_note(owner_id, note_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Note not found".to_string()))?;

        self.get_client()?
            .fluent()
            .delete()
            .from(collections::NOTES)
            .document_id(&note.id)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }

    /// Search a user's notes for a case-insensitive substring of the
    /// title or content.
    ///
    /// The query is treated as an opaque literal, never compiled as a
    /// pattern, so hostile input cannot cause pathological matching.
    pub async fn search_notes(&self, owner_id: &str, query: &str) -> Result<Vec<Note>, AppError> {
        let needle = query.to_lowercase();
        let notes = self.notes_for_owner(owner_id).await?;

        Ok(notes
            .into_iter()
            .filter(|n| {
                n.title.to_lowercase().contains(&needle)
                    || n.content.to_lowercase().contains(&needle)
            })
            .collect())
    }
}
