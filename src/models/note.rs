//! Note model for storage and API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Note document stored in Firestore.
///
/// Every note is owned by exactly one user (`user_id`), set at creation
/// and never reassigned. All reads and writes are filtered by owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Note {
    /// Document ID (UUID)
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_pinned: bool,
    /// Owning user's document ID
    pub user_id: String,
    /// When the note was created (RFC3339)
    pub created_on: String,
}

/// Partial update for a note. Doubles as the edit-note request body.
///
/// `None` means the field was absent from the patch and stays unchanged.
/// An explicit `"isPinned": false` deserializes to `Some(false)` and
/// unpins the note, which is why this is not a plain bool.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_pinned: Option<bool>,
}

impl NotePatch {
    /// True if the patch carries no recognized fields.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.tags.is_none()
            && self.is_pinned.is_none()
    }

    /// Apply the provided fields to a note, leaving absent fields alone.
    pub fn apply(self, note: &mut Note) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(content) = self.content {
            note.content = content;
        }
        if let Some(tags) = self.tags {
            note.tags = tags;
        }
        if let Some(is_pinned) = self.is_pinned {
            note.is_pinned = is_pinned;
        }
    }
}

/// Order notes pinned-first. The sort is stable, so store order is kept
/// within each group.
pub fn sort_pinned_first(notes: &mut [Note]) {
    notes.sort_by_key(|n| !n.is_pinned);
}
