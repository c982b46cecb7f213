//! User model for storage and API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// User account stored in Firestore.
///
/// The document ID is `id`. The password is stored only as a salted
/// Argon2 hash; API responses use [`PublicProfile`], which omits it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Document ID (UUID)
    pub id: String,
    /// Display name
    pub full_name: String,
    /// Email address (unique across accounts)
    pub email: String,
    /// Salted Argon2 password hash
    pub password_hash: String,
    /// When the account was created (RFC3339)
    pub created_on: String,
}

/// Public projection of a user: safe to return to clients and to embed
/// in access tokens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PublicProfile {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub created_on: String,
}

impl User {
    /// Projection that hides the password hash.
    pub fn public_profile(&self) -> PublicProfile {
        PublicProfile {
            id: self.id.clone(),
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            created_on: self.created_on.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_profile_omits_password_hash() {
        let user = User {
            id: "u-1".to_string(),
            full_name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
            created_on: "2024-01-01T00:00:00Z".to_string(),
        };

        let json = serde_json::to_string(&user.public_profile()).unwrap();
        assert!(!json.contains("passwordHash"));
        assert!(!json.contains("argon2"));
        assert!(json.contains("\"fullName\":\"Test User\""));
    }
}
