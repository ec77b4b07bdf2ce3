//! Admin console user accounts.

use serde::{Deserialize, Serialize};

use super::{preferred_id, EntityId};

/// A backend user account.
///
/// Secondary fields are optional so the same struct doubles as a partial
/// create/update payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub record_id: Option<EntityId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    /// Login name shown throughout the console.
    pub user_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// `admin`, `user`, or a backend-defined role string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,

    #[serde(rename = "isActive", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl User {
    /// Preferred identifier (`_id` over `id`) for display and routing.
    pub fn key(&self) -> String {
        preferred_id(&self.record_id, &self.id)
    }
}
