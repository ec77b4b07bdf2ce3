//! Product categories, including the parent/child hierarchy endpoints.

use serde::{Deserialize, Serialize};

use super::{preferred_id, EntityId};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub record_id: Option<EntityId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_count: Option<i64>,

    /// Thumbnail location, stored relative to the backend's static root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    /// Parent category id; absent for top-level categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<EntityId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class: Option<String>,

    /// Child categories, populated only by the hierarchy endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Category>>,
}

impl Category {
    /// Preferred identifier (`_id` over `id`) for display and routing.
    pub fn key(&self) -> String {
        preferred_id(&self.record_id, &self.id)
    }
}
