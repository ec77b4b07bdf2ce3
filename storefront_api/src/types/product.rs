//! Catalog products.

use serde::{Deserialize, Serialize};

use super::{preferred_id, EntityId};

/// A catalog product. Prices arrive as strings, exactly as the backend
/// stores them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub record_id: Option<EntityId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Image locations, stored relative to the backend's static root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ProductImage>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductImage {
    pub src: String,
}

impl Product {
    /// Preferred identifier (`_id` over `id`) for display and routing.
    pub fn key(&self) -> String {
        preferred_id(&self.record_id, &self.id)
    }
}
