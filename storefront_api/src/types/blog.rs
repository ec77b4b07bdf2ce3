//! Blog posts with SEO metadata and attached images.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{preferred_id, time, EntityId};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Blog {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub record_id: Option<EntityId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Body paragraphs/blocks as the editor saved them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<String>>,

    #[serde(rename = "isLatest", skip_serializing_if = "Option::is_none")]
    pub is_latest: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<Seo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<Image>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_image: Option<Vec<Image>>,

    /// `draft` or `published`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, with = "time", skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, with = "time", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "time", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
}

/// SEO metadata block embedded in each post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seo {
    pub meta_title: String,
    pub meta_description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
}

/// An image reference; `url` is stored relative to the backend's static root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl Blog {
    /// Preferred identifier (`_id` over `id`) for display and routing.
    pub fn key(&self) -> String {
        preferred_id(&self.record_id, &self.id)
    }
}
