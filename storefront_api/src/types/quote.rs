//! Customer quote requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{preferred_id, time, EntityId};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Quote {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub record_id: Option<EntityId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    /// Requester's name.
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_information: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Products the quote was requested for.
    #[serde(default)]
    pub product_details: Vec<QuoteProduct>,

    #[serde(default, with = "time", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "time", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteProduct {
    pub product_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub quantity: i64,
}

impl Quote {
    /// Preferred identifier (`_id` over `id`) for display and routing.
    pub fn key(&self) -> String {
        preferred_id(&self.record_id, &self.id)
    }
}
