//! Contact types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted contact-form submission
///
/// Field names are serialized in camelCase to match the JSON wire format
/// expected by the frontend (`createdAt`).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// A validated submission, before the storage layer assigns id and timestamp
#[derive(Debug, Clone)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub message: String,
}
