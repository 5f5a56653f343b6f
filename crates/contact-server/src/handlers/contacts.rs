//! Contact submission and listing handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::ApiError;
use crate::models::{Contact, NewContact};
use crate::AppState;

/// Incoming submission body. Fields are optional at the deserializer level so
/// a missing field reaches presence validation instead of being rejected as a
/// malformed request.
#[derive(Debug, Deserialize)]
pub struct SubmitContactRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl SubmitContactRequest {
    /// Presence check: all three fields must be provided and non-empty.
    fn validate(self) -> Result<NewContact, ApiError> {
        match (self.name, self.email, self.message) {
            (Some(name), Some(email), Some(message))
                if !name.is_empty() && !email.is_empty() && !message.is_empty() =>
            {
                Ok(NewContact {
                    name,
                    email,
                    message,
                })
            }
            _ => Err(ApiError::Validation),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubmitContactResponse {
    success: bool,
    contact: Contact,
}

pub async fn submit(
    State(state): State<AppState>,
    Json(req): Json<SubmitContactRequest>,
) -> Result<(StatusCode, Json<SubmitContactResponse>), ApiError> {
    let new_contact = req.validate()?;

    let contact = state.db.insert_contact(&new_contact).await.map_err(|e| {
        error!("Failed to save contact: {:#}", e);
        ApiError::Storage
    })?;

    info!("Saved contact: {}", contact.id);

    Ok((
        StatusCode::CREATED,
        Json(SubmitContactResponse {
            success: true,
            contact,
        }),
    ))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = state.db.list_contacts().await.map_err(|e| {
        error!("Failed to fetch contacts: {:#}", e);
        ApiError::Storage
    })?;

    info!("Retrieved {} contacts", contacts.len());

    Ok(Json(contacts))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(name: &str, email: &str, message: &str) -> SubmitContactRequest {
        SubmitContactRequest {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            message: Some(message.to_string()),
        }
    }

    #[test]
    fn test_validate_accepts_complete_input() {
        let new_contact = req("Alice", "a@x.com", "hi").validate().unwrap();
        assert_eq!(new_contact.name, "Alice");
        assert_eq!(new_contact.email, "a@x.com");
        assert_eq!(new_contact.message, "hi");
    }

    #[test]
    fn test_validate_rejects_empty_field() {
        assert!(req("", "a@x.com", "hi").validate().is_err());
        assert!(req("Alice", "", "hi").validate().is_err());
        assert!(req("Alice", "a@x.com", "").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_field() {
        let body = SubmitContactRequest {
            name: Some("Alice".to_string()),
            email: None,
            message: Some("hi".to_string()),
        };
        assert!(body.validate().is_err());
    }
}
