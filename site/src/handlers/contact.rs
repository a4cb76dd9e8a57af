//! Contact form handler
//!
//! Receives the multipart contact form and hands it to `ContactService`.

use std::collections::HashMap;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{ContactStatus, ContactType, NewContactMessage, UploadedFile};
use crate::domain::ValidationError;
use crate::error::AppError;
use crate::AppState;

/// Name of the file part carrying the CV
const CV_FIELD: &str = "cv_file";

/// Response body for an accepted submission
#[derive(Debug, Serialize)]
pub struct ContactReceipt {
    pub id: String,
    pub status: ContactStatus,
    pub received_at: DateTime<Utc>,
}

/// POST /contact/ and /en/contact/
pub async fn submit_contact(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ContactReceipt>), AppError> {
    let mut fields = HashMap::new();
    let mut cv = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed form data: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == CV_FIELD {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().map(str::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Unreadable {}: {}", CV_FIELD, e)))?;
            cv = uploaded_cv(file_name, content_type, bytes.to_vec());
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(format!("Unreadable field {}: {}", name, e)))?;
            fields.insert(name, value);
        }
    }

    let submission = contact_form(&fields).inspect_err(|e| {
        tracing::warn!("Rejected contact submission: {}", e);
    })?;

    let message = state
        .contact_service
        .submit(submission, cv)
        .await
        .inspect_err(|e| tracing::warn!("Contact submission failed: {}", e))?;

    Ok((
        StatusCode::CREATED,
        Json(ContactReceipt {
            id: message.id.to_string(),
            status: message.status,
            received_at: message.received_at,
        }),
    ))
}

/// Build a submission from the text fields of the form.
///
/// Absent fields read as empty and are left to validation. An empty
/// `contact_type` means the default type.
fn contact_form(fields: &HashMap<String, String>) -> Result<NewContactMessage, ValidationError> {
    let get = |key: &str| {
        fields
            .get(key)
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    };

    let contact_type = match get("contact_type").as_str() {
        "" => ContactType::default(),
        other => other.parse::<ContactType>()?,
    };

    Ok(NewContactMessage {
        name: get("name"),
        email: get("email"),
        phone: get("phone"),
        company: get("company"),
        subject: get("subject"),
        message: fields.get("message").cloned().unwrap_or_default(),
        contact_type,
        cv_file: None,
    })
}

/// A file part without a name or without content means no CV
fn uploaded_cv(
    file_name: String,
    content_type: Option<String>,
    bytes: Vec<u8>,
) -> Option<UploadedFile> {
    if file_name.is_empty() || bytes.is_empty() {
        return None;
    }
    Some(UploadedFile {
        file_name,
        content_type,
        bytes,
    })
}
