//! Contact service
//!
//! Handles contact form submissions and the operator side of the inbox.

use std::sync::Arc;

use crate::domain::entities::{
    ContactMessage, ContactMessageId, ContactStatus, NewContactMessage, UploadKind, UploadedFile,
};
use crate::domain::ports::{ContactMessageRepository, FileStorage};
use crate::domain::validation;
use crate::error::DomainError;

/// Service for contact messages
pub struct ContactService {
    messages: Arc<dyn ContactMessageRepository>,
    storage: Arc<dyn FileStorage>,
}

impl ContactService {
    pub fn new(messages: Arc<dyn ContactMessageRepository>, storage: Arc<dyn FileStorage>) -> Self {
        Self { messages, storage }
    }

    /// Record a visitor submission.
    ///
    /// The CV is validated here, at submit time, before anything is written.
    /// If the message cannot be stored, the CV stored for it is removed.
    pub async fn submit(
        &self,
        mut message: NewContactMessage,
        cv: Option<UploadedFile>,
    ) -> Result<ContactMessage, DomainError> {
        message.validate()?;
        if let Some(file) = &cv {
            validation::upload(file, UploadKind::Cv)?;
        }

        message.cv_file = match &cv {
            Some(file) => Some(self.storage.store(UploadKind::Cv, file).await?),
            None => None,
        };

        let stored = match self.messages.create(&message).await {
            Ok(stored) => stored,
            Err(e) => {
                if let Some(path) = &message.cv_file {
                    if let Err(cleanup) = self.storage.remove(path).await {
                        tracing::warn!("Failed to remove orphaned CV {}: {}", path, cleanup);
                    }
                }
                return Err(e);
            }
        };

        tracing::info!(
            "Contact message {} received ({}, cv: {})",
            stored.id,
            stored.contact_type,
            stored.cv_file.is_some()
        );
        Ok(stored)
    }

    /// Messages, most recent first
    pub async fn list_messages(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<ContactMessage>, DomainError> {
        self.messages.find_recent(limit, offset).await
    }

    pub async fn get_message(&self, id: &ContactMessageId) -> Result<ContactMessage, DomainError> {
        self.messages
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Contact message {} not found", id)))
    }

    /// Move a message to another processing status
    pub async fn set_status(
        &self,
        id: &ContactMessageId,
        status: ContactStatus,
    ) -> Result<ContactMessage, DomainError> {
        self.messages.update_status(id, status).await?;
        tracing::info!("Contact message {} marked {}", id, status);
        self.get_message(id).await
    }
}
