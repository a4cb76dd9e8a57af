//! PostgreSQL adapter for ContactMessageRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, QuerySelect,
    Set,
};
use uuid::Uuid;

use crate::domain::entities::{
    ContactMessage, ContactMessageId, ContactStatus, ContactType, NewContactMessage,
};
use crate::domain::ports::ContactMessageRepository;
use crate::entity::contact_messages;
use crate::error::DomainError;

/// PostgreSQL implementation of ContactMessageRepository
pub struct PostgresContactMessageRepository {
    db: DatabaseConnection,
}

impl PostgresContactMessageRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactMessageRepository for PostgresContactMessageRepository {
    async fn find_by_id(
        &self,
        id: &ContactMessageId,
    ) -> Result<Option<ContactMessage>, DomainError> {
        let result = contact_messages::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(ContactMessage::try_from).transpose()
    }

    async fn find_recent(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<ContactMessage>, DomainError> {
        let results = contact_messages::Entity::find()
            .order_by_desc(contact_messages::Column::ReceivedAt)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(ContactMessage::try_from).collect()
    }

    async fn create(&self, message: &NewContactMessage) -> Result<ContactMessage, DomainError> {
        let model = contact_messages::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(message.name.clone()),
            email: Set(message.email.clone()),
            phone: Set(message.phone.clone()),
            company: Set(message.company.clone()),
            subject: Set(message.subject.clone()),
            message: Set(message.message.clone()),
            cv_file: Set(message.cv_file.clone()),
            contact_type: Set(message.contact_type.to_string()),
            status: Set(ContactStatus::New.to_string()),
            received_at: Set(Utc::now().fixed_offset()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.try_into()
    }

    async fn update_status(
        &self,
        id: &ContactMessageId,
        status: ContactStatus,
    ) -> Result<(), DomainError> {
        let message = contact_messages::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .ok_or_else(|| DomainError::NotFound(format!("Contact message {} not found", id)))?;

        let mut active_model = message.into_active_model();
        active_model.status = Set(status.to_string());

        active_model
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity.
///
/// Fails if a stored choice column holds a value outside its enum.
impl TryFrom<contact_messages::Model> for ContactMessage {
    type Error = DomainError;

    fn try_from(model: contact_messages::Model) -> Result<Self, Self::Error> {
        let contact_type = model.contact_type.parse::<ContactType>().map_err(|e| {
            DomainError::Database(format!("contact message {}: {}", model.id, e))
        })?;
        let status = model.status.parse::<ContactStatus>().map_err(|e| {
            DomainError::Database(format!("contact message {}: {}", model.id, e))
        })?;

        Ok(ContactMessage {
            id: ContactMessageId(model.id),
            name: model.name,
            email: model.email,
            phone: model.phone,
            company: model.company,
            subject: model.subject,
            message: model.message,
            cv_file: model.cv_file,
            contact_type,
            status,
            received_at: model.received_at.with_timezone(&Utc),
        })
    }
}
