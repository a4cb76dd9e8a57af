//! PostgreSQL adapter for SiteConfigurationRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};
use uuid::Uuid;

use super::is_unique_violation;
use crate::domain::entities::{NewSiteConfiguration, SiteConfiguration, SiteConfigurationId};
use crate::domain::ports::SiteConfigurationRepository;
use crate::domain::ValidationError;
use crate::entity::site_configuration;
use crate::error::DomainError;

/// PostgreSQL implementation of SiteConfigurationRepository
pub struct PostgresSiteConfigurationRepository {
    db: DatabaseConnection,
}

impl PostgresSiteConfigurationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self) -> Result<Option<site_configuration::Model>, DomainError> {
        site_configuration::Entity::find()
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}

#[async_trait]
impl SiteConfigurationRepository for PostgresSiteConfigurationRepository {
    async fn get(&self) -> Result<Option<SiteConfiguration>, DomainError> {
        Ok(self.find_model().await?.map(|m| m.into()))
    }

    async fn create(
        &self,
        config: &NewSiteConfiguration,
    ) -> Result<SiteConfiguration, DomainError> {
        if self.find_model().await?.is_some() {
            return Err(ValidationError::SingletonViolation.into());
        }

        let model = site_configuration::ActiveModel {
            id: Set(Uuid::new_v4()),
            singleton: Set(true),
            company_name: Set(config.company_name.clone()),
            company_email: Set(config.company_email.clone()),
            company_phone: Set(config.company_phone.clone()),
            company_address: Set(config.company_address.clone()),
            linkedin_url: Set(config.linkedin_url.clone()),
            twitter_url: Set(config.twitter_url.clone()),
            contact_email: Set(config.contact_email.clone()),
            logo: Set(config.logo.clone()),
        };

        // A concurrent creator that passed the check above is stopped here
        let result = model.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                ValidationError::SingletonViolation.into()
            } else {
                DomainError::Database(e.to_string())
            }
        })?;

        Ok(result.into())
    }

    async fn update(
        &self,
        config: &NewSiteConfiguration,
    ) -> Result<SiteConfiguration, DomainError> {
        let existing = self
            .find_model()
            .await?
            .ok_or_else(|| DomainError::NotFound("Site configuration not found".to_string()))?;

        let mut active_model = existing.into_active_model();
        active_model.company_name = Set(config.company_name.clone());
        active_model.company_email = Set(config.company_email.clone());
        active_model.company_phone = Set(config.company_phone.clone());
        active_model.company_address = Set(config.company_address.clone());
        active_model.linkedin_url = Set(config.linkedin_url.clone());
        active_model.twitter_url = Set(config.twitter_url.clone());
        active_model.contact_email = Set(config.contact_email.clone());
        active_model.logo = Set(config.logo.clone());

        let result = active_model
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }
}

/// Convert SeaORM model to domain entity
impl From<site_configuration::Model> for SiteConfiguration {
    fn from(model: site_configuration::Model) -> Self {
        SiteConfiguration {
            id: SiteConfigurationId(model.id),
            company_name: model.company_name,
            company_email: model.company_email,
            company_phone: model.company_phone,
            company_address: model.company_address,
            linkedin_url: model.linkedin_url,
            twitter_url: model.twitter_url,
            contact_email: model.contact_email,
            logo: model.logo,
        }
    }
}
