//! PostgreSQL adapter for JobOfferRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::map_insert_err;
use crate::domain::entities::{ContractType, JobOffer, JobOfferId, NewJobOffer};
use crate::domain::ports::JobOfferRepository;
use crate::entity::job_offers;
use crate::error::DomainError;

/// PostgreSQL implementation of JobOfferRepository
pub struct PostgresJobOfferRepository {
    db: DatabaseConnection,
}

impl PostgresJobOfferRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: &JobOfferId) -> Result<job_offers::Model, DomainError> {
        job_offers::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .ok_or_else(|| DomainError::NotFound(format!("Job offer {} not found", id)))
    }
}

#[async_trait]
impl JobOfferRepository for PostgresJobOfferRepository {
    async fn find_by_id(&self, id: &JobOfferId) -> Result<Option<JobOffer>, DomainError> {
        let result = job_offers::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(JobOffer::try_from).transpose()
    }

    async fn find_published(&self) -> Result<Vec<JobOffer>, DomainError> {
        let results = job_offers::Entity::find()
            .filter(job_offers::Column::IsPublished.eq(true))
            .order_by_desc(job_offers::Column::IsFeatured)
            .order_by_desc(job_offers::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(JobOffer::try_from).collect()
    }

    async fn find_featured(&self, limit: u64) -> Result<Vec<JobOffer>, DomainError> {
        let results = job_offers::Entity::find()
            .filter(job_offers::Column::IsPublished.eq(true))
            .filter(job_offers::Column::IsFeatured.eq(true))
            .order_by_desc(job_offers::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(JobOffer::try_from).collect()
    }

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<JobOffer>, DomainError> {
        let result = job_offers::Entity::find()
            .filter(job_offers::Column::Slug.eq(slug))
            .filter(job_offers::Column::IsPublished.eq(true))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(JobOffer::try_from).transpose()
    }

    async fn create(&self, offer: &NewJobOffer) -> Result<JobOffer, DomainError> {
        let now = Utc::now().fixed_offset();
        let slug = offer.effective_slug();

        let model = job_offers::ActiveModel {
            id: Set(Uuid::new_v4()),
            slug: Set(slug.clone()),
            title_fr: Set(offer.title_fr.clone()),
            title_en: Set(offer.title_en.clone()),
            description_fr: Set(offer.description_fr.clone()),
            description_en: Set(offer.description_en.clone()),
            location: Set(offer.location.clone()),
            contract_type: Set(offer.contract_type.to_string()),
            salary_min: Set(offer.salary_min),
            salary_max: Set(offer.salary_max),
            is_published: Set(offer.is_published),
            is_featured: Set(offer.is_featured),
            created_at: Set(now),
            updated_at: Set(now),
            application_deadline: Set(offer.application_deadline),
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            map_insert_err(e, || format!("Job offer with slug '{}' already exists", slug))
        })?;

        result.try_into()
    }

    async fn update(&self, id: &JobOfferId, offer: &NewJobOffer) -> Result<JobOffer, DomainError> {
        let slug = offer.effective_slug();

        let mut active_model = self.find_model(id).await?.into_active_model();
        active_model.slug = Set(slug.clone());
        active_model.title_fr = Set(offer.title_fr.clone());
        active_model.title_en = Set(offer.title_en.clone());
        active_model.description_fr = Set(offer.description_fr.clone());
        active_model.description_en = Set(offer.description_en.clone());
        active_model.location = Set(offer.location.clone());
        active_model.contract_type = Set(offer.contract_type.to_string());
        active_model.salary_min = Set(offer.salary_min);
        active_model.salary_max = Set(offer.salary_max);
        active_model.is_published = Set(offer.is_published);
        active_model.is_featured = Set(offer.is_featured);
        active_model.application_deadline = Set(offer.application_deadline);
        active_model.updated_at = Set(Utc::now().fixed_offset());

        let result = active_model.update(&self.db).await.map_err(|e| {
            map_insert_err(e, || format!("Job offer with slug '{}' already exists", slug))
        })?;

        result.try_into()
    }

    async fn set_published(&self, id: &JobOfferId, published: bool) -> Result<(), DomainError> {
        let mut active_model = self.find_model(id).await?.into_active_model();
        active_model.is_published = Set(published);
        active_model.updated_at = Set(Utc::now().fixed_offset());

        active_model
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn set_featured(&self, id: &JobOfferId, featured: bool) -> Result<(), DomainError> {
        let mut active_model = self.find_model(id).await?.into_active_model();
        active_model.is_featured = Set(featured);
        active_model.updated_at = Set(Utc::now().fixed_offset());

        active_model
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl TryFrom<job_offers::Model> for JobOffer {
    type Error = DomainError;

    fn try_from(model: job_offers::Model) -> Result<Self, Self::Error> {
        let contract_type = model
            .contract_type
            .parse::<ContractType>()
            .map_err(|e| DomainError::Database(format!("job offer {}: {}", model.id, e)))?;

        Ok(JobOffer {
            id: JobOfferId(model.id),
            slug: model.slug,
            title_fr: model.title_fr,
            title_en: model.title_en,
            description_fr: model.description_fr,
            description_en: model.description_en,
            location: model.location,
            contract_type,
            salary_min: model.salary_min,
            salary_max: model.salary_max,
            is_published: model.is_published,
            is_featured: model.is_featured,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
            application_deadline: model.application_deadline,
        })
    }
}
