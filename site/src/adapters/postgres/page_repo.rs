//! PostgreSQL adapter for PageRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::map_insert_err;
use crate::domain::entities::{NewPage, Page, PageId};
use crate::domain::ports::PageRepository;
use crate::entity::pages;
use crate::error::DomainError;

/// PostgreSQL implementation of PageRepository
pub struct PostgresPageRepository {
    db: DatabaseConnection,
}

impl PostgresPageRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: &PageId) -> Result<pages::Model, DomainError> {
        pages::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .ok_or_else(|| DomainError::NotFound(format!("Page {} not found", id)))
    }
}

#[async_trait]
impl PageRepository for PostgresPageRepository {
    async fn find_by_id(&self, id: &PageId) -> Result<Option<Page>, DomainError> {
        let result = pages::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Page>, DomainError> {
        let result = pages::Entity::find()
            .filter(pages::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Page>, DomainError> {
        let result = pages::Entity::find()
            .filter(pages::Column::Slug.eq(slug))
            .filter(pages::Column::IsPublished.eq(true))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_published_menu(&self) -> Result<Vec<Page>, DomainError> {
        let results = pages::Entity::find()
            .filter(pages::Column::IsPublished.eq(true))
            .order_by_asc(pages::Column::MenuOrder)
            .order_by_asc(pages::Column::TitleFr)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, page: &NewPage) -> Result<Page, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = pages::ActiveModel {
            id: Set(Uuid::new_v4()),
            slug: Set(page.slug.clone()),
            title_fr: Set(page.title_fr.clone()),
            title_en: Set(page.title_en.clone()),
            content_fr: Set(page.content_fr.clone()),
            content_en: Set(page.content_en.clone()),
            meta_description_fr: Set(page.meta_description_fr.clone()),
            meta_description_en: Set(page.meta_description_en.clone()),
            main_image: Set(page.main_image.clone()),
            menu_order: Set(page.menu_order),
            is_published: Set(page.is_published),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            map_insert_err(e, || format!("Page with slug '{}' already exists", page.slug))
        })?;

        Ok(result.into())
    }

    async fn update(&self, id: &PageId, page: &NewPage) -> Result<Page, DomainError> {
        let mut active_model = self.find_model(id).await?.into_active_model();
        active_model.slug = Set(page.slug.clone());
        active_model.title_fr = Set(page.title_fr.clone());
        active_model.title_en = Set(page.title_en.clone());
        active_model.content_fr = Set(page.content_fr.clone());
        active_model.content_en = Set(page.content_en.clone());
        active_model.meta_description_fr = Set(page.meta_description_fr.clone());
        active_model.meta_description_en = Set(page.meta_description_en.clone());
        active_model.main_image = Set(page.main_image.clone());
        active_model.menu_order = Set(page.menu_order);
        active_model.is_published = Set(page.is_published);
        active_model.updated_at = Set(Utc::now().fixed_offset());

        let result = active_model.update(&self.db).await.map_err(|e| {
            map_insert_err(e, || format!("Page with slug '{}' already exists", page.slug))
        })?;

        Ok(result.into())
    }

    async fn set_published(&self, id: &PageId, published: bool) -> Result<(), DomainError> {
        let mut active_model = self.find_model(id).await?.into_active_model();
        active_model.is_published = Set(published);
        active_model.updated_at = Set(Utc::now().fixed_offset());

        active_model
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<pages::Model> for Page {
    fn from(model: pages::Model) -> Self {
        Page {
            id: PageId(model.id),
            slug: model.slug,
            title_fr: model.title_fr,
            title_en: model.title_en,
            content_fr: model.content_fr,
            content_en: model.content_en,
            meta_description_fr: model.meta_description_fr,
            meta_description_en: model.meta_description_en,
            main_image: model.main_image,
            menu_order: model.menu_order,
            is_published: model.is_published,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
