//! Content service
//!
//! Write side used by site operators: pages, job offers and the site
//! configuration, including their image uploads.

use std::sync::Arc;

use crate::domain::entities::{
    JobOffer, JobOfferId, NewJobOffer, NewPage, NewSiteConfiguration, Page, PageId,
    SiteConfiguration, UploadKind, UploadedFile,
};
use crate::domain::ports::{
    FileStorage, JobOfferRepository, PageRepository, SiteConfigurationRepository,
};
use crate::domain::validation::{self, ValidationError};
use crate::error::DomainError;

pub struct ContentService {
    pages: Arc<dyn PageRepository>,
    jobs: Arc<dyn JobOfferRepository>,
    config: Arc<dyn SiteConfigurationRepository>,
    storage: Arc<dyn FileStorage>,
}

impl ContentService {
    pub fn new(
        pages: Arc<dyn PageRepository>,
        jobs: Arc<dyn JobOfferRepository>,
        config: Arc<dyn SiteConfigurationRepository>,
        storage: Arc<dyn FileStorage>,
    ) -> Self {
        Self {
            pages,
            jobs,
            config,
            storage,
        }
    }

    // ------------------------------------------------------------------
    // Pages
    // ------------------------------------------------------------------

    pub async fn find_page(&self, id: &PageId) -> Result<Page, DomainError> {
        self.pages
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Page {} not found", id)))
    }

    /// Create a page, storing its main image first when one is given
    pub async fn create_page(
        &self,
        mut page: NewPage,
        image: Option<UploadedFile>,
    ) -> Result<Page, DomainError> {
        page.validate()?;
        let stored = self.store_upload(UploadKind::PageImage, image.as_ref()).await?;
        if stored.is_some() {
            page.main_image = stored.clone();
        }

        let created = self.pages.create(&page).await;
        let created = self.discard_on_error(created, stored.as_deref()).await?;

        tracing::info!("Created page '{}' ({})", created.slug, created.id);
        Ok(created)
    }

    /// Replace a page's fields. A new image replaces the previous file.
    pub async fn update_page(
        &self,
        id: &PageId,
        mut page: NewPage,
        image: Option<UploadedFile>,
    ) -> Result<Page, DomainError> {
        page.validate()?;
        let previous = self.find_page(id).await?;
        let stored = self.store_upload(UploadKind::PageImage, image.as_ref()).await?;
        if stored.is_some() {
            page.main_image = stored.clone();
        }

        let updated = self.pages.update(id, &page).await;
        let updated = self.discard_on_error(updated, stored.as_deref()).await?;

        if let Some(old) = previous.main_image.as_deref() {
            if updated.main_image.as_deref() != Some(old) {
                self.discard(old).await;
            }
        }

        tracing::info!("Updated page '{}' ({})", updated.slug, updated.id);
        Ok(updated)
    }

    pub async fn set_page_published(
        &self,
        id: &PageId,
        published: bool,
    ) -> Result<Page, DomainError> {
        self.pages.set_published(id, published).await?;
        tracing::info!("Page {} published: {}", id, published);
        self.find_page(id).await
    }

    // ------------------------------------------------------------------
    // Job offers
    // ------------------------------------------------------------------

    pub async fn find_job_offer(&self, id: &JobOfferId) -> Result<JobOffer, DomainError> {
        self.jobs
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Job offer {} not found", id)))
    }

    pub async fn create_job_offer(&self, offer: NewJobOffer) -> Result<JobOffer, DomainError> {
        offer.validate()?;
        let created = self.jobs.create(&offer).await?;
        tracing::info!("Created job offer '{}' ({})", created.slug, created.id);
        Ok(created)
    }

    pub async fn update_job_offer(
        &self,
        id: &JobOfferId,
        offer: NewJobOffer,
    ) -> Result<JobOffer, DomainError> {
        offer.validate()?;
        let updated = self.jobs.update(id, &offer).await?;
        tracing::info!("Updated job offer '{}' ({})", updated.slug, updated.id);
        Ok(updated)
    }

    pub async fn set_job_offer_published(
        &self,
        id: &JobOfferId,
        published: bool,
    ) -> Result<JobOffer, DomainError> {
        self.jobs.set_published(id, published).await?;
        tracing::info!("Job offer {} published: {}", id, published);
        self.find_job_offer(id).await
    }

    pub async fn set_job_offer_featured(
        &self,
        id: &JobOfferId,
        featured: bool,
    ) -> Result<JobOffer, DomainError> {
        self.jobs.set_featured(id, featured).await?;
        tracing::info!("Job offer {} featured: {}", id, featured);
        self.find_job_offer(id).await
    }

    // ------------------------------------------------------------------
    // Site configuration
    // ------------------------------------------------------------------

    pub async fn site_configuration(&self) -> Result<Option<SiteConfiguration>, DomainError> {
        self.config.get().await
    }

    /// Create the single configuration record.
    ///
    /// A second creation fails with `SingletonViolation` whatever its values.
    pub async fn create_site_configuration(
        &self,
        mut config: NewSiteConfiguration,
        logo: Option<UploadedFile>,
    ) -> Result<SiteConfiguration, DomainError> {
        if self.config.get().await?.is_some() {
            return Err(ValidationError::SingletonViolation.into());
        }
        config.validate()?;

        let stored = self.store_upload(UploadKind::Logo, logo.as_ref()).await?;
        if stored.is_some() {
            config.logo = stored.clone();
        }

        let created = self.config.create(&config).await;
        let created = self.discard_on_error(created, stored.as_deref()).await?;

        tracing::info!("Created site configuration for {}", created.company_name);
        Ok(created)
    }

    pub async fn update_site_configuration(
        &self,
        mut config: NewSiteConfiguration,
        logo: Option<UploadedFile>,
    ) -> Result<SiteConfiguration, DomainError> {
        config.validate()?;
        let previous = self
            .config
            .get()
            .await?
            .ok_or_else(|| DomainError::NotFound("Site configuration not found".to_string()))?;

        let stored = self.store_upload(UploadKind::Logo, logo.as_ref()).await?;
        if stored.is_some() {
            config.logo = stored.clone();
        }

        let updated = self.config.update(&config).await;
        let updated = self.discard_on_error(updated, stored.as_deref()).await?;

        if let Some(old) = previous.logo.as_deref() {
            if updated.logo.as_deref() != Some(old) {
                self.discard(old).await;
            }
        }

        tracing::info!("Updated site configuration for {}", updated.company_name);
        Ok(updated)
    }

    // ------------------------------------------------------------------
    // Uploads
    // ------------------------------------------------------------------

    async fn store_upload(
        &self,
        kind: UploadKind,
        file: Option<&UploadedFile>,
    ) -> Result<Option<String>, DomainError> {
        match file {
            Some(file) => {
                validation::upload(file, kind)?;
                Ok(Some(self.storage.store(kind, file).await?))
            }
            None => Ok(None),
        }
    }

    /// Remove a freshly stored file when the write it belonged to failed
    async fn discard_on_error<T>(
        &self,
        result: Result<T, DomainError>,
        stored: Option<&str>,
    ) -> Result<T, DomainError> {
        if result.is_err() {
            if let Some(path) = stored {
                self.discard(path).await;
            }
        }
        result
    }

    async fn discard(&self, path: &str) {
        if let Err(e) = self.storage.remove(path).await {
            tracing::warn!("Failed to remove {}: {}", path, e);
        }
    }
}
