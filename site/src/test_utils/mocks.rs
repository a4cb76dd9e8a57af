//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They keep the orderings and uniqueness rules of the PostgreSQL adapters so
//! services behave the same against either.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    ContactMessage, ContactMessageId, ContactStatus, JobOffer, JobOfferId, NewContactMessage,
    NewJobOffer, NewPage, NewSiteConfiguration, Page, PageId, SiteConfiguration,
    SiteConfigurationId, UploadKind, UploadedFile,
};
use crate::domain::ports::{
    ContactMessageRepository, FileStorage, JobOfferRepository, PageRepository,
    SiteConfigurationRepository,
};
use crate::domain::ValidationError;
use crate::error::DomainError;

// ============================================================================
// In-Memory Page Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryPageRepository {
    pages: Arc<RwLock<Vec<Page>>>,
}

impl InMemoryPageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a page for testing
    pub fn with_page(self, page: Page) -> Self {
        self.pages.write().unwrap().push(page);
        self
    }

    fn slug_taken(pages: &[Page], slug: &str, except: Option<&PageId>) -> bool {
        pages
            .iter()
            .any(|p| p.slug == slug && Some(&p.id) != except)
    }
}

#[async_trait]
impl PageRepository for InMemoryPageRepository {
    async fn find_by_id(&self, id: &PageId) -> Result<Option<Page>, DomainError> {
        let pages = self.pages.read().unwrap();
        Ok(pages.iter().find(|p| &p.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Page>, DomainError> {
        let pages = self.pages.read().unwrap();
        Ok(pages.iter().find(|p| p.slug == slug).cloned())
    }

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Page>, DomainError> {
        let pages = self.pages.read().unwrap();
        Ok(pages
            .iter()
            .find(|p| p.slug == slug && p.is_published)
            .cloned())
    }

    async fn find_published_menu(&self) -> Result<Vec<Page>, DomainError> {
        let pages = self.pages.read().unwrap();
        let mut menu: Vec<Page> = pages.iter().filter(|p| p.is_published).cloned().collect();
        menu.sort_by(|a, b| {
            a.menu_order
                .cmp(&b.menu_order)
                .then_with(|| a.title_fr.cmp(&b.title_fr))
        });
        Ok(menu)
    }

    async fn create(&self, page: &NewPage) -> Result<Page, DomainError> {
        let mut pages = self.pages.write().unwrap();
        if Self::slug_taken(&pages, &page.slug, None) {
            return Err(DomainError::AlreadyExists(format!(
                "Page with slug '{}' already exists",
                page.slug
            )));
        }

        let now = Utc::now();
        let created = Page {
            id: PageId::new(),
            slug: page.slug.clone(),
            title_fr: page.title_fr.clone(),
            title_en: page.title_en.clone(),
            content_fr: page.content_fr.clone(),
            content_en: page.content_en.clone(),
            meta_description_fr: page.meta_description_fr.clone(),
            meta_description_en: page.meta_description_en.clone(),
            main_image: page.main_image.clone(),
            menu_order: page.menu_order,
            is_published: page.is_published,
            created_at: now,
            updated_at: now,
        };
        pages.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &PageId, page: &NewPage) -> Result<Page, DomainError> {
        let mut pages = self.pages.write().unwrap();
        if Self::slug_taken(&pages, &page.slug, Some(id)) {
            return Err(DomainError::AlreadyExists(format!(
                "Page with slug '{}' already exists",
                page.slug
            )));
        }

        let existing = pages
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("Page {} not found", id)))?;
        existing.slug = page.slug.clone();
        existing.title_fr = page.title_fr.clone();
        existing.title_en = page.title_en.clone();
        existing.content_fr = page.content_fr.clone();
        existing.content_en = page.content_en.clone();
        existing.meta_description_fr = page.meta_description_fr.clone();
        existing.meta_description_en = page.meta_description_en.clone();
        existing.main_image = page.main_image.clone();
        existing.menu_order = page.menu_order;
        existing.is_published = page.is_published;
        existing.updated_at = Utc::now();
        Ok(existing.clone())
    }

    async fn set_published(&self, id: &PageId, published: bool) -> Result<(), DomainError> {
        let mut pages = self.pages.write().unwrap();
        let page = pages
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("Page {} not found", id)))?;
        page.is_published = published;
        page.updated_at = Utc::now();
        Ok(())
    }
}

// ============================================================================
// In-Memory Contact Message Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryContactMessageRepository {
    messages: Arc<RwLock<HashMap<ContactMessageId, ContactMessage>>>,
}

impl InMemoryContactMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.messages.read().unwrap().len()
    }

    /// Snapshot of every stored message
    pub fn all(&self) -> Vec<ContactMessage> {
        self.messages.read().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl ContactMessageRepository for InMemoryContactMessageRepository {
    async fn find_by_id(
        &self,
        id: &ContactMessageId,
    ) -> Result<Option<ContactMessage>, DomainError> {
        let messages = self.messages.read().unwrap();
        Ok(messages.get(id).cloned())
    }

    async fn find_recent(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<ContactMessage>, DomainError> {
        let messages = self.messages.read().unwrap();
        let mut recent: Vec<ContactMessage> = messages.values().cloned().collect();
        recent.sort_by(|a, b| b.received_at.cmp(&a.received_at));
        Ok(recent
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn create(&self, message: &NewContactMessage) -> Result<ContactMessage, DomainError> {
        let created = ContactMessage {
            id: ContactMessageId::new(),
            name: message.name.clone(),
            email: message.email.clone(),
            phone: message.phone.clone(),
            company: message.company.clone(),
            subject: message.subject.clone(),
            message: message.message.clone(),
            cv_file: message.cv_file.clone(),
            contact_type: message.contact_type,
            status: ContactStatus::New,
            received_at: Utc::now(),
        };
        self.messages
            .write()
            .unwrap()
            .insert(created.id, created.clone());
        Ok(created)
    }

    async fn update_status(
        &self,
        id: &ContactMessageId,
        status: ContactStatus,
    ) -> Result<(), DomainError> {
        let mut messages = self.messages.write().unwrap();
        let message = messages
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Contact message {} not found", id)))?;
        message.status = status;
        Ok(())
    }
}

/// Contact repository whose writes always fail
pub struct FailingContactMessageRepository;

#[async_trait]
impl ContactMessageRepository for FailingContactMessageRepository {
    async fn find_by_id(
        &self,
        _id: &ContactMessageId,
    ) -> Result<Option<ContactMessage>, DomainError> {
        Ok(None)
    }

    async fn find_recent(
        &self,
        _limit: u64,
        _offset: u64,
    ) -> Result<Vec<ContactMessage>, DomainError> {
        Ok(vec![])
    }

    async fn create(&self, _message: &NewContactMessage) -> Result<ContactMessage, DomainError> {
        Err(DomainError::Database("connection reset".to_string()))
    }

    async fn update_status(
        &self,
        _id: &ContactMessageId,
        _status: ContactStatus,
    ) -> Result<(), DomainError> {
        Err(DomainError::Database("connection reset".to_string()))
    }
}

// ============================================================================
// In-Memory Job Offer Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryJobOfferRepository {
    offers: Arc<RwLock<Vec<JobOffer>>>,
}

impl InMemoryJobOfferRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an offer for testing
    pub fn with_offer(self, offer: JobOffer) -> Self {
        self.offers.write().unwrap().push(offer);
        self
    }

    fn slug_taken(offers: &[JobOffer], slug: &str, except: Option<&JobOfferId>) -> bool {
        offers
            .iter()
            .any(|o| o.slug == slug && Some(&o.id) != except)
    }

    fn modify(
        &self,
        id: &JobOfferId,
        f: impl FnOnce(&mut JobOffer),
    ) -> Result<(), DomainError> {
        let mut offers = self.offers.write().unwrap();
        let offer = offers
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("Job offer {} not found", id)))?;
        f(offer);
        offer.updated_at = Utc::now();
        Ok(())
    }
}

#[async_trait]
impl JobOfferRepository for InMemoryJobOfferRepository {
    async fn find_by_id(&self, id: &JobOfferId) -> Result<Option<JobOffer>, DomainError> {
        let offers = self.offers.read().unwrap();
        Ok(offers.iter().find(|o| &o.id == id).cloned())
    }

    async fn find_published(&self) -> Result<Vec<JobOffer>, DomainError> {
        let offers = self.offers.read().unwrap();
        let mut published: Vec<JobOffer> =
            offers.iter().filter(|o| o.is_published).cloned().collect();
        published.sort_by(|a, b| {
            b.is_featured
                .cmp(&a.is_featured)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(published)
    }

    async fn find_featured(&self, limit: u64) -> Result<Vec<JobOffer>, DomainError> {
        let offers = self.offers.read().unwrap();
        let mut featured: Vec<JobOffer> = offers
            .iter()
            .filter(|o| o.is_published && o.is_featured)
            .cloned()
            .collect();
        featured.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        featured.truncate(limit as usize);
        Ok(featured)
    }

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<JobOffer>, DomainError> {
        let offers = self.offers.read().unwrap();
        Ok(offers
            .iter()
            .find(|o| o.slug == slug && o.is_published)
            .cloned())
    }

    async fn create(&self, offer: &NewJobOffer) -> Result<JobOffer, DomainError> {
        let slug = offer.effective_slug();
        let mut offers = self.offers.write().unwrap();
        if Self::slug_taken(&offers, &slug, None) {
            return Err(DomainError::AlreadyExists(format!(
                "Job offer with slug '{}' already exists",
                slug
            )));
        }

        let now = Utc::now();
        let created = JobOffer {
            id: JobOfferId::new(),
            slug,
            title_fr: offer.title_fr.clone(),
            title_en: offer.title_en.clone(),
            description_fr: offer.description_fr.clone(),
            description_en: offer.description_en.clone(),
            location: offer.location.clone(),
            contract_type: offer.contract_type,
            salary_min: offer.salary_min,
            salary_max: offer.salary_max,
            is_published: offer.is_published,
            is_featured: offer.is_featured,
            created_at: now,
            updated_at: now,
            application_deadline: offer.application_deadline,
        };
        offers.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &JobOfferId, offer: &NewJobOffer) -> Result<JobOffer, DomainError> {
        let slug = offer.effective_slug();
        {
            let offers = self.offers.read().unwrap();
            if Self::slug_taken(&offers, &slug, Some(id)) {
                return Err(DomainError::AlreadyExists(format!(
                    "Job offer with slug '{}' already exists",
                    slug
                )));
            }
        }

        self.modify(id, |existing| {
            existing.slug = slug;
            existing.title_fr = offer.title_fr.clone();
            existing.title_en = offer.title_en.clone();
            existing.description_fr = offer.description_fr.clone();
            existing.description_en = offer.description_en.clone();
            existing.location = offer.location.clone();
            existing.contract_type = offer.contract_type;
            existing.salary_min = offer.salary_min;
            existing.salary_max = offer.salary_max;
            existing.is_published = offer.is_published;
            existing.is_featured = offer.is_featured;
            existing.application_deadline = offer.application_deadline;
        })?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Job offer {} not found", id)))
    }

    async fn set_published(&self, id: &JobOfferId, published: bool) -> Result<(), DomainError> {
        self.modify(id, |o| o.is_published = published)
    }

    async fn set_featured(&self, id: &JobOfferId, featured: bool) -> Result<(), DomainError> {
        self.modify(id, |o| o.is_featured = featured)
    }
}

// ============================================================================
// In-Memory Site Configuration Repository
// ============================================================================

#[derive(Default)]
pub struct InMemorySiteConfigurationRepository {
    config: Arc<RwLock<Option<SiteConfiguration>>>,
}

impl InMemorySiteConfigurationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(self, config: SiteConfiguration) -> Self {
        *self.config.write().unwrap() = Some(config);
        self
    }
}

fn apply(id: SiteConfigurationId, config: &NewSiteConfiguration) -> SiteConfiguration {
    SiteConfiguration {
        id,
        company_name: config.company_name.clone(),
        company_email: config.company_email.clone(),
        company_phone: config.company_phone.clone(),
        company_address: config.company_address.clone(),
        linkedin_url: config.linkedin_url.clone(),
        twitter_url: config.twitter_url.clone(),
        contact_email: config.contact_email.clone(),
        logo: config.logo.clone(),
    }
}

#[async_trait]
impl SiteConfigurationRepository for InMemorySiteConfigurationRepository {
    async fn get(&self) -> Result<Option<SiteConfiguration>, DomainError> {
        Ok(self.config.read().unwrap().clone())
    }

    async fn create(
        &self,
        config: &NewSiteConfiguration,
    ) -> Result<SiteConfiguration, DomainError> {
        let mut current = self.config.write().unwrap();
        if current.is_some() {
            return Err(ValidationError::SingletonViolation.into());
        }
        let created = apply(SiteConfigurationId(uuid::Uuid::new_v4()), config);
        *current = Some(created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        config: &NewSiteConfiguration,
    ) -> Result<SiteConfiguration, DomainError> {
        let mut current = self.config.write().unwrap();
        let id = current
            .as_ref()
            .map(|c| c.id)
            .ok_or_else(|| DomainError::NotFound("Site configuration not found".to_string()))?;
        let updated = apply(id, config);
        *current = Some(updated.clone());
        Ok(updated)
    }
}

// ============================================================================
// In-Memory File Storage
// ============================================================================

#[derive(Default)]
pub struct InMemoryFileStorage {
    files: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryFileStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.read().unwrap().contains_key(path)
    }

    pub fn is_empty(&self) -> bool {
        self.files.read().unwrap().is_empty()
    }
}

#[async_trait]
impl FileStorage for InMemoryFileStorage {
    async fn store(&self, kind: UploadKind, file: &UploadedFile) -> Result<String, DomainError> {
        let fragment = uuid::Uuid::new_v4().simple().to_string();
        let path = format!("{}{}-{}", kind.prefix(), &fragment[..8], file.file_name);
        self.files
            .write()
            .unwrap()
            .insert(path.clone(), file.bytes.clone());
        Ok(path)
    }

    async fn remove(&self, path: &str) -> Result<(), DomainError> {
        self.files.write().unwrap().remove(path);
        Ok(())
    }
}
