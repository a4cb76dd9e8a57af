//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{
    ContactMessage, ContactMessageId, ContactStatus, JobOffer, JobOfferId, NewContactMessage,
    NewJobOffer, NewPage, NewSiteConfiguration, Page, PageId, SiteConfiguration,
};
use crate::error::DomainError;

/// Repository for Page entities
#[async_trait]
pub trait PageRepository: Send + Sync {
    /// Find a page by ID
    async fn find_by_id(&self, id: &PageId) -> Result<Option<Page>, DomainError>;

    /// Find a page by slug, published or not
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Page>, DomainError>;

    /// Find a published page by slug
    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Page>, DomainError>;

    /// Published pages in menu order (menu_order, then French title)
    async fn find_published_menu(&self) -> Result<Vec<Page>, DomainError>;

    /// Create a new page. Fails with `AlreadyExists` on a duplicate slug.
    async fn create(&self, page: &NewPage) -> Result<Page, DomainError>;

    /// Replace the editable fields of a page
    async fn update(&self, id: &PageId, page: &NewPage) -> Result<Page, DomainError>;

    /// Publish or unpublish a page
    async fn set_published(&self, id: &PageId, published: bool) -> Result<(), DomainError>;
}

/// Repository for ContactMessage entities
#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    /// Find a message by ID
    async fn find_by_id(&self, id: &ContactMessageId)
        -> Result<Option<ContactMessage>, DomainError>;

    /// Most recently received messages first
    async fn find_recent(&self, limit: u64, offset: u64)
        -> Result<Vec<ContactMessage>, DomainError>;

    /// Store a new message with status `new`
    async fn create(&self, message: &NewContactMessage) -> Result<ContactMessage, DomainError>;

    /// Update the processing status of a message
    async fn update_status(
        &self,
        id: &ContactMessageId,
        status: ContactStatus,
    ) -> Result<(), DomainError>;
}

/// Repository for JobOffer entities
#[async_trait]
pub trait JobOfferRepository: Send + Sync {
    /// Find an offer by ID
    async fn find_by_id(&self, id: &JobOfferId) -> Result<Option<JobOffer>, DomainError>;

    /// Published offers, featured first, then newest first
    async fn find_published(&self) -> Result<Vec<JobOffer>, DomainError>;

    /// Featured published offers, newest first
    async fn find_featured(&self, limit: u64) -> Result<Vec<JobOffer>, DomainError>;

    /// Find a published offer by its slug
    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<JobOffer>, DomainError>;

    /// Create a new offer. Fails with `AlreadyExists` on a duplicate slug.
    async fn create(&self, offer: &NewJobOffer) -> Result<JobOffer, DomainError>;

    /// Replace the editable fields of an offer
    async fn update(&self, id: &JobOfferId, offer: &NewJobOffer) -> Result<JobOffer, DomainError>;

    /// Publish or unpublish an offer
    async fn set_published(&self, id: &JobOfferId, published: bool) -> Result<(), DomainError>;

    /// Feature or unfeature an offer
    async fn set_featured(&self, id: &JobOfferId, featured: bool) -> Result<(), DomainError>;
}

/// Repository for the singleton SiteConfiguration
#[async_trait]
pub trait SiteConfigurationRepository: Send + Sync {
    /// The configuration, if one has been created
    async fn get(&self) -> Result<Option<SiteConfiguration>, DomainError>;

    /// Create the configuration.
    ///
    /// Fails with `SingletonViolation` when one already exists, including when
    /// a concurrent writer got there first.
    async fn create(&self, config: &NewSiteConfiguration)
        -> Result<SiteConfiguration, DomainError>;

    /// Replace the fields of the existing configuration
    async fn update(&self, config: &NewSiteConfiguration)
        -> Result<SiteConfiguration, DomainError>;
}
