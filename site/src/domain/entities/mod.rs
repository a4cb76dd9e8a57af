//! Domain entities
//!
//! Pure domain models for the site content.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod contact_message;
pub mod job_offer;
pub mod lang;
pub mod page;
pub mod site_configuration;
pub mod upload;

pub use contact_message::{
    ContactMessage, ContactMessageId, ContactStatus, ContactType, NewContactMessage,
};
pub use job_offer::{
    normalize_job_name, slugify, ContractType, JobOffer, JobOfferId, NewJobOffer,
};
pub use lang::Lang;
pub use page::{NewPage, Page, PageId, StaticPage, HOME_SLUG};
pub use site_configuration::{NewSiteConfiguration, SiteConfiguration, SiteConfigurationId};
pub use upload::{UploadKind, UploadedFile, MAX_CV_BYTES};
