//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and storage.

pub mod contact_service;
pub mod content_service;
pub mod site_service;

pub use contact_service::ContactService;
pub use content_service::ContentService;
pub use site_service::{
    HomeView, JobView, MenuEntry, PageView, RecruitmentView, SiteContext, SiteService,
    FEATURED_JOBS_LIMIT,
};
