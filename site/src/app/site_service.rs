//! Site service
//!
//! Read side of the public site: every visitor-facing page is one call here,
//! returning the view context handed to the renderer.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::{
    normalize_job_name, JobOffer, Lang, Page, SiteConfiguration, StaticPage, HOME_SLUG,
};
use crate::domain::ports::{JobOfferRepository, PageRepository, SiteConfigurationRepository};
use crate::error::DomainError;

/// Number of featured offers shown on the home page
pub const FEATURED_JOBS_LIMIT: u64 = 3;

/// A navigation entry, built from a published page
#[derive(Debug, Clone, Serialize)]
pub struct MenuEntry {
    pub slug: String,
    pub title: String,
}

/// Context shared by every page
#[derive(Debug, Clone, Serialize)]
pub struct SiteContext {
    pub lang: Lang,
    /// `None` until an operator creates the configuration
    pub config: Option<SiteConfiguration>,
    pub menu: Vec<MenuEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub site: SiteContext,
    pub page: Option<Page>,
    pub featured_jobs: Vec<JobOffer>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub site: SiteContext,
    pub page: Page,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecruitmentView {
    pub site: SiteContext,
    pub jobs: Vec<JobOffer>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobView {
    pub site: SiteContext,
    pub job: JobOffer,
}

/// Service behind the public pages
pub struct SiteService {
    pages: Arc<dyn PageRepository>,
    jobs: Arc<dyn JobOfferRepository>,
    config: Arc<dyn SiteConfigurationRepository>,
}

impl SiteService {
    pub fn new(
        pages: Arc<dyn PageRepository>,
        jobs: Arc<dyn JobOfferRepository>,
        config: Arc<dyn SiteConfigurationRepository>,
    ) -> Self {
        Self { pages, jobs, config }
    }

    /// Site configuration and navigation for `lang`
    async fn site_context(&self, lang: Lang) -> Result<SiteContext, DomainError> {
        let config = self.config.get().await?;
        if config.is_none() {
            tracing::debug!("Site configuration not created yet");
        }

        let menu = self
            .pages
            .find_published_menu()
            .await?
            .into_iter()
            .map(|page| MenuEntry {
                title: page.title(lang).to_string(),
                slug: page.slug,
            })
            .collect();

        Ok(SiteContext { lang, config, menu })
    }

    /// Home page.
    ///
    /// A missing home page is not an error; the view is rendered without it.
    pub async fn home(&self, lang: Lang) -> Result<HomeView, DomainError> {
        let page = self.pages.find_by_slug(HOME_SLUG).await?;
        let featured_jobs = self.jobs.find_featured(FEATURED_JOBS_LIMIT).await?;

        Ok(HomeView {
            site: self.site_context(lang).await?,
            page,
            featured_jobs,
        })
    }

    /// One of the fixed content pages. Absent or unpublished is `NotFound`.
    pub async fn static_page(
        &self,
        lang: Lang,
        which: StaticPage,
    ) -> Result<PageView, DomainError> {
        let page = self
            .pages
            .find_published_by_slug(which.slug())
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Page '{}' not found", which.slug())))?;

        Ok(PageView {
            site: self.site_context(lang).await?,
            page,
        })
    }

    /// Published offers, featured first, then newest first
    pub async fn recruitment(&self, lang: Lang) -> Result<RecruitmentView, DomainError> {
        let jobs = self.jobs.find_published().await?;

        Ok(RecruitmentView {
            site: self.site_context(lang).await?,
            jobs,
        })
    }

    /// Job offer detail from its URL segment
    pub async fn job_detail(&self, lang: Lang, job_name: &str) -> Result<JobView, DomainError> {
        let job = self
            .resolve_job(job_name)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Job offer '{}' not found", job_name)))?;

        Ok(JobView {
            site: self.site_context(lang).await?,
            job,
        })
    }

    /// Exact slug first. Older links carry a title fragment instead, matched by
    /// containment in listing order; the first hit wins.
    async fn resolve_job(&self, job_name: &str) -> Result<Option<JobOffer>, DomainError> {
        if let Some(job) = self.jobs.find_published_by_slug(job_name).await? {
            return Ok(Some(job));
        }

        let needle = normalize_job_name(job_name);
        if needle.is_empty() {
            return Ok(None);
        }

        let job = self
            .jobs
            .find_published()
            .await?
            .into_iter()
            .find(|job| job.title_contains(&needle));

        if let Some(job) = &job {
            tracing::debug!("Resolved '{}' to job offer {} by title", job_name, job.slug);
        }
        Ok(job)
    }
}
