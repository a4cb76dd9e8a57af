//! Site configuration domain entity
//!
//! Company details shown on every page. At most one record exists.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::validation::{self, ValidationError};

/// Unique identifier for the site configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SiteConfigurationId(pub Uuid);

impl From<Uuid> for SiteConfigurationId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SiteConfigurationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteConfiguration {
    pub id: SiteConfigurationId,
    pub company_name: String,
    pub company_email: String,
    pub company_phone: String,
    pub company_address: String,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    /// Recipient of contact form messages
    pub contact_email: String,
    /// Relative storage path under `config/`
    pub logo: Option<String>,
}

impl std::fmt::Display for SiteConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration - {}", self.company_name)
    }
}

/// Editable fields of the site configuration
#[derive(Debug, Clone)]
pub struct NewSiteConfiguration {
    pub company_name: String,
    pub company_email: String,
    pub company_phone: String,
    pub company_address: String,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub contact_email: String,
    pub logo: Option<String>,
}

impl NewSiteConfiguration {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::required("company_name", &self.company_name)?;
        validation::max_chars("company_name", &self.company_name, 200)?;
        validation::email("company_email", &self.company_email)?;
        validation::required("company_phone", &self.company_phone)?;
        validation::max_chars("company_phone", &self.company_phone, 20)?;
        validation::required("company_address", &self.company_address)?;
        validation::optional_url("linkedin_url", self.linkedin_url.as_deref())?;
        validation::optional_url("twitter_url", self.twitter_url.as_deref())?;
        validation::email("contact_email", &self.contact_email)?;
        Ok(())
    }
}
