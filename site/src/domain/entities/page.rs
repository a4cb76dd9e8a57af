//! Page domain entity
//!
//! A content page of the site (home, about, legal notice...), written in
//! French and English.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::lang::Lang;
use crate::domain::validation::{self, ValidationError};

/// Slug of the home page
pub const HOME_SLUG: &str = "accueil";

/// Unique identifier for a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageId(pub Uuid);

impl PageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PageId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PageId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A content page
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub id: PageId,
    pub slug: String,
    pub title_fr: String,
    pub title_en: String,
    pub content_fr: String,
    pub content_en: String,
    pub meta_description_fr: String,
    pub meta_description_en: String,
    /// Relative storage path under `pages/`
    pub main_image: Option<String>,
    pub menu_order: i32,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Page {
    pub fn title(&self, lang: Lang) -> &str {
        lang.pick(&self.title_fr, &self.title_en)
    }

    pub fn content(&self, lang: Lang) -> &str {
        lang.pick(&self.content_fr, &self.content_en)
    }

    pub fn meta_description(&self, lang: Lang) -> &str {
        lang.pick(&self.meta_description_fr, &self.meta_description_en)
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title_fr)
    }
}

/// Editable fields of a page, used for both creation and update
#[derive(Debug, Clone)]
pub struct NewPage {
    pub slug: String,
    pub title_fr: String,
    pub title_en: String,
    pub content_fr: String,
    pub content_en: String,
    pub meta_description_fr: String,
    pub meta_description_en: String,
    pub main_image: Option<String>,
    pub menu_order: i32,
    pub is_published: bool,
}

impl NewPage {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::slug(&self.slug)?;
        validation::required("title_fr", &self.title_fr)?;
        validation::max_chars("title_fr", &self.title_fr, 200)?;
        validation::required("title_en", &self.title_en)?;
        validation::max_chars("title_en", &self.title_en, 200)?;
        validation::max_chars("meta_description_fr", &self.meta_description_fr, 160)?;
        validation::max_chars("meta_description_en", &self.meta_description_en, 160)?;
        validation::non_negative("menu_order", self.menu_order)?;
        Ok(())
    }
}

/// Pages served by the fixed static content routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaticPage {
    About,
    Processes,
    Products,
    Quality,
    Contact,
    Legal,
    Privacy,
    Cookies,
}

impl StaticPage {
    pub const ALL: [StaticPage; 8] = [
        StaticPage::About,
        StaticPage::Processes,
        StaticPage::Products,
        StaticPage::Quality,
        StaticPage::Contact,
        StaticPage::Legal,
        StaticPage::Privacy,
        StaticPage::Cookies,
    ];

    /// Slug of the page record backing this route
    pub fn slug(self) -> &'static str {
        match self {
            StaticPage::About => "qui-sommes-nous",
            StaticPage::Processes => "nos-procedes",
            StaticPage::Products => "nos-produits",
            StaticPage::Quality => "qualite",
            StaticPage::Contact => "contact",
            StaticPage::Legal => "mentions-legales",
            StaticPage::Privacy => "politique-de-protection-des-donnees",
            StaticPage::Cookies => "politique-des-cookies",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.slug() == slug)
    }
}
