//! Contact message domain entity
//!
//! Messages left by visitors through the contact form, optionally with a CV.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::lang::Lang;
use crate::domain::validation::{self, ValidationError};

/// Unique identifier for a contact message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactMessageId(pub Uuid);

impl ContactMessageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ContactMessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ContactMessageId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ContactMessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the visitor is writing about
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    Commercial,
    Candidature,
    #[default]
    Information,
    Autre,
}

impl ContactType {
    pub const ALL: [ContactType; 4] = [
        ContactType::Commercial,
        ContactType::Candidature,
        ContactType::Information,
        ContactType::Autre,
    ];

    pub fn label(self, lang: Lang) -> &'static str {
        match (self, lang) {
            (ContactType::Commercial, Lang::Fr) => "Demande commerciale",
            (ContactType::Commercial, Lang::En) => "Sales enquiry",
            (ContactType::Candidature, Lang::Fr) => "Candidature",
            (ContactType::Candidature, Lang::En) => "Job application",
            (ContactType::Information, Lang::Fr) => "Demande d'information",
            (ContactType::Information, Lang::En) => "Information request",
            (ContactType::Autre, Lang::Fr) => "Autre",
            (ContactType::Autre, Lang::En) => "Other",
        }
    }
}

impl std::fmt::Display for ContactType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactType::Commercial => write!(f, "commercial"),
            ContactType::Candidature => write!(f, "candidature"),
            ContactType::Information => write!(f, "information"),
            ContactType::Autre => write!(f, "autre"),
        }
    }
}

impl std::str::FromStr for ContactType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "commercial" => Ok(ContactType::Commercial),
            "candidature" => Ok(ContactType::Candidature),
            "information" => Ok(ContactType::Information),
            "autre" => Ok(ContactType::Autre),
            _ => Err(ValidationError::InvalidChoice {
                field: "contact_type",
                value: s.to_string(),
            }),
        }
    }
}

/// Processing status, changed by an operator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Replied,
    Archived,
}

impl ContactStatus {
    pub fn label(self, lang: Lang) -> &'static str {
        match (self, lang) {
            (ContactStatus::New, Lang::Fr) => "Nouveau",
            (ContactStatus::New, Lang::En) => "New",
            (ContactStatus::Read, Lang::Fr) => "Lu",
            (ContactStatus::Read, Lang::En) => "Read",
            (ContactStatus::Replied, Lang::Fr) => "Répondu",
            (ContactStatus::Replied, Lang::En) => "Replied",
            (ContactStatus::Archived, Lang::Fr) => "Archivé",
            (ContactStatus::Archived, Lang::En) => "Archived",
        }
    }
}

impl std::fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactStatus::New => write!(f, "new"),
            ContactStatus::Read => write!(f, "read"),
            ContactStatus::Replied => write!(f, "replied"),
            ContactStatus::Archived => write!(f, "archived"),
        }
    }
}

impl std::str::FromStr for ContactStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(ContactStatus::New),
            "read" => Ok(ContactStatus::Read),
            "replied" => Ok(ContactStatus::Replied),
            "archived" => Ok(ContactStatus::Archived),
            _ => Err(ValidationError::InvalidChoice {
                field: "status",
                value: s.to_string(),
            }),
        }
    }
}

/// A stored contact message
#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub subject: String,
    pub message: String,
    /// Relative storage path under `cvs/`
    pub cv_file: Option<String>,
    pub contact_type: ContactType,
    pub status: ContactStatus,
    pub received_at: DateTime<Utc>,
}

impl std::fmt::Display for ContactMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} ({})",
            self.name,
            self.subject,
            self.received_at.format("%d/%m/%Y")
        )
    }
}

/// A submission from the contact form.
///
/// `cv_file` is filled in once the CV has been stored.
#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub subject: String,
    pub message: String,
    pub contact_type: ContactType,
    pub cv_file: Option<String>,
}

impl NewContactMessage {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::required("name", &self.name)?;
        validation::max_chars("name", &self.name, 100)?;
        validation::email("email", &self.email)?;
        validation::max_chars("phone", &self.phone, 20)?;
        validation::max_chars("company", &self.company, 100)?;
        validation::required("subject", &self.subject)?;
        validation::max_chars("subject", &self.subject, 200)?;
        validation::required("message", &self.message)?;
        Ok(())
    }
}
