//! Job offer domain entity
//!
//! Open positions shown on the recruitment pages.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::lang::Lang;
use crate::domain::validation::{self, ValidationError};

/// Unique identifier for a job offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobOfferId(pub Uuid);

impl JobOfferId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for JobOfferId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for JobOfferId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for JobOfferId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Employment contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractType {
    Cdi,
    Cdd,
    Stage,
    Freelance,
}

impl ContractType {
    pub const ALL: [ContractType; 4] = [
        ContractType::Cdi,
        ContractType::Cdd,
        ContractType::Stage,
        ContractType::Freelance,
    ];

    pub fn label(self, lang: Lang) -> &'static str {
        match (self, lang) {
            (ContractType::Cdi, Lang::Fr) => "CDI",
            (ContractType::Cdi, Lang::En) => "Permanent contract",
            (ContractType::Cdd, Lang::Fr) => "CDD",
            (ContractType::Cdd, Lang::En) => "Fixed-term contract",
            (ContractType::Stage, Lang::Fr) => "Stage",
            (ContractType::Stage, Lang::En) => "Internship",
            (ContractType::Freelance, _) => "Freelance",
        }
    }
}

impl std::fmt::Display for ContractType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContractType::Cdi => write!(f, "cdi"),
            ContractType::Cdd => write!(f, "cdd"),
            ContractType::Stage => write!(f, "stage"),
            ContractType::Freelance => write!(f, "freelance"),
        }
    }
}

impl std::str::FromStr for ContractType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cdi" => Ok(ContractType::Cdi),
            "cdd" => Ok(ContractType::Cdd),
            "stage" => Ok(ContractType::Stage),
            "freelance" => Ok(ContractType::Freelance),
            _ => Err(ValidationError::InvalidChoice {
                field: "contract_type",
                value: s.to_string(),
            }),
        }
    }
}

/// A job offer
#[derive(Debug, Clone, Serialize)]
pub struct JobOffer {
    pub id: JobOfferId,
    /// Unique URL segment of the detail page
    pub slug: String,
    pub title_fr: String,
    pub title_en: String,
    pub description_fr: String,
    pub description_en: String,
    pub location: String,
    pub contract_type: ContractType,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub is_published: bool,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub application_deadline: Option<NaiveDate>,
}

impl JobOffer {
    pub fn title(&self, lang: Lang) -> &str {
        lang.pick(&self.title_fr, &self.title_en)
    }

    pub fn description(&self, lang: Lang) -> &str {
        lang.pick(&self.description_fr, &self.description_en)
    }

    /// Case-insensitive containment of an already normalized needle in the French title
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title_fr.to_lowercase().contains(needle)
    }
}

impl std::fmt::Display for JobOffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title_fr)
    }
}

/// Editable fields of a job offer, used for both creation and update
#[derive(Debug, Clone)]
pub struct NewJobOffer {
    /// Derived from `title_fr` when absent
    pub slug: Option<String>,
    pub title_fr: String,
    pub title_en: String,
    pub description_fr: String,
    pub description_en: String,
    pub location: String,
    pub contract_type: ContractType,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub is_published: bool,
    pub is_featured: bool,
    pub application_deadline: Option<NaiveDate>,
}

impl NewJobOffer {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::slug(&self.effective_slug())?;
        validation::required("title_fr", &self.title_fr)?;
        validation::max_chars("title_fr", &self.title_fr, 200)?;
        validation::required("title_en", &self.title_en)?;
        validation::max_chars("title_en", &self.title_en, 200)?;
        validation::required("description_fr", &self.description_fr)?;
        validation::required("description_en", &self.description_en)?;
        validation::required("location", &self.location)?;
        validation::max_chars("location", &self.location, 100)?;
        if let Some(min) = self.salary_min {
            validation::non_negative("salary_min", min)?;
        }
        if let Some(max) = self.salary_max {
            validation::non_negative("salary_max", max)?;
        }
        Ok(())
    }

    /// The slug this offer is stored under
    pub fn effective_slug(&self) -> String {
        match &self.slug {
            Some(slug) if !slug.trim().is_empty() => slug.trim().to_string(),
            _ => slugify(&self.title_fr),
        }
    }
}

/// Build a URL slug from a title, folding French accents to ASCII
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars().flat_map(char::to_lowercase) {
        match c {
            'a'..='z' | '0'..='9' => slug.push(c),
            'à' | 'â' | 'ä' | 'á' => slug.push('a'),
            'é' | 'è' | 'ê' | 'ë' => slug.push('e'),
            'î' | 'ï' | 'í' => slug.push('i'),
            'ô' | 'ö' | 'ó' => slug.push('o'),
            'ù' | 'û' | 'ü' | 'ú' => slug.push('u'),
            'ÿ' => slug.push('y'),
            'ç' => slug.push('c'),
            'œ' => slug.push_str("oe"),
            'æ' => slug.push_str("ae"),
            _ => slug.push('-'),
        }
    }
    while slug.contains("--") {
        slug = slug.replace("--", "-");
    }
    slug.trim_matches('-').to_string()
}

/// Turn a job-name path segment into a title search needle.
///
/// Separators become spaces and the result is case-folded.
pub fn normalize_job_name(segment: &str) -> String {
    segment
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
