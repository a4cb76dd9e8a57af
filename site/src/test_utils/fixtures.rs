//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::{
    slugify, ContactType, ContractType, JobOffer, JobOfferId, NewContactMessage, NewJobOffer,
    NewPage, NewSiteConfiguration, Page, PageId, SiteConfiguration, SiteConfigurationId,
    UploadedFile,
};

/// A published page with French and English text
pub fn test_page(slug: &str) -> Page {
    let now = Utc::now();
    Page {
        id: PageId::new(),
        slug: slug.to_string(),
        title_fr: format!("Titre {}", slug),
        title_en: format!("Title {}", slug),
        content_fr: "Contenu en français".to_string(),
        content_en: "English content".to_string(),
        meta_description_fr: format!("Description {}", slug),
        meta_description_en: format!("Description {}", slug),
        main_image: None,
        menu_order: 0,
        is_published: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn unpublished(mut page: Page) -> Page {
    page.is_published = false;
    page
}

/// A published, not featured offer whose slug derives from its title
pub fn test_job_offer(title: &str) -> JobOffer {
    let now = Utc::now();
    JobOffer {
        id: JobOfferId::new(),
        slug: slugify(title),
        title_fr: title.to_string(),
        title_en: format!("{} (EN)", title),
        description_fr: "Rejoignez notre atelier.".to_string(),
        description_en: "Join our workshop.".to_string(),
        location: "Lyon".to_string(),
        contract_type: ContractType::Cdi,
        salary_min: Some(30_000),
        salary_max: Some(38_000),
        is_published: true,
        is_featured: false,
        created_at: now,
        updated_at: now,
        application_deadline: None,
    }
}

pub fn test_site_configuration() -> SiteConfiguration {
    SiteConfiguration {
        id: SiteConfigurationId(Uuid::new_v4()),
        company_name: "BGX Industries".to_string(),
        company_email: "contact@bgx.fr".to_string(),
        company_phone: "+33 4 72 00 00 00".to_string(),
        company_address: "12 rue des Forges, 69007 Lyon".to_string(),
        linkedin_url: Some("https://www.linkedin.com/company/bgx".to_string()),
        twitter_url: None,
        contact_email: "rh@bgx.fr".to_string(),
        logo: None,
    }
}

pub fn new_page(slug: &str) -> NewPage {
    NewPage {
        slug: slug.to_string(),
        title_fr: format!("Titre {}", slug),
        title_en: format!("Title {}", slug),
        content_fr: "Contenu".to_string(),
        content_en: "Content".to_string(),
        meta_description_fr: String::new(),
        meta_description_en: String::new(),
        main_image: None,
        menu_order: 1,
        is_published: true,
    }
}

pub fn new_job_offer(title: &str) -> NewJobOffer {
    NewJobOffer {
        slug: None,
        title_fr: title.to_string(),
        title_en: format!("{} (EN)", title),
        description_fr: "Description du poste".to_string(),
        description_en: "Job description".to_string(),
        location: "Lyon".to_string(),
        contract_type: ContractType::Cdi,
        salary_min: None,
        salary_max: None,
        is_published: true,
        is_featured: false,
        application_deadline: None,
    }
}

pub fn new_site_configuration() -> NewSiteConfiguration {
    NewSiteConfiguration {
        company_name: "BGX Industries".to_string(),
        company_email: "contact@bgx.fr".to_string(),
        company_phone: "+33 4 72 00 00 00".to_string(),
        company_address: "12 rue des Forges, 69007 Lyon".to_string(),
        linkedin_url: None,
        twitter_url: None,
        contact_email: "rh@bgx.fr".to_string(),
        logo: None,
    }
}

pub fn new_contact_message() -> NewContactMessage {
    NewContactMessage {
        name: "Jeanne Martin".to_string(),
        email: "jeanne.martin@example.com".to_string(),
        phone: "06 12 34 56 78".to_string(),
        company: "Atelier Martin".to_string(),
        subject: "Demande de devis".to_string(),
        message: "Bonjour, nous souhaitons un devis.".to_string(),
        contact_type: ContactType::Commercial,
        cv_file: None,
    }
}

/// A CV upload of exactly `size` bytes
pub fn test_cv(file_name: &str, size: usize) -> UploadedFile {
    UploadedFile {
        file_name: file_name.to_string(),
        content_type: Some("application/pdf".to_string()),
        bytes: vec![b'x'; size],
    }
}

pub fn test_image(file_name: &str) -> UploadedFile {
    UploadedFile {
        file_name: file_name.to_string(),
        content_type: Some("image/png".to_string()),
        bytes: vec![0x89, b'P', b'N', b'G'],
    }
}
