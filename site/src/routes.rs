//! Bilingual route table
//!
//! French paths live at the root, English paths under `/en/` with translated
//! segments. Both languages reach the same handlers; the table decides the
//! `Lang` of the request.

use crate::domain::entities::{Lang, StaticPage};

/// Path of the home page
pub fn home_path(lang: Lang) -> &'static str {
    match lang {
        Lang::Fr => "/",
        Lang::En => "/en/",
    }
}

/// Path of a fixed content page
pub fn static_path(page: StaticPage, lang: Lang) -> &'static str {
    match (page, lang) {
        (StaticPage::About, Lang::Fr) => "/qui-sommes-nous/",
        (StaticPage::About, Lang::En) => "/en/about-us/",
        (StaticPage::Processes, Lang::Fr) => "/nos-procedes/",
        (StaticPage::Processes, Lang::En) => "/en/our-processes/",
        (StaticPage::Products, Lang::Fr) => "/nos-produits/",
        (StaticPage::Products, Lang::En) => "/en/our-products/",
        (StaticPage::Quality, Lang::Fr) => "/qualite/",
        (StaticPage::Quality, Lang::En) => "/en/quality/",
        (StaticPage::Contact, Lang::Fr) => "/contact/",
        (StaticPage::Contact, Lang::En) => "/en/contact/",
        (StaticPage::Legal, Lang::Fr) => "/mentions-legales/",
        (StaticPage::Legal, Lang::En) => "/en/legal-notice/",
        (StaticPage::Privacy, Lang::Fr) => "/politique-de-protection-des-donnees/",
        (StaticPage::Privacy, Lang::En) => "/en/privacy-policy/",
        (StaticPage::Cookies, Lang::Fr) => "/politique-des-cookies/",
        (StaticPage::Cookies, Lang::En) => "/en/cookie-policy/",
    }
}

pub fn recruitment_path(lang: Lang) -> &'static str {
    match lang {
        Lang::Fr => "/recrutement/",
        Lang::En => "/en/recruitment/",
    }
}

/// Detail link of a job offer; the segment is percent-encoded
pub fn job_path(slug: &str, lang: Lang) -> String {
    format!("{}{}/", recruitment_path(lang), urlencoding::encode(slug))
}

/// Link for a menu entry.
///
/// Pages behind a fixed route link there. Other published pages have no route
/// of their own and fall back to the home page.
pub fn page_href(slug: &str, lang: Lang) -> &'static str {
    match StaticPage::from_slug(slug) {
        Some(page) => static_path(page, lang),
        None => home_path(lang),
    }
}
