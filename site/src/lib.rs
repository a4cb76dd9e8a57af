//! BGX corporate website
//!
//! Bilingual (French / English) company site: content pages, job offers and
//! a contact form with CV upload, rendered server-side.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, MethodRouter},
    Extension, Json, Router,
};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod render;
pub mod routes;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod integration_tests;

use app::{ContactService, ContentService, SiteService};
use config::Config;
use domain::entities::{Lang, StaticPage, UploadKind};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub site_service: Arc<SiteService>,
    pub contact_service: Arc<ContactService>,
    pub content_service: Arc<ContentService>,
    pub config: Config,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the full router: both languages, health check and public media
pub fn router(state: AppState) -> Router {
    let contact_submit = contact_submit_route(&state.config);

    let mut app = Router::new().route("/health", get(health));
    for lang in Lang::ALL {
        app = app.merge(localized_routes(lang, contact_submit.clone()));
    }

    let media = &state.config.media_root;
    for kind in UploadKind::ALL.into_iter().filter(|k| k.is_public()) {
        let prefix = kind.prefix().trim_end_matches('/');
        app = app.nest_service(
            &format!("/media/{}", prefix),
            ServeDir::new(media.join(prefix)),
        );
    }

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

/// The page routes of one language, with `lang` attached to every request
fn localized_routes(
    lang: Lang,
    contact_submit: MethodRouter<AppState>,
) -> Router<AppState> {
    let mut router = Router::new()
        .route(routes::home_path(lang), get(handlers::home))
        .route(routes::recruitment_path(lang), get(handlers::list_jobs))
        .route(
            &format!("{}:job_name/", routes::recruitment_path(lang)),
            get(handlers::job_detail),
        );

    for page in StaticPage::ALL {
        let show = get(handlers::static_page).layer(Extension(page));
        let method_router = match page {
            StaticPage::Contact => show.merge(contact_submit.clone()),
            _ => show,
        };
        router = router.route(routes::static_path(page, lang), method_router);
    }

    // Old links without the trailing slash
    let mut slashless: Vec<String> = StaticPage::ALL
        .into_iter()
        .map(|page| routes::static_path(page, lang).to_string())
        .collect();
    slashless.push(routes::recruitment_path(lang).to_string());
    slashless.push(format!("{}:job_name/", routes::recruitment_path(lang)));
    if lang != Lang::default() {
        slashless.push(routes::home_path(lang).to_string());
    }
    for path in slashless {
        router = router.route(path.trim_end_matches('/'), get(handlers::append_slash));
    }

    router.layer(Extension(lang))
}

/// POST handler of the contact form, with its body limit and rate limiting
fn contact_submit_route(config: &Config) -> MethodRouter<AppState> {
    let submit = post(handlers::submit_contact)
        .layer(DefaultBodyLimit::max(config.max_upload_body_bytes));

    if !config.contact_rate_limit {
        return submit;
    }

    // 1 request every 2 seconds per client IP, burst of 5
    let governor_config = GovernorConfigBuilder::default()
        .key_extractor(PeerIpKeyExtractor)
        .per_second(2)
        .burst_size(5)
        .finish();

    match governor_config {
        Some(governor_config) => submit.layer(GovernorLayer {
            config: Arc::new(governor_config),
        }),
        None => {
            tracing::warn!("Invalid rate limit settings, contact form is not rate limited");
            submit
        }
    }
}
