//! BGX site server
//!
//! Connects to PostgreSQL, makes sure the schema exists and serves the
//! bilingual website.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use sea_orm::Database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bgx_site::adapters::{
    ensure_schema, LocalFileStorage, PostgresContactMessageRepository, PostgresJobOfferRepository,
    PostgresPageRepository, PostgresSiteConfigurationRepository,
};
use bgx_site::app::{ContactService, ContentService, SiteService};
use bgx_site::config::Config;
use bgx_site::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,bgx_site=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting BGX site...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    ensure_schema(&db)
        .await
        .context("Failed to create database schema")?;
    tracing::info!("Database ready");

    // Create adapters
    let page_repo = Arc::new(PostgresPageRepository::new(db.clone()));
    let message_repo = Arc::new(PostgresContactMessageRepository::new(db.clone()));
    let job_repo = Arc::new(PostgresJobOfferRepository::new(db.clone()));
    let config_repo = Arc::new(PostgresSiteConfigurationRepository::new(db.clone()));
    let storage = Arc::new(LocalFileStorage::new(config.media_root.clone()));
    tracing::info!("Storing uploads in {}", storage.root().display());

    // Create application services
    let site_service = Arc::new(SiteService::new(
        page_repo.clone(),
        job_repo.clone(),
        config_repo.clone(),
    ));
    let contact_service = Arc::new(ContactService::new(message_repo, storage.clone()));
    let content_service = Arc::new(ContentService::new(
        page_repo,
        job_repo,
        config_repo,
        storage,
    ));

    let state = AppState {
        site_service,
        contact_service,
        content_service,
        config: config.clone(),
    };
    let app = router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    // Peer addresses feed the contact form rate limiter
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
