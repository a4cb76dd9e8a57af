//! Router integration tests
//!
//! Drive the full axum router over in-memory repositories, through both the
//! French and the English route tables.
//!
//! Run with: cargo test integration_tests

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::extract::ConnectInfo;
    use axum::Extension;
    use axum::http::StatusCode;
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;
    use serde_json::Value;

    use crate::app::{ContactService, ContentService, SiteService};
    use crate::config::{Config, DEFAULT_MAX_UPLOAD_BODY_BYTES};
    use crate::domain::entities::{ContactType, MAX_CV_BYTES};
    use crate::test_utils::{
        test_job_offer, test_page, test_site_configuration, unpublished,
        InMemoryContactMessageRepository, InMemoryFileStorage, InMemoryJobOfferRepository,
        InMemoryPageRepository, InMemorySiteConfigurationRepository,
    };
    use crate::{router, AppState};

    struct TestApp {
        server: TestServer,
        messages: Arc<InMemoryContactMessageRepository>,
        storage: Arc<InMemoryFileStorage>,
    }

    fn test_config(rate_limit: bool) -> Config {
        Config {
            database_url: String::new(),
            port: 0,
            media_root: std::env::temp_dir()
                .join(format!("bgx-site-it-{}", uuid::Uuid::new_v4())),
            max_upload_body_bytes: DEFAULT_MAX_UPLOAD_BODY_BYTES,
            contact_rate_limit: rate_limit,
        }
    }

    fn build_app(
        pages: InMemoryPageRepository,
        jobs: InMemoryJobOfferRepository,
        site_config: InMemorySiteConfigurationRepository,
        config: Config,
    ) -> TestApp {
        let pages = Arc::new(pages);
        let jobs = Arc::new(jobs);
        let site_config = Arc::new(site_config);
        let messages = Arc::new(InMemoryContactMessageRepository::new());
        let storage = Arc::new(InMemoryFileStorage::new());

        let state = AppState {
            site_service: Arc::new(SiteService::new(
                pages.clone(),
                jobs.clone(),
                site_config.clone(),
            )),
            contact_service: Arc::new(ContactService::new(messages.clone(), storage.clone())),
            content_service: Arc::new(ContentService::new(
                pages,
                jobs,
                site_config,
                storage.clone(),
            )),
            config,
        };

        let peer = SocketAddr::from(([127, 0, 0, 1], 4000));
        let app = router(state).layer(Extension(ConnectInfo(peer)));
        TestApp {
            server: TestServer::new(app).unwrap(),
            messages,
            storage,
        }
    }

    fn app_with(pages: InMemoryPageRepository, jobs: InMemoryJobOfferRepository) -> TestApp {
        build_app(
            pages,
            jobs,
            InMemorySiteConfigurationRepository::new().with_config(test_site_configuration()),
            test_config(false),
        )
    }

    fn empty_app() -> TestApp {
        app_with(InMemoryPageRepository::new(), InMemoryJobOfferRepository::new())
    }

    fn contact_form(contact_type: &str) -> MultipartForm {
        MultipartForm::new()
            .add_text("name", "Jeanne Martin")
            .add_text("email", "jeanne.martin@example.com")
            .add_text("phone", "")
            .add_text("company", "")
            .add_text("subject", "Candidature spontanée")
            .add_text("message", "Bonjour, je vous adresse ma candidature.")
            .add_text("contact_type", contact_type)
    }

    fn cv_part(name: &str, size: usize) -> Part {
        Part::bytes(vec![b'x'; size])
            .file_name(name)
            .mime_type("application/pdf")
    }

    // ------------------------------------------------------------------
    // Pages
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn health_reports_ok() {
        let app = empty_app();
        let response = app.server.get("/health").await;
        response.assert_status_ok();
        let json: Value = response.json();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn home_renders_without_home_page() {
        let app = empty_app();

        let response = app.server.get("/").await;
        response.assert_status_ok();
        assert!(response.text().contains("<html lang=\"fr\">"));

        app.server.get("/en/").await.assert_status_ok();
    }

    #[tokio::test]
    async fn static_page_in_both_languages() {
        let app = app_with(
            InMemoryPageRepository::new().with_page(test_page("qualite")),
            InMemoryJobOfferRepository::new(),
        );

        let fr = app.server.get("/qualite/").await;
        fr.assert_status_ok();
        let fr = fr.text();
        assert!(fr.contains("<h1>Titre qualite</h1>"));
        assert!(fr.contains("Contenu en français"));

        let en = app.server.get("/en/quality/").await;
        en.assert_status_ok();
        let en = en.text();
        assert!(en.contains("<html lang=\"en\">"));
        assert!(en.contains("<h1>Title qualite</h1>"));
        assert!(en.contains("English content"));
        assert!(en.contains("BGX Industries"));
    }

    #[tokio::test]
    async fn unpublished_page_is_404() {
        let app = app_with(
            InMemoryPageRepository::new().with_page(unpublished(test_page("mentions-legales"))),
            InMemoryJobOfferRepository::new(),
        );

        let response = app.server.get("/mentions-legales/").await;
        response.assert_status(StatusCode::NOT_FOUND);
        let json: Value = response.json();
        assert_eq!(json["error"], "Not found");

        app.server
            .get("/en/legal-notice/")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn absent_page_is_404() {
        let app = empty_app();
        app.server
            .get("/politique-des-cookies/")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    // ------------------------------------------------------------------
    // Recruitment
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn recruitment_lists_only_published_offers() {
        let mut hidden = test_job_offer("Chaudronnier");
        hidden.is_published = false;
        let app = app_with(
            InMemoryPageRepository::new(),
            InMemoryJobOfferRepository::new()
                .with_offer(test_job_offer("Soudeur TIG"))
                .with_offer(test_job_offer("Technicien de maintenance"))
                .with_offer(hidden),
        );

        let response = app.server.get("/recrutement/").await;
        response.assert_status_ok();
        let html = response.text();

        assert!(html.contains("/recrutement/soudeur-tig/"));
        assert!(html.contains("/recrutement/technicien-de-maintenance/"));
        assert!(!html.contains("Chaudronnier"));
        assert_eq!(html.matches("<span class=\"meta\">").count(), 2);
    }

    #[tokio::test]
    async fn job_detail_by_slug_in_english() {
        let app = app_with(
            InMemoryPageRepository::new(),
            InMemoryJobOfferRepository::new().with_offer(test_job_offer("Soudeur TIG")),
        );

        let response = app.server.get("/en/recruitment/soudeur-tig/").await;
        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("<h1>Soudeur TIG (EN)</h1>"));
        assert!(html.contains("Join our workshop."));
        assert!(html.contains("Permanent contract"));
    }

    #[tokio::test]
    async fn job_detail_by_legacy_title_segment() {
        let app = app_with(
            InMemoryPageRepository::new(),
            InMemoryJobOfferRepository::new().with_offer(test_job_offer("Soudeur TIG")),
        );

        let response = app.server.get("/recrutement/Soudeur_TIG/").await;
        response.assert_status_ok();
        assert!(response.text().contains("<h1>Soudeur TIG</h1>"));
    }

    #[tokio::test]
    async fn unknown_job_is_404() {
        let app = empty_app();
        app.server
            .get("/recrutement/inconnu/")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    // ------------------------------------------------------------------
    // Contact
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn contact_page_shows_form() {
        let app = app_with(
            InMemoryPageRepository::new().with_page(test_page("contact")),
            InMemoryJobOfferRepository::new(),
        );

        let response = app.server.get("/en/contact/").await;
        response.assert_status_ok();
        assert!(response.text().contains("action=\"/en/contact/\""));
    }

    #[tokio::test]
    async fn candidature_without_cv_is_stored_as_new() {
        let app = empty_app();

        let response = app
            .server
            .post("/contact/")
            .multipart(
                contact_form("candidature")
                    .add_part("cv_file", Part::bytes(Vec::<u8>::new()).file_name("")),
            )
            .await;

        response.assert_status(StatusCode::CREATED);
        let json: Value = response.json();
        assert_eq!(json["status"], "new");

        let stored = app.messages.all();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].contact_type, ContactType::Candidature);
        assert!(stored[0].cv_file.is_none());
        assert!(app.storage.is_empty());
    }

    #[tokio::test]
    async fn english_contact_route_accepts_submissions() {
        let app = empty_app();

        app.server
            .post("/en/contact/")
            .multipart(contact_form(""))
            .await
            .assert_status(StatusCode::CREATED);

        assert_eq!(app.messages.all()[0].contact_type, ContactType::Information);
    }

    #[tokio::test]
    async fn cv_is_stored_with_message() {
        let app = empty_app();

        let response = app
            .server
            .post("/contact/")
            .multipart(contact_form("candidature").add_part("cv_file", cv_part("cv.pdf", 2048)))
            .await;

        response.assert_status(StatusCode::CREATED);
        let stored = app.messages.all();
        let path = stored[0].cv_file.clone().expect("cv path");
        assert!(path.starts_with("cvs/"));
        assert!(app.storage.contains(&path));
    }

    #[tokio::test]
    async fn oversized_cv_is_413() {
        let app = empty_app();

        let response = app
            .server
            .post("/contact/")
            .multipart(
                contact_form("candidature")
                    .add_part("cv_file", cv_part("cv.pdf", MAX_CV_BYTES as usize + 1)),
            )
            .await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
        assert!(app.messages.all().is_empty());
        assert!(app.storage.is_empty());
    }

    #[tokio::test]
    async fn cv_with_wrong_extension_is_400() {
        let app = empty_app();

        app.server
            .post("/contact/")
            .multipart(contact_form("candidature").add_part("cv_file", cv_part("cv.exe", 10)))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
        assert!(app.messages.all().is_empty());
    }

    #[tokio::test]
    async fn unknown_contact_type_is_400() {
        let app = empty_app();

        let response = app
            .server
            .post("/contact/")
            .multipart(contact_form("publicite"))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let json: Value = response.json();
        assert!(json["details"].as_str().unwrap().contains("contact_type"));
    }

    #[tokio::test]
    async fn contact_submissions_are_rate_limited() {
        let app = build_app(
            InMemoryPageRepository::new(),
            InMemoryJobOfferRepository::new(),
            InMemorySiteConfigurationRepository::new(),
            test_config(true),
        );

        for _ in 0..5 {
            app.server
                .post("/contact/")
                .multipart(contact_form("information"))
                .await
                .assert_status(StatusCode::CREATED);
        }

        app.server
            .post("/contact/")
            .multipart(contact_form("information"))
            .await
            .assert_status(StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(app.messages.len(), 5);
    }

    // ------------------------------------------------------------------
    // Media
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn public_media_is_served_but_cvs_are_not() {
        let config = test_config(false);
        let root: PathBuf = config.media_root.clone();
        for (dir, file) in [("pages", "atelier.png"), ("cvs", "cv.pdf")] {
            tokio::fs::create_dir_all(root.join(dir)).await.unwrap();
            tokio::fs::write(root.join(dir).join(file), b"data")
                .await
                .unwrap();
        }

        let app = build_app(
            InMemoryPageRepository::new(),
            InMemoryJobOfferRepository::new(),
            InMemorySiteConfigurationRepository::new(),
            config,
        );

        app.server
            .get("/media/pages/atelier.png")
            .await
            .assert_status_ok();
        app.server
            .get("/media/cvs/cv.pdf")
            .await
            .assert_status(StatusCode::NOT_FOUND);

        let _ = tokio::fs::remove_dir_all(&root).await;
    }
}
