//! Content page handlers
//!
//! Home page and the fixed content pages. The language and, for static
//! pages, which page to serve are attached to the route as extensions.

use axum::{
    extract::State,
    http::Uri,
    response::{Html, Redirect},
    Extension,
};

use crate::domain::entities::{Lang, StaticPage};
use crate::error::AppError;
use crate::render;
use crate::AppState;

/// GET / and /en/
pub async fn home(
    State(state): State<AppState>,
    Extension(lang): Extension<Lang>,
) -> Result<Html<String>, AppError> {
    let view = state.site_service.home(lang).await?;
    Ok(Html(render::render_home(&view)))
}

/// GET on every fixed content page, e.g. /qualite/ and /en/quality/
pub async fn static_page(
    State(state): State<AppState>,
    Extension(lang): Extension<Lang>,
    Extension(page): Extension<StaticPage>,
) -> Result<Html<String>, AppError> {
    let view = state.site_service.static_page(lang, page).await?;
    Ok(Html(render::render_page(&view, page)))
}

/// Permanent redirect of a path missing its trailing slash, e.g. /qualite
pub async fn append_slash(uri: Uri) -> Redirect {
    let target = match uri.query() {
        Some(query) => format!("{}/?{}", uri.path(), query),
        None => format!("{}/", uri.path()),
    };
    Redirect::permanent(&target)
}
