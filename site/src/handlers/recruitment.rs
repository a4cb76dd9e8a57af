//! Recruitment handlers

use axum::{
    extract::{Path, State},
    response::Html,
    Extension,
};

use crate::domain::entities::Lang;
use crate::error::AppError;
use crate::render;
use crate::AppState;

/// GET /recrutement/ and /en/recruitment/
pub async fn list_jobs(
    State(state): State<AppState>,
    Extension(lang): Extension<Lang>,
) -> Result<Html<String>, AppError> {
    let view = state.site_service.recruitment(lang).await?;
    Ok(Html(render::render_recruitment(&view)))
}

/// GET /recrutement/:job_name/ and /en/recruitment/:job_name/
///
/// `job_name` is an offer slug, or a title fragment from older links.
pub async fn job_detail(
    State(state): State<AppState>,
    Extension(lang): Extension<Lang>,
    Path(job_name): Path<String>,
) -> Result<Html<String>, AppError> {
    let view = state.site_service.job_detail(lang, &job_name).await?;
    Ok(Html(render::render_job(&view)))
}
