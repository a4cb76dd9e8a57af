use std::env;
use std::path::PathBuf;

use anyhow::Context;

/// Default request body cap, large enough for a 5 MiB CV plus form fields
pub const DEFAULT_MAX_UPLOAD_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Directory holding uploaded files
    pub media_root: PathBuf,
    /// Request body cap on the contact form
    pub max_upload_body_bytes: usize,
    /// Rate limit contact form submissions per client IP
    pub contact_rate_limit: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: parse_var("PORT", 8080)?,
            media_root: env::var("MEDIA_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./media")),
            max_upload_body_bytes: parse_var(
                "MAX_UPLOAD_BODY_BYTES",
                DEFAULT_MAX_UPLOAD_BODY_BYTES,
            )?,
            contact_rate_limit: parse_var("CONTACT_RATE_LIMIT", true)?,
        })
    }
}

/// Read and parse an optional variable, falling back to `default` when unset
fn parse_var<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {}", key, raw)),
        Err(_) => Ok(default),
    }
}
