//! Field-level validation
//!
//! Validators shared by the domain records. Each one checks a single field
//! and returns the first problem it finds.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::entities::{UploadKind, UploadedFile};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$")
        .expect("email regex compiles")
});

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[A-Za-z0-9.-]+(?::\d{1,5})?(?:[/?#]\S*)?$").expect("url regex compiles")
});

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_-]+$").expect("slug regex compiles"));

/// A value rejected at write time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    #[error("{field} is not a valid email address: {value}")]
    InvalidEmail { field: &'static str, value: String },

    #[error("{field} is not a valid URL: {value}")]
    InvalidUrl { field: &'static str, value: String },

    #[error("Invalid slug '{0}': use lowercase letters, digits, '-' or '_'")]
    InvalidSlug(String),

    #[error("'{value}' is not a valid choice for {field}")]
    InvalidChoice { field: &'static str, value: String },

    #[error("File is too large: {size} bytes (maximum {max} bytes)")]
    FileTooLarge { size: u64, max: u64 },

    #[error("Unsupported file type '{extension}' for {field} (allowed: {allowed})")]
    UnsupportedFileType {
        field: &'static str,
        extension: String,
        allowed: String,
    },

    #[error("Only one site configuration is allowed")]
    SingletonViolation,
}

pub fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required { field })
    } else {
        Ok(())
    }
}

/// Length is counted in characters, not bytes
pub fn max_chars(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        Err(ValidationError::TooLong { field, max })
    } else {
        Ok(())
    }
}

pub fn non_negative(field: &'static str, value: i32) -> Result<(), ValidationError> {
    if value < 0 {
        Err(ValidationError::Negative { field })
    } else {
        Ok(())
    }
}

pub fn email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    required(field, value)?;
    max_chars(field, value, 254)?;
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail {
            field,
            value: value.to_string(),
        })
    }
}

/// Optional URL: `None` and blank strings pass
pub fn optional_url(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => {
            max_chars(field, v, 200)?;
            if URL_RE.is_match(v) {
                Ok(())
            } else {
                Err(ValidationError::InvalidUrl {
                    field,
                    value: v.to_string(),
                })
            }
        }
        _ => Ok(()),
    }
}

pub fn slug(value: &str) -> Result<(), ValidationError> {
    required("slug", value)?;
    max_chars("slug", value, 100)?;
    if SLUG_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidSlug(value.to_string()))
    }
}

/// Check an upload against the rules of the slot it is destined for.
///
/// Extension is checked first, then size.
pub fn upload(file: &UploadedFile, kind: UploadKind) -> Result<(), ValidationError> {
    let allowed = kind.allowed_extensions();
    let extension = file.extension().unwrap_or_default();
    if !allowed.contains(&extension.as_str()) {
        return Err(ValidationError::UnsupportedFileType {
            field: kind.field_name(),
            extension,
            allowed: allowed.join(", "),
        });
    }

    if let Some(max) = kind.max_bytes() {
        if file.size() > max {
            return Err(ValidationError::FileTooLarge {
                size: file.size(),
                max,
            });
        }
    }

    Ok(())
}
