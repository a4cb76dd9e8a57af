//! File storage port
//!
//! Uploaded files live outside the database; records keep the relative path
//! returned by `store`.

use async_trait::async_trait;

use crate::domain::entities::{UploadKind, UploadedFile};
use crate::error::DomainError;

#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Store a file under the prefix of `kind` and return its relative path
    async fn store(&self, kind: UploadKind, file: &UploadedFile) -> Result<String, DomainError>;

    /// Remove a previously stored file
    async fn remove(&self, path: &str) -> Result<(), DomainError>;
}
