//! Local filesystem adapter for FileStorage
//!
//! Files are written below a media root, under the prefix of their upload
//! kind. Client file names are reduced to a safe basename and prefixed with a
//! random fragment, so two uploads never collide and no name can leave its
//! prefix directory.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{UploadKind, UploadedFile};
use crate::domain::ports::FileStorage;
use crate::error::DomainError;

const MAX_NAME_LEN: usize = 80;

pub struct LocalFileStorage {
    root: PathBuf,
}

impl LocalFileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a stored relative path, if it stays inside the root
    fn resolve(&self, relative: &str) -> Option<PathBuf> {
        let path = Path::new(relative);
        if path
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            Some(self.root.join(path))
        } else {
            None
        }
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn store(&self, kind: UploadKind, file: &UploadedFile) -> Result<String, DomainError> {
        let fragment = Uuid::new_v4().simple().to_string();
        let relative = format!(
            "{}{}-{}",
            kind.prefix(),
            &fragment[..8],
            sanitize_file_name(&file.file_name)
        );

        let dir = self.root.join(kind.prefix());
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| DomainError::Storage(format!("{}: {}", dir.display(), e)))?;

        let target = self.root.join(&relative);
        tokio::fs::write(&target, &file.bytes)
            .await
            .map_err(|e| DomainError::Storage(format!("{}: {}", target.display(), e)))?;

        tracing::debug!("Stored {} bytes at {}", file.bytes.len(), relative);
        Ok(relative)
    }

    async fn remove(&self, path: &str) -> Result<(), DomainError> {
        let target = self
            .resolve(path)
            .ok_or_else(|| DomainError::Storage(format!("Refusing to remove '{}'", path)))?;

        match tokio::fs::remove_file(&target).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::Storage(format!("{}: {}", target.display(), e))),
        }
    }
}

/// Reduce an untrusted client file name to `[A-Za-z0-9._-]`, keeping the extension
fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();

    let mut clean = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect::<String>();

    clean = clean.trim_start_matches('.').to_string();
    if clean.is_empty() {
        return "upload".to_string();
    }

    if clean.len() > MAX_NAME_LEN {
        // Keep the tail so the extension survives; the string is ASCII here
        clean = clean[clean.len() - MAX_NAME_LEN..].to_string();
    }
    clean
}
