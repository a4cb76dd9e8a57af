//! Uploaded files
//!
//! Bytes received from a form, before they are handed to file storage.
//! Records only ever keep the relative storage path.

/// Largest accepted CV, in bytes
pub const MAX_CV_BYTES: u64 = 5 * 1024 * 1024;

const CV_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "svg"];

/// The slot an upload is destined for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    /// `Page.main_image`
    PageImage,
    /// `ContactMessage.cv_file`
    Cv,
    /// `SiteConfiguration.logo`
    Logo,
}

impl UploadKind {
    pub const ALL: [UploadKind; 3] = [UploadKind::PageImage, UploadKind::Cv, UploadKind::Logo];

    /// Storage prefix, always ending with `/`
    pub fn prefix(self) -> &'static str {
        match self {
            UploadKind::PageImage => "pages/",
            UploadKind::Cv => "cvs/",
            UploadKind::Logo => "config/",
        }
    }

    pub fn field_name(self) -> &'static str {
        match self {
            UploadKind::PageImage => "main_image",
            UploadKind::Cv => "cv_file",
            UploadKind::Logo => "logo",
        }
    }

    pub fn allowed_extensions(self) -> &'static [&'static str] {
        match self {
            UploadKind::Cv => CV_EXTENSIONS,
            UploadKind::PageImage | UploadKind::Logo => IMAGE_EXTENSIONS,
        }
    }

    pub fn max_bytes(self) -> Option<u64> {
        match self {
            UploadKind::Cv => Some(MAX_CV_BYTES),
            UploadKind::PageImage | UploadKind::Logo => None,
        }
    }

    /// Whether files of this kind may be served publicly
    pub fn is_public(self) -> bool {
        !matches!(self, UploadKind::Cv)
    }
}

/// A file received from a client
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Name as sent by the client, untrusted
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Lowercased extension of the client file name
    pub fn extension(&self) -> Option<String> {
        let name = self.file_name.rsplit(['/', '\\']).next()?;
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}
