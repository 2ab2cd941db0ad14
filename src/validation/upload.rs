use crate::app::env::Envy;

pub const NOT_AN_IMAGE: &str = "file is required to be an image";

/// Room left in a multipart body for text fields and part headers.
pub const FORM_OVERHEAD: usize = 64 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadLimits {
    pub max_file_size: usize,
    pub max_files: usize,
}

impl UploadLimits {
    pub fn from_envy(envy: &Envy) -> Self {
        Self {
            max_file_size: envy.upload_max_file_size(),
            max_files: envy.upload_max_files(),
        }
    }

    /// Largest multipart body accepted. One file past `max_files` still fits
    /// so the count limit is reported instead of a size failure.
    pub fn body_limit(&self) -> usize {
        self.max_file_size
            .saturating_mul(self.max_files.saturating_add(1))
            .saturating_add(FORM_OVERHEAD)
    }
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self::from_envy(&Envy::default())
    }
}

/// A limit enforced by the upload reader itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadLimit {
    FileSize,
    FileCount,
}

impl UploadLimit {
    pub fn message(&self) -> &'static str {
        match *self {
            Self::FileSize => "File too large",
            Self::FileCount => "Too many files",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadFailure {
    Limit(UploadLimit),
    Rejected(String),
}

/// The last upload problem seen while reading one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadErrorState(Option<String>);

impl UploadErrorState {
    pub fn message(&self) -> &str {
        self.0.as_deref().unwrap_or_default()
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}

/// Records `failure` on the request's upload state. Limit failures keep their
/// own wording; anything else is reported as a non-image upload.
pub fn check_upload(failure: &UploadFailure, state: &mut UploadErrorState) {
    let message = match failure {
        UploadFailure::Limit(limit) => limit.message().to_string(),
        UploadFailure::Rejected(reason) => {
            tracing::debug!(reason = %reason, "upload rejected");
            NOT_AN_IMAGE.to_string()
        }
    };

    tracing::warn!(error = %message, "upload failed");
    state.0 = Some(message);
}
