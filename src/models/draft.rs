//! Quotation draft model.

use chrono::NaiveDate;
use std::path::PathBuf;

/// Whether the draft creates a new quotation or edits a persisted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftMode {
    #[default]
    New,
    /// The externally-assigned id is fixed once loaded.
    Editing(i64),
}

impl DraftMode {
    pub fn quotation_id(&self) -> Option<i64> {
        match self {
            DraftMode::Editing(id) => Some(*id),
            DraftMode::New => None,
        }
    }
}

/// A local file staged for upload once the quotation is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAttachment {
    pub file_name: String,
    pub path: PathBuf,
}

impl PendingAttachment {
    /// Stage a file by path; the display name is the file name component.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "adjunto".to_string());
        Self { file_name, path }
    }
}

/// Mutable, not-yet-persisted (or being-edited) quotation metadata.
///
/// The item rows live in the ledger owned by the same session.
#[derive(Debug, Clone, Default)]
pub struct QuotationDraft {
    pub mode: DraftMode,
    pub client_id: Option<i64>,
    pub valid_until: Option<NaiveDate>,
    pub notes: String,
    pub commercial_terms: String,
    /// Local files queued for upload, cleared once the upload succeeds.
    pub pending_attachments: Vec<PendingAttachment>,
    /// Names of attachments already persisted server-side, shown when editing.
    pub existing_attachments: Vec<String>,
}

impl QuotationDraft {
    pub fn new() -> Self {
        Self::default()
    }
}
