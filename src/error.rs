use thiserror::Error;

/// Local validation failures raised before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// No client selected for the draft.
    MissingClient,
    /// No line item qualifies for submission.
    NoItems,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingClient => write!(f, "a client must be selected"),
            ValidationError::NoItems => {
                write!(f, "at least one item with a concept and a quantity is required")
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(ValidationError),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    // Server-provided messages are surfaced verbatim.
    #[error("{0}")]
    Service(String),

    #[error("quotation {quotation_id} was saved but its attachments were not: {message}")]
    PartialFailure { quotation_id: i64, message: String },

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Attachment error: {0}")]
    Attachment(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(anyhow::Error),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}
