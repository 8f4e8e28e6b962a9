use crate::domain::transitions::TransitionError;
use crate::domain::validation::ValidationErrors;
use crate::spreadsheets::ExportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("A rejection reason is required")]
    EmptyRejectionReason,

    #[error("Comment cannot be empty")]
    EmptyComment,

    #[error("Deletion was not confirmed")]
    NotConfirmed,

    #[error("Request {0} is not loaded")]
    UnknownRequest(i64),

    #[error(transparent)]
    IllegalTransition(#[from] TransitionError),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Invalid client configuration: {0}")]
    Config(String),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

impl From<ValidationErrors> for ClientError {
    fn from(e: ValidationErrors) -> Self {
        ClientError::Validation(e)
    }
}
