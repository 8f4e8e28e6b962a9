use crate::domain::transitions::TransitionError;
use crate::domain::validation::ValidationErrors;
use crate::spreadsheets::ExportError;
use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (DB, export).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database Error: {0}")]
    DbError(String),

    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),

    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status_code(&self) -> u16 {
        match self {
            ServerError::NotFound(_) => 404,
            ServerError::BadRequest(_) | ServerError::Validation(_) => 400,
            ServerError::Conflict(_) => 409,
            ServerError::DbError(_) | ServerError::XlsxError(_) | ServerError::InternalError => 500,
        }
    }

    /// Text shown to the caller. Internal details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ServerError::NotFound(msg)
            | ServerError::BadRequest(msg)
            | ServerError::Conflict(msg) => msg.clone(),
            ServerError::Validation(_) => "Please correct the highlighted fields".to_string(),
            ServerError::DbError(_) | ServerError::InternalError => {
                "Internal Server Error".to_string()
            }
            ServerError::XlsxError(_) => "Could not build the spreadsheet".to_string(),
        }
    }
}

impl From<rusqlite::Error> for ServerError {
    fn from(e: rusqlite::Error) -> Self {
        ServerError::DbError(e.to_string())
    }
}

impl From<TransitionError> for ServerError {
    fn from(e: TransitionError) -> Self {
        ServerError::Conflict(e.to_string())
    }
}

impl From<ValidationErrors> for ServerError {
    fn from(e: ValidationErrors) -> Self {
        ServerError::Validation(e)
    }
}

impl From<ExportError> for ServerError {
    fn from(e: ExportError) -> Self {
        ServerError::XlsxError(e.0)
    }
}
