use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed (HTTP {status}): {message}")]
    Http { status: u16, message: String },

    #[error("{message}")]
    Auth { message: String },

    #[error("Contact {id} is already in favorites")]
    AlreadyFavorited { id: u64 },

    #[error("No session found")]
    NoSession,

    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Coarse classification used by front-ends to decide how to react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Auth,
    Validation,
    Storage,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Network(_) | AppError::Http { .. } => ErrorKind::Network,
            AppError::Auth { .. } | AppError::NoSession => ErrorKind::Auth,
            AppError::AlreadyFavorited { .. }
            | AppError::BlankField { .. }
            | AppError::InvalidResponse(_) => ErrorKind::Validation,
            AppError::Storage(_) | AppError::Database(_) => ErrorKind::Storage,
        }
    }

    pub(crate) fn auth(message: impl Into<String>) -> Self {
        AppError::Auth {
            message: message.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
