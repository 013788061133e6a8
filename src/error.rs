use thiserror::Error;
use tracing::{error, warn};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("storage error: {message}")]
    Storage { message: String },

    #[error("{entity} not found")]
    NotFound { entity: String },

    #[error("validation failed: {message}")]
    Validation { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(target: "app::validation", %message, "validation error");
        AppError::Validation { message }
    }

    pub fn not_found(entity: impl Into<String>, id: &str) -> Self {
        let entity = entity.into();
        warn!(target: "app::store", %entity, %id, "resource not found");
        AppError::NotFound { entity }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        let message = message.into();
        error!(target: "app::store", %message, "storage error");
        AppError::Storage { message }
    }

    pub fn other(message: impl Into<String>) -> Self {
        let message = message.into();
        error!(target: "app::other", %message, "other error");
        AppError::Other(message)
    }
}
