use crate::validate::FieldErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreenlogError {
    #[error("Action not found: {0}")]
    ActionNotFound(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid payload: {0}")]
    Validation(FieldErrors),
}

pub type Result<T> = std::result::Result<T, GreenlogError>;
