// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Item must be a JSON object, got {0}")]
    NotAnObject(String),

    #[error("Item id must be a string or null, got {0}")]
    InvalidId(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
