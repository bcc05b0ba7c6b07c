// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("invalid config `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    #[error("failed to read world config: {0}")]
    ConfigIo(#[from] std::io::Error),
    #[error("failed to parse world config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("viewer position unavailable")]
    ViewerUnavailable,
}

impl WorldError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        WorldError::InvalidConfig { field, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, WorldError>;
