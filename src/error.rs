// src/error.rs

use thiserror::Error;

/// Errors produced while building or loading a lattice.
#[derive(Debug, Error)]
pub enum AuraeonError {
    #[error("invalid parameter `{parameter}`: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },

    #[error("unknown element: {0}")]
    UnknownElement(String),

    #[error("config I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("config format error: {0}")]
    ConfigFormat(#[from] serde_json::Error),
}

impl AuraeonError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        AuraeonError::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuraeonError>;
