//! Error types for the Arbor storefront.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the whole workspace.
///
/// Malformed payloads are deliberately absent from this taxonomy: the
/// normalizer degrades to empty or absent values instead of failing.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArborError {
    /// A request did not complete, or completed with a non-2xx status.
    ///
    /// `status` is `None` when no HTTP response was received at all.
    #[error("{}", transport_message(.status, .url, .message))]
    Transport {
        status: Option<u16>,
        url: String,
        message: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

fn transport_message(status: &Option<u16>, url: &str, message: &str) -> String {
    match status {
        Some(code) => format!("HTTP {} for {}", code, url),
        None => format!("Request to {} failed: {}", url, message),
    }
}

impl ArborError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Transport error for a response with a non-success status.
    pub fn http_status(status: u16, url: impl Into<String>) -> Self {
        Self::Transport {
            status: Some(status),
            url: url.into(),
            message: String::new(),
        }
    }

    /// Creates a Transport error for a request that never produced a usable response.
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            status: None,
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Returns the HTTP status carried by a Transport error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for ArborError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for ArborError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ArborError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, ArborError>`.
pub type Result<T> = std::result::Result<T, ArborError>;
