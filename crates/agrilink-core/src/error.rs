//! Error types for the AgriLink client stack.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A shared error type for every operation the client crates expose.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum ClientError {
    /// The request never produced a server response (DNS failure, refused
    /// connection, dropped socket). There is no status code to report.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The server answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        /// Decoded response body, kept so callers can inspect more than
        /// the normalized message.
        body: Value,
    },

    /// A response body did not match the expected typed shape.
    #[error("Decode error: {message}")]
    Decode { message: String },

    /// The local session record could not be written or cleared.
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// A runtime capability this host does not provide.
    #[error("Capability unavailable: {capability}")]
    CapabilityUnavailable { capability: String },

    /// The caller's cancellation handle fired before the result was
    /// committed.
    #[error("Operation cancelled")]
    Cancelled,
}

impl ClientError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates an Api error
    pub fn api(status: u16, message: impl Into<String>, body: Value) -> Self {
        Self::Api {
            status,
            message: message.into(),
            body,
        }
    }

    /// Creates a Decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Creates a CapabilityUnavailable error
    pub fn capability(capability: impl Into<String>) -> Self {
        Self::CapabilityUnavailable {
            capability: capability.into(),
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Network error
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// Check if this is an Api error
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Check if this is a Cancelled error
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Check if this error is a 401 response.
    ///
    /// Hosts use this to drop the stored session and send the user back
    /// to the login screen.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }

    /// Returns the HTTP status for Api errors, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode {
            message: err.to_string(),
        }
    }
}

/// Session store operations report through `anyhow`.
impl From<anyhow::Error> for ClientError {
    fn from(err: anyhow::Error) -> Self {
        Self::Storage {
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
