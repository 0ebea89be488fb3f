pub mod advisory;
pub mod auth;
pub mod cancel;
pub mod chat;
pub mod error;
pub mod geo;
pub mod insights;
pub mod profile;
pub mod session;

// Re-export common error type
pub use error::{ClientError, Result};
