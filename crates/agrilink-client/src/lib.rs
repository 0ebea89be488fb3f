pub mod api;
pub mod config;
pub mod report;

mod advisory;
mod auth;
mod chat;
mod insights;
mod profile;

// Re-export the entry points
pub use api::{ApiClient, ApiRequest};
pub use config::ClientConfig;
pub use report::{REPORT_FILE_NAME, ReportClient};
