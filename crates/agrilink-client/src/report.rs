//! Report download flow.
//!
//! The report service is a separate origin from the platform API. A
//! download is staged in a scoped temp file inside the destination
//! directory and promoted to the fixed report name only once the whole
//! body has arrived, so a failed transfer never leaves a partial report
//! behind.

use crate::config::ClientConfig;
use agrilink_core::session::SessionStore;
use agrilink_core::{ClientError, Result};
use agrilink_infrastructure::AgrilinkPaths;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;

/// Fixed file name generated reports are saved under. A fresh download
/// replaces the previous one.
pub const REPORT_FILE_NAME: &str = "agrilink_ai_report.html";

/// HTTP client for the report service.
#[derive(Clone)]
pub struct ReportClient {
    client: Client,
    config: ClientConfig,
    store: Arc<dyn SessionStore>,
}

impl ReportClient {
    /// Creates a client over the given config and session store.
    pub fn new(config: ClientConfig, store: Arc<dyn SessionStore>) -> Self {
        Self {
            client: Client::new(),
            config,
            store,
        }
    }

    /// Downloads the generated report into `dest_dir` and returns the
    /// final path.
    ///
    /// The bearer token rides along whenever a session exists; the
    /// report service decides for itself whether it wants one.
    pub async fn download_report(&self, dest_dir: &Path) -> Result<PathBuf> {
        let url = format!("{}/report/download", self.config.report_base);

        let mut request = self.client.get(&url);
        if let Some(token) = self.store.current_token() {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::network(format!("Report download failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::debug!("[Report] download rejected with {}", status.as_u16());
            return Err(map_download_error(status, &text));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::network(format!("Report download interrupted: {}", e)))?;

        write_report(dest_dir, &bytes)
    }

    /// Downloads the report into the platform downloads directory.
    ///
    /// Fails with `CapabilityUnavailable` before touching the network
    /// when the host has no usable downloads location.
    pub async fn download_report_to_default(&self) -> Result<PathBuf> {
        let dir = AgrilinkPaths::downloads_dir()
            .map_err(|_| ClientError::capability("download directory"))?;
        fs::create_dir_all(&dir).map_err(|e| {
            ClientError::storage(format!("Cannot prepare {}: {}", dir.display(), e))
        })?;

        self.download_report(&dir).await
    }
}

// ============================================================
// Download helpers
// ============================================================

/// Stages the report bytes next to their final location, then promotes
/// them to the fixed report name. The temp handle is consumed on success
/// and dropped on any failure, deleting the partial file with it.
fn write_report(dest_dir: &Path, bytes: &[u8]) -> Result<PathBuf> {
    let mut staged = NamedTempFile::new_in(dest_dir).map_err(|e| {
        ClientError::storage(format!("Cannot stage report in {}: {}", dest_dir.display(), e))
    })?;
    staged
        .write_all(bytes)
        .map_err(|e| ClientError::storage(format!("Cannot write report: {}", e)))?;

    let final_path = dest_dir.join(REPORT_FILE_NAME);
    staged
        .persist(&final_path)
        .map_err(|e| ClientError::storage(format!("Cannot save report: {}", e)))?;

    Ok(final_path)
}

/// Normalizes a rejected download.
///
/// Only a well-formed JSON body with a non-empty string `detail`
/// contributes a message; anything else falls back to a generic one
/// with the status code.
fn map_download_error(status: StatusCode, body: &str) -> ClientError {
    let decoded = serde_json::from_str::<Value>(body).unwrap_or(Value::Null);
    let message = match decoded.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
        _ => format!("Download failed ({})", status.as_u16()),
    };

    ClientError::api(status.as_u16(), message, decoded)
}
