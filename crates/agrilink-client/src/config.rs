//! Client configuration.
//!
//! The platform exposes two origins: the main API and the report
//! service. Both are read from the environment with loopback defaults
//! so local development works without any setup.

use std::env;

const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
const DEFAULT_REPORT_BASE: &str = "http://127.0.0.1:8001";

/// Environment variable overriding the platform API origin.
pub const API_BASE_ENV: &str = "AGRILINK_API_BASE";
/// Environment variable overriding the report service origin.
pub const REPORT_BASE_ENV: &str = "AGRILINK_REPORT_BASE";

/// Connection settings for the AgriLink services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the platform API, without a trailing slash.
    pub api_base: String,
    /// Origin of the report service, without a trailing slash.
    pub report_base: String,
}

impl ClientConfig {
    /// Creates a config from explicit origins.
    ///
    /// Trailing slashes are trimmed so request paths can always be
    /// appended verbatim.
    pub fn new(api_base: impl Into<String>, report_base: impl Into<String>) -> Self {
        Self {
            api_base: trim_base(api_base.into()),
            report_base: trim_base(report_base.into()),
        }
    }

    /// Reads the config from `AGRILINK_API_BASE` and
    /// `AGRILINK_REPORT_BASE`. Unset or blank variables fall back to
    /// the loopback defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base = lookup(API_BASE_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let report_base = lookup(REPORT_BASE_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REPORT_BASE.to_string());

        Self::new(api_base, report_base)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_REPORT_BASE)
    }
}

fn trim_base(base: String) -> String {
    base.trim_end_matches('/').to_string()
}
