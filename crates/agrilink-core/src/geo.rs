//! Geolocation capability port.
//!
//! Positioning is an embedder capability, not something this library can
//! provide itself. Hosts with a real source (GPS, OS location service)
//! implement the trait; everything else uses the default provider so the
//! gap surfaces as a typed error before any request is attempted.

use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};

/// A device position fix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

/// Source of device positions.
#[async_trait::async_trait]
pub trait LocationProvider: Send + Sync {
    /// Returns the current position.
    ///
    /// # Returns
    ///
    /// - `Ok(GeoPosition)`: a position fix
    /// - `Err(ClientError::CapabilityUnavailable)`: this host cannot
    ///   provide positions
    async fn current_position(&self) -> Result<GeoPosition>;
}

/// Default provider for hosts without positioning support.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedLocationProvider;

#[async_trait::async_trait]
impl LocationProvider for UnsupportedLocationProvider {
    async fn current_position(&self) -> Result<GeoPosition> {
        Err(ClientError::capability("geolocation"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unsupported_provider_reports_missing_capability() {
        let provider = UnsupportedLocationProvider;
        let err = provider.current_position().await.unwrap_err();
        assert!(matches!(err, ClientError::CapabilityUnavailable { .. }));
    }
}
