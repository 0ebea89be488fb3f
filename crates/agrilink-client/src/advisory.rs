//! Advisory endpoints: crop recommendation and risk outlook.
//!
//! Both answer 400 with a hint message until the profile holds location
//! and soil details, which surfaces here as `ClientError::Api`.

use crate::api::{ApiClient, ApiRequest};
use agrilink_core::Result;
use agrilink_core::advisory::{Recommendation, RiskAssessment};

impl ApiClient {
    /// Asks the advisory engine for ranked crop suggestions.
    pub async fn crop_recommendation(&self) -> Result<Recommendation> {
        self.request_json(ApiRequest::get("/ai/recommendation"))
            .await
    }

    /// Asks the advisory engine for the seasonal risk outlook.
    pub async fn risk_prediction(&self) -> Result<RiskAssessment> {
        self.request_json(ApiRequest::get("/ai/risk")).await
    }
}
