//! Farm profile endpoints and the completeness read-model.

use crate::api::{ApiClient, ApiRequest};
use agrilink_core::Result;
use agrilink_core::profile::{FarmProfile, LocationUpdate, SoilFarmUpdate, completeness};
use serde::Deserialize;

#[derive(Deserialize)]
struct ProfileEnvelope {
    profile: Option<FarmProfile>,
}

impl ApiClient {
    /// Fetches the stored farm profile.
    ///
    /// `None` until the user has saved anything. Advisory endpoints stay
    /// unavailable until both location and soil details are present.
    pub async fn fetch_profile(&self) -> Result<Option<FarmProfile>> {
        let envelope: ProfileEnvelope = self.request_json(ApiRequest::get("/profile")).await?;
        Ok(envelope.profile)
    }

    /// Saves the farm coordinates.
    pub async fn save_location(&self, update: &LocationUpdate) -> Result<()> {
        self.request(ApiRequest::post("/profile/location").json(update)?)
            .await?;
        Ok(())
    }

    /// Saves soil and farm details. The platform replaces the whole
    /// soil/farm section with this payload.
    pub async fn save_soil_farm(&self, update: &SoilFarmUpdate) -> Result<()> {
        self.request(ApiRequest::post("/profile/soil-farm").json(update)?)
            .await?;
        Ok(())
    }

    /// Fetches the profile and scores how complete it is, 0 to 100.
    ///
    /// The score is derived fresh on every call, never cached.
    pub async fn profile_completeness(&self) -> Result<u8> {
        let profile = self.fetch_profile().await?;
        Ok(completeness(profile.as_ref()))
    }
}
