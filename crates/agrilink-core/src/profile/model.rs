//! Farm profile models.

use serde::{Deserialize, Serialize};

/// Server-owned snapshot of a farm profile.
///
/// Every field is optional; the record fills in as the user submits
/// details. Bookkeeping columns the server includes in the raw row
/// (ids, update timestamps) are ignored on decode.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FarmProfile {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub location_name: Option<String>,
    pub soil_type: Option<String>,
    pub ph: Option<f64>,
    pub nitrogen: Option<f64>,
    pub phosphorus: Option<f64>,
    pub potassium: Option<f64>,
    pub farm_size_acres: Option<f64>,
    pub irrigation_type: Option<String>,
    pub season: Option<String>,
}

/// Coordinates submitted to the location endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationUpdate {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
}

/// Growing season vocabulary the profile endpoints accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Kharif,
    Rabi,
    Zaid,
    All,
}

/// Soil and farm details submitted to the profile endpoint.
///
/// The endpoint replaces the whole soil/farm section of the record, so
/// senders must include every field they want kept.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SoilFarmUpdate {
    pub soil_type: Option<String>,
    pub ph: Option<f64>,
    pub nitrogen: Option<f64>,
    pub phosphorus: Option<f64>,
    pub potassium: Option<f64>,
    pub farm_size_acres: Option<f64>,
    pub irrigation_type: Option<String>,
    pub season: Option<Season>,
}
