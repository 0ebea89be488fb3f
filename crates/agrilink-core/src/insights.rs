//! Market price and government scheme insight models.

use serde::{Deserialize, Serialize};

/// Direction a commodity price is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Up,
    Down,
    Flat,
}

/// One mandi price quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketPrice {
    pub commodity: String,
    pub market: String,
    pub price_inr_per_quintal: f64,
    pub trend: PriceTrend,
    /// ISO 8601 timestamp, passed through as the server sent it.
    pub updated_at: String,
}

/// A government support scheme listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scheme {
    pub title: String,
    pub eligibility: String,
    pub benefits: String,
    pub how_to_apply: String,
    pub official_link: Option<String>,
}
