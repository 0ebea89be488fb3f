//! Insight feeds: mandi prices and government schemes.

use crate::api::{ApiClient, ApiRequest};
use agrilink_core::Result;
use agrilink_core::insights::{MarketPrice, Scheme};
use serde::Deserialize;

#[derive(Deserialize)]
struct ItemsEnvelope<T> {
    items: Vec<T>,
}

impl ApiClient {
    /// Fetches the current mandi price quotes.
    pub async fn market_prices(&self) -> Result<Vec<MarketPrice>> {
        let envelope: ItemsEnvelope<MarketPrice> = self
            .request_json(ApiRequest::get("/insights/market-prices"))
            .await?;
        Ok(envelope.items)
    }

    /// Fetches the government scheme listing.
    pub async fn schemes(&self) -> Result<Vec<Scheme>> {
        let envelope: ItemsEnvelope<Scheme> = self
            .request_json(ApiRequest::get("/insights/schemes"))
            .await?;
        Ok(envelope.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_unwraps_the_items_list() {
        let envelope: ItemsEnvelope<Scheme> = serde_json::from_value(json!({
            "items": [{
                "title": "PM-KISAN",
                "eligibility": "All landholding farmer families",
                "benefits": "Rs 6000 per year in three installments",
                "how_to_apply": "Register at the nearest CSC",
                "official_link": "https://pmkisan.gov.in"
            }]
        }))
        .unwrap();

        assert_eq!(envelope.items.len(), 1);
        assert_eq!(envelope.items[0].title, "PM-KISAN");
    }

    #[test]
    fn test_envelope_accepts_empty_list() {
        let envelope: ItemsEnvelope<MarketPrice> =
            serde_json::from_value(json!({ "items": [] })).unwrap();

        assert!(envelope.items.is_empty());
    }
}
