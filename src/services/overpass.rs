// src/services/overpass.rs

//! Overpass API client.
//!
//! Issues the single fixed supplier query against the configured
//! interpreter endpoint and deserializes the JSON response. One shot:
//! no retry, no backoff, no pagination.

use std::time::Duration;

use crate::error::Result;
use crate::models::{HttpConfig, OverpassResponse};

/// Overpass QL query for supplier candidates in Bucharest.
///
/// The declared `[timeout:30]` matches the default HTTP timeout. The
/// name regex casts a wider net than the local keyword filter; the
/// classifier makes the final call on each element.
const SUPPLIER_QUERY: &str = r#"
[out:json][timeout:30];
area[name="București"]->.searchArea;
(
  // Search by shop type: wholesale, industrial supplies, leather
  node["shop"="wholesale"](area.searchArea);
  node["shop"="trade"](area.searchArea);
  node["shop"="industrial"](area.searchArea);

  // Search by craft type
  node["craft"="shoemaker"](area.searchArea);

  // Broad search by name for suppliers, warehouses, materials
  node["name"~"depozit|depozitare|material|materiale|brutărie|en-gros|angro|provizionare|piele|nelucrată|cizmărie", i](area.searchArea);
  way["name"~"depozit|depozitare|material|materiale|brutărie|en-gros|angro|provizionare|piele|nelucrată|cizmărie", i](area.searchArea);
);
out center;
"#;

/// Blocking client for the Overpass interpreter.
pub struct OverpassClient {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl OverpassClient {
    /// Create a configured client.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// The embedded Overpass QL query.
    pub fn query() -> &'static str {
        SUPPLIER_QUERY
    }

    /// POST the supplier query and parse the response.
    ///
    /// Any transport or payload failure surfaces as an error; the
    /// caller decides whether that is fatal.
    pub fn fetch(&self) -> Result<OverpassResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .form(&[("data", SUPPLIER_QUERY)])
            .send()?
            .error_for_status()?;

        let body = response.text()?;
        let parsed: OverpassResponse = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}
