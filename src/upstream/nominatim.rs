//! Nominatim (OpenStreetMap) geocoding client.
//!
//! One GET per call, at most one candidate requested. Nominatim rejects
//! requests without a User-Agent, so one is always set.

use serde::Deserialize;
use tracing::info;

use super::{USER_AGENT, UpstreamError};

const SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";

/// One geocoding candidate. Nominatim returns coordinates as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeHit {
    pub lat: String,
    pub lon: String,
    pub display_name: Option<String>,
    pub address: Option<AddressDetails>,
}

/// Optional address components of a candidate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressDetails {
    pub house_number: Option<String>,
    pub road: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl GeocodeHit {
    /// Parse the string coordinates into (latitude, longitude).
    pub fn coordinates(&self) -> Result<(f64, f64), UpstreamError> {
        let lat = self
            .lat
            .parse::<f64>()
            .map_err(|_| UpstreamError::malformed(format!("unparseable latitude: {}", self.lat)))?;
        let lon = self
            .lon
            .parse::<f64>()
            .map_err(|_| UpstreamError::malformed(format!("unparseable longitude: {}", self.lon)))?;
        Ok((lat, lon))
    }
}

impl AddressDetails {
    /// Compose a single address line from the sub-fields that are
    /// present, joined with ", ". Returns None when all are absent.
    pub fn summary(&self) -> Option<String> {
        let parts: Vec<&str> = [
            self.house_number.as_deref(),
            self.road.as_deref(),
            self.city.as_deref(),
            self.state.as_deref(),
            self.country.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// Search for `query`, requesting at most one match. Blocking.
///
/// An empty vector is a valid answer ("no match"), distinct from the
/// error cases.
pub fn search(query: &str) -> Result<Vec<GeocodeHit>, UpstreamError> {
    info!("Geocoding query: {}", query);

    let client = reqwest::blocking::Client::new();
    let response = client
        .get(SEARCH_URL)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .query(&[
            ("q", query),
            ("format", "json"),
            ("limit", "1"),
            ("addressdetails", "1"),
        ])
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamError::Status {
            status: status.as_u16(),
            detail: status.canonical_reason().unwrap_or("request failed").to_string(),
        });
    }

    let hits: Vec<GeocodeHit> = response.json()?;
    Ok(hits)
}
