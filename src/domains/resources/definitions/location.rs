//! Per-city location resource.
//!
//! Serves the city's reference coordinates as pretty-printed JSON.

use serde::Serialize;

use super::{CityInfo, build_entry};
use crate::domains::resources::service::{ResourceEntry, ResourceProducer};

#[derive(Debug, Serialize)]
struct LocationDocument<'a> {
    city: &'a str,
    latitude: f64,
    longitude: f64,
    coordinates: String,
}

/// Build the `location://<city>` entry.
pub fn location_entry(city: &'static CityInfo) -> ResourceEntry {
    build_entry(
        format!("location://{}", city.key),
        format!("location-{}", city.key),
        format!("Geographic coordinates for {}", city.name),
        "application/json",
        ResourceProducer::CityLocation(city),
    )
}

/// Render the JSON document for one city.
pub fn produce(city: &CityInfo) -> String {
    let document = LocationDocument {
        city: city.name,
        latitude: city.latitude,
        longitude: city.longitude,
        coordinates: format!("({}, {})", city.latitude, city.longitude),
    };

    // Serialization of this struct cannot fail.
    serde_json::to_string_pretty(&document).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::resources::definitions::city_by_key;

    #[test]
    fn test_entry_metadata() {
        let entry = location_entry(city_by_key("incheon").unwrap());
        assert_eq!(entry.resource.raw.uri, "location://incheon");
        assert_eq!(
            entry.resource.raw.mime_type.as_deref(),
            Some("application/json")
        );
    }

    #[test]
    fn test_document_contents() {
        let text = produce(city_by_key("seoul").unwrap());
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed["city"], "Seoul");
        assert!((parsed["latitude"].as_f64().unwrap() - 37.5666791).abs() < 1e-9);
        assert!((parsed["longitude"].as_f64().unwrap() - 126.9782914).abs() < 1e-9);
        assert_eq!(parsed["coordinates"], "(37.5666791, 126.9782914)");
    }
}
