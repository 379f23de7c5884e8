//! Resource definitions module.
//!
//! Resources are instantiated per city from a fixed table: for every
//! entry in [`CITIES`], three URIs exist (`weather://`, `location://`,
//! `time://`). Each definition file builds the entry for one scheme.

use rmcp::model::{AnnotateAble, RawResource, Resource};

pub(super) mod location;
pub(super) mod time;
pub(super) mod weather;

pub use location::location_entry;
pub use time::time_entry;
pub use weather::weather_entry;

use super::service::{ResourceEntry, ResourceProducer};

/// A city the server publishes resources for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityInfo {
    /// URI key, e.g. "seoul" in `weather://seoul`.
    pub key: &'static str,
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    /// IANA zone used by the time resource.
    pub timezone: &'static str,
}

/// The fixed set of cities resources are bound to.
pub const CITIES: &[CityInfo] = &[
    CityInfo {
        key: "seoul",
        name: "Seoul",
        latitude: 37.5666791,
        longitude: 126.9782914,
        timezone: "Asia/Seoul",
    },
    CityInfo {
        key: "busan",
        name: "Busan",
        latitude: 35.1799528,
        longitude: 129.0752365,
        timezone: "Asia/Seoul",
    },
    CityInfo {
        key: "daegu",
        name: "Daegu",
        latitude: 35.8713,
        longitude: 128.6018,
        timezone: "Asia/Seoul",
    },
    CityInfo {
        key: "incheon",
        name: "Incheon",
        latitude: 37.456,
        longitude: 126.7052,
        timezone: "Asia/Seoul",
    },
    CityInfo {
        key: "gwangju",
        name: "Gwangju",
        latitude: 35.1594647,
        longitude: 126.8515034,
        timezone: "Asia/Seoul",
    },
    CityInfo {
        key: "daejeon",
        name: "Daejeon",
        latitude: 36.3322464,
        longitude: 127.4346482,
        timezone: "Asia/Seoul",
    },
];

/// Look up a city by its URI key.
pub fn city_by_key(key: &str) -> Option<&'static CityInfo> {
    CITIES.iter().find(|city| city.key == key)
}

/// Build the metadata + producer pair for one concrete URI.
pub(super) fn build_entry(
    uri: String,
    name: String,
    description: String,
    mime_type: &str,
    producer: ResourceProducer,
) -> ResourceEntry {
    let mut raw = RawResource::new(uri, name);
    raw.description = Some(description);
    raw.mime_type = Some(mime_type.to_string());

    ResourceEntry {
        resource: annotate(raw),
        producer,
    }
}

fn annotate(raw: RawResource) -> Resource {
    raw.no_annotation()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_lookup() {
        let seoul = city_by_key("seoul").unwrap();
        assert!((seoul.latitude - 37.5666791).abs() < 1e-9);
        assert!((seoul.longitude - 126.9782914).abs() < 1e-9);
        assert!(city_by_key("atlantis").is_none());
    }

    #[test]
    fn test_city_keys_unique() {
        for (i, a) in CITIES.iter().enumerate() {
            for b in &CITIES[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }
}
