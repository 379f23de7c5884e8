//! Resource registry.
//!
//! Holds the resource catalog in registration order with an index for
//! URI lookup. Registering two entries under the same URI is a
//! conflict and rejected, so a misconfigured catalog fails at startup
//! instead of shadowing an entry silently.

use std::collections::HashMap;

use tracing::info;

use super::definitions::{CITIES, location_entry, time_entry, weather_entry};
use super::error::ResourceError;
use super::service::ResourceEntry;

#[derive(Default)]
pub struct ResourceRegistry {
    entries: Vec<ResourceEntry>,
    index: HashMap<String, usize>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry with all per-city entries, grouped by scheme.
    pub fn with_default_entries() -> Result<Self, ResourceError> {
        let mut registry = Self::new();

        for city in CITIES {
            registry.register(weather_entry(city))?;
        }
        for city in CITIES {
            registry.register(location_entry(city))?;
        }
        for city in CITIES {
            registry.register(time_entry(city))?;
        }

        Ok(registry)
    }

    /// Register one entry. Duplicate URIs are a conflict.
    pub fn register(&mut self, entry: ResourceEntry) -> Result<(), ResourceError> {
        let uri = entry.resource.raw.uri.clone();
        if self.index.contains_key(&uri) {
            return Err(ResourceError::conflict(uri));
        }

        info!("Registering resource: {}", uri);
        self.index.insert(uri, self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    pub fn lookup(&self, uri: &str) -> Option<&ResourceEntry> {
        self.index.get(uri).map(|&i| &self.entries[i])
    }

    /// All entries in registration order.
    pub fn entries(&self) -> &[ResourceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::resources::definitions::city_by_key;

    #[test]
    fn test_default_catalog() {
        let registry = ResourceRegistry::with_default_entries().unwrap();
        assert_eq!(registry.len(), CITIES.len() * 3);

        for city in CITIES {
            for scheme in ["weather", "location", "time"] {
                let uri = format!("{}://{}", scheme, city.key);
                assert!(registry.lookup(&uri).is_some(), "missing {}", uri);
            }
        }
    }

    #[test]
    fn test_listing_preserves_registration_order() {
        let registry = ResourceRegistry::with_default_entries().unwrap();
        let uris: Vec<_> = registry
            .entries()
            .iter()
            .map(|e| e.resource.raw.uri.as_str())
            .collect();

        assert_eq!(uris[0], "weather://seoul");
        assert_eq!(uris[CITIES.len()], "location://seoul");
        assert_eq!(uris[CITIES.len() * 2], "time://seoul");
    }

    #[test]
    fn test_duplicate_uri_rejected() {
        let mut registry = ResourceRegistry::new();
        let seoul = city_by_key("seoul").unwrap();

        registry.register(time_entry(seoul)).unwrap();
        let conflict = registry.register(time_entry(seoul));
        assert!(matches!(conflict, Err(ResourceError::Conflict(_))));
    }
}
