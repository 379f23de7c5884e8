//! Resource service implementation.
//!
//! The ResourceService owns the resource registry and handles listing
//! and read requests. Each entry pairs its protocol metadata with a
//! [`ResourceProducer`] that knows how to materialize the content at
//! read time; adding a new resource does NOT require modifying this
//! file.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use tracing::info;

use super::definitions::{CityInfo, location, time, weather};
use super::error::ResourceError;
use super::registry::ResourceRegistry;

/// Service for managing and accessing resources.
pub struct ResourceService {
    registry: ResourceRegistry,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content producer for this resource.
    pub producer: ResourceProducer,
}

/// How a resource's content is materialized at read time.
#[derive(Debug, Clone, Copy)]
pub enum ResourceProducer {
    /// Live weather report for a city, fetched from upstream.
    CityWeather(&'static CityInfo),

    /// Static coordinate document for a city.
    CityLocation(&'static CityInfo),

    /// Current wall-clock time in a city's zone.
    CityTime(&'static CityInfo),
}

impl ResourceService {
    /// Create a service with the full per-city catalog.
    pub fn new() -> Result<Self, ResourceError> {
        info!("Initializing ResourceService");
        let registry = ResourceRegistry::with_default_entries()?;
        Ok(Self { registry })
    }

    /// List all available resources, in registration order.
    pub fn list_resources(&self) -> Vec<Resource> {
        self.registry
            .entries()
            .iter()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    ///
    /// Upstream failures for live resources are rendered into the text
    /// body rather than failing the read; only an unknown URI is an
    /// error.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .registry
            .lookup(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        info!("Reading resource: {}", uri);
        let text = Self::produce(entry.producer).await?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: entry.resource.raw.mime_type.clone(),
                text,
                meta: None,
            }],
        })
    }

    async fn produce(producer: ResourceProducer) -> Result<String, ResourceError> {
        match producer {
            ResourceProducer::CityWeather(city) => {
                tokio::task::spawn_blocking(move || weather::produce(city))
                    .await
                    .map_err(|e| ResourceError::internal(e.to_string()))
            }
            ResourceProducer::CityLocation(city) => Ok(location::produce(city)),
            ResourceProducer::CityTime(city) => Ok(time::produce(city)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::resources::definitions::CITIES;

    #[tokio::test]
    async fn test_catalog_lists_all_cities() {
        let service = ResourceService::new().unwrap();
        let resources = service.list_resources();

        assert_eq!(resources.len(), CITIES.len() * 3);
        assert!(
            resources
                .iter()
                .any(|r| r.raw.uri == "location://gwangju")
        );
    }

    #[tokio::test]
    async fn test_read_location_resource() {
        let service = ResourceService::new().unwrap();
        let result = service.read_resource("location://seoul").await.unwrap();

        let ResourceContents::TextResourceContents {
            uri,
            mime_type,
            text,
            ..
        } = &result.contents[0]
        else {
            panic!("expected text contents");
        };
        assert_eq!(uri, "location://seoul");
        assert_eq!(mime_type.as_deref(), Some("application/json"));
        assert!(text.contains("37.5666791"));
        assert!(text.contains("126.9782914"));
    }

    #[tokio::test]
    async fn test_read_time_resource() {
        let service = ResourceService::new().unwrap();
        let result = service.read_resource("time://busan").await.unwrap();

        let ResourceContents::TextResourceContents { text, .. } = &result.contents[0] else {
            panic!("expected text contents");
        };
        assert!(text.starts_with("Current time in Busan (Asia/Seoul):"));
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = ResourceService::new().unwrap();
        let result = service.read_resource("weather://atlantis").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
