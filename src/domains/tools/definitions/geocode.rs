//! Geocoding tool.
//!
//! One Nominatim lookup per call. An empty candidate list is a normal
//! "not found" answer; only transport and payload problems become error
//! envelopes.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject};
use serde::Deserialize;
use tracing::error;

use super::common::{error_result, mirrored_result, parse_params, text_content_output_schema};
use super::ToolDefinition;
use crate::core::schema::FieldSpec;
use crate::upstream::nominatim::{self, GeocodeHit};

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeParams {
    pub query: String,
}

/// Geocoding tool implementation, backed by Nominatim (OpenStreetMap).
#[derive(Debug, Clone, Default)]
pub struct GeocodeTool;

impl GeocodeTool {
    pub const NAME: &'static str = "geocode";

    pub const DESCRIPTION: &'static str =
        "Resolves a city name or address to latitude/longitude coordinates \
         using the Nominatim OpenStreetMap API.";

    pub fn new() -> Self {
        Self
    }

    /// Run the lookup and convert the outcome into an envelope. Blocking.
    pub fn execute(params: &GeocodeParams) -> CallToolResult {
        match nominatim::search(&params.query) {
            Ok(hits) => Self::render_hits(&params.query, &hits),
            Err(e) => {
                error!("Geocoding failed: {}", e);
                error_result(&format!(
                    "Geocoding request failed: {}\n\
                     Check your network connection and try again later.",
                    e
                ))
            }
        }
    }

    /// Render the candidate list. An empty list is a normal "not found"
    /// answer, not a failure.
    fn render_hits(query: &str, hits: &[GeocodeHit]) -> CallToolResult {
        match hits.first() {
            Some(hit) => Self::render_hit(query, hit),
            None => mirrored_result(format!(
                "No results found for \"{}\". Try a different search term.",
                query
            )),
        }
    }

    fn render_hit(query: &str, hit: &GeocodeHit) -> CallToolResult {
        let (lat, lon) = match hit.coordinates() {
            Ok(coords) => coords,
            Err(e) => {
                error!("Geocoding payload malformed: {}", e);
                return error_result(&format!("Geocoding request failed: {}", e));
            }
        };

        let display_name = hit.display_name.as_deref().unwrap_or(query);
        let address_line = hit
            .address
            .as_ref()
            .and_then(|a| a.summary())
            .map(|summary| format!("\nAddress: {}", summary))
            .unwrap_or_default();

        mirrored_result(format!(
            "Location: {}{}\nLatitude: {}\nLongitude: {}\nCoordinates: ({}, {})",
            display_name, address_line, lat, lon, lat, lon
        ))
    }
}

#[async_trait]
impl ToolDefinition for GeocodeTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn input_schema(&self) -> Vec<FieldSpec> {
        vec![FieldSpec::string(
            "query",
            "City name or address (e.g. Seoul, Paris, 1600 Amphitheatre Parkway)",
        )]
    }

    fn output_schema(&self) -> Option<JsonObject> {
        Some(text_content_output_schema("Latitude/longitude information"))
    }

    async fn call(&self, arguments: JsonObject) -> CallToolResult {
        let params: GeocodeParams = match parse_params(arguments) {
            Ok(params) => params,
            Err(result) => return result,
        };

        // Nominatim is reached with a blocking client; keep it off the
        // async worker threads.
        tokio::task::spawn_blocking(move || GeocodeTool::execute(&params))
            .await
            .unwrap_or_else(|e| error_result(&format!("Geocoding task failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::test_support::first_text;
    use super::*;
    use crate::upstream::nominatim::AddressDetails;

    fn sample_hit() -> GeocodeHit {
        GeocodeHit {
            lat: "37.5666791".to_string(),
            lon: "126.9782914".to_string(),
            display_name: Some("Seoul, South Korea".to_string()),
            address: Some(AddressDetails {
                house_number: None,
                road: None,
                city: Some("Seoul".to_string()),
                state: None,
                country: Some("South Korea".to_string()),
            }),
        }
    }

    #[test]
    fn test_render_hit_includes_coordinates_and_address() {
        let result = GeocodeTool::render_hit("Seoul", &sample_hit());
        let text = first_text(&result);
        assert!(text.contains("Location: Seoul, South Korea"));
        assert!(text.contains("Address: Seoul, South Korea"));
        assert!(text.contains("Latitude: 37.5666791"));
        assert!(text.contains("Coordinates: (37.5666791, 126.9782914)"));
    }

    #[test]
    fn test_render_hit_omits_absent_address() {
        let mut hit = sample_hit();
        hit.address = None;
        let result = GeocodeTool::render_hit("Seoul", &hit);
        assert!(!first_text(&result).contains("Address:"));
    }

    #[test]
    fn test_render_hit_malformed_coordinates_is_error() {
        let mut hit = sample_hit();
        hit.lat = "not-a-number".to_string();
        let result = GeocodeTool::render_hit("Seoul", &hit);
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn test_empty_hit_list_is_not_found_success() {
        let result = GeocodeTool::render_hits("Atlantis", &[]);
        assert_ne!(result.is_error, Some(true));

        // "No match" must read differently from a failed request and
        // stay an unflagged envelope.
        let text = first_text(&result);
        assert!(text.contains("No results found for \"Atlantis\""));
        assert!(!text.contains("request failed"));
    }

    #[test]
    fn test_nonempty_hit_list_renders_first_candidate() {
        let result = GeocodeTool::render_hits("Seoul", &[sample_hit()]);
        assert_ne!(result.is_error, Some(true));
        assert!(first_text(&result).contains("Latitude: 37.5666791"));
    }

    // Network test (run with: cargo test -- --ignored)
    #[ignore]
    #[test]
    fn test_execute_no_match_is_not_found_text() {
        let result = GeocodeTool::execute(&GeocodeParams {
            query: "zzzzzzzz-no-such-place-zzzzzzzz".to_string(),
        });
        assert_ne!(result.is_error, Some(true));
        assert!(first_text(&result).contains("No results found"));
    }
}
