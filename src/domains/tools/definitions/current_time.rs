//! Current-time lookup tool.
//!
//! Resolves a city or country name (Korean or English) to an IANA zone
//! through a static table; anything unmapped is treated as a zone
//! identifier verbatim, so canonical zone strings round-trip unchanged.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use rmcp::model::{CallToolResult, JsonObject};
use serde::Deserialize;

use super::common::{error_result, mirrored_result, parse_params, text_content_output_schema};
use super::ToolDefinition;
use crate::core::schema::FieldSpec;

/// City and country names (Korean and English) to IANA zones.
const LOCATION_ZONES: &[(&str, &str)] = &[
    // Major cities
    ("서울", "Asia/Seoul"),
    ("Seoul", "Asia/Seoul"),
    ("도쿄", "Asia/Tokyo"),
    ("Tokyo", "Asia/Tokyo"),
    ("베이징", "Asia/Shanghai"),
    ("Beijing", "Asia/Shanghai"),
    ("상하이", "Asia/Shanghai"),
    ("Shanghai", "Asia/Shanghai"),
    ("뉴욕", "America/New_York"),
    ("New York", "America/New_York"),
    ("로스앤젤레스", "America/Los_Angeles"),
    ("Los Angeles", "America/Los_Angeles"),
    ("LA", "America/Los_Angeles"),
    ("런던", "Europe/London"),
    ("London", "Europe/London"),
    ("파리", "Europe/Paris"),
    ("Paris", "Europe/Paris"),
    ("베를린", "Europe/Berlin"),
    ("Berlin", "Europe/Berlin"),
    ("모스크바", "Europe/Moscow"),
    ("Moscow", "Europe/Moscow"),
    ("시드니", "Australia/Sydney"),
    ("Sydney", "Australia/Sydney"),
    ("뭄바이", "Asia/Kolkata"),
    ("Mumbai", "Asia/Kolkata"),
    ("델리", "Asia/Kolkata"),
    ("Delhi", "Asia/Kolkata"),
    ("싱가포르", "Asia/Singapore"),
    ("Singapore", "Asia/Singapore"),
    ("방콕", "Asia/Bangkok"),
    ("Bangkok", "Asia/Bangkok"),
    ("두바이", "Asia/Dubai"),
    ("Dubai", "Asia/Dubai"),
    // Countries
    ("한국", "Asia/Seoul"),
    ("Korea", "Asia/Seoul"),
    ("South Korea", "Asia/Seoul"),
    ("일본", "Asia/Tokyo"),
    ("Japan", "Asia/Tokyo"),
    ("중국", "Asia/Shanghai"),
    ("China", "Asia/Shanghai"),
    ("미국", "America/New_York"),
    ("USA", "America/New_York"),
    ("United States", "America/New_York"),
    ("영국", "Europe/London"),
    ("UK", "Europe/London"),
    ("United Kingdom", "Europe/London"),
    ("프랑스", "Europe/Paris"),
    ("France", "Europe/Paris"),
    ("독일", "Europe/Berlin"),
    ("Germany", "Europe/Berlin"),
    ("러시아", "Europe/Moscow"),
    ("Russia", "Europe/Moscow"),
    ("호주", "Australia/Sydney"),
    ("Australia", "Australia/Sydney"),
    ("인도", "Asia/Kolkata"),
    ("India", "Asia/Kolkata"),
    ("태국", "Asia/Bangkok"),
    ("Thailand", "Asia/Bangkok"),
    ("UAE", "Asia/Dubai"),
    ("United Arab Emirates", "Asia/Dubai"),
];

/// Resolve a location name to a zone identifier.
///
/// Exact match first, then ASCII-case-insensitive; an unmapped input is
/// returned verbatim so valid IANA identifiers pass straight through.
pub fn resolve_timezone(location: &str) -> &str {
    let trimmed = location.trim();

    for (name, zone) in LOCATION_ZONES {
        if *name == trimmed {
            return zone;
        }
    }
    for (name, zone) in LOCATION_ZONES {
        if name.eq_ignore_ascii_case(trimmed) {
            return zone;
        }
    }
    trimmed
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentTimeParams {
    pub location: String,
}

/// Current-time lookup tool implementation.
#[derive(Debug, Clone, Default)]
pub struct CurrentTimeTool;

impl CurrentTimeTool {
    pub const NAME: &'static str = "get_current_time";

    pub const DESCRIPTION: &'static str =
        "Returns the current time for a city, country, or IANA timezone \
         (e.g. Seoul, 서울, Korea, Asia/Seoul).";

    pub fn new() -> Self {
        Self
    }

    /// Render the current time for `location` at instant `now`.
    ///
    /// Err carries the handled message for an unusable zone identifier.
    pub fn render(location: &str, now: DateTime<Utc>) -> Result<String, String> {
        let zone_name = resolve_timezone(location);
        let zone: Tz = zone_name.parse().map_err(|_| {
            format!(
                "Could not resolve '{}' to a timezone.\n\
                 Provide a known city or country name, or an IANA zone identifier \
                 such as Asia/Seoul.",
                location
            )
        })?;

        let local = now.with_timezone(&zone);
        let long_form = local.format("%A, %B %-d, %Y %H:%M:%S");
        let iso_form = local.format("%Y-%m-%d %H:%M:%S");

        Ok(format!(
            "Current time in {} ({}):\n{}\n({})",
            location, zone_name, long_form, iso_form
        ))
    }
}

#[async_trait]
impl ToolDefinition for CurrentTimeTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn input_schema(&self) -> Vec<FieldSpec> {
        vec![FieldSpec::string(
            "location",
            "City, country, or IANA timezone name (e.g. Seoul, 서울, Korea, Asia/Seoul)",
        )]
    }

    fn output_schema(&self) -> Option<JsonObject> {
        Some(text_content_output_schema("The current time"))
    }

    async fn call(&self, arguments: JsonObject) -> CallToolResult {
        let params: CurrentTimeParams = match parse_params(arguments) {
            Ok(params) => params,
            Err(result) => return result,
        };

        match Self::render(&params.location, Utc::now()) {
            Ok(text) => mirrored_result(text),
            Err(message) => error_result(&message),
        }
    }
}
