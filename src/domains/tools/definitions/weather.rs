//! Weather forecast tool.
//!
//! One Open-Meteo request per call: current conditions plus hourly and
//! daily series, rendered with the shared helpers in
//! `upstream::open_meteo`.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject};
use serde::Deserialize;
use tracing::error;

use super::common::{error_result, mirrored_result, parse_params, text_content_output_schema};
use super::ToolDefinition;
use crate::core::schema::FieldSpec;
use crate::upstream::open_meteo::{self, ForecastResponse};

const DEFAULT_FORECAST_DAYS: u32 = 7;
const MAX_FORECAST_DAYS: f64 = 16.0;

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherParams {
    pub latitude: f64,
    pub longitude: f64,
    pub forecast_days: u32,
}

/// Weather forecast tool implementation, backed by Open-Meteo.
#[derive(Debug, Clone, Default)]
pub struct WeatherTool;

impl WeatherTool {
    pub const NAME: &'static str = "get_weather";

    pub const DESCRIPTION: &'static str =
        "Returns current conditions and an hourly/daily forecast for a coordinate \
         pair using the Open-Meteo API.";

    pub fn new() -> Self {
        Self
    }

    /// Fetch and render the forecast. Blocking.
    pub fn execute(params: &WeatherParams) -> CallToolResult {
        match open_meteo::fetch_forecast(params.latitude, params.longitude, params.forecast_days) {
            Ok(forecast) => mirrored_result(Self::render(
                &forecast,
                params.latitude,
                params.longitude,
                params.forecast_days as usize,
            )),
            Err(e) => {
                error!("Weather fetch failed: {}", e);
                error_result(&format!(
                    "Failed to fetch weather data: {}\n\
                     Check your network connection and try again later.",
                    e
                ))
            }
        }
    }

    /// Render the full report: header, current conditions, daily and
    /// hourly sections. Every upstream field is optional.
    pub fn render(
        forecast: &ForecastResponse,
        latitude: f64,
        longitude: f64,
        forecast_days: usize,
    ) -> String {
        let mut text = format!("📍 Location: latitude {}, longitude {}\n", latitude, longitude);
        text.push_str(&format!(
            "⏰ Timezone: {}\n",
            forecast.timezone.as_deref().unwrap_or("auto")
        ));
        match forecast.elevation {
            Some(elevation) => text.push_str(&format!("📊 Elevation: {:.1}m\n\n", elevation)),
            None => text.push_str("📊 Elevation: N/A\n\n"),
        }

        if let Some(current) = &forecast.current_weather {
            text.push_str(&open_meteo::render_current(current));
            text.push('\n');
        }

        if let Some(daily) = &forecast.daily {
            text.push_str(&open_meteo::render_daily(daily, forecast_days));
            text.push('\n');
        }

        if let Some(hourly) = &forecast.hourly {
            text.push('\n');
            text.push_str(&open_meteo::render_hourly(hourly));
        }

        text
    }
}

#[async_trait]
impl ToolDefinition for WeatherTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn input_schema(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::number("latitude", "Latitude (WGS84)"),
            FieldSpec::number("longitude", "Longitude (WGS84)"),
            FieldSpec::integer("forecast_days", "Forecast length in days (1-16, default: 7)")
                .range(1.0, MAX_FORECAST_DAYS)
                .with_default(serde_json::json!(DEFAULT_FORECAST_DAYS)),
        ]
    }

    fn output_schema(&self) -> Option<JsonObject> {
        Some(text_content_output_schema("The weather report"))
    }

    async fn call(&self, arguments: JsonObject) -> CallToolResult {
        let params: WeatherParams = match parse_params(arguments) {
            Ok(params) => params,
            Err(result) => return result,
        };

        tokio::task::spawn_blocking(move || WeatherTool::execute(&params))
            .await
            .unwrap_or_else(|e| error_result(&format!("Weather task failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::super::common::test_support::{args, first_text};
    use super::*;
    use crate::core::schema::validate;
    use crate::upstream::open_meteo::{CurrentWeather, DailySeries};

    fn sample_forecast(days: usize) -> ForecastResponse {
        ForecastResponse {
            timezone: Some("Asia/Seoul".to_string()),
            elevation: Some(38.0),
            current_weather: Some(CurrentWeather {
                temperature: Some(18.5),
                windspeed: Some(12.0),
                winddirection: Some(270.0),
                weather_code: Some(2),
                time: Some("2025-03-08T12:00".to_string()),
            }),
            hourly: None,
            daily: Some(DailySeries {
                time: (1..=days).map(|d| format!("2025-03-{:02}", d)).collect(),
                temperature_2m_max: Some(vec![Some(10.0); days]),
                temperature_2m_min: Some(vec![Some(1.0); days]),
                precipitation_sum: Some(vec![Some(0.0); days]),
                weather_code: Some(vec![Some(61); days]),
            }),
            error: false,
            reason: None,
        }
    }

    #[test]
    fn test_render_includes_header_and_current() {
        let text = WeatherTool::render(&sample_forecast(7), 37.5, 127.0, 7);
        assert!(text.contains("latitude 37.5, longitude 127"));
        assert!(text.contains("Timezone: Asia/Seoul"));
        assert!(text.contains("Temperature: 18.5°C"));
        assert!(text.contains("Partly cloudy"));
    }

    #[test]
    fn test_render_caps_daily_entries_at_requested_days() {
        // Upstream answering with 20 days must still render at most 16.
        let text = WeatherTool::render(&sample_forecast(20), 0.0, 0.0, 16);
        assert_eq!(text.matches("High:").count(), 16);
    }

    #[test]
    fn test_render_single_day() {
        let text = WeatherTool::render(&sample_forecast(7), 0.0, 0.0, 1);
        assert_eq!(text.matches("High:").count(), 1);
    }

    #[test]
    fn test_render_tolerates_empty_payload() {
        let forecast = ForecastResponse {
            timezone: None,
            elevation: None,
            current_weather: None,
            hourly: None,
            daily: None,
            error: false,
            reason: None,
        };
        let text = WeatherTool::render(&forecast, 1.0, 2.0, 7);
        assert!(text.contains("Elevation: N/A"));
        assert!(!text.contains("High:"));
    }

    #[test]
    fn test_validated_float_day_count_deserializes() {
        let input = args(json!({
            "latitude": 37.5,
            "longitude": 127.0,
            "forecast_days": 7.0
        }));
        let record = validate(&WeatherTool::new().input_schema(), &input).unwrap();
        let params: WeatherParams =
            serde_json::from_value(serde_json::Value::Object(record)).unwrap();
        assert_eq!(params.forecast_days, 7);
    }

    // Network test (run with: cargo test -- --ignored)
    #[ignore]
    #[test]
    fn test_execute_seoul() {
        let result = WeatherTool::execute(&WeatherParams {
            latitude: 37.5666791,
            longitude: 126.9782914,
            forecast_days: 3,
        });
        assert_ne!(result.is_error, Some(true));
        assert!(first_text(&result).contains("Current conditions"));
    }
}
