//! Open-Meteo forecast client and report rendering.
//!
//! One GET per call against the public forecast endpoint, requesting
//! current conditions plus hourly and daily series. The response types
//! are deliberately Option-heavy: Open-Meteo omits series and entries
//! freely, and every sub-field access must tolerate absence.
//!
//! The rendering helpers live here as well because the weather tool and
//! the per-city weather resources share them.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use tracing::info;

use super::{USER_AGENT, UpstreamError};

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

const HOURLY_VARS: &str = "temperature_2m,relative_humidity_2m,precipitation,weather_code,wind_speed_10m";
const DAILY_VARS: &str = "temperature_2m_max,temperature_2m_min,precipitation_sum,weather_code";

/// Hourly entries rendered at most, regardless of forecast length.
pub const HOURLY_RENDER_CAP: usize = 24;

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub timezone: Option<String>,
    pub elevation: Option<f64>,
    pub current_weather: Option<CurrentWeather>,
    pub hourly: Option<HourlySeries>,
    pub daily: Option<DailySeries>,

    /// Present when the API rejects the query.
    #[serde(default)]
    pub error: bool,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub temperature: Option<f64>,
    pub windspeed: Option<f64>,
    pub winddirection: Option<f64>,
    /// The current block spells this `weathercode`; newer payloads use
    /// `weather_code`. Accept both.
    #[serde(alias = "weathercode")]
    pub weather_code: Option<u32>,
    pub time: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HourlySeries {
    #[serde(default)]
    pub time: Vec<String>,
    pub temperature_2m: Option<Vec<Option<f64>>>,
    pub precipitation: Option<Vec<Option<f64>>>,
    pub weather_code: Option<Vec<Option<u32>>>,
    pub wind_speed_10m: Option<Vec<Option<f64>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailySeries {
    #[serde(default)]
    pub time: Vec<String>,
    pub temperature_2m_max: Option<Vec<Option<f64>>>,
    pub temperature_2m_min: Option<Vec<Option<f64>>>,
    pub precipitation_sum: Option<Vec<Option<f64>>>,
    pub weather_code: Option<Vec<Option<u32>>>,
}

/// Fetch a forecast for the given coordinates. Blocking.
pub fn fetch_forecast(
    latitude: f64,
    longitude: f64,
    forecast_days: u32,
) -> Result<ForecastResponse, UpstreamError> {
    info!(
        "Fetching forecast for ({}, {}), {} day(s)",
        latitude, longitude, forecast_days
    );

    let client = reqwest::blocking::Client::new();
    let response = client
        .get(FORECAST_URL)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .query(&[
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("current_weather", "true".to_string()),
            ("hourly", HOURLY_VARS.to_string()),
            ("daily", DAILY_VARS.to_string()),
            ("forecast_days", forecast_days.to_string()),
            ("timezone", "auto".to_string()),
        ])
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamError::Status {
            status: status.as_u16(),
            detail: status.canonical_reason().unwrap_or("request failed").to_string(),
        });
    }

    let forecast: ForecastResponse = response.json()?;
    if forecast.error {
        return Err(UpstreamError::rejected(
            forecast
                .reason
                .unwrap_or_else(|| "forecast request rejected".to_string()),
        ));
    }

    Ok(forecast)
}

/// Map a WMO weather code to a description, falling back to the raw
/// numeric code for anything unmapped.
pub fn weather_description(code: u32) -> String {
    let description = match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snowfall",
        73 => "Moderate snowfall",
        75 => "Heavy snowfall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        other => return format!("Weather code {}", other),
    };
    description.to_string()
}

/// Render the current-conditions block.
pub fn render_current(current: &CurrentWeather) -> String {
    let mut text = String::new();
    text.push_str("🌤️ Current conditions\n");
    text.push_str("────────────────────────────────────────\n");
    if let Some(temperature) = current.temperature {
        text.push_str(&format!("Temperature: {}°C\n", temperature));
    }
    if let Some(code) = current.weather_code {
        text.push_str(&format!("Conditions: {}\n", weather_description(code)));
    }
    if let Some(windspeed) = current.windspeed {
        text.push_str(&format!("Wind speed: {} km/h\n", windspeed));
    }
    if let Some(winddirection) = current.winddirection {
        text.push_str(&format!("Wind direction: {}°\n", winddirection));
    }
    if let Some(time) = &current.time {
        text.push_str(&format!("Time: {}\n", time));
    }
    text
}

/// Render up to `forecast_days` daily entries.
pub fn render_daily(daily: &DailySeries, forecast_days: usize) -> String {
    let mut text = String::new();
    text.push_str(&format!("📅 {}-day forecast\n", forecast_days));
    text.push_str("────────────────────────────────────────\n");

    let days = daily.time.len().min(forecast_days);
    for i in 0..days {
        text.push_str(&format!("\n{}\n", format_day(&daily.time[i])));

        let high = series_value(&daily.temperature_2m_max, i);
        let low = series_value(&daily.temperature_2m_min, i);
        if let Some(high) = high {
            text.push_str(&format!("  High: {}°C", high));
        }
        if let Some(low) = low {
            text.push_str(&format!(" / Low: {}°C", low));
        }
        if high.is_some() || low.is_some() {
            text.push('\n');
        }

        if let Some(code) = code_value(&daily.weather_code, i) {
            text.push_str(&format!("  Conditions: {}\n", weather_description(code)));
        }
        if let Some(precipitation) = series_value(&daily.precipitation_sum, i)
            && precipitation > 0.0
        {
            text.push_str(&format!("  Precipitation: {}mm\n", precipitation));
        }
    }
    text
}

/// Render up to [`HOURLY_RENDER_CAP`] hourly entries.
pub fn render_hourly(hourly: &HourlySeries) -> String {
    let mut text = String::new();
    text.push_str("⏰ Next 24 hours\n");
    text.push_str("────────────────────────────────────────\n");

    let hours = hourly.time.len().min(HOURLY_RENDER_CAP);
    for i in 0..hours {
        text.push_str(&format!("\n{}\n", format_hour(&hourly.time[i])));

        let mut parts = Vec::new();
        if let Some(temperature) = series_value(&hourly.temperature_2m, i) {
            parts.push(format!("Temperature: {}°C", temperature));
        }
        if let Some(code) = code_value(&hourly.weather_code, i) {
            parts.push(weather_description(code));
        }
        if let Some(precipitation) = series_value(&hourly.precipitation, i)
            && precipitation > 0.0
        {
            parts.push(format!("Precipitation: {}mm", precipitation));
        }
        if let Some(wind) = series_value(&hourly.wind_speed_10m, i) {
            parts.push(format!("Wind: {} km/h", wind));
        }
        if !parts.is_empty() {
            text.push_str(&format!("  {}\n", parts.join(" | ")));
        }
    }
    text
}

fn series_value(series: &Option<Vec<Option<f64>>>, index: usize) -> Option<f64> {
    series.as_ref()?.get(index).copied().flatten()
}

fn code_value(series: &Option<Vec<Option<u32>>>, index: usize) -> Option<u32> {
    series.as_ref()?.get(index).copied().flatten()
}

/// "2025-03-08" -> "Mar 8 (Sat)"; unparseable dates pass through.
fn format_day(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%b %-d (%a)").to_string(),
        Err(_) => date.to_string(),
    }
}

/// "2025-03-08T14:00" -> "Mar 8 14:00"; unparseable times pass through.
fn format_hour(time: &str) -> String {
    match NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M") {
        Ok(t) => t.format("%b %-d %H:%M").to_string(),
        Err(_) => time.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_daily(days: usize) -> DailySeries {
        DailySeries {
            time: (1..=days).map(|d| format!("2025-03-{:02}", d)).collect(),
            temperature_2m_max: Some(vec![Some(10.0); days]),
            temperature_2m_min: Some(vec![Some(2.0); days]),
            precipitation_sum: Some(vec![Some(0.0); days]),
            weather_code: Some(vec![Some(3); days]),
        }
    }

    #[test]
    fn test_weather_description_mapped() {
        assert_eq!(weather_description(0), "Clear sky");
        assert_eq!(weather_description(95), "Thunderstorm");
    }

    #[test]
    fn test_weather_description_fallback_shows_raw_code() {
        assert_eq!(weather_description(42), "Weather code 42");
    }

    #[test]
    fn test_render_daily_caps_at_forecast_days() {
        // Upstream returning more days than requested must not leak through.
        let text = render_daily(&sample_daily(20), 16);
        assert_eq!(text.matches("High:").count(), 16);
    }

    #[test]
    fn test_render_daily_single_day() {
        let text = render_daily(&sample_daily(7), 1);
        assert_eq!(text.matches("High:").count(), 1);
        assert!(text.contains("1-day forecast"));
    }

    #[test]
    fn test_render_daily_omits_zero_precipitation() {
        let mut daily = sample_daily(2);
        daily.precipitation_sum = Some(vec![Some(0.0), Some(4.2)]);
        let text = render_daily(&daily, 2);
        assert_eq!(text.matches("Precipitation:").count(), 1);
        assert!(text.contains("Precipitation: 4.2mm"));
    }

    #[test]
    fn test_render_daily_tolerates_missing_series() {
        let daily = DailySeries {
            time: vec!["2025-03-01".to_string()],
            ..Default::default()
        };
        let text = render_daily(&daily, 7);
        assert!(text.contains("Mar 1"));
        assert!(!text.contains("High:"));
    }

    #[test]
    fn test_render_hourly_caps_at_24() {
        let hourly = HourlySeries {
            time: (0..48).map(|h| format!("2025-03-01T{:02}:00", h % 24)).collect(),
            temperature_2m: Some(vec![Some(5.0); 48]),
            ..Default::default()
        };
        let text = render_hourly(&hourly);
        assert_eq!(text.matches("Temperature:").count(), 24);
    }

    #[test]
    fn test_render_current_tolerates_absent_fields() {
        let current = CurrentWeather {
            temperature: Some(21.5),
            windspeed: None,
            winddirection: None,
            weather_code: None,
            time: None,
        };
        let text = render_current(&current);
        assert!(text.contains("Temperature: 21.5°C"));
        assert!(!text.contains("Wind"));
    }

    #[test]
    fn test_rejected_payload_deserializes() {
        let json = r#"{"error": true, "reason": "Latitude must be in range"}"#;
        let forecast: ForecastResponse = serde_json::from_str(json).unwrap();
        assert!(forecast.error);
        assert_eq!(forecast.reason.as_deref(), Some("Latitude must be in range"));
    }

    // Network test (run with: cargo test -- --ignored)
    #[ignore]
    #[test]
    fn test_fetch_forecast_seoul() {
        let forecast = fetch_forecast(37.5666791, 126.9782914, 3).unwrap();
        assert!(forecast.current_weather.is_some());
        assert!(forecast.daily.is_some());
    }
}
