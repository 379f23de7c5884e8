//! Per-city weather resource.
//!
//! Same upstream call and rendering as the weather tool, bound to the
//! city's coordinates and fixed to a 7-day window. Current conditions
//! and the daily forecast are rendered; the hourly series is not part
//! of the resource view.

use tracing::error;

use super::{CityInfo, build_entry};
use crate::domains::resources::service::{ResourceEntry, ResourceProducer};
use crate::upstream::open_meteo;

/// Forecast window the resource is fixed to.
pub const RESOURCE_FORECAST_DAYS: u32 = 7;

/// Build the `weather://<city>` entry.
pub fn weather_entry(city: &'static CityInfo) -> ResourceEntry {
    build_entry(
        format!("weather://{}", city.key),
        format!("weather-{}", city.key),
        format!("Current weather and 7-day forecast for {}", city.name),
        "text/plain",
        ResourceProducer::CityWeather(city),
    )
}

/// Fetch and render the city report. Blocking.
///
/// Upstream failures are rendered into the text body; the resource read
/// itself still succeeds.
pub fn produce(city: &CityInfo) -> String {
    match open_meteo::fetch_forecast(city.latitude, city.longitude, RESOURCE_FORECAST_DAYS) {
        Ok(forecast) => render(city, &forecast),
        Err(e) => {
            error!("Weather resource fetch failed for {}: {}", city.key, e);
            format!("Failed to fetch weather data for {}: {}", city.name, e)
        }
    }
}

fn render(city: &CityInfo, forecast: &open_meteo::ForecastResponse) -> String {
    let mut text = format!("📍 Weather for {}\n", city.name);
    text.push_str("────────────────────────────────────────\n\n");

    if let Some(current) = &forecast.current_weather {
        text.push_str(&open_meteo::render_current(current));
        text.push('\n');
    }

    if let Some(daily) = &forecast.daily {
        text.push_str(&open_meteo::render_daily(
            daily,
            RESOURCE_FORECAST_DAYS as usize,
        ));
    }

    text
}
