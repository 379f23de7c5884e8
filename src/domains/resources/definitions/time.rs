//! Per-city time resource.
//!
//! Serves the current wall-clock time in the city's IANA zone, rendered
//! the same way as the `get_current_time` tool.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use super::{CityInfo, build_entry};
use crate::domains::resources::service::{ResourceEntry, ResourceProducer};

/// Build the `time://<city>` entry.
pub fn time_entry(city: &'static CityInfo) -> ResourceEntry {
    build_entry(
        format!("time://{}", city.key),
        format!("time-{}", city.key),
        format!("Current local time in {}", city.name),
        "text/plain",
        ResourceProducer::CityTime(city),
    )
}

/// Render the current time for one city.
pub fn produce(city: &CityInfo) -> String {
    render(city, Utc::now())
}

fn render(city: &CityInfo, now: DateTime<Utc>) -> String {
    let Ok(zone) = city.timezone.parse::<Tz>() else {
        // The table only holds valid IANA names; this is unreachable
        // unless the table is edited incorrectly.
        return format!("Unknown timezone for {}: {}", city.name, city.timezone);
    };

    let local = now.with_timezone(&zone);
    format!(
        "Current time in {} ({}):\n{}\n({})",
        city.name,
        city.timezone,
        local.format("%A, %B %-d, %Y %H:%M:%S"),
        local.format("%Y-%m-%d %H:%M:%S"),
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::domains::resources::definitions::city_by_key;

    #[test]
    fn test_entry_metadata() {
        let entry = time_entry(city_by_key("daegu").unwrap());
        assert_eq!(entry.resource.raw.uri, "time://daegu");
        assert_eq!(entry.resource.raw.mime_type.as_deref(), Some("text/plain"));
    }

    #[test]
    fn test_render_converts_to_kst() {
        let noon_utc = Utc.with_ymd_and_hms(2025, 3, 10, 3, 0, 0).unwrap();
        let text = render(city_by_key("seoul").unwrap(), noon_utc);

        assert!(text.starts_with("Current time in Seoul (Asia/Seoul):"));
        assert!(text.contains("Monday, March 10, 2025 12:00:00"));
        assert!(text.contains("(2025-03-10 12:00:00)"));
    }
}
