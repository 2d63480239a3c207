//! Test fixtures
//!
//! Reading builders for unit tests: fixed hive/node identifiers and
//! helpers for placing measurements at offsets relative to a chosen "now".

use crate::domain::{SensorKind, SensorReading};
use chrono::{DateTime, Duration, TimeZone, Utc};

/// Noon on the 15th of the given month, 2025
///
/// Mid-month avoids month-boundary surprises when tests subtract window
/// offsets from "now".
pub fn noon_in_month(month: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, month, 15, 12, 0, 0).unwrap()
}

/// An instant `hours` before `now`
pub fn hours_before(now: DateTime<Utc>, hours: i64) -> DateTime<Utc> {
    now - Duration::hours(hours)
}

/// Interior temperature reading
pub fn interior_temp(timestamp: DateTime<Utc>, celsius: f64) -> SensorReading {
    SensorReading::new("node-1", "hive-1", SensorKind::Interior, timestamp)
        .with_temperature(celsius)
}

/// Exterior temperature reading
pub fn exterior_temp(timestamp: DateTime<Utc>, celsius: f64) -> SensorReading {
    SensorReading::new("node-2", "hive-1", SensorKind::Exterior, timestamp)
        .with_temperature(celsius)
}

/// Interior humidity reading
pub fn interior_humidity(timestamp: DateTime<Utc>, percent: f64) -> SensorReading {
    SensorReading::new("node-1", "hive-1", SensorKind::Interior, timestamp)
        .with_humidity(percent)
}

/// Exterior humidity reading
pub fn exterior_humidity(timestamp: DateTime<Utc>, percent: f64) -> SensorReading {
    SensorReading::new("node-2", "hive-1", SensorKind::Exterior, timestamp)
        .with_humidity(percent)
}

/// Hive scale reading
pub fn weight(timestamp: DateTime<Utc>, grams: f64) -> SensorReading {
    SensorReading::new("node-3", "hive-1", SensorKind::Interior, timestamp).with_weight(grams)
}
