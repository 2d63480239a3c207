//! Reading ingest adapter
//!
//! Normalizes raw telemetry records from the external fetch layer into
//! canonical [`SensorReading`]s for the rule evaluator. Malformed records
//! are dropped and counted, never propagated: a parse failure in one record
//! must not abort processing of the rest.
//!
//! The upstream API reports measurements under Spanish field names
//! (`humedad`, `peso`, `tipo`); serde aliases accept both spellings.

use crate::domain::{SensorKind, SensorReading};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw telemetry record as delivered by the external fetch layer
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawRecord {
    /// Upstream record identifier
    pub id: Option<String>,
    pub node_id: Option<String>,
    pub hive_id: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    /// Sensor placement; absent records are treated as interior
    #[serde(default, alias = "tipo")]
    pub kind: Option<String>,
    #[serde(default)]
    pub payload: RawPayload,
}

/// Measurement payload of a raw record
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawPayload {
    pub temperature: Option<f64>,
    #[serde(alias = "humedad")]
    pub humidity: Option<f64>,
    #[serde(alias = "peso")]
    pub weight: Option<f64>,
}

/// Drop diagnostics for one normalization pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestStats {
    /// Records normalized into readings
    pub accepted: usize,
    /// Records dropped as malformed or out of scope
    pub dropped: usize,
}

/// Normalize raw records into canonical readings for one hive
///
/// Returns readings scoped to `hive_id`, sorted ascending by timestamp,
/// along with drop diagnostics. Records missing a timestamp, a node id, or
/// every measurement are dropped; records for other hives are dropped and
/// counted as out of scope.
pub fn normalize(records: &[RawRecord], hive_id: &str) -> (Vec<SensorReading>, IngestStats) {
    let mut readings = Vec::with_capacity(records.len());
    let mut stats = IngestStats::default();

    for record in records {
        match to_reading(record, hive_id) {
            Some(reading) => {
                readings.push(reading);
                stats.accepted += 1;
            }
            None => {
                stats.dropped += 1;
                log::debug!(
                    "dropping record {:?} for hive {}",
                    record.id.as_deref().unwrap_or("<no id>"),
                    hive_id
                );
            }
        }
    }

    readings.sort_by_key(|r| r.timestamp);

    if stats.dropped > 0 {
        log::warn!(
            "ingest for hive {}: accepted {}, dropped {}",
            hive_id,
            stats.accepted,
            stats.dropped
        );
    }

    (readings, stats)
}

/// Parse a JSON document into raw records
///
/// This is the whole-input boundary: a document that is not a record array
/// is an error, while individual records inside a valid array are handled
/// leniently by [`normalize`].
pub fn parse_records(input: &str) -> Result<Vec<RawRecord>, crate::error::IngestError> {
    Ok(serde_json::from_str(input)?)
}

fn to_reading(record: &RawRecord, hive_id: &str) -> Option<SensorReading> {
    if record.hive_id.as_deref() != Some(hive_id) {
        return None;
    }

    let node_id = record.node_id.as_deref()?;
    let timestamp = record.timestamp?;
    let kind = match record.kind.as_deref() {
        Some("interior") | None => SensorKind::Interior,
        Some("exterior") => SensorKind::Exterior,
        Some(_) => return None,
    };

    let reading = SensorReading {
        node_id: node_id.to_string(),
        hive_id: hive_id.to_string(),
        kind,
        timestamp,
        temperature: record.payload.temperature,
        humidity: record.payload.humidity,
        weight: record.payload.weight,
    };

    reading.has_measurement().then_some(reading)
}
