//! Canonical sensor readings
//!
//! One timestamped observation from one node, normalized by the ingest
//! adapter. Every measurement field is genuinely optional; a reading is
//! only valid when it carries at least one measurement.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sensor placement relative to the hive body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    /// Inside the hive body
    Interior,
    /// Outside the hive body
    Exterior,
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interior => write!(f, "interior"),
            Self::Exterior => write!(f, "exterior"),
        }
    }
}

/// One timestamped observation from one node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Reporting device identifier
    pub node_id: String,
    /// Owning hive identifier
    pub hive_id: String,
    /// Sensor placement
    pub kind: SensorKind,
    /// Point in time the reading was taken
    pub timestamp: DateTime<Utc>,
    /// Temperature in degrees Celsius
    pub temperature: Option<f64>,
    /// Relative humidity in percent
    pub humidity: Option<f64>,
    /// Hive weight in grams
    pub weight: Option<f64>,
}

impl SensorReading {
    /// Create a reading with no measurements set
    pub fn new(
        node_id: impl Into<String>,
        hive_id: impl Into<String>,
        kind: SensorKind,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            node_id: node_id.into(),
            hive_id: hive_id.into(),
            kind,
            timestamp,
            temperature: None,
            humidity: None,
            weight: None,
        }
    }

    /// Builder: set temperature
    pub fn with_temperature(mut self, celsius: f64) -> Self {
        self.temperature = Some(celsius);
        self
    }

    /// Builder: set humidity
    pub fn with_humidity(mut self, percent: f64) -> Self {
        self.humidity = Some(percent);
        self
    }

    /// Builder: set weight
    pub fn with_weight(mut self, grams: f64) -> Self {
        self.weight = Some(grams);
        self
    }

    /// Whether the reading carries at least one measurement
    pub fn has_measurement(&self) -> bool {
        self.temperature.is_some() || self.humidity.is_some() || self.weight.is_some()
    }

    /// Whether this is an interior reading
    pub fn is_interior(&self) -> bool {
        self.kind == SensorKind::Interior
    }
}
