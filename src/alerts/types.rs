//! Alert domain types
//!
//! Defines the alert priority ladder, the sensor dimensions alerts are
//! filed under, and the [`AlertInstance`] produced by each rule firing.

use crate::rules::RuleId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Alert priority levels, ordered ascending so `Ord` matches urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// No action needed, worth knowing
    Informational,
    /// Routine attention
    Medium,
    /// Condition is drifting toward a critical band
    Preventive,
    /// Action recommended soon
    High,
    /// Immediate action required
    Critical,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Informational => write!(f, "INFORMATIONAL"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::Preventive => write!(f, "PREVENTIVE"),
            Self::High => write!(f, "HIGH"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Sensor dimension an alert is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Temperature,
    Humidity,
    Weight,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "temperature"),
            Self::Humidity => write!(f, "humidity"),
            Self::Weight => write!(f, "weight"),
        }
    }
}

/// One rule firing against one hive's reading window at one moment
///
/// Instances have no persistent identity beyond `(rule_id, timestamp)`;
/// the aggregator uses that pair as the deduplication key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertInstance {
    /// Rule that fired
    pub rule_id: RuleId,
    /// Hive the window belongs to
    pub hive_id: String,
    /// Reporting node of the latest contributing reading, if applicable
    pub node_id: Option<String>,
    /// Dimension of the firing rule
    pub dimension: Dimension,
    /// Priority of the firing rule
    pub priority: Priority,
    /// Value that satisfied the rule
    pub observed_value: f64,
    /// Unit of the observed value
    pub unit: &'static str,
    /// Human-readable description of what tripped
    pub triggering_condition: String,
    /// Qualifying readings in the window, for sustained rules
    pub event_count: Option<usize>,
    /// Timestamp of the latest contributing reading
    pub timestamp: DateTime<Utc>,
    /// Ordered remediation steps
    pub recommended_actions: Vec<String>,
}

impl AlertInstance {
    /// Deduplication key: same rule, same triggering moment
    pub fn dedup_key(&self) -> (RuleId, DateTime<Utc>) {
        (self.rule_id, self.timestamp)
    }
}

impl fmt::Display for AlertInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} hive {}: {} ({}{})",
            self.priority,
            self.rule_id,
            self.hive_id,
            self.triggering_condition,
            self.observed_value,
            self.unit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Informational < Priority::Medium);
        assert!(Priority::Medium < Priority::Preventive);
        assert!(Priority::Preventive < Priority::High);
        assert!(Priority::High < Priority::Critical);
    }

    #[test]
    fn test_priority_display() {
        assert_eq!(Priority::Critical.to_string(), "CRITICAL");
        assert_eq!(Priority::Preventive.to_string(), "PREVENTIVE");
        assert_eq!(Priority::Informational.to_string(), "INFORMATIONAL");
    }

    #[test]
    fn test_dimension_display() {
        assert_eq!(Dimension::Temperature.to_string(), "temperature");
        assert_eq!(Dimension::Weight.to_string(), "weight");
    }
}
