//! Evaluation service
//!
//! Wires one evaluation cycle together: seasonal context from the caller's
//! instant, catalog evaluation over the hive's readings, aggregation with
//! deduplication, and notification of the freshly recorded alerts.

use crate::alerts::{
    AlertAggregator, AlertFilter, AlertInstance, NotificationManager, Priority,
};
use crate::domain::{SeasonalContext, SensorReading};
use crate::rules::evaluate_hive;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Evaluation service configuration
#[derive(Debug, Clone)]
pub struct EvaluationConfig {
    /// Whether alerting is enabled
    pub enabled: bool,
    /// Maximum number of alerts to keep in history per hive
    pub max_history: usize,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_history: crate::alerts::DEFAULT_MAX_HISTORY,
        }
    }
}

/// Per-cycle alert evaluation service
///
/// Owns one aggregator per hive. Hives never share mutable state, so a
/// caller may run cycles for different hives concurrently by splitting
/// services per hive; cycles for the same hive must be sequential.
pub struct EvaluationService {
    aggregators: HashMap<String, AlertAggregator>,
    notifier: NotificationManager,
    config: EvaluationConfig,
}

impl EvaluationService {
    /// Create a new evaluation service
    pub fn new(config: EvaluationConfig) -> Self {
        Self {
            aggregators: HashMap::new(),
            notifier: NotificationManager::default(),
            config,
        }
    }

    /// Create a service with explicit notification channels
    pub fn with_notifier(config: EvaluationConfig, notifier: NotificationManager) -> Self {
        Self {
            aggregators: HashMap::new(),
            notifier,
            config,
        }
    }

    /// Create a disabled service (no-op)
    pub fn disabled() -> Self {
        Self::with_notifier(
            EvaluationConfig {
                enabled: false,
                max_history: 0,
            },
            NotificationManager::new(),
        )
    }

    /// Run one evaluation cycle for a hive
    ///
    /// `now` comes from the caller so evaluation stays deterministic and
    /// testable; the service never reads the system clock itself.
    pub fn run_cycle(
        &mut self,
        hive_id: &str,
        readings: &[SensorReading],
        now: DateTime<Utc>,
    ) -> Vec<AlertInstance> {
        if !self.config.enabled {
            return Vec::new();
        }

        let season = SeasonalContext::for_instant(now);
        let instances = evaluate_hive(hive_id, readings, now, &season);

        log::debug!(
            "cycle for hive {}: {} readings, {} alerts",
            hive_id,
            readings.len(),
            instances.len()
        );

        let aggregator = self
            .aggregators
            .entry(hive_id.to_string())
            .or_insert_with(|| AlertAggregator::with_max_history(self.config.max_history));

        let fresh = aggregator.record_cycle(instances);
        self.notifier.notify_batch(&fresh);
        fresh
    }

    /// Active alerts for a hive, filtered and priority-ordered
    pub fn active(&self, hive_id: &str, filter: AlertFilter) -> Vec<&AlertInstance> {
        self.aggregators
            .get(hive_id)
            .map(|agg| agg.active(filter))
            .unwrap_or_default()
    }

    /// Alert history for a hive, filtered and priority-ordered
    pub fn history(&self, hive_id: &str, filter: AlertFilter) -> Vec<&AlertInstance> {
        self.aggregators
            .get(hive_id)
            .map(|agg| agg.history(filter))
            .unwrap_or_default()
    }

    /// Active alert counts per priority for a hive
    pub fn counts_by_priority(&self, hive_id: &str) -> HashMap<Priority, usize> {
        self.aggregators
            .get(hive_id)
            .map(|agg| agg.counts_by_priority())
            .unwrap_or_default()
    }

    /// Check if the service is enabled
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{hours_before, interior_temp, noon_in_month};

    fn hot_window(now: DateTime<Utc>) -> Vec<SensorReading> {
        (1..=8)
            .map(|h| interior_temp(hours_before(now, h), 39.0))
            .collect()
    }

    #[test]
    fn test_run_cycle_records_and_reports_fresh() {
        let mut service =
            EvaluationService::with_notifier(EvaluationConfig::default(), NotificationManager::new());
        let now = noon_in_month(6);
        let readings = hot_window(now);

        let fresh = service.run_cycle("hive-1", &readings, now);
        assert_eq!(fresh.len(), 1);
        assert_eq!(service.active("hive-1", AlertFilter::default()).len(), 1);

        // Same frozen inputs again: still active, nothing fresh.
        let fresh = service.run_cycle("hive-1", &readings, now);
        assert!(fresh.is_empty());
        assert_eq!(service.active("hive-1", AlertFilter::default()).len(), 1);
        assert_eq!(service.history("hive-1", AlertFilter::default()).len(), 1);
    }

    #[test]
    fn test_hives_have_independent_buckets() {
        let mut service =
            EvaluationService::with_notifier(EvaluationConfig::default(), NotificationManager::new());
        let now = noon_in_month(6);
        let readings = hot_window(now);

        service.run_cycle("hive-1", &readings, now);
        assert!(service.active("hive-2", AlertFilter::default()).is_empty());
        assert!(service.history("hive-2", AlertFilter::default()).is_empty());
    }

    #[test]
    fn test_disabled_service_is_noop() {
        let mut service = EvaluationService::disabled();
        assert!(!service.is_enabled());

        let now = noon_in_month(6);
        let readings = hot_window(now);
        let fresh = service.run_cycle("hive-1", &readings, now);

        assert!(fresh.is_empty());
        assert!(service.active("hive-1", AlertFilter::default()).is_empty());
    }

    #[test]
    fn test_counts_follow_active_set() {
        let mut service =
            EvaluationService::with_notifier(EvaluationConfig::default(), NotificationManager::new());
        let now = noon_in_month(6);
        let readings = hot_window(now);

        service.run_cycle("hive-1", &readings, now);
        let counts = service.counts_by_priority("hive-1");
        assert_eq!(counts.get(&Priority::Critical), Some(&1));

        // An empty cycle clears the active counts.
        service.run_cycle("hive-1", &[], now);
        assert!(service.counts_by_priority("hive-1").is_empty());
    }
}
