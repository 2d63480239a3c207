//! Alert aggregation and deduplication
//!
//! Maintains one hive's active set and bounded alert history. The active
//! set is replaced wholesale every cycle; history is append-only, keyed by
//! `(rule_id, timestamp)` for deduplication, and truncated to the most
//! recent entries by insertion order.

use super::types::{AlertInstance, Dimension, Priority};
use std::collections::HashMap;

/// Bound on retained history entries
pub const DEFAULT_MAX_HISTORY: usize = 100;

/// Optional filters for alert queries
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertFilter {
    pub dimension: Option<Dimension>,
    pub priority: Option<Priority>,
}

impl AlertFilter {
    /// Whether an alert passes the filter
    pub fn matches(&self, alert: &AlertInstance) -> bool {
        self.dimension.map_or(true, |d| alert.dimension == d)
            && self.priority.map_or(true, |p| alert.priority == p)
    }
}

/// Per-hive alert aggregator
///
/// One aggregator per hive; cycles for different hives never share state,
/// so hives can be evaluated in parallel without coordination.
#[derive(Debug, Clone, Default)]
pub struct AlertAggregator {
    active: Vec<AlertInstance>,
    history: Vec<AlertInstance>,
    max_history: usize,
}

impl AlertAggregator {
    /// Create an aggregator with the default history bound
    pub fn new() -> Self {
        Self::with_max_history(DEFAULT_MAX_HISTORY)
    }

    /// Create an aggregator with a custom history bound
    pub fn with_max_history(max_history: usize) -> Self {
        Self {
            active: Vec::new(),
            history: Vec::new(),
            max_history,
        }
    }

    /// Record one evaluation cycle's output
    ///
    /// Replaces the active set entirely and appends to history every
    /// instance whose `(rule_id, timestamp)` key has not been seen.
    /// Returns clones of the freshly appended instances: the set a
    /// notification dispatcher should act on.
    pub fn record_cycle(&mut self, instances: Vec<AlertInstance>) -> Vec<AlertInstance> {
        let mut fresh = Vec::new();

        for instance in &instances {
            let seen = self
                .history
                .iter()
                .any(|h| h.dedup_key() == instance.dedup_key());
            if !seen {
                self.history.push(instance.clone());
                fresh.push(instance.clone());
            }
        }

        if self.history.len() > self.max_history {
            let excess = self.history.len() - self.max_history;
            self.history.drain(0..excess);
        }

        self.active = instances;
        fresh
    }

    /// This cycle's alerts, filtered and priority-ordered
    pub fn active(&self, filter: AlertFilter) -> Vec<&AlertInstance> {
        Self::query(&self.active, filter)
    }

    /// Accumulated history, filtered and priority-ordered
    pub fn history(&self, filter: AlertFilter) -> Vec<&AlertInstance> {
        Self::query(&self.history, filter)
    }

    /// Number of retained history entries
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Active alert count per priority, for badge/counter consumers
    pub fn counts_by_priority(&self) -> HashMap<Priority, usize> {
        let mut counts = HashMap::new();
        for alert in &self.active {
            *counts.entry(alert.priority).or_insert(0) += 1;
        }
        counts
    }

    fn query(alerts: &[AlertInstance], filter: AlertFilter) -> Vec<&AlertInstance> {
        let mut matched: Vec<&AlertInstance> =
            alerts.iter().filter(|a| filter.matches(a)).collect();
        // Priority descending, most recent first within a priority.
        matched.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then(b.timestamp.cmp(&a.timestamp))
        });
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleId;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap()
    }

    fn instance(rule_id: RuleId, priority: Priority, minute: i64) -> AlertInstance {
        AlertInstance {
            rule_id,
            hive_id: "hive-1".to_string(),
            node_id: Some("node-1".to_string()),
            dimension: Dimension::Temperature,
            priority,
            observed_value: 39.0,
            unit: "°C",
            triggering_condition: "test condition".to_string(),
            event_count: None,
            timestamp: base_time() + Duration::minutes(minute),
            recommended_actions: vec!["inspect".to_string()],
        }
    }

    #[test]
    fn test_record_cycle_replaces_active_set() {
        let mut agg = AlertAggregator::new();

        agg.record_cycle(vec![instance(RuleId::TempCriticaAlta, Priority::Critical, 0)]);
        assert_eq!(agg.active(AlertFilter::default()).len(), 1);

        // Next cycle produced nothing: active is empty, history remains.
        agg.record_cycle(Vec::new());
        assert!(agg.active(AlertFilter::default()).is_empty());
        assert_eq!(agg.history_len(), 1);
    }

    #[test]
    fn test_duplicate_rule_and_timestamp_appended_once() {
        let mut agg = AlertAggregator::new();
        let alert = instance(RuleId::TempCriticaAlta, Priority::Critical, 0);

        let fresh = agg.record_cycle(vec![alert.clone()]);
        assert_eq!(fresh.len(), 1);

        // Identical (rule_id, timestamp) next cycle: active again, but
        // history does not grow and nothing is reported fresh.
        let fresh = agg.record_cycle(vec![alert.clone()]);
        assert!(fresh.is_empty());
        assert_eq!(agg.history_len(), 1);
        assert_eq!(agg.active(AlertFilter::default()).len(), 1);
    }

    #[test]
    fn test_same_rule_new_timestamp_is_fresh() {
        let mut agg = AlertAggregator::new();
        agg.record_cycle(vec![instance(RuleId::TempCriticaAlta, Priority::Critical, 0)]);
        let fresh = agg.record_cycle(vec![instance(RuleId::TempCriticaAlta, Priority::Critical, 10)]);

        assert_eq!(fresh.len(), 1);
        assert_eq!(agg.history_len(), 2);
    }

    #[test]
    fn test_history_truncated_to_bound() {
        let mut agg = AlertAggregator::new();

        for minute in 0..101 {
            agg.record_cycle(vec![instance(
                RuleId::TempCriticaAlta,
                Priority::Critical,
                minute,
            )]);
        }

        assert_eq!(agg.history_len(), 100);
        // The oldest entry (minute 0) was evicted.
        let history = agg.history(AlertFilter::default());
        let oldest = history.last().unwrap();
        assert_eq!(oldest.timestamp, base_time() + Duration::minutes(1));
    }

    #[test]
    fn test_query_sorted_by_priority_then_recency() {
        let mut agg = AlertAggregator::new();
        agg.record_cycle(vec![
            instance(RuleId::OportunidadCosecha, Priority::Informational, 30),
            instance(RuleId::TempCriticaAlta, Priority::Critical, 0),
            instance(RuleId::SenalEnjambre, Priority::High, 10),
            instance(RuleId::TemperaturaAnormal, Priority::Critical, 20),
        ]);

        let active = agg.active(AlertFilter::default());
        let order: Vec<_> = active.iter().map(|a| a.rule_id).collect();
        assert_eq!(
            order,
            vec![
                RuleId::TemperaturaAnormal, // critical, newer
                RuleId::TempCriticaAlta,    // critical, older
                RuleId::SenalEnjambre,
                RuleId::OportunidadCosecha,
            ]
        );
    }

    #[test]
    fn test_filters_by_dimension_and_priority() {
        let mut agg = AlertAggregator::new();
        let mut weight_alert = instance(RuleId::SenalEnjambre, Priority::High, 0);
        weight_alert.dimension = Dimension::Weight;

        agg.record_cycle(vec![
            instance(RuleId::TempCriticaAlta, Priority::Critical, 0),
            weight_alert,
        ]);

        let weights = agg.active(AlertFilter {
            dimension: Some(Dimension::Weight),
            priority: None,
        });
        assert_eq!(weights.len(), 1);
        assert_eq!(weights[0].rule_id, RuleId::SenalEnjambre);

        let criticals = agg.active(AlertFilter {
            dimension: None,
            priority: Some(Priority::Critical),
        });
        assert_eq!(criticals.len(), 1);
        assert_eq!(criticals[0].rule_id, RuleId::TempCriticaAlta);
    }

    #[test]
    fn test_counts_by_priority() {
        let mut agg = AlertAggregator::new();
        agg.record_cycle(vec![
            instance(RuleId::TempCriticaAlta, Priority::Critical, 0),
            instance(RuleId::TemperaturaAnormal, Priority::Critical, 5),
            instance(RuleId::SenalEnjambre, Priority::High, 10),
        ]);

        let counts = agg.counts_by_priority();
        assert_eq!(counts.get(&Priority::Critical), Some(&2));
        assert_eq!(counts.get(&Priority::High), Some(&1));
        assert_eq!(counts.get(&Priority::Informational), None);
    }
}
