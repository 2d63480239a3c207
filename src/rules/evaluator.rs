//! Rule evaluator
//!
//! The shared interpreter that applies every catalog rule to one hive's
//! reading window. Evaluation is pure: the caller supplies the readings,
//! the instant `now`, and a precomputed seasonal context, so the same
//! inputs always yield the same alerts.
//!
//! Latest/last-N selection is by timestamp, never by slice position, so
//! the evaluator does not depend on input ordering. A rule whose required
//! inputs are absent simply does not fire.

use crate::alerts::{AlertInstance, Dimension};
use crate::domain::{SeasonalContext, SensorKind, SensorReading};
use crate::rules::actions::actions_for;
use crate::rules::catalog::{rules, RuleDef, RuleId, RuleKind};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;

/// What a single rule observed when it fired
struct Firing {
    observed: f64,
    event_count: Option<usize>,
    timestamp: DateTime<Utc>,
    node_id: Option<String>,
}

/// Evaluate the full catalog against one hive's readings
pub fn evaluate_hive(
    hive_id: &str,
    readings: &[SensorReading],
    now: DateTime<Utc>,
    season: &SeasonalContext,
) -> Vec<AlertInstance> {
    let mut firings: Vec<(&'static RuleDef, Firing)> = Vec::new();

    for def in rules() {
        if !def.gate.permits(season) {
            continue;
        }
        if let Some(firing) = apply_rule(def, readings, now) {
            firings.push((def, firing));
        }
    }

    // A critical variant firing suppresses its preventive counterpart for
    // the whole cycle. Mutual exclusion, not priority ordering.
    let fired: HashSet<RuleId> = firings.iter().map(|(def, _)| def.id).collect();
    firings.retain(|(def, _)| match def.suppressed_by {
        Some(critical) => !fired.contains(&critical),
        None => true,
    });

    firings
        .into_iter()
        .map(|(def, firing)| AlertInstance {
            rule_id: def.id,
            hive_id: hive_id.to_string(),
            node_id: firing.node_id,
            dimension: def.dimension,
            priority: def.priority,
            observed_value: firing.observed,
            unit: def.unit,
            triggering_condition: def.summary.to_string(),
            event_count: firing.event_count,
            timestamp: firing.timestamp,
            recommended_actions: actions_for(def.id.as_str())
                .iter()
                .map(|s| s.to_string())
                .collect(),
        })
        .collect()
}

fn apply_rule(def: &RuleDef, readings: &[SensorReading], now: DateTime<Utc>) -> Option<Firing> {
    match def.kind {
        RuleKind::Sustained {
            window_hours,
            min_events,
            condition,
        } => {
            let cutoff = now - Duration::hours(window_hours);
            let series = stream(readings, def.dimension, Some(SensorKind::Interior));
            let qualifying: Vec<_> = series
                .into_iter()
                .filter(|(r, v)| r.timestamp >= cutoff && condition.evaluate(*v))
                .collect();

            if qualifying.len() < min_events {
                return None;
            }
            let (latest, value) = qualifying.last()?;
            Some(Firing {
                observed: *value,
                event_count: Some(qualifying.len()),
                timestamp: latest.timestamp,
                node_id: Some(latest.node_id.clone()),
            })
        }

        RuleKind::Instantaneous { condition } => {
            let series = stream(readings, def.dimension, Some(SensorKind::Interior));
            let (latest, value) = series.last()?;
            if !condition.evaluate(*value) {
                return None;
            }
            Some(Firing {
                observed: *value,
                event_count: None,
                timestamp: latest.timestamp,
                node_id: Some(latest.node_id.clone()),
            })
        }

        RuleKind::WeightDrop { min_drop_grams } => {
            let series = stream(readings, Dimension::Weight, None);
            if series.len() < 2 {
                return None;
            }
            let (_, prev_value) = &series[series.len() - 2];
            let (latest, last_value) = &series[series.len() - 1];
            let drop = prev_value - last_value;
            if drop < min_drop_grams {
                return None;
            }
            Some(Firing {
                observed: drop,
                event_count: None,
                timestamp: latest.timestamp,
                node_id: Some(latest.node_id.clone()),
            })
        }

        RuleKind::WeightGain {
            span,
            min_gain_grams,
        } => {
            let series = stream(readings, Dimension::Weight, None);
            if series.len() < span {
                return None;
            }
            let window = &series[series.len() - span..];
            let (_, oldest_value) = &window[0];
            let (latest, newest_value) = &window[window.len() - 1];
            let gain = newest_value - oldest_value;
            if gain <= min_gain_grams {
                return None;
            }
            Some(Firing {
                observed: gain,
                event_count: None,
                timestamp: latest.timestamp,
                node_id: Some(latest.node_id.clone()),
            })
        }

        RuleKind::StreamConvergence {
            window_hours,
            max_delta,
        } => {
            let cutoff = now - Duration::hours(window_hours);
            let interior = stream(readings, def.dimension, Some(SensorKind::Interior));
            let exterior = stream(readings, def.dimension, Some(SensorKind::Exterior));

            // Both streams need a reading inside the window; anything
            // staler is insufficient data, not an error.
            let (int_reading, int_value) =
                interior.last().filter(|(r, _)| r.timestamp >= cutoff)?;
            let (ext_reading, ext_value) =
                exterior.last().filter(|(r, _)| r.timestamp >= cutoff)?;

            let delta = (int_value - ext_value).abs();
            if delta > max_delta {
                return None;
            }
            Some(Firing {
                observed: delta,
                event_count: None,
                timestamp: int_reading.timestamp.max(ext_reading.timestamp),
                node_id: Some(int_reading.node_id.clone()),
            })
        }
    }
}

/// Collect the (reading, value) series for one dimension, sorted ascending
/// by timestamp, optionally restricted to one sensor placement
fn stream<'a>(
    readings: &'a [SensorReading],
    dimension: Dimension,
    kind: Option<SensorKind>,
) -> Vec<(&'a SensorReading, f64)> {
    let mut series: Vec<_> = readings
        .iter()
        .filter(|r| kind.map_or(true, |k| r.kind == k))
        .filter_map(|r| measurement(r, dimension).map(|v| (r, v)))
        .collect();
    series.sort_by_key(|(r, _)| r.timestamp);
    series
}

fn measurement(reading: &SensorReading, dimension: Dimension) -> Option<f64> {
    match dimension {
        Dimension::Temperature => reading.temperature,
        Dimension::Humidity => reading.humidity,
        Dimension::Weight => reading.weight,
    }
}
