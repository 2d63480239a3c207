//! Evaluate command implementation
//!
//! One-shot evaluation of a raw readings file for one hive.

use crate::alerts::AlertFilter;
use crate::cli::args::{EvaluateArgs, OutputFormat};
use crate::cli::output::{print_output, AlertReport};
use crate::domain::SeasonalContext;
use crate::error::{DomainError, IngestError, Result};
use crate::ingest;
use crate::rules::evaluate_hive;
use chrono::{DateTime, Utc};
use std::fs;

/// Evaluate a readings file once and print the active alerts
pub fn run_evaluate(args: &EvaluateArgs, format: OutputFormat) -> Result<()> {
    let now = match &args.at {
        Some(at) => parse_instant(at)?,
        None => Utc::now(),
    };

    let contents = fs::read_to_string(&args.readings)
        .map_err(|e| IngestError::UnreadableInput(format!("{}: {}", args.readings, e)))?;
    let records = ingest::parse_records(&contents)?;
    let (readings, stats) = ingest::normalize(&records, &args.hive);

    log::info!(
        "evaluating hive {} with {} readings ({} records dropped)",
        args.hive,
        stats.accepted,
        stats.dropped
    );

    let season = SeasonalContext::for_instant(now);
    let instances = evaluate_hive(&args.hive, &readings, now, &season);

    let filter = AlertFilter {
        dimension: args.dimension.map(Into::into),
        priority: args.priority.map(Into::into),
    };
    let filtered: Vec<_> = instances.into_iter().filter(|a| filter.matches(a)).collect();

    let mut report = AlertReport::new(&args.hive, now.to_rfc3339(), filtered);
    // Priority descending, most recent first: same order the aggregator
    // serves its query views in.
    report.alerts.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then(b.timestamp.cmp(&a.timestamp))
    });

    print_output(&report, format)?;
    Ok(())
}

fn parse_instant(text: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DomainError::InvalidValue(format!("--at '{}': {}", text, e)).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_instant_accepts_rfc3339() {
        let instant = parse_instant("2025-06-10T12:00:00Z").unwrap();
        assert_eq!(instant.to_rfc3339(), "2025-06-10T12:00:00+00:00");
    }

    #[test]
    fn test_parse_instant_rejects_garbage() {
        assert!(parse_instant("yesterday").is_err());
    }
}
