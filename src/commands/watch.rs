//! Watch command implementation
//!
//! Periodic re-evaluation loop. The scheduler lives here, outside the
//! engine: each tick re-reads the readings file, runs one evaluation
//! cycle with a fresh instant, and lets the notifier report whatever the
//! aggregator considers new.

use crate::cli::args::WatchArgs;
use crate::config::Settings;
use crate::error::{IngestError, Result};
use crate::ingest;
use crate::services::{EvaluationConfig, EvaluationService};
use chrono::Utc;
use std::fs;
use std::time::Duration;

/// Run the watch loop
pub fn run_watch(args: &WatchArgs, config_path: Option<&str>) -> Result<()> {
    let settings = Settings::load_or_default(config_path)?;
    settings.validate()?;

    if !settings.enabled {
        log::warn!("alerting is disabled in configuration, nothing to do");
        return Ok(());
    }

    let interval = Duration::from_secs(args.interval.unwrap_or(settings.poll_interval_secs));
    let mut service = EvaluationService::new(EvaluationConfig {
        enabled: true,
        max_history: settings.max_history,
    });

    println!(
        "Watching {} for hive {} (interval: {}s)",
        args.readings,
        args.hive,
        interval.as_secs()
    );
    println!("Press Ctrl+C to stop");

    loop {
        match tick(&mut service, args) {
            Ok(fresh) => {
                if fresh > 0 {
                    log::info!("{} new alert(s) for hive {}", fresh, args.hive);
                }
            }
            Err(e) => {
                // A transient read failure should not kill the loop.
                log::error!("evaluation tick failed: {}", e);
            }
        }

        std::thread::sleep(interval);
    }
}

fn tick(service: &mut EvaluationService, args: &WatchArgs) -> Result<usize> {
    let contents = fs::read_to_string(&args.readings)
        .map_err(|e| IngestError::UnreadableInput(format!("{}: {}", args.readings, e)))?;
    let records = ingest::parse_records(&contents)?;
    let (readings, stats) = ingest::normalize(&records, &args.hive);

    log::debug!(
        "tick for hive {}: {} readings, {} dropped",
        args.hive,
        stats.accepted,
        stats.dropped
    );

    let fresh = service.run_cycle(&args.hive, &readings, Utc::now());
    Ok(fresh.len())
}
