//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use crate::alerts::{Dimension, Priority};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Beehive telemetry alert engine
///
/// Evaluates sensor readings (temperature, humidity, hive weight) against
/// the colony-health rule catalog and reports prioritized alerts.
#[derive(Parser, Debug)]
#[command(name = "hivemon")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "HIVEMON_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the alert rule catalog
    Rules,

    /// Evaluate a readings file once and print the active alerts
    Evaluate(EvaluateArgs),

    /// Re-evaluate a readings file on an interval, notifying fresh alerts
    Watch(WatchArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the evaluate command
#[derive(Parser, Debug)]
pub struct EvaluateArgs {
    /// Raw readings file (JSON array of records)
    #[arg(long)]
    pub readings: String,

    /// Hive to evaluate
    #[arg(long)]
    pub hive: String,

    /// Evaluation instant, RFC 3339 (defaults to now)
    #[arg(long)]
    pub at: Option<String>,

    /// Only show alerts with this priority
    #[arg(long, value_enum)]
    pub priority: Option<PriorityArg>,

    /// Only show alerts for this sensor dimension
    #[arg(long, value_enum)]
    pub dimension: Option<DimensionArg>,
}

/// Arguments for the watch command
#[derive(Parser, Debug)]
pub struct WatchArgs {
    /// Raw readings file, re-read every tick
    #[arg(long)]
    pub readings: String,

    /// Hive to evaluate
    #[arg(long)]
    pub hive: String,

    /// Re-evaluation interval in seconds (overrides configuration)
    #[arg(long)]
    pub interval: Option<u64>,
}

/// Output format selection
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// Pretty-printed JSON
    Json,
    /// Single-line summary
    Compact,
}

/// Priority filter argument
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum PriorityArg {
    Critical,
    High,
    Preventive,
    Medium,
    Informational,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::Critical => Priority::Critical,
            PriorityArg::High => Priority::High,
            PriorityArg::Preventive => Priority::Preventive,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::Informational => Priority::Informational,
        }
    }
}

/// Dimension filter argument
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum DimensionArg {
    Temperature,
    Humidity,
    Weight,
}

impl From<DimensionArg> for Dimension {
    fn from(arg: DimensionArg) -> Self {
        match arg {
            DimensionArg::Temperature => Dimension::Temperature,
            DimensionArg::Humidity => Dimension::Humidity,
            DimensionArg::Weight => Dimension::Weight,
        }
    }
}

/// Print shell completions to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_evaluate() {
        let cli = Cli::try_parse_from([
            "hivemon",
            "evaluate",
            "--readings",
            "readings.json",
            "--hive",
            "hive-1",
            "--priority",
            "critical",
        ])
        .unwrap();

        match cli.command {
            Commands::Evaluate(args) => {
                assert_eq!(args.readings, "readings.json");
                assert_eq!(args.hive, "hive-1");
                assert!(matches!(args.priority, Some(PriorityArg::Critical)));
                assert!(args.at.is_none());
            }
            _ => panic!("expected evaluate command"),
        }
    }

    #[test]
    fn test_cli_parses_watch_with_interval() {
        let cli = Cli::try_parse_from([
            "hivemon",
            "watch",
            "--readings",
            "readings.json",
            "--hive",
            "hive-1",
            "--interval",
            "30",
        ])
        .unwrap();

        match cli.command {
            Commands::Watch(args) => assert_eq!(args.interval, Some(30)),
            _ => panic!("expected watch command"),
        }
    }

    #[test]
    fn test_cli_requires_hive_for_evaluate() {
        let result = Cli::try_parse_from(["hivemon", "evaluate", "--readings", "r.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_priority_arg_conversion() {
        let priority: Priority = PriorityArg::Preventive.into();
        assert_eq!(priority, Priority::Preventive);
    }
}
