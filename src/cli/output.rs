//! Output formatting utilities
//!
//! Provides table and JSON output formatting for CLI commands.

use crate::alerts::AlertInstance;
use crate::cli::args::OutputFormat;
use crate::rules::RuleDef;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Table => {
            writeln!(handle, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            writeln!(handle, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(handle, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// Rule catalog entry for display
#[derive(Debug, Clone, Serialize)]
pub struct RuleListEntry {
    pub id: String,
    pub name: String,
    pub dimension: String,
    pub priority: String,
    pub gate: String,
    pub condition: String,
}

impl From<&RuleDef> for RuleListEntry {
    fn from(def: &RuleDef) -> Self {
        Self {
            id: def.id.to_string(),
            name: def.name.to_string(),
            dimension: def.dimension.to_string(),
            priority: def.priority.to_string(),
            gate: def.gate.to_string(),
            condition: def.summary.to_string(),
        }
    }
}

impl TableDisplay for RuleListEntry {
    fn to_table(&self) -> String {
        format!(
            "[{}] {} ({}, gate: {})\n    {}",
            self.priority, self.name, self.id, self.gate, self.condition
        )
    }

    fn to_compact(&self) -> String {
        format!("{}:{}", self.id, self.priority)
    }
}

/// Rule catalog for display
#[derive(Debug, Clone, Serialize)]
pub struct RuleList {
    pub rules: Vec<RuleListEntry>,
}

impl TableDisplay for RuleList {
    fn to_table(&self) -> String {
        let mut output = format!("Alert Rules: {}\n\n", self.rules.len());

        for rule in &self.rules {
            output.push_str(&rule.to_table());
            output.push('\n');
        }

        output
    }

    fn to_compact(&self) -> String {
        self.rules
            .iter()
            .map(|r| r.to_compact())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One evaluation cycle's alerts for display
#[derive(Debug, Clone, Serialize)]
pub struct AlertReport {
    pub hive_id: String,
    pub evaluated_at: String,
    pub counts: BTreeMap<String, usize>,
    pub alerts: Vec<AlertInstance>,
}

impl AlertReport {
    pub fn new(hive_id: &str, evaluated_at: String, alerts: Vec<AlertInstance>) -> Self {
        let mut counts = BTreeMap::new();
        for alert in &alerts {
            *counts.entry(alert.priority.to_string()).or_insert(0) += 1;
        }
        Self {
            hive_id: hive_id.to_string(),
            evaluated_at,
            counts,
            alerts,
        }
    }
}

impl TableDisplay for AlertReport {
    fn to_table(&self) -> String {
        let mut output = format!(
            "Hive {} at {}: {} alert(s)\n",
            self.hive_id,
            self.evaluated_at,
            self.alerts.len()
        );

        for alert in &self.alerts {
            output.push_str(&format!(
                "\n[{}] {}\n    observed: {:.1}{}",
                alert.priority, alert.triggering_condition, alert.observed_value, alert.unit
            ));
            if let Some(count) = alert.event_count {
                output.push_str(&format!(" ({} qualifying readings)", count));
            }
            output.push('\n');
            for action in &alert.recommended_actions {
                output.push_str(&format!("    - {}\n", action));
            }
        }

        output
    }

    fn to_compact(&self) -> String {
        if self.alerts.is_empty() {
            return format!("{}: no alerts", self.hive_id);
        }
        let summary = self
            .alerts
            .iter()
            .map(|a| format!("{}:{}", a.rule_id, a.priority))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}: {}", self.hive_id, summary)
    }
}
