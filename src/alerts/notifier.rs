//! Alert notification channels
//!
//! Dispatches freshly recorded alerts to one or more channels. Only the
//! terminal channel ships today; the trait seam is where a webhook or
//! push channel would plug in.

use super::types::{AlertInstance, Priority};
use crate::error::Result;
use std::io::{self, Write};

/// Notification channel trait
pub trait Notifier: Send + Sync {
    /// Send a notification for an alert
    fn notify(&self, alert: &AlertInstance) -> Result<()>;

    /// Channel name for identification
    fn name(&self) -> &str;
}

/// Terminal/console notifier
///
/// Outputs alerts to stdout/stderr with colored formatting
pub struct TerminalNotifier {
    /// Use stderr instead of stdout
    use_stderr: bool,
    /// Use colors (ANSI escape codes)
    use_colors: bool,
}

impl TerminalNotifier {
    /// Create a new terminal notifier
    pub fn new() -> Self {
        Self {
            use_stderr: true,
            use_colors: Self::supports_color(),
        }
    }

    /// Create a notifier that uses stdout
    pub fn stdout() -> Self {
        Self {
            use_stderr: false,
            use_colors: Self::supports_color(),
        }
    }

    /// Create a notifier without colors
    pub fn no_color() -> Self {
        Self {
            use_stderr: true,
            use_colors: false,
        }
    }

    /// Check if terminal supports colors
    fn supports_color() -> bool {
        std::env::var("TERM")
            .map(|term| term != "dumb")
            .unwrap_or(false)
    }

    /// Format alert for the terminal
    fn format_alert(&self, alert: &AlertInstance) -> String {
        format!(
            "[{}] {} hive {}: {} (observed {:.1}{})",
            alert.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.format_priority(alert.priority),
            alert.hive_id,
            alert.triggering_condition,
            alert.observed_value,
            alert.unit
        )
    }

    /// Format priority with colors
    fn format_priority(&self, priority: Priority) -> String {
        if !self.use_colors {
            return format!("{}", priority);
        }

        let (color_code, text) = match priority {
            Priority::Informational => ("\x1b[36m", "INFORMATIONAL"), // Cyan
            Priority::Medium => ("\x1b[32m", "MEDIUM"),               // Green
            Priority::Preventive => ("\x1b[33m", "PREVENTIVE"),       // Yellow
            Priority::High => ("\x1b[35m", "HIGH"),                   // Magenta
            Priority::Critical => ("\x1b[31m\x1b[1m", "CRITICAL"),    // Bold Red
        };

        format!("{}{}\x1b[0m", color_code, text)
    }
}

impl Default for TerminalNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, alert: &AlertInstance) -> Result<()> {
        let message = self.format_alert(alert);

        if self.use_stderr {
            let stderr = io::stderr();
            let mut handle = stderr.lock();
            writeln!(handle, "{}", message)?;
        } else {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", message)?;
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "terminal"
    }
}

/// Notification manager
///
/// Fans a fresh alert out to every registered channel; a failing channel
/// is logged and skipped so the batch always completes.
pub struct NotificationManager {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotificationManager {
    /// Create a new notification manager
    pub fn new() -> Self {
        Self {
            notifiers: Vec::new(),
        }
    }

    /// Add a notifier
    pub fn add_notifier(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Send notification to all channels
    pub fn notify_all(&self, alert: &AlertInstance) {
        for notifier in &self.notifiers {
            if let Err(e) = notifier.notify(alert) {
                log::warn!("Failed to notify via {}: {}", notifier.name(), e);
            }
        }
    }

    /// Send notifications for multiple alerts
    pub fn notify_batch(&self, alerts: &[AlertInstance]) {
        for alert in alerts {
            self.notify_all(alert);
        }
    }

    /// Get number of active notifiers
    pub fn notifier_count(&self) -> usize {
        self.notifiers.len()
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        let mut manager = Self::new();
        manager.add_notifier(Box::new(TerminalNotifier::new()));
        manager
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::Dimension;
    use crate::rules::RuleId;
    use chrono::{TimeZone, Utc};

    fn alert() -> AlertInstance {
        AlertInstance {
            rule_id: RuleId::TempCriticaAlta,
            hive_id: "hive-1".to_string(),
            node_id: Some("node-1".to_string()),
            dimension: Dimension::Temperature,
            priority: Priority::Critical,
            observed_value: 39.0,
            unit: "°C",
            triggering_condition: "interior temperature above 38°C sustained over 24h".to_string(),
            event_count: Some(8),
            timestamp: Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap(),
            recommended_actions: vec!["Provide shade".to_string()],
        }
    }

    #[test]
    fn test_terminal_notifier_creation() {
        let notifier = TerminalNotifier::new();
        assert_eq!(notifier.name(), "terminal");
        assert!(notifier.use_stderr);
    }

    #[test]
    fn test_terminal_notifier_stdout() {
        let notifier = TerminalNotifier::stdout();
        assert!(!notifier.use_stderr);
    }

    #[test]
    fn test_format_priority_without_colors() {
        let notifier = TerminalNotifier::no_color();
        assert_eq!(notifier.format_priority(Priority::Critical), "CRITICAL");
        assert_eq!(notifier.format_priority(Priority::Preventive), "PREVENTIVE");
    }

    #[test]
    fn test_format_alert_carries_condition_and_value() {
        let notifier = TerminalNotifier::no_color();
        let message = notifier.format_alert(&alert());
        assert!(message.contains("hive hive-1"));
        assert!(message.contains("39.0°C"));
        assert!(message.contains("sustained over 24h"));
    }

    #[test]
    fn test_notification_manager_default_has_terminal() {
        let manager = NotificationManager::default();
        assert_eq!(manager.notifier_count(), 1);
    }

    #[test]
    fn test_notify_batch() {
        let manager = NotificationManager::new();
        // No channels registered: batch is a no-op, never an error.
        manager.notify_batch(&[alert(), alert()]);
    }
}
