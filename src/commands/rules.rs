//! Rules command implementation
//!
//! Prints the static alert rule catalog.

use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, RuleList, RuleListEntry};
use crate::error::Result;
use crate::rules::rules;

/// Show the alert rule catalog
pub fn run_rules(format: OutputFormat) -> Result<()> {
    let list = RuleList {
        rules: rules().iter().map(RuleListEntry::from).collect(),
    };
    print_output(&list, format)?;
    Ok(())
}
