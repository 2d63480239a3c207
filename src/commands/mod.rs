//! Command handlers
//!
//! One module per CLI subcommand.

pub mod evaluate;
pub mod rules;
pub mod watch;

pub use evaluate::run_evaluate;
pub use rules::run_rules;
pub use watch::run_watch;
