//! Alert rule catalog and evaluator
//!
//! One authoritative rule table, one shared interpreter. Rule logic lives
//! in data (thresholds, windows, gates) so no two call sites can drift.

pub mod actions;
pub mod catalog;
pub mod evaluator;

pub use actions::{actions_for, DEFAULT_ACTIONS};
pub use catalog::{
    rule, rules, Condition, RuleDef, RuleId, RuleKind, SeasonGate, MIN_SUSTAINED_EVENTS,
};
pub use evaluator::evaluate_hive;
