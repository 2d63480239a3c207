//! Business logic services
//!
//! Service layer wiring the ingest adapter, rule evaluator, and alert
//! aggregator into evaluation cycles.

pub mod evaluation;

pub use evaluation::{EvaluationConfig, EvaluationService};
