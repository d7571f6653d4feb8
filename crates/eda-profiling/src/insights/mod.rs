//! Insight heuristics module.
//!
//! Applies a fixed, ordered decision table over profile metrics to emit
//! human-readable advisory messages.

mod rules;

pub use rules::InsightEngine;
