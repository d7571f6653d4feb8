//! Data quality analysis module.
//!
//! Derives missing-value and duplicate-row findings from a table profile
//! and the source table.

mod assessor;

pub use assessor::QualityAssessor;
