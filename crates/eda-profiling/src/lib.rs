//! EDA Profiling Library
//!
//! The analysis core of an exploratory-data-analysis dashboard, built with
//! Rust and Polars.
//!
//! # Overview
//!
//! Given a tabular dataset loaded from CSV, this library computes:
//!
//! - **Table Profile**: per-column and per-table descriptive statistics
//!   (counts, kinds, null metrics, numeric moments, categorical
//!   frequencies, estimated memory footprint)
//! - **Quality Report**: missing-value findings per column and duplicate
//!   row detection
//! - **Insights**: rule-based human-readable advisories derived from the
//!   profile metrics
//!
//! Rendering is a caller's concern: everything this library produces is a
//! plain serializable value. All analysis functions are pure and total over
//! any well-formed table, including empty tables.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use eda_profiling::{
//!     loader, DataProfiler, InsightEngine, QualityAssessor, SessionStore,
//! };
//!
//! // Load data at the boundary; parse failures are recoverable
//! let df = loader::load_csv("data.csv")?;
//!
//! // Option 1: Call the components directly
//! let profile = DataProfiler::profile_table(&df)?;
//! let quality = QualityAssessor::assess(&profile, &df)?;
//! let insights = InsightEngine::default().evaluate(&profile);
//!
//! for insight in &insights {
//!     println!("[{}] {}", insight.kind.display_name(), insight.message);
//! }
//!
//! // Option 2: Hold tables in an explicit per-session store
//! let store = SessionStore::new();
//! store.put("session-1", df);
//! let report = store.analyze("session-1")?;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! ```
//!
//! # Thresholds
//!
//! The insight rule cutoffs can be tuned with [`InsightThresholds`]:
//!
//! ```rust,ignore
//! use eda_profiling::{InsightEngine, InsightThresholds};
//!
//! let thresholds = InsightThresholds::builder()
//!     .large_row_count(1_000_000)
//!     .high_missing_percentage(30.0)
//!     .build()?;
//!
//! let engine = InsightEngine::new(thresholds);
//! ```

pub mod config;
pub mod error;
pub mod insights;
pub mod loader;
pub mod preview;
pub mod profiler;
pub mod quality;
pub mod reporting;
pub mod session;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use config::{InsightThresholds, InsightThresholdsBuilder, ThresholdValidationError};
pub use error::{EdaError, Result as EdaResult, ResultExt};
pub use insights::InsightEngine;
pub use loader::{load_csv, load_csv_bytes};
pub use profiler::DataProfiler;
pub use quality::QualityAssessor;
pub use reporting::{AnalysisReport, ReportGenerator};
pub use session::SessionStore;
pub use types::{
    CategoricalSummary, ColumnKind, ColumnProfile, Insight, InsightKind, MissingValueEntry,
    NumericSummary, QualityReport, TableProfile,
};
pub use utils::{bytes_to_mb, column_kind, is_numeric_dtype};
