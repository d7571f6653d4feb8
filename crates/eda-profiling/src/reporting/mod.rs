//! Report assembly module.
//!
//! Combines the profiler, quality assessor and insight engine outputs into
//! a single serializable [`AnalysisReport`] and writes it to disk when
//! asked.
//!
//! # Example
//!
//! ```rust,ignore
//! use eda_profiling::{InsightEngine, ReportGenerator};
//!
//! let report = ReportGenerator::build_report(&df, Some("data/train.csv"), &engine)?;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//!
//! let generator = ReportGenerator::new(PathBuf::from("outputs"), None);
//! generator.write_report_to_file(&report, "train")?;
//! ```

mod generator;

pub use generator::{AnalysisReport, ReportGenerator};
