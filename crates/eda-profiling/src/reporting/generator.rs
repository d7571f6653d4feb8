use crate::error::Result;
use crate::insights::InsightEngine;
use crate::profiler::DataProfiler;
use crate::quality::QualityAssessor;
use crate::types::{Insight, QualityReport, TableProfile};
use chrono::Local;
use polars::prelude::*;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Combined analysis output for one table: descriptive statistics, quality
/// findings and advisory insights.
///
/// The report is a plain value; rendering belongs to the caller. The
/// duplicate rows inside the quality report are excluded from
/// serialization.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Timestamp when the report was generated.
    pub generated_at: String,
    /// Source the table was loaded from, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub profile: TableProfile,
    pub quality: QualityReport,
    pub insights: Vec<Insight>,
}

pub struct ReportGenerator {
    output_dir: PathBuf,
    output_name: Option<String>,
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./outputs"),
            output_name: None,
        }
    }
}

impl ReportGenerator {
    /// Create a new ReportGenerator with custom output settings.
    pub fn new(output_dir: PathBuf, output_name: Option<String>) -> Self {
        Self {
            output_dir,
            output_name,
        }
    }

    /// Run the full analysis over a table and assemble the report.
    pub fn build_report(
        df: &DataFrame,
        source: Option<&str>,
        engine: &InsightEngine,
    ) -> Result<AnalysisReport> {
        let profile = DataProfiler::profile_table(df)?;
        let quality = QualityAssessor::assess(&profile, df)?;
        let insights = engine.evaluate(&profile);

        Ok(AnalysisReport {
            generated_at: Local::now().to_rfc3339(),
            source: source.map(str::to_string),
            profile,
            quality,
            insights,
        })
    }

    /// Write a report to `<output_dir>/<stem>_report.json` and return the
    /// path.
    pub fn write_report_to_file(&self, report: &AnalysisReport, stem: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let file_stem = self.output_name.as_deref().unwrap_or(stem);
        let path = self.output_dir.join(format!("{}_report.json", file_stem));

        let json = serde_json::to_string_pretty(report)?;
        let mut file = File::create(&path)?;
        file.write_all(json.as_bytes())?;

        info!("Analysis report written to: {}", path.display());
        Ok(path)
    }
}
