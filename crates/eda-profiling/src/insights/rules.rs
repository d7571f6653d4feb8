//! Rule-based insight engine using heuristics over profile metrics.

use crate::config::InsightThresholds;
use crate::types::{Insight, InsightKind, TableProfile};
use crate::utils::bytes_to_mb;
use tracing::debug;

/// Rule-based insight engine.
///
/// Evaluates a fixed decision table in order; each rule appends at most one
/// advisory. Within the missing-data and column-balance groups exactly one
/// message always fires; empty tables fall into the "clean data" and
/// "balanced mix" branches by convention, so no rule ever divides by zero.
#[derive(Debug, Clone, Default)]
pub struct InsightEngine {
    thresholds: InsightThresholds,
}

impl InsightEngine {
    pub fn new(thresholds: InsightThresholds) -> Self {
        Self { thresholds }
    }

    /// Evaluate all rules against a profile, in table order.
    pub fn evaluate(&self, profile: &TableProfile) -> Vec<Insight> {
        let t = &self.thresholds;
        let mut insights = Vec::new();

        // Dataset size: large and small are mutually exclusive.
        if profile.row_count > t.large_row_count {
            insights.push(Insight {
                kind: InsightKind::LargeDataset,
                message: format!(
                    "Large dataset: {} rows. Consider sampling for initial exploration.",
                    profile.row_count
                ),
            });
        } else if profile.row_count < t.small_row_count {
            insights.push(Insight {
                kind: InsightKind::SmallDataset,
                message: format!(
                    "Small dataset: {} rows. Statistical analyses may have limited power.",
                    profile.row_count
                ),
            });
        }

        // Missingness: exactly one of the three branches fires.
        let missing_pct = profile.overall_missing_percentage();
        if missing_pct > t.high_missing_percentage {
            insights.push(Insight {
                kind: InsightKind::HighMissingData,
                message: format!(
                    "High missing data: {:.1}% of values are missing. Consider imputation strategies.",
                    missing_pct
                ),
            });
        } else if missing_pct > t.moderate_missing_percentage {
            insights.push(Insight {
                kind: InsightKind::ModerateMissingData,
                message: format!(
                    "Moderate missing data: {:.1}% of values are missing. Review missing data patterns.",
                    missing_pct
                ),
            });
        } else {
            insights.push(Insight {
                kind: InsightKind::CleanData,
                message: "Clean data: low missing value percentage. Good data quality.".to_string(),
            });
        }

        let duplicate_pct = profile.duplicate_percentage();
        if duplicate_pct > t.duplicate_percentage {
            insights.push(Insight {
                kind: InsightKind::DuplicateConcern,
                message: format!(
                    "Duplicate concern: {:.1}% duplicate rows found. Consider deduplication.",
                    duplicate_pct
                ),
            });
        }

        // Column balance: exactly one of the three branches fires.
        let numeric = profile.numeric_column_count() as f64;
        let categorical = profile.categorical_column_count() as f64;
        if numeric > categorical * t.imbalance_ratio {
            insights.push(Insight {
                kind: InsightKind::NumericalHeavy,
                message: "Numerical heavy: the table is primarily numeric. Well suited for statistical analysis."
                    .to_string(),
            });
        } else if categorical > numeric * t.imbalance_ratio {
            insights.push(Insight {
                kind: InsightKind::CategoricalHeavy,
                message: "Categorical heavy: the table is primarily categorical. Consider encoding strategies."
                    .to_string(),
            });
        } else {
            insights.push(Insight {
                kind: InsightKind::BalancedMix,
                message: "Balanced mix: good balance of numeric and categorical columns.".to_string(),
            });
        }

        if profile.memory_bytes > t.high_memory_bytes {
            insights.push(Insight {
                kind: InsightKind::HighMemoryUsage,
                message: format!(
                    "High memory usage: roughly {:.1} MB in memory. Consider optimizing column types.",
                    bytes_to_mb(profile.memory_bytes)
                ),
            });
        }

        debug!("Insight engine produced {} advisories", insights.len());
        insights
    }
}
