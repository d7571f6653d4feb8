//! Threshold configuration for the insight heuristics engine.
//!
//! The defaults reproduce the fixed rule table of the dashboard; the
//! builder allows a host application to tune individual cutoffs.

use serde::{Deserialize, Serialize};

/// Cutoffs used by the insight rule table.
///
/// Use [`InsightThresholds::builder()`] to create a customized set.
///
/// # Example
///
/// ```rust,ignore
/// use eda_profiling::InsightThresholds;
///
/// let thresholds = InsightThresholds::builder()
///     .large_row_count(1_000_000)
///     .high_missing_percentage(30.0)
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightThresholds {
    /// Row count above which a table counts as a large dataset.
    /// Default: 100,000
    pub large_row_count: usize,

    /// Row count below which a table counts as a small dataset.
    /// Default: 100
    pub small_row_count: usize,

    /// Overall missing percentage above which missingness is high.
    /// Default: 20.0
    pub high_missing_percentage: f64,

    /// Overall missing percentage above which missingness is moderate.
    /// Default: 5.0
    pub moderate_missing_percentage: f64,

    /// Duplicate-row percentage above which deduplication is advised.
    /// Default: 5.0
    pub duplicate_percentage: f64,

    /// Factor by which one column kind must outnumber the other before the
    /// table counts as numerical- or categorical-heavy.
    /// Default: 2.0
    pub imbalance_ratio: f64,

    /// Estimated memory footprint above which usage counts as high.
    /// Default: 100 MB
    pub high_memory_bytes: usize,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            large_row_count: 100_000,
            small_row_count: 100,
            high_missing_percentage: 20.0,
            moderate_missing_percentage: 5.0,
            duplicate_percentage: 5.0,
            imbalance_ratio: 2.0,
            high_memory_bytes: 100 * 1024 * 1024,
        }
    }
}

impl InsightThresholds {
    /// Create a new thresholds builder.
    pub fn builder() -> InsightThresholdsBuilder {
        InsightThresholdsBuilder::default()
    }

    /// Validate the thresholds and return errors if inconsistent.
    pub fn validate(&self) -> Result<(), ThresholdValidationError> {
        if self.small_row_count >= self.large_row_count {
            return Err(ThresholdValidationError::InvertedRowBounds {
                small: self.small_row_count,
                large: self.large_row_count,
            });
        }

        for (field, value) in [
            ("high_missing_percentage", self.high_missing_percentage),
            (
                "moderate_missing_percentage",
                self.moderate_missing_percentage,
            ),
            ("duplicate_percentage", self.duplicate_percentage),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(ThresholdValidationError::InvalidPercentage {
                    field: field.to_string(),
                    value,
                });
            }
        }

        if self.moderate_missing_percentage >= self.high_missing_percentage {
            return Err(ThresholdValidationError::InvertedMissingBounds {
                moderate: self.moderate_missing_percentage,
                high: self.high_missing_percentage,
            });
        }

        if self.imbalance_ratio < 1.0 {
            return Err(ThresholdValidationError::InvalidImbalanceRatio(
                self.imbalance_ratio,
            ));
        }

        Ok(())
    }
}

/// Errors that can occur during threshold validation.
#[derive(Debug, thiserror::Error)]
pub enum ThresholdValidationError {
    #[error("Invalid percentage for '{field}': {value} (must be between 0.0 and 100.0)")]
    InvalidPercentage { field: String, value: f64 },

    #[error("small_row_count ({small}) must be below large_row_count ({large})")]
    InvertedRowBounds { small: usize, large: usize },

    #[error("moderate_missing_percentage ({moderate}) must be below high_missing_percentage ({high})")]
    InvertedMissingBounds { moderate: f64, high: f64 },

    #[error("Invalid imbalance ratio: {0} (must be at least 1.0)")]
    InvalidImbalanceRatio(f64),
}

/// Builder for [`InsightThresholds`] with fluent API.
#[derive(Debug, Default)]
pub struct InsightThresholdsBuilder {
    large_row_count: Option<usize>,
    small_row_count: Option<usize>,
    high_missing_percentage: Option<f64>,
    moderate_missing_percentage: Option<f64>,
    duplicate_percentage: Option<f64>,
    imbalance_ratio: Option<f64>,
    high_memory_bytes: Option<usize>,
}

impl InsightThresholdsBuilder {
    /// Set the large-dataset row cutoff.
    pub fn large_row_count(mut self, rows: usize) -> Self {
        self.large_row_count = Some(rows);
        self
    }

    /// Set the small-dataset row cutoff.
    pub fn small_row_count(mut self, rows: usize) -> Self {
        self.small_row_count = Some(rows);
        self
    }

    /// Set the high-missingness percentage cutoff.
    pub fn high_missing_percentage(mut self, pct: f64) -> Self {
        self.high_missing_percentage = Some(pct);
        self
    }

    /// Set the moderate-missingness percentage cutoff.
    pub fn moderate_missing_percentage(mut self, pct: f64) -> Self {
        self.moderate_missing_percentage = Some(pct);
        self
    }

    /// Set the duplicate-row percentage cutoff.
    pub fn duplicate_percentage(mut self, pct: f64) -> Self {
        self.duplicate_percentage = Some(pct);
        self
    }

    /// Set the numeric/categorical imbalance factor.
    pub fn imbalance_ratio(mut self, ratio: f64) -> Self {
        self.imbalance_ratio = Some(ratio);
        self
    }

    /// Set the high-memory cutoff in bytes.
    pub fn high_memory_bytes(mut self, bytes: usize) -> Self {
        self.high_memory_bytes = Some(bytes);
        self
    }

    /// Build the thresholds.
    ///
    /// Returns validated [`InsightThresholds`] or an error if validation
    /// fails.
    pub fn build(self) -> Result<InsightThresholds, ThresholdValidationError> {
        let defaults = InsightThresholds::default();
        let thresholds = InsightThresholds {
            large_row_count: self.large_row_count.unwrap_or(defaults.large_row_count),
            small_row_count: self.small_row_count.unwrap_or(defaults.small_row_count),
            high_missing_percentage: self
                .high_missing_percentage
                .unwrap_or(defaults.high_missing_percentage),
            moderate_missing_percentage: self
                .moderate_missing_percentage
                .unwrap_or(defaults.moderate_missing_percentage),
            duplicate_percentage: self
                .duplicate_percentage
                .unwrap_or(defaults.duplicate_percentage),
            imbalance_ratio: self.imbalance_ratio.unwrap_or(defaults.imbalance_ratio),
            high_memory_bytes: self.high_memory_bytes.unwrap_or(defaults.high_memory_bytes),
        };

        thresholds.validate()?;
        Ok(thresholds)
    }
}
