use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

/// Semantic kind of a column, determined once from the machine dtype when
/// the table is profiled and never re-inferred per statistic call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Integer, unsigned or floating point columns.
    Numeric,
    /// String, categorical and boolean-like columns (booleans are treated
    /// as categorical for summary purposes).
    Categorical,
    /// Anything else (dates, nested types, ...).
    Other,
}

impl ColumnKind {
    /// Get a human-readable display name for the column kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Categorical => "categorical",
            Self::Other => "other",
        }
    }
}

/// Descriptive moments of a numeric column, computed over non-null values
/// only. Absent entirely (`None` on the profile) when the column has zero
/// non-null values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    /// Most frequent value; ties break toward the smallest value.
    pub mode: f64,
    /// Sample standard deviation (n-1). Zero for fewer than two values.
    pub std: f64,
    pub skewness: f64,
    /// Excess kurtosis.
    pub kurtosis: f64,
}

/// Frequency summary of a categorical column. Absent (`None` on the
/// profile) when the column has zero non-null values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalSummary {
    /// Most frequent value; ties break toward the lexicographically
    /// smallest rendering.
    pub most_frequent: String,
    pub most_frequent_count: usize,
    /// Share of total rows (nulls included in the denominator).
    pub most_frequent_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    pub dtype: String,
    pub kind: ColumnKind,
    pub non_null_count: usize,
    pub null_count: usize,
    pub null_percentage: f64,
    pub distinct_count: usize,
    /// Approximate in-memory footprint of this column in bytes. An
    /// estimate, not exact byte accounting.
    pub memory_bytes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categorical: Option<CategoricalSummary>,
}

/// Table-level descriptive statistics, recomputed on demand from the
/// current table snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableProfile {
    pub row_count: usize,
    pub column_count: usize,
    /// Approximate in-memory footprint of the table in bytes (sum of the
    /// per-column estimates). An estimate, not exact byte accounting.
    pub memory_bytes: usize,
    pub total_null_count: usize,
    /// Rows that are exact repeats of an earlier row (2nd..nth occurrences
    /// only; null equals null for this comparison).
    pub duplicate_row_count: usize,
    pub columns: Vec<ColumnProfile>,
}

impl TableProfile {
    /// Number of numeric columns.
    pub fn numeric_column_count(&self) -> usize {
        self.columns
            .iter()
            .filter(|c| c.kind == ColumnKind::Numeric)
            .count()
    }

    /// Number of categorical columns.
    pub fn categorical_column_count(&self) -> usize {
        self.columns
            .iter()
            .filter(|c| c.kind == ColumnKind::Categorical)
            .count()
    }

    /// Total number of cells (rows x columns).
    pub fn total_cell_count(&self) -> usize {
        self.row_count * self.column_count
    }

    /// Percentage of all cells that are null. Zero for tables with no
    /// cells, so empty tables never fault on division.
    pub fn overall_missing_percentage(&self) -> f64 {
        let cells = self.total_cell_count();
        if cells == 0 {
            0.0
        } else {
            (self.total_null_count as f64 / cells as f64) * 100.0
        }
    }

    /// Percentage of rows that are duplicates. Zero for empty tables.
    pub fn duplicate_percentage(&self) -> f64 {
        if self.row_count == 0 {
            0.0
        } else {
            (self.duplicate_row_count as f64 / self.row_count as f64) * 100.0
        }
    }
}

/// One missing-value finding for a column with at least one null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingValueEntry {
    pub column: String,
    pub null_count: usize,
    /// Rounded to two decimal places.
    pub null_percentage: f64,
}

/// Data-quality findings for a table: missingness per affected column and
/// the duplicate rows themselves.
///
/// The duplicate rows are kept as a `DataFrame` for display purposes and
/// are excluded from serialization.
#[derive(Debug, Clone, Serialize)]
pub struct QualityReport {
    /// One entry per column with nulls, sorted by descending percentage;
    /// columns without nulls are omitted.
    pub missing_values: Vec<MissingValueEntry>,
    pub duplicate_row_count: usize,
    pub duplicate_percentage: f64,
    /// The 2nd..nth occurrences of repeated rows, in source order.
    #[serde(skip)]
    pub duplicate_rows: DataFrame,
}

/// Classes of advisory messages the insight engine can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    LargeDataset,
    SmallDataset,
    HighMissingData,
    ModerateMissingData,
    CleanData,
    DuplicateConcern,
    NumericalHeavy,
    CategoricalHeavy,
    BalancedMix,
    HighMemoryUsage,
}

impl InsightKind {
    /// Get a human-readable display name for the insight kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::LargeDataset => "Large Dataset",
            Self::SmallDataset => "Small Dataset",
            Self::HighMissingData => "High Missing Data",
            Self::ModerateMissingData => "Moderate Missing Data",
            Self::CleanData => "Clean Data",
            Self::DuplicateConcern => "Duplicate Concern",
            Self::NumericalHeavy => "Numerical Heavy",
            Self::CategoricalHeavy => "Categorical Heavy",
            Self::BalancedMix => "Balanced Mix",
            Self::HighMemoryUsage => "High Memory Usage",
        }
    }
}

/// A tagged advisory produced by the insight engine. No persisted identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub message: String,
}

// ============================================================================
// Tests
// ============================================================================
