//! Data profiling module for table analysis.
//!
//! This module computes the per-column and per-table descriptive statistics
//! behind the dashboard: counts, kinds, null and duplicate metrics, numeric
//! moments and categorical frequencies.

mod statistics;

use crate::error::Result;
use crate::types::{ColumnKind, ColumnProfile, TableProfile};
use crate::utils::column_kind;
use polars::prelude::*;

pub(crate) use statistics::{categorical_summary, numeric_summary};

/// Data profiler for analyzing table structure and characteristics.
///
/// Profiling is total over any well-formed table: empty tables and
/// single-column tables produce a profile without faulting, and all
/// percentages are zero-guarded.
pub struct DataProfiler;

impl DataProfiler {
    /// Profile an entire table.
    ///
    /// The memory figure is an estimate of the in-memory footprint, not
    /// exact byte accounting.
    pub fn profile_table(df: &DataFrame) -> Result<TableProfile> {
        let mut columns = Vec::with_capacity(df.width());
        for col in df.get_columns() {
            columns.push(Self::profile_column(col.as_materialized_series(), df.height())?);
        }

        let total_null_count = columns.iter().map(|c| c.null_count).sum();
        let memory_bytes = columns.iter().map(|c| c.memory_bytes).sum();

        // Count only repeat occurrences; the first occurrence of a repeated
        // row is not a duplicate. Polars row equality treats null == null.
        let duplicate_row_count = if df.height() == 0 {
            0
        } else {
            df.height()
                - df.unique::<&str, &str>(None, UniqueKeepStrategy::First, None)?
                    .height()
        };

        Ok(TableProfile {
            row_count: df.height(),
            column_count: df.width(),
            memory_bytes,
            total_null_count,
            duplicate_row_count,
            columns,
        })
    }

    fn profile_column(series: &Series, total_rows: usize) -> Result<ColumnProfile> {
        let dtype = format!("{:?}", series.dtype());
        let kind = column_kind(series.dtype());
        let null_count = series.null_count();
        let non_null_count = series.len() - null_count;
        let null_percentage = if total_rows == 0 {
            0.0
        } else {
            (null_count as f64 / total_rows as f64) * 100.0
        };
        let distinct_count = series.n_unique()?;

        let numeric = match kind {
            ColumnKind::Numeric => numeric_summary(series)?,
            _ => None,
        };
        let categorical = match kind {
            ColumnKind::Categorical => categorical_summary(series, total_rows)?,
            _ => None,
        };

        Ok(ColumnProfile {
            name: series.name().to_string(),
            dtype,
            kind,
            non_null_count,
            null_count,
            null_percentage,
            distinct_count,
            memory_bytes: series.estimated_size(),
            numeric,
            categorical,
        })
    }
}
