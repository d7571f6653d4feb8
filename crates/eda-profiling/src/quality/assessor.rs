use crate::error::Result;
use crate::types::{MissingValueEntry, QualityReport, TableProfile};
use crate::utils::round2;
use polars::prelude::*;
use std::collections::HashSet;
use std::fmt::Write as _;

pub struct QualityAssessor;

impl QualityAssessor {
    /// Derive a quality report from a profile and its source table.
    ///
    /// Zero-row tables produce an empty report without faulting.
    pub fn assess(profile: &TableProfile, df: &DataFrame) -> Result<QualityReport> {
        let missing_values = Self::missing_value_report(profile);

        let mask = Self::duplicate_mask(df)?;
        let duplicate_rows = df.filter(&mask)?;
        let duplicate_row_count = duplicate_rows.height();
        let duplicate_percentage = if df.height() == 0 {
            0.0
        } else {
            (duplicate_row_count as f64 / df.height() as f64) * 100.0
        };

        Ok(QualityReport {
            missing_values,
            duplicate_row_count,
            duplicate_percentage,
            duplicate_rows,
        })
    }

    /// One entry per column with nulls, sorted by descending percentage.
    /// The sort is stable, so columns with equal percentages keep their
    /// source order.
    fn missing_value_report(profile: &TableProfile) -> Vec<MissingValueEntry> {
        let mut entries: Vec<MissingValueEntry> = profile
            .columns
            .iter()
            .filter(|col| col.null_count > 0)
            .map(|col| MissingValueEntry {
                column: col.name.clone(),
                null_count: col.null_count,
                null_percentage: round2(col.null_percentage),
            })
            .collect();

        entries.sort_by(|a, b| {
            b.null_percentage
                .partial_cmp(&a.null_percentage)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        entries
    }

    /// Mask of rows that repeat an earlier row. The first occurrence of a
    /// repeated row is not flagged.
    ///
    /// Rows are compared by the rendered values of every cell, so equality
    /// is exact per column dtype and null equals null, consistent with
    /// polars `unique` semantics used by the profiler.
    fn duplicate_mask(df: &DataFrame) -> Result<BooleanChunked> {
        let height = df.height();
        let series: Vec<&Series> = df
            .get_columns()
            .iter()
            .map(|col| col.as_materialized_series())
            .collect();

        let mut seen: HashSet<String> = HashSet::with_capacity(height);
        let mut mask = Vec::with_capacity(height);

        for row in 0..height {
            let mut key = String::new();
            for s in &series {
                let value = s.get(row)?;
                write!(key, "{:?}\u{1f}", value).expect("writing to String cannot fail");
            }
            mask.push(!seen.insert(key));
        }

        Ok(BooleanChunked::from_slice("duplicate".into(), &mask))
    }
}
