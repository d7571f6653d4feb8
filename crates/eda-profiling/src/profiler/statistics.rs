//! Descriptive statistics for column profiling.

use crate::error::Result;
use crate::types::{CategoricalSummary, NumericSummary};
use polars::prelude::*;
use std::collections::HashMap;

/// Summarize a numeric column over its non-null values.
///
/// Returns `None` when the column has no non-null values; the statistics
/// are then "not available" rather than zero.
pub(crate) fn numeric_summary(series: &Series) -> Result<Option<NumericSummary>> {
    let non_null = series.drop_nulls();
    if non_null.is_empty() {
        return Ok(None);
    }

    let float_series = non_null.cast(&DataType::Float64)?;
    let values: Vec<f64> = float_series.f64()?.into_iter().flatten().collect();
    if values.is_empty() {
        return Ok(None);
    }

    let mut sorted = values.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let std = calculate_std(&values, mean);

    Ok(Some(NumericSummary {
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        mean,
        median: median_of_sorted(&sorted),
        mode: mode_of_sorted(&sorted),
        std,
        skewness: calculate_skewness(&values, mean, std),
        kurtosis: calculate_kurtosis(&values, mean, std),
    }))
}

/// Sample standard deviation (n-1 denominator). Zero for fewer than two
/// values.
pub(crate) fn calculate_std(values: &[f64], mean: f64) -> f64 {
    let n = values.len() as f64;
    if n <= 1.0 {
        return 0.0;
    }

    let variance: f64 = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

/// Skewness from standardized third moments. Zero when std is zero.
pub(crate) fn calculate_skewness(values: &[f64], mean: f64, std: f64) -> f64 {
    if std == 0.0 || values.is_empty() {
        return 0.0;
    }

    let n = values.len() as f64;
    let skew_sum: f64 = values.iter().map(|v| ((v - mean) / std).powi(3)).sum();
    skew_sum / n
}

/// Excess kurtosis from standardized fourth moments. Zero when std is zero.
pub(crate) fn calculate_kurtosis(values: &[f64], mean: f64, std: f64) -> f64 {
    if std == 0.0 || values.is_empty() {
        return 0.0;
    }

    let n = values.len() as f64;
    let kurt_sum: f64 = values.iter().map(|v| ((v - mean) / std).powi(4)).sum();
    kurt_sum / n - 3.0
}

/// Median of an already-sorted slice.
pub(crate) fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Most frequent value of an already-sorted slice. Equal values are
/// adjacent after sorting, so a single run scan finds the mode; because the
/// scan keeps the first run of maximal length, ties break toward the
/// smallest value.
pub(crate) fn mode_of_sorted(sorted: &[f64]) -> f64 {
    let mut mode = sorted[0];
    let mut best_run = 0usize;
    let mut run_value = sorted[0];
    let mut run_len = 0usize;

    for &v in sorted {
        if v == run_value {
            run_len += 1;
        } else {
            run_value = v;
            run_len = 1;
        }
        if run_len > best_run {
            best_run = run_len;
            mode = run_value;
        }
    }

    mode
}

/// Summarize a categorical column: most frequent value, its count and its
/// share of total rows (nulls included in the denominator).
///
/// Returns `None` when the column has no non-null values. Ties break toward
/// the lexicographically smallest value rendering.
pub(crate) fn categorical_summary(
    series: &Series,
    total_rows: usize,
) -> Result<Option<CategoricalSummary>> {
    let non_null = series.drop_nulls();
    if non_null.is_empty() {
        return Ok(None);
    }

    let str_series = non_null.cast(&DataType::String)?;
    let str_chunked = str_series.str()?;

    let mut value_counts: HashMap<String, usize> = HashMap::new();
    for val in str_chunked.into_iter().flatten() {
        *value_counts.entry(val.to_string()).or_insert(0) += 1;
    }

    let (most_frequent, most_frequent_count) = match value_counts
        .into_iter()
        .max_by(|(a_val, a_count), (b_val, b_count)| {
            a_count.cmp(b_count).then_with(|| b_val.cmp(a_val))
        }) {
        Some(entry) => entry,
        None => return Ok(None),
    };

    let most_frequent_percentage = if total_rows == 0 {
        0.0
    } else {
        (most_frequent_count as f64 / total_rows as f64) * 100.0
    };

    Ok(Some(CategoricalSummary {
        most_frequent,
        most_frequent_count,
        most_frequent_percentage,
    }))
}
