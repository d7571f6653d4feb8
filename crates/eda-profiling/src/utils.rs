//! Shared utilities for the EDA analysis core.

use crate::types::ColumnKind;
use polars::prelude::*;

// =============================================================================
// Data Type Utilities
// =============================================================================

/// Check if a DataType is numeric (integer, unsigned or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Check if a DataType is categorical-like for summary purposes. Booleans
/// count as categorical.
#[inline]
pub fn is_categorical_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::String | DataType::Categorical(_, _) | DataType::Boolean
    )
}

/// Classify a dtype into its semantic column kind.
pub fn column_kind(dtype: &DataType) -> ColumnKind {
    if is_numeric_dtype(dtype) {
        ColumnKind::Numeric
    } else if is_categorical_dtype(dtype) {
        ColumnKind::Categorical
    } else {
        ColumnKind::Other
    }
}

// =============================================================================
// Numeric Formatting Utilities
// =============================================================================

/// Round to two decimal places, as the missing-value report requires.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert a byte count to megabytes for display.
#[inline]
pub fn bytes_to_mb(bytes: usize) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

// =============================================================================
// Tests
// =============================================================================
