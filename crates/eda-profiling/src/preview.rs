//! Table preview helpers for the dashboard's data-preview surface.
//!
//! Pure functions over the table snapshot; sampling is seeded so repeated
//! renders of the same table show the same rows.

use crate::error::Result;
use polars::prelude::*;
use rand::prelude::*;

const SAMPLE_SEED: u64 = 42;

/// First `n` rows (clamped to the table height).
pub fn head(df: &DataFrame, n: usize) -> DataFrame {
    df.head(Some(n))
}

/// Last `n` rows (clamped to the table height).
pub fn tail(df: &DataFrame, n: usize) -> DataFrame {
    df.tail(Some(n))
}

/// A deterministic random sample of up to `n` rows, without replacement,
/// in source row order.
pub fn sample(df: &DataFrame, n: usize) -> Result<DataFrame> {
    let n = std::cmp::min(n, df.height());
    if n == 0 {
        return Ok(df.head(Some(0)));
    }

    let mut rng = StdRng::seed_from_u64(SAMPLE_SEED);
    let indices: Vec<usize> = (0..df.height()).collect();
    let mut sampled: Vec<IdxSize> = indices
        .choose_multiple(&mut rng, n)
        .map(|&i| i as IdxSize)
        .collect();
    sampled.sort_unstable();

    let idx = IdxCa::from_vec("idx".into(), sampled);
    Ok(df.take(&idx)?)
}
