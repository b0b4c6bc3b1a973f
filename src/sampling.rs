//! Duplicate-free random sampling (partial Fisher-Yates).
//!
//! Results come back in draw order. Each `k`-subset of the population is
//! equally likely.

use crate::error::UtilError;
use rand::Rng;
use std::collections::HashMap;
use tracing::warn;

/// Pick `k` distinct elements from `items`.
pub fn try_sample_unique<T: Clone>(
    items: &[T],
    k: usize,
    rng: &mut impl Rng,
) -> Result<Vec<T>, UtilError> {
    let n = items.len();
    if k > n {
        return Err(UtilError::SampleTooLarge {
            requested: k,
            available: n as u64,
        });
    }

    let mut pool = items.to_vec();
    for i in 0..k {
        let j = rng.gen_range(i..n);
        pool.swap(i, j);
    }
    pool.truncate(k);
    Ok(pool)
}

/// Like [`try_sample_unique`], but a request larger than the population
/// logs a warning and yields an empty vector.
pub fn sample_unique<T: Clone>(items: &[T], k: usize, rng: &mut impl Rng) -> Vec<T> {
    try_sample_unique(items, k, rng).unwrap_or_else(|e| {
        warn!("sample_unique: {}", e);
        Vec::new()
    })
}

/// Number of integers in `[min, max]`; zero when the range is inverted.
pub fn range_size(min: i32, max: i32) -> u64 {
    if max < min {
        0
    } else {
        (max as i64 - min as i64 + 1) as u64
    }
}

/// Pick `count` distinct integers from the closed range `[min, max]`.
///
/// The range is never materialised: displaced positions are tracked in a
/// sparse map, so memory is proportional to `count`.
pub fn try_sample_unique_ints(
    min: i32,
    max: i32,
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<i32>, UtilError> {
    let available = range_size(min, max);
    if count as u64 > available {
        return Err(UtilError::SampleTooLarge {
            requested: count,
            available,
        });
    }

    let mut displaced: HashMap<u64, u64> = HashMap::with_capacity(count);
    let mut result = Vec::with_capacity(count);
    for i in 0..count as u64 {
        let j = rng.gen_range(i..available);
        let picked = displaced.get(&j).copied().unwrap_or(j);
        let current = displaced.get(&i).copied().unwrap_or(i);
        displaced.insert(j, current);
        result.push((min as i64 + picked as i64) as i32);
    }
    Ok(result)
}

pub fn sample_unique_ints(min: i32, max: i32, count: usize, rng: &mut impl Rng) -> Vec<i32> {
    try_sample_unique_ints(min, max, count, rng).unwrap_or_else(|e| {
        warn!(min, max, "sample_unique_ints: {}", e);
        Vec::new()
    })
}
