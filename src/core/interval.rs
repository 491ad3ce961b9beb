//! Half-open integer intervals
//!
//! The unit of data in interval mode. Intervals are never mutated; each stage
//! consumes a set and produces a fresh one.

use crate::core::error::{SeedError, SeedResult};

/// A half-open integer range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    pub start: u64,
    pub end: u64,
}

impl Interval {
    /// Create an interval; `end` is clamped so that `start <= end`
    pub fn new(start: u64, end: u64) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Build `[start, start + length)` from a seed pair
    ///
    /// # Examples
    /// ```
    /// use fast_remap::core::Interval;
    /// let iv = Interval::from_start_len(79, 14).unwrap();
    /// assert_eq!((iv.start, iv.end), (79, 93));
    /// ```
    pub fn from_start_len(start: u64, length: u64) -> SeedResult<Self> {
        let end = start
            .checked_add(length)
            .ok_or(SeedError::IntervalOverflow { start, length })?;
        Ok(Self { start, end })
    }

    /// Number of integers covered
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, value: u64) -> bool {
        self.start <= value && value < self.end
    }
}

/// Read a flat seed list as consecutive `(start, length)` pairs
pub fn intervals_from_seed_pairs(seeds: &[u64]) -> SeedResult<Vec<Interval>> {
    if seeds.len() % 2 != 0 {
        return Err(SeedError::UnpairedSeeds { count: seeds.len() });
    }
    seeds
        .chunks_exact(2)
        .map(|pair| Interval::from_start_len(pair[0], pair[1]))
        .collect()
}

/// Compute the intersection of two intervals
///
/// # Arguments
/// * `start1`, `end1` - First interval [start1, end1)
/// * `start2`, `end2` - Second interval [start2, end2)
///
/// # Returns
/// The intersection interval (start, end) or None if no overlap
#[inline]
pub fn intersect_intervals(start1: u64, end1: u64, start2: u64, end2: u64) -> Option<(u64, u64)> {
    if start1 >= end2 || end1 <= start2 {
        return None;
    }
    Some((start1.max(start2), end1.min(end2)))
}
