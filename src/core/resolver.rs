//! Minimum resolution over a full run
//!
//! Ties the pieces together: validates the input, builds the chain once, maps
//! the seeds in the requested mode and scans the final set for its minimum.

use crate::core::chain::StageChain;
use crate::core::error::{EmptyInputError, FastRemapError, Result};
use crate::core::interval::{intervals_from_seed_pairs, Interval};
use crate::core::mapper::{map_intervals, map_value, par_map_intervals, par_map_values};
use crate::core::stage::RawStage;

/// How seed numbers are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Each seed is a single value
    #[default]
    Point,
    /// Seeds are consecutive (start, length) pairs
    Interval,
}

impl Mode {
    /// Parse from string (for CLI argument)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "point" | "single" | "values" => Some(Mode::Point),
            "interval" | "range" | "ranges" => Some(Mode::Interval),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Point => write!(f, "point"),
            Mode::Interval => write!(f, "interval"),
        }
    }
}

/// Smallest value of a point set
pub fn min_value<I: IntoIterator<Item = u64>>(values: I) -> Option<u64> {
    values.into_iter().min()
}

/// Smallest value covered by an interval set
///
/// Empty intervals cover nothing and are skipped.
pub fn min_interval_start<'a, I: IntoIterator<Item = &'a Interval>>(intervals: I) -> Option<u64> {
    intervals
        .into_iter()
        .filter(|iv| !iv.is_empty())
        .map(|iv| iv.start)
        .min()
}

/// Resolves minimum locations against a prebuilt chain
pub struct MinimumResolver {
    chain: StageChain,
    threads: usize,
}

impl MinimumResolver {
    pub fn new(chain: StageChain) -> Self {
        Self { chain, threads: 1 }
    }

    /// Create a resolver that maps on a dedicated pool when `threads > 1`
    pub fn with_threads(chain: StageChain, threads: usize) -> Self {
        Self {
            chain,
            threads: threads.max(1),
        }
    }

    /// Get a reference to the underlying chain
    pub fn chain(&self) -> &StageChain {
        &self.chain
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Resolve seeds in the given mode
    pub fn resolve(&self, seeds: &[u64], mode: Mode) -> Result<u64> {
        match mode {
            Mode::Point => self.resolve_points(seeds),
            Mode::Interval => self.resolve_intervals(intervals_from_seed_pairs(seeds)?),
        }
    }

    /// Map every seed value and return the smallest result
    pub fn resolve_points(&self, seeds: &[u64]) -> Result<u64> {
        if self.chain.is_empty() {
            return Err(EmptyInputError::NoStages.into());
        }

        let mapped = match self.build_pool()? {
            Some(pool) => pool.install(|| par_map_values(&self.chain, seeds))?,
            None => seeds
                .iter()
                .map(|&seed| map_value(&self.chain, seed))
                .collect::<std::result::Result<Vec<_>, _>>()?,
        };

        min_value(mapped).ok_or_else(|| EmptyInputError::NoSeeds.into())
    }

    /// Map every seed interval and return the smallest reachable value
    pub fn resolve_intervals(&self, intervals: Vec<Interval>) -> Result<u64> {
        if self.chain.is_empty() {
            return Err(EmptyInputError::NoStages.into());
        }
        if intervals.iter().all(|iv| iv.is_empty()) {
            return Err(EmptyInputError::NoSeeds.into());
        }

        let mapped = match self.build_pool()? {
            Some(pool) => pool.install(|| par_map_intervals(&self.chain, intervals)),
            None => map_intervals(&self.chain, intervals),
        };

        min_interval_start(&mapped).ok_or_else(|| EmptyInputError::NoSeeds.into())
    }

    fn build_pool(&self) -> Result<Option<rayon::ThreadPool>> {
        if self.threads <= 1 {
            return Ok(None);
        }
        rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .map(Some)
            .map_err(|e| {
                FastRemapError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("Failed to create thread pool: {}", e),
                ))
            })
    }
}

/// Build the chain from raw stages and resolve the minimum in one call
///
/// Fails with `EmptyInput` when no seeds or no stages are supplied.
///
/// # Examples
/// ```
/// use fast_remap::core::{resolve_minimum, Mode, RawStage};
///
/// let stages = vec![RawStage::from_triples(&[(50, 98, 2), (52, 50, 48)])];
/// assert_eq!(resolve_minimum(&[79, 14], &stages, Mode::Point).unwrap(), 14);
/// assert_eq!(resolve_minimum(&[79, 14], &stages, Mode::Interval).unwrap(), 81);
/// ```
pub fn resolve_minimum(seeds: &[u64], stages: &[RawStage], mode: Mode) -> Result<u64> {
    if seeds.is_empty() {
        return Err(EmptyInputError::NoSeeds.into());
    }
    if stages.is_empty() {
        return Err(EmptyInputError::NoStages.into());
    }
    let chain = StageChain::from_raw(stages)?;
    MinimumResolver::new(chain).resolve(seeds, mode)
}
