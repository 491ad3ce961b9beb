//! Value and interval mapping through a stage chain
//!
//! Two modes share the same normalized chain:
//! 1. Point mode: each value is looked up in every stage and shifted by the
//!    offset of the sub-range containing it
//! 2. Interval mode: each interval is intersected with the sub-ranges it
//!    overlaps, and every intersection is shifted as a whole
//!
//! Interval mode never enumerates individual integers, so seed ranges spanning
//! billions of values cost the same as a single value.

use crate::core::chain::StageChain;
use crate::core::error::{MappingError, MappingResult};
use crate::core::interval::{intersect_intervals, Interval};
use crate::core::stage::Stage;
use rayon::prelude::*;

/// Map one value through every stage in order
///
/// # Examples
/// ```
/// use fast_remap::core::{map_value, RawStage, StageChain};
///
/// let chain = StageChain::from_raw(&[RawStage::from_triples(&[(50, 98, 2), (52, 50, 48)])]).unwrap();
/// assert_eq!(map_value(&chain, 79), Ok(81));
/// ```
pub fn map_value(chain: &StageChain, value: u64) -> MappingResult<u64> {
    chain.stages().iter().try_fold(value, |current, stage| {
        stage
            .map_value(current)
            .ok_or_else(|| MappingError::OutOfDomain {
                value: current,
                stage: stage.name().to_string(),
            })
    })
}

/// Split one interval across the stage's sub-ranges and shift every piece
///
/// The pieces' lengths always sum to the input length.
pub fn map_interval(stage: &Stage, interval: Interval) -> Vec<Interval> {
    if interval.is_empty() {
        return Vec::new();
    }

    stage
        .query(interval.start, interval.end)
        .filter_map(|range| {
            let (real_start, real_end) = intersect_intervals(interval.start, interval.end, range.start, range.end)?;
            Some(Interval {
                start: range.map(real_start),
                end: range.map(real_start) + (real_end - real_start),
            })
        })
        .collect()
}

/// Map a whole interval set through one stage, producing the next set
pub fn map_interval_set(stage: &Stage, intervals: &[Interval]) -> Vec<Interval> {
    intervals
        .iter()
        .flat_map(|&interval| map_interval(stage, interval))
        .collect()
}

/// Map an interval set through every stage in order
///
/// Each stage's output set is complete before the next stage starts.
pub fn map_intervals(chain: &StageChain, intervals: Vec<Interval>) -> Vec<Interval> {
    chain.stages().iter().fold(intervals, |current, stage| {
        let next = map_interval_set(stage, &current);
        log::debug!(
            "Stage {}: {} intervals -> {} intervals",
            stage.name(),
            current.len(),
            next.len()
        );
        next
    })
}

/// Parallel variant of [`map_intervals`]
///
/// Inputs within a stage are mapped on the current rayon pool; stages still
/// run strictly in order and the output order matches the sequential version.
pub fn par_map_intervals(chain: &StageChain, intervals: Vec<Interval>) -> Vec<Interval> {
    chain.stages().iter().fold(intervals, |current, stage| {
        let next: Vec<Interval> = current
            .par_iter()
            .flat_map_iter(|&interval| map_interval(stage, interval))
            .collect();
        log::debug!(
            "Stage {}: {} intervals -> {} intervals",
            stage.name(),
            current.len(),
            next.len()
        );
        next
    })
}

/// Parallel point mapping on the current rayon pool
pub fn par_map_values(chain: &StageChain, values: &[u64]) -> MappingResult<Vec<u64>> {
    values.par_iter().map(|&v| map_value(chain, v)).collect()
}
