//! Core remapping functionality
//!
//! This module contains stage normalization, the stage chain, and the
//! point and interval mapping algorithms.

mod chain;
mod error;
mod interval;
mod mapper;
mod resolver;
mod stage;

pub use chain::StageChain;
pub use error::{
    EmptyInputError, FastRemapError, MappingError, MappingResult, Result, SeedError,
    SeedResult, StageError, StageResult,
};
pub use interval::{intersect_intervals, intervals_from_seed_pairs, Interval};
pub use mapper::{
    map_interval, map_interval_set, map_intervals, map_value, par_map_intervals,
    par_map_values,
};
pub use resolver::{min_interval_start, min_value, resolve_minimum, MinimumResolver, Mode};
pub use stage::{RawStage, RawSubRange, Stage, StageInterval, SubRange, DOMAIN_END};
