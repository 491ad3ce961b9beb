//! FastRemap - staged piecewise-offset remapping
//!
//! Maps integers, or whole integer ranges, through an ordered chain of stages
//! where each stage shifts sub-ranges of the domain by a constant offset, then
//! reports the smallest value that comes out the other end.
//!
//! # Features
//!
//! - Gap-filling normalization: unmapped values pass through unchanged
//! - Interval mode splits ranges at stage boundaries instead of enumerating them
//! - Optional parallel mapping with rayon
//! - Support for compressed almanac files (gzip, bzip2)
//!
//! # Example
//!
//! ```
//! use fast_remap::{resolve_minimum, Mode, RawStage};
//!
//! let stages = vec![RawStage::from_triples(&[(50, 98, 2), (52, 50, 48)])];
//! let lowest = resolve_minimum(&[79, 14, 55, 13], &stages, Mode::Point).unwrap();
//! assert_eq!(lowest, 13);
//! ```

pub mod core;
pub mod formats;

// Re-export commonly used types
pub use crate::core::{
    EmptyInputError, FastRemapError, Interval, MappingError, MinimumResolver, Mode, RawStage,
    RawSubRange, SeedError, Stage, StageChain, StageError, SubRange, map_intervals, map_value,
    resolve_minimum,
};
pub use formats::{parse_almanac_file, parse_almanac_str, Almanac};
