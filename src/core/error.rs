//! Error types for FastRemap
//!
//! Defines all error types used throughout the library.

use thiserror::Error;

/// Main error type for FastRemap operations
#[derive(Debug, Error)]
pub enum FastRemapError {
    /// Stage definition errors
    #[error("Malformed stage: {0}")]
    MalformedStage(#[from] StageError),

    /// Seed list errors
    #[error("Malformed seed: {0}")]
    MalformedSeed(#[from] SeedError),

    /// Missing seeds or stages
    #[error("Empty input: {0}")]
    EmptyInput(#[from] EmptyInputError),

    /// Value mapping errors
    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while reading or normalizing a stage
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StageError {
    /// Invalid stage header line
    #[error("Invalid stage header at line {line}: {message}")]
    InvalidHeader { line: usize, message: String },

    /// Invalid sub-range line
    #[error("Invalid range line at line {line}: {message}")]
    InvalidRangeLine { line: usize, message: String },

    /// Failed to parse integer
    #[error("Failed to parse {field} '{value}' at line {line}")]
    ParseInt {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// Source or destination end does not fit in the domain
    #[error("Range in stage '{stage}' overflows the domain: dest {dest}, start {start}, length {length}")]
    RangeOverflow {
        stage: String,
        dest: u64,
        start: u64,
        length: u64,
    },

    /// Two source ranges claim the same values
    #[error("Overlapping ranges in stage '{stage}': [{first_start}, {first_end}) and [{second_start}, {second_end})")]
    Overlapping {
        stage: String,
        first_start: u64,
        first_end: u64,
        second_start: u64,
        second_end: u64,
    },
}

/// Errors raised while reading or pairing seeds
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    /// The seed line is missing or has the wrong prefix
    #[error("Invalid seed header at line {line}: {message}")]
    InvalidHeader { line: usize, message: String },

    /// Non-numeric seed token
    #[error("Failed to parse seed '{value}' at line {line}")]
    ParseInt { line: usize, value: String },

    /// Interval mode needs (start, length) pairs
    #[error("Interval mode needs an even number of seeds, got {count}")]
    UnpairedSeeds { count: usize },

    /// start + length does not fit in the domain
    #[error("Seed interval overflows the domain: start {start}, length {length}")]
    IntervalOverflow { start: u64, length: u64 },
}

/// Nothing to resolve
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmptyInputError {
    #[error("no seeds supplied")]
    NoSeeds,

    #[error("no stages supplied")]
    NoStages,
}

/// Errors that can occur while mapping a value through the chain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MappingError {
    /// The value is not covered by the stage
    #[error("Value {value} is outside the mapped domain at stage '{stage}'")]
    OutOfDomain { value: u64, stage: String },
}

/// Result type alias for FastRemap operations
pub type Result<T> = std::result::Result<T, FastRemapError>;

/// Result type alias for stage operations
pub type StageResult<T> = std::result::Result<T, StageError>;

/// Result type alias for seed operations
pub type SeedResult<T> = std::result::Result<T, SeedError>;

/// Result type alias for mapping operations
pub type MappingResult<T> = std::result::Result<T, MappingError>;
