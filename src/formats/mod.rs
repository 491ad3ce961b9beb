//! File format adapters
//!
//! Readers that turn external input files into seeds and raw stages.

pub mod almanac;

pub use almanac::{
    detect_compression, parse_almanac_file, parse_almanac_reader, parse_almanac_str, Almanac,
    CompressionFormat,
};
