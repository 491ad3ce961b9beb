//! Almanac file parsing
//!
//! Parses the text format that feeds the remapping core.
//!
//! # Almanac Format
//!
//! ```text
//! seeds: 79 14 55 13
//!
//! seed-to-soil map:
//! 50 98 2
//! 52 50 48
//!
//! soil-to-fertilizer map:
//! 0 15 37
//! ```
//!
//! - The first non-blank line lists the seeds
//! - Each `<source>-to-<target> map:` header opens a stage
//! - Stage lines contain: destination start, source start, range length
//! - Blank lines end the current stage; `#` lines are comments

use crate::core::{
    FastRemapError, RawStage, RawSubRange, Result, SeedError, SeedResult, StageError, StageResult,
};
use std::io::{BufRead, BufReader};
use std::path::Path;

const SEEDS_PREFIX: &str = "seeds:";
const MAP_SUFFIX: &str = "map:";

/// Seeds and raw stages read from an almanac
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Almanac {
    pub seeds: Vec<u64>,
    pub stages: Vec<RawStage>,
}

/// Parse the seed line: `seeds: 79 14 55 13`
fn parse_seed_line(line: &str, line_number: usize) -> SeedResult<Vec<u64>> {
    let values = line.strip_prefix(SEEDS_PREFIX).ok_or_else(|| SeedError::InvalidHeader {
        line: line_number,
        message: format!("expected '{}' prefix, got '{}'", SEEDS_PREFIX, truncate(line)),
    })?;

    values
        .split_whitespace()
        .map(|token| {
            token.parse::<u64>().map_err(|_| SeedError::ParseInt {
                line: line_number,
                value: token.to_string(),
            })
        })
        .collect()
}

/// Parse a stage header without its `map:` suffix: `seed-to-soil`
fn parse_stage_header(header: &str, line_number: usize) -> StageResult<RawStage> {
    match header.split_once("-to-") {
        Some((source, target)) if !source.is_empty() && !target.is_empty() => {
            Ok(RawStage::named(source, target, Vec::new()))
        }
        _ => Err(StageError::InvalidHeader {
            line: line_number,
            message: format!("expected '<source>-to-<target> map:', got '{}'", truncate(header)),
        }),
    }
}

/// Parse a range line: `dest start length`
fn parse_range_line(line: &str, line_number: usize) -> StageResult<RawSubRange> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    if fields.len() != 3 {
        return Err(StageError::InvalidRangeLine {
            line: line_number,
            message: format!("Expected 3 fields, got {}", fields.len()),
        });
    }

    let parse = |field: &'static str, value: &str| {
        value.parse::<u64>().map_err(|_| StageError::ParseInt {
            line: line_number,
            field,
            value: value.to_string(),
        })
    };

    Ok(RawSubRange {
        dest: parse("destination start", fields[0])?,
        start: parse("source start", fields[1])?,
        length: parse("range length", fields[2])?,
    })
}

fn truncate(s: &str) -> String {
    s.chars().take(100).collect()
}

/// Parse an almanac from a reader
///
/// This function handles the core parsing logic, supporting any `BufRead` source.
pub fn parse_almanac_reader<R: BufRead>(reader: R) -> Result<Almanac> {
    let mut seeds: Option<Vec<u64>> = None;
    let mut stages = Vec::new();
    let mut current: Option<RawStage> = None;
    let mut line_number: usize = 0;

    for line_result in reader.lines() {
        line_number += 1;
        let line = line_result?;
        let trimmed = line.trim();

        // Empty line marks end of a stage section
        if trimmed.is_empty() || trimmed.starts_with('#') {
            if let Some(stage) = current.take() {
                stages.push(stage);
            }
            continue;
        }

        if seeds.is_none() {
            seeds = Some(parse_seed_line(trimmed, line_number)?);
            continue;
        }

        if let Some(header) = trimmed.strip_suffix(MAP_SUFFIX) {
            if let Some(stage) = current.take() {
                stages.push(stage);
            }
            current = Some(parse_stage_header(header.trim(), line_number)?);
            continue;
        }

        match current.as_mut() {
            Some(stage) => stage.ranges.push(parse_range_line(trimmed, line_number)?),
            None => {
                return Err(StageError::InvalidRangeLine {
                    line: line_number,
                    message: "range line outside of a map section".to_string(),
                }
                .into())
            }
        }
    }

    if let Some(stage) = current {
        stages.push(stage);
    }

    let seeds = seeds.ok_or_else(|| SeedError::InvalidHeader {
        line: line_number,
        message: format!("missing '{}' line", SEEDS_PREFIX),
    })?;

    log::debug!("Parsed almanac: {} seeds, {} stages", seeds.len(), stages.len());

    Ok(Almanac { seeds, stages })
}

/// Parse an almanac held in memory
pub fn parse_almanac_str(input: &str) -> Result<Almanac> {
    parse_almanac_reader(input.as_bytes())
}

/// Compression format for almanac files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionFormat {
    /// Plain text (uncompressed)
    Plain,
    /// Gzip compressed (.gz)
    Gzip,
    /// Bzip2 compressed (.bz2)
    Bzip2,
}

/// Detect compression format from file path and/or content
pub fn detect_compression(path: &Path) -> Result<CompressionFormat> {
    use std::fs::File;
    use std::io::Read;

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    // First check by extension
    if extension == "gz" {
        return Ok(CompressionFormat::Gzip);
    }
    if extension == "bz2" {
        return Ok(CompressionFormat::Bzip2);
    }

    // Then check by magic bytes
    let mut file = File::open(path)?;
    let mut magic = [0u8; 3];
    let bytes_read = file.read(&mut magic)?;

    if bytes_read >= 2 && magic[0] == 0x1f && magic[1] == 0x8b {
        Ok(CompressionFormat::Gzip)
    } else if bytes_read >= 3 && magic == *b"BZh" {
        Ok(CompressionFormat::Bzip2)
    } else {
        Ok(CompressionFormat::Plain)
    }
}

/// Parse an almanac file from a path
///
/// Automatically detects and handles gzip and bzip2 compression.
pub fn parse_almanac_file<P: AsRef<Path>>(path: P) -> Result<Almanac> {
    let path = path.as_ref();
    let format = detect_compression(path)?;
    let file = std::fs::File::open(path).map_err(FastRemapError::Io)?;

    log::debug!("Reading almanac {:?} ({:?})", path, format);

    match format {
        CompressionFormat::Gzip => {
            let decoder = flate2::read::GzDecoder::new(file);
            parse_almanac_reader(BufReader::new(decoder))
        }
        CompressionFormat::Bzip2 => {
            let decoder = bzip2::read::BzDecoder::new(file);
            parse_almanac_reader(BufReader::new(decoder))
        }
        CompressionFormat::Plain => parse_almanac_reader(BufReader::new(file)),
    }
}
