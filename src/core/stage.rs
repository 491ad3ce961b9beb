//! Stage definitions and normalization
//!
//! A raw stage is a list of `(dest, start, length)` triples in any order with
//! holes between them. Normalization turns it into a sorted, gap-free list of
//! [`SubRange`]s covering `[0, DOMAIN_END)`, where every hole (including the
//! tail after the last range) is filled by an identity range.
//!
//! Point lookups binary search the sorted ranges; overlap queries go through a
//! rust-lapper index.

use crate::core::error::{StageError, StageResult};
use rust_lapper::{Interval as LapperInterval, Lapper};

/// Exclusive upper bound of the mapped domain
///
/// Normalization ends every stage with an identity range reaching this value,
/// so lookups never need a fallback.
pub const DOMAIN_END: u64 = u64::MAX;

/// Type alias for indexed stage ranges (value is the destination start)
pub type StageInterval = LapperInterval<u64, u64>;

/// One `(dest, start, length)` triple as written in a stage definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSubRange {
    pub dest: u64,
    pub start: u64,
    pub length: u64,
}

impl RawSubRange {
    pub fn new(dest: u64, start: u64, length: u64) -> Self {
        Self { dest, start, length }
    }
}

/// An unnormalized stage, exactly as supplied by the caller or parser
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawStage {
    /// Category mapped from (e.g. "seed")
    pub source: String,
    /// Category mapped to (e.g. "soil")
    pub target: String,
    pub ranges: Vec<RawSubRange>,
}

impl RawStage {
    /// Create an unnamed stage from `(dest, start, length)` triples
    pub fn new(ranges: Vec<RawSubRange>) -> Self {
        Self {
            source: String::new(),
            target: String::new(),
            ranges,
        }
    }

    /// Create a stage with its category names
    pub fn named(source: impl Into<String>, target: impl Into<String>, ranges: Vec<RawSubRange>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            ranges,
        }
    }

    /// Build from `(dest, start, length)` tuples
    pub fn from_triples(triples: &[(u64, u64, u64)]) -> Self {
        Self::new(
            triples
                .iter()
                .map(|&(dest, start, length)| RawSubRange::new(dest, start, length))
                .collect(),
        )
    }

    /// Display name, "source-to-target" when both categories are known
    pub fn name(&self) -> String {
        stage_name(&self.source, &self.target)
    }
}

fn stage_name(source: &str, target: &str) -> String {
    if source.is_empty() && target.is_empty() {
        "unnamed".to_string()
    } else {
        format!("{}-to-{}", source, target)
    }
}

/// A half-open source range `[start, end)` shifted onto `[dest, dest + len)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubRange {
    pub start: u64,
    pub end: u64,
    pub dest: u64,
}

impl SubRange {
    /// Validate a raw triple; both the source and destination ends must fit in the domain
    fn from_raw(raw: &RawSubRange, stage: &str) -> StageResult<Self> {
        let overflow = || StageError::RangeOverflow {
            stage: stage.to_string(),
            dest: raw.dest,
            start: raw.start,
            length: raw.length,
        };
        let end = raw.start.checked_add(raw.length).ok_or_else(overflow)?;
        raw.dest.checked_add(raw.length).ok_or_else(overflow)?;
        Ok(Self {
            start: raw.start,
            end,
            dest: raw.dest,
        })
    }

    /// Identity range, `dest == start`
    pub fn identity(start: u64, end: u64) -> Self {
        Self { start, end, dest: start }
    }

    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn is_identity(&self) -> bool {
        self.dest == self.start
    }

    pub fn contains(&self, value: u64) -> bool {
        self.start <= value && value < self.end
    }

    /// Shift a value inside this range onto the destination
    ///
    /// Cannot overflow: construction guarantees `dest + len` fits in `u64`.
    #[inline]
    pub fn map(&self, value: u64) -> u64 {
        value - self.start + self.dest
    }

    fn to_raw(self) -> RawSubRange {
        RawSubRange::new(self.dest, self.start, self.len())
    }
}

impl From<&StageInterval> for SubRange {
    fn from(iv: &StageInterval) -> Self {
        Self {
            start: iv.start,
            end: iv.stop,
            dest: iv.val,
        }
    }
}

/// A normalized stage
///
/// Sub-ranges are sorted, disjoint and contiguous over `[0, DOMAIN_END)`.
pub struct Stage {
    name: String,
    ranges: Vec<SubRange>,
    index: Lapper<u64, u64>,
}

impl Stage {
    /// Sort, validate and gap-fill a raw stage
    ///
    /// Zero-length ranges map nothing and are dropped. Overlapping source
    /// ranges are rejected rather than resolved by order.
    ///
    /// # Examples
    /// ```
    /// use fast_remap::core::{RawStage, Stage, SubRange, DOMAIN_END};
    ///
    /// let raw = RawStage::from_triples(&[(50, 98, 2), (52, 50, 48)]);
    /// let stage = Stage::normalize(&raw).unwrap();
    /// assert_eq!(stage.ranges()[0], SubRange::identity(0, 50));
    /// assert_eq!(stage.ranges()[3], SubRange::identity(100, DOMAIN_END));
    /// assert_eq!(stage.map_value(79), Some(81));
    /// ```
    pub fn normalize(raw: &RawStage) -> StageResult<Self> {
        let name = raw.name();

        let mut sorted = raw
            .ranges
            .iter()
            .filter(|r| r.length > 0)
            .map(|r| SubRange::from_raw(r, &name))
            .collect::<StageResult<Vec<_>>>()?;
        sorted.sort_by_key(|r| r.start);

        let mut ranges = Vec::with_capacity(sorted.len() * 2 + 1);
        let mut cursor = 0u64;
        for (i, range) in sorted.iter().enumerate() {
            if range.start < cursor {
                let prev = &sorted[i - 1];
                return Err(StageError::Overlapping {
                    stage: name,
                    first_start: prev.start,
                    first_end: prev.end,
                    second_start: range.start,
                    second_end: range.end,
                });
            }
            if range.start > cursor {
                ranges.push(SubRange::identity(cursor, range.start));
            }
            ranges.push(*range);
            cursor = range.end;
        }
        if cursor < DOMAIN_END {
            ranges.push(SubRange::identity(cursor, DOMAIN_END));
        }

        log::debug!(
            "Normalized stage {}: {} raw ranges -> {} ranges",
            name,
            raw.ranges.len(),
            ranges.len()
        );

        let index = Lapper::new(
            ranges
                .iter()
                .map(|r| StageInterval {
                    start: r.start,
                    stop: r.end,
                    val: r.dest,
                })
                .collect(),
        );

        Ok(Self { name, ranges, index })
    }

    /// Display name of the stage
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The normalized sub-ranges in ascending order
    pub fn ranges(&self) -> &[SubRange] {
        &self.ranges
    }

    /// Number of normalized sub-ranges
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Find the sub-range containing `value`
    ///
    /// Only `DOMAIN_END` itself is uncovered.
    pub fn find(&self, value: u64) -> Option<SubRange> {
        let idx = self.ranges.partition_point(|r| r.end <= value);
        self.ranges.get(idx).filter(|r| r.contains(value)).copied()
    }

    /// Map one value through this stage
    pub fn map_value(&self, value: u64) -> Option<u64> {
        self.find(value).map(|r| r.map(value))
    }

    /// Sub-ranges overlapping `[start, end)`, in ascending order
    pub fn query(&self, start: u64, end: u64) -> impl Iterator<Item = SubRange> + '_ {
        self.index.find(start, end).map(SubRange::from)
    }

    /// Convert back to raw triples, keeping the stage name
    pub fn to_raw(&self) -> RawStage {
        let (source, target) = self
            .name
            .split_once("-to-")
            .map(|(s, t)| (s.to_string(), t.to_string()))
            .unwrap_or_default();
        RawStage {
            source,
            target,
            ranges: self.ranges.iter().map(|r| r.to_raw()).collect(),
        }
    }
}

impl PartialEq for Stage {
    fn eq(&self, other: &Self) -> bool {
        self.ranges == other.ranges
    }
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("name", &self.name)
            .field("ranges", &self.ranges)
            .finish()
    }
}
