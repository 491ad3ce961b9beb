//! Property-based tests for stage normalization
//!
//! Normalized stages must partition the domain, be stable under
//! re-normalization, and agree with a direct lookup over the raw triples.

use fast_remap::core::{RawStage, RawSubRange, Stage, SubRange, DOMAIN_END};
use proptest::prelude::*;

/// Generate a raw stage with disjoint ranges in shuffled order
fn arb_raw_stage() -> impl Strategy<Value = RawStage> {
    prop::collection::vec((0u64..50, 1u64..50, 0u64..2000), 0..8)
        .prop_map(|specs| {
            let mut cursor = 0u64;
            specs
                .into_iter()
                .map(|(gap, length, dest)| {
                    let start = cursor + gap;
                    cursor = start + length;
                    RawSubRange::new(dest, start, length)
                })
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
        .prop_map(RawStage::new)
}

/// Lookup straight from the raw triples, identity when nothing matches
fn naive_map(raw: &RawStage, value: u64) -> u64 {
    raw.ranges
        .iter()
        .find(|r| value >= r.start && value < r.start + r.length)
        .map(|r| value - r.start + r.dest)
        .unwrap_or(value)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Normalized ranges are contiguous, non-empty and span the whole domain
    #[test]
    fn prop_normalized_stage_partitions_domain(raw in arb_raw_stage()) {
        let stage = Stage::normalize(&raw).unwrap();
        let ranges = stage.ranges();

        prop_assert!(!ranges.is_empty());
        prop_assert_eq!(ranges[0].start, 0);
        prop_assert_eq!(ranges[ranges.len() - 1].end, DOMAIN_END);

        for range in ranges {
            prop_assert!(!range.is_empty(), "Empty range {:?}", range);
        }
        for pair in ranges.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start, "Gap or overlap between {:?} and {:?}", pair[0], pair[1]);
        }
    }

    /// Every value is covered by exactly one range
    #[test]
    fn prop_single_covering_range(raw in arb_raw_stage(), value in 0u64..3000) {
        let stage = Stage::normalize(&raw).unwrap();
        let covering = stage.ranges().iter().filter(|r| r.contains(value)).count();
        prop_assert_eq!(covering, 1);
        prop_assert!(stage.find(value).is_some());
    }

    /// Re-normalizing a normalized stage changes nothing
    #[test]
    fn prop_normalize_idempotent(raw in arb_raw_stage()) {
        let stage = Stage::normalize(&raw).unwrap();
        let again = Stage::normalize(&stage.to_raw()).unwrap();
        prop_assert_eq!(stage, again);
    }

    /// Inserted ranges are identity; raw ranges survive unchanged
    #[test]
    fn prop_filled_gaps_are_identity(raw in arb_raw_stage()) {
        let stage = Stage::normalize(&raw).unwrap();
        let originals: Vec<SubRange> = raw
            .ranges
            .iter()
            .map(|r| SubRange { start: r.start, end: r.start + r.length, dest: r.dest })
            .collect();

        for range in stage.ranges() {
            prop_assert!(range.is_identity() || originals.contains(range));
        }
        for original in &originals {
            prop_assert!(stage.ranges().contains(original));
        }
    }

    /// Normalized lookup agrees with scanning the raw triples
    #[test]
    fn prop_matches_raw_lookup(raw in arb_raw_stage(), value in 0u64..3000) {
        let stage = Stage::normalize(&raw).unwrap();
        prop_assert_eq!(stage.map_value(value), Some(naive_map(&raw, value)));
    }
}

#[test]
fn test_sample_stage_normalization() {
    let raw = RawStage::from_triples(&[(50, 98, 2), (52, 50, 48)]);
    let stage = Stage::normalize(&raw).unwrap();

    assert_eq!(stage.ranges()[0], SubRange::identity(0, 50));
    assert_eq!(stage.ranges()[1], SubRange { start: 50, end: 98, dest: 52 });
    assert_eq!(stage.ranges()[2], SubRange { start: 98, end: 100, dest: 50 });
    assert_eq!(stage.map_value(79), Some(81));
}
