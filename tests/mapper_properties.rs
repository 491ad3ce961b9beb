//! Property-based tests for point and interval mapping
//!
//! Both modes run over the same normalized chain, so a one-value interval must
//! land exactly where the value does, and splitting must never gain or lose
//! values.

use fast_remap::core::{
    map_interval, map_intervals, map_value, min_interval_start, Interval, RawStage, RawSubRange,
    StageChain,
};
use proptest::prelude::*;

fn arb_raw_stage() -> impl Strategy<Value = RawStage> {
    prop::collection::vec((0u64..40, 1u64..60, 0u64..1500), 0..6)
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

fn arb_chain() -> impl Strategy<Value = Vec<RawStage>> {
    prop::collection::vec(arb_raw_stage(), 1..6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A value maps to the start of the single interval `[v, v+1)` maps to
    #[test]
    fn prop_point_and_interval_modes_agree(stages in arb_chain(), value in 0u64..2000) {
        let chain = StageChain::from_raw(&stages).unwrap();

        let point = map_value(&chain, value).unwrap();
        let intervals = map_intervals(&chain, vec![Interval::new(value, value + 1)]);

        prop_assert_eq!(intervals.len(), 1, "Unit interval split into {:?}", intervals);
        prop_assert_eq!(intervals[0], Interval::new(point, point + 1));
    }

    /// Pieces emitted for one input interval sum to its length, per stage
    #[test]
    fn prop_interval_length_conserved(
        stages in arb_chain(),
        start in 0u64..1000,
        length in 0u64..1000,
    ) {
        let chain = StageChain::from_raw(&stages).unwrap();
        let mut current = vec![Interval::new(start, start + length)];

        for stage in chain.stages() {
            let mut next = Vec::new();
            for &interval in &current {
                let pieces = map_interval(stage, interval);
                let total: u64 = pieces.iter().map(|p| p.len()).sum();
                prop_assert_eq!(total, interval.len(), "Stage {} lost or duplicated values", stage.name());
                prop_assert!(pieces.iter().all(|p| !p.is_empty()));
                next.extend(pieces);
            }
            current = next;
        }

        let total: u64 = current.iter().map(|p| p.len()).sum();
        prop_assert_eq!(total, length);
    }

    /// Interval mode finds the same minimum as enumerating every value
    #[test]
    fn prop_interval_minimum_matches_enumeration(
        stages in arb_chain(),
        start in 0u64..1000,
        length in 1u64..200,
    ) {
        let chain = StageChain::from_raw(&stages).unwrap();

        let enumerated = (start..start + length)
            .map(|v| map_value(&chain, v).unwrap())
            .min();
        let mapped = map_intervals(&chain, vec![Interval::new(start, start + length)]);

        prop_assert_eq!(min_interval_start(&mapped), enumerated);
    }

    /// Every value in the input interval lands inside some output piece
    #[test]
    fn prop_interval_output_covers_point_images(
        stages in arb_chain(),
        start in 0u64..1000,
        length in 1u64..100,
    ) {
        let chain = StageChain::from_raw(&stages).unwrap();
        let mapped = map_intervals(&chain, vec![Interval::new(start, start + length)]);

        for v in start..start + length {
            let image = map_value(&chain, v).unwrap();
            prop_assert!(
                mapped.iter().any(|iv| iv.contains(image)),
                "Image {} of {} missing from {:?}", image, v, mapped
            );
        }
    }
}

#[test]
fn test_values_beyond_last_range_agree_in_both_modes() {
    let chain = StageChain::from_raw(&[RawStage::from_triples(&[(0, 10, 5)])]).unwrap();
    let far = 10_000_000_000u64;

    assert_eq!(map_value(&chain, far), Ok(far));
    assert_eq!(
        map_intervals(&chain, vec![Interval::new(far, far + 1)]),
        vec![Interval::new(far, far + 1)]
    );
}

#[test]
fn test_huge_interval_is_not_enumerated() {
    let chain = StageChain::from_raw(&[
        RawStage::from_triples(&[(0, 1_000_000_000_000, 1_000_000_000_000)]),
        RawStage::from_triples(&[(5, 0, 10)]),
    ])
    .unwrap();

    let mapped = map_intervals(&chain, vec![Interval::new(1_000_000_000_000, 2_000_000_000_000)]);
    let total: u64 = mapped.iter().map(|iv| iv.len()).sum();
    assert_eq!(total, 1_000_000_000_000);
    assert_eq!(min_interval_start(&mapped), Some(5));
}
