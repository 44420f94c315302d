//! Property-based tests for neat-number rounding and interval joins

use neat_core::{decompose, decompose_floor, AllowedBases, Decimal, Edge, Interval};
use proptest::prelude::*;

fn positive_decimal() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000, 0u32..12).prop_map(|(m, scale)| Decimal::new(m, scale))
}

fn allowed_bases() -> impl Strategy<Value = AllowedBases> {
    prop::collection::btree_set(10u8..=99, 1..6)
        .prop_map(|set| AllowedBases::new(set.into_iter().collect::<Vec<_>>()).unwrap())
}

proptest! {
    // Property: ceiling decomposition never undershoots and stays within one
    // unit of the second significant digit
    #[test]
    fn prop_decompose_bounds(value in positive_decimal()) {
        let n = decompose(value).unwrap();
        prop_assert!((10..=99).contains(&n.base()));
        prop_assert!(n.value() >= value);

        let floor = decompose_floor(value).unwrap();
        prop_assert!(floor.value() <= value);
        prop_assert!(floor <= n);
    }

    // Property: decomposing an already neat value is the identity
    #[test]
    fn prop_decompose_idempotent(value in positive_decimal()) {
        let once = decompose(value).unwrap();
        let twice = decompose(once.value()).unwrap();
        prop_assert_eq!(once, twice);
    }

    // Property: rounding to allowed bases yields an allowed base that is not
    // smaller than the input
    #[test]
    fn prop_ceil_is_allowed_and_not_smaller(value in positive_decimal(), bases in allowed_bases()) {
        let n = decompose(value).unwrap();
        let ceiled = bases.ceil(n);
        prop_assert!(bases.contains(ceiled));
        prop_assert!(ceiled >= n);

        let floored = bases.floor(n);
        prop_assert!(bases.contains(floored));
        prop_assert!(floored <= n);
    }

    // Property: the candidate size sequence is strictly ascending
    #[test]
    fn prop_sizes_strictly_ascending(value in positive_decimal(), bases in allowed_bases()) {
        let sizes: Vec<_> = bases.sizes_from(decompose(value).unwrap()).take(12).collect();
        for pair in sizes.windows(2) {
            prop_assert!(pair[0] < pair[1]);
            prop_assert!(pair[0].value() < pair[1].value());
        }
    }

    // Property: splitting a half-open interval at an interior point and
    // joining the halves gives back the original interval
    #[test]
    fn prop_split_then_join(lo in -1000i64..1000, width in 2i64..1000, cut in 1i64..1000) {
        let cut = lo + cut % (width - 1) + 1;
        let whole = Interval::closed_open(Edge::Finite(lo.into()), Edge::Finite((lo + width).into())).unwrap();
        let left = Interval::closed_open(Edge::Finite(lo.into()), Edge::Finite(cut.into())).unwrap();
        let right = Interval::closed_open(Edge::Finite(cut.into()), Edge::Finite((lo + width).into())).unwrap();

        prop_assert!(!left.overlaps(&right));
        prop_assert_eq!(left.join(&right).unwrap(), whole);
        prop_assert!(right.join(&left).is_err());
    }
}
