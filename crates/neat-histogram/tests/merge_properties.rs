//! Ceiling, conservation and ordering of merged distributions

use neat_core::{Decimal, FactorColumn};
use neat_histogram::{round_significant, DistributionBuilder, SmallestFirstMerge};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution as _, LogNormal};

#[test]
fn test_skewed_metric_respects_ceiling() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let clashscore = LogNormal::new(1.5, 0.8).unwrap();
    let values: Vec<Option<f64>> = (0..20_000)
        .map(|_| Some(clashscore.sample(&mut rng)))
        .collect();
    let column = FactorColumn::from_f64("clashscore", &values);

    let builder = SmallestFirstMerge::new(50, 3).unwrap();
    let distribution = builder.build_column(&column).unwrap();

    assert_eq!(distribution.factor(), "clashscore");
    assert_eq!(distribution.len(), 50);
    assert_eq!(distribution.total_count(), 20_000);
    assert!(distribution.buckets().iter().any(|b| b.is_interval));
}

#[test]
fn test_missing_values_are_ignored() {
    let column = FactorColumn::from_f64("r_work", &[Some(0.2), None, Some(0.25), None]);
    let distribution = SmallestFirstMerge::default().build_column(&column).unwrap();
    assert_eq!(distribution.total_count(), 2);
    assert_eq!(distribution.len(), 2);
}

proptest! {
    // Property: the ceiling holds, nothing is lost, and buckets are ordered
    // without overlap
    #[test]
    fn prop_merge_invariants(
        raw in prop::collection::vec(-5000i64..5000, 1..400),
        max_buckets in 1usize..40,
        digits in 1u32..5,
    ) {
        let values: Vec<Decimal> = raw.iter().map(|&v| Decimal::new(v, 2)).collect();
        let builder = SmallestFirstMerge::new(max_buckets, digits).unwrap();
        let distribution = builder.build("x", &values).unwrap();

        prop_assert!(distribution.len() <= max_buckets);
        prop_assert!(!distribution.is_empty());
        prop_assert_eq!(distribution.total_count(), values.len());

        let buckets = distribution.buckets();
        for b in buckets {
            prop_assert!(b.from <= b.to);
            prop_assert_eq!(b.is_interval, b.from != b.to);
        }
        for pair in buckets.windows(2) {
            prop_assert!(pair[0].to < pair[1].from);
        }

        // Each value lands in exactly the bucket spanning its rounded value
        for &v in &values {
            let rounded = round_significant(v, digits);
            prop_assert!(distribution.find_bucket(rounded).is_some());
        }
    }
}
