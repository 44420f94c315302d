mod common;

use common::{init_tracing, structures, HIERARCHY};
use neat_buckets::prelude::*;
use neat_core::Edge;
use std::str::FromStr;

fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn test_presets_limits_and_plots() {
    init_tracing();
    let dataset = structures(3000, 11);
    let hierarchy = FactorHierarchy::from_json_str(HIERARCHY).unwrap();
    let summarizer = Summarizer::new(EngineConfig::default()).unwrap();

    let ranges = summarizer.plan_ranges(&dataset, &hierarchy).unwrap();
    // ligand_count is declared but not loaded
    assert_eq!(ranges.failures.len(), 1);
    assert_eq!(ranges.failures[0].id, "ligand_count");
    let factors: Vec<&str> = ranges.items.iter().map(|s| s.factor.as_str()).collect();
    assert_eq!(factors, vec!["resolution", "clashscore", "release_year"]);

    let bases = summarizer.config().allowed_bases.clone();
    for spec in &ranges.items {
        assert!(bases.contains(spec.width), "{} width {}", spec.factor, spec.width);
        assert!(spec.edges.len() >= 2);
        assert!(spec.trimmed_min >= spec.raw_min && spec.trimmed_max <= spec.raw_max);
    }
    let year = ranges.items.iter().find(|s| s.factor == "release_year").unwrap();
    assert!(year.width.value() >= Decimal::ONE);

    let limits = summarizer.limits_from_ranges(&ranges.items).unwrap();
    let pairs = vec![
        FactorPair::new("resolution", "r_free"),
        FactorPair::new("resolution", "clashscore"),
        FactorPair::new("release_year", "resolution"),
    ];
    let plots = summarizer
        .plots(&dataset, &pairs, &limits)
        .unwrap()
        .into_result("plots")
        .unwrap();

    for plot in &plots {
        assert!(plot.counts().iter().all(|&c| c >= 100), "{plot}");
        assert_eq!(plot.counts().iter().sum::<usize>(), plot.structure_count);
        for (a, b) in plot.buckets.iter().zip(plot.buckets.iter().skip(1)) {
            assert_eq!(a.x_to.value, b.x_from.value);
            assert!(!a.x_to.closed && b.x_from.closed);
        }
        assert_eq!(plot.buckets[0].x_from.value, plot.x_min);
        assert_eq!(plot.buckets[plot.len() - 1].x_to.value, plot.x_max);
    }
    // Open-ended limits keep every row with both values present
    assert_eq!(plots[0].structure_count, 2700);
    assert_eq!(plots[1].structure_count, 3000);
}

#[test]
fn test_slider_write_back_through_hierarchy() {
    let n = 50;
    let ids = (0..n).map(|i| format!("S{i}")).collect();
    let mut values: Vec<Option<Decimal>> = (0..n)
        .map(|i| Some(d("0.0008") + Decimal::from(i) * d("0.002")))
        .collect();
    values[n - 1] = Some(d("0.123"));
    let dataset = Dataset::new(ids)
        .with_column(FactorColumn::new("rsrz_outliers", FactorKind::Numeric, values))
        .unwrap();

    let mut hierarchy = FactorHierarchy::new(vec![
        FactorNode::new("rsrz_outliers").with_axes(false, true),
        FactorNode::new("group"),
    ]);
    let outcome = Summarizer::default()
        .sliders(&dataset, &mut hierarchy)
        .unwrap();
    assert!(outcome.is_complete());
    assert_eq!(outcome.total(), 1);

    let node = hierarchy.find("rsrz_outliers").unwrap();
    assert_eq!(node.slider_step, Some(d("0.002")));
    assert_eq!(node.value_range_from, Some(Decimal::ZERO));
    assert_eq!(node.value_range_to, Some(d("0.13")));
    assert!(hierarchy.find("group").unwrap().slider_step.is_none());
}

#[test]
fn test_year_slider_steps_by_one() {
    let dataset = structures(500, 3);
    let mut hierarchy = FactorHierarchy::from_json_str(HIERARCHY).unwrap();
    let outcome = Summarizer::default().sliders(&dataset, &mut hierarchy).unwrap();

    assert_eq!(outcome.failures.len(), 1);
    let year = hierarchy.find("release_year").unwrap();
    assert_eq!(year.slider_step, Some(Decimal::ONE));
    assert_eq!(year.value_range_from, Some(Decimal::from(1995)));
    assert_eq!(year.value_range_to, Some(Decimal::from(2024)));

    let json = hierarchy.to_json_string().unwrap();
    assert!(json.contains("\"Format\": \"0.00\""));
}

#[test]
fn test_strict_batch_reports_failure_count() {
    let dataset = structures(1000, 5);
    let mut limits = BucketLimitTable::new();
    limits
        .insert(
            "resolution",
            vec![Edge::NegInfinity, Edge::Finite(d("2")), Edge::PosInfinity],
        )
        .unwrap();
    let pairs = vec![
        FactorPair::new("resolution", "r_free"),
        FactorPair::new("resolution", "missing"),
        FactorPair::new("clashscore", "r_free"),
    ];

    let outcome = Summarizer::default().plots(&dataset, &pairs, &limits).unwrap();
    assert_eq!(outcome.items.len(), 1);
    assert_eq!(outcome.items[0].len(), 2);
    let err = outcome.into_result("plots").unwrap_err();
    assert!(matches!(
        err,
        Error::BatchFailed {
            stage: "plots",
            failed: 2,
            total: 3
        }
    ));
}

#[test]
fn test_distributions_respect_ceiling() {
    let dataset = structures(2000, 8);
    let mut config = EngineConfig::default();
    config.distribution.max_buckets = 25;
    let factors = vec!["resolution".to_string(), "r_free".to_string()];
    let dists = Summarizer::new(config)
        .unwrap()
        .distributions(&dataset, &factors)
        .unwrap()
        .into_result("distributions")
        .unwrap();

    assert!(dists.iter().all(|d| d.len() <= 25));
    assert_eq!(dists[0].total_count(), 2000);
    assert_eq!(dists[1].total_count(), 1800);
}

#[test]
fn test_invalid_config_is_rejected() {
    let err = EngineConfig::from_json_str(r#"{"slider": {"min_intervals": 50, "ideal_intervals": 20}}"#)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));
}
