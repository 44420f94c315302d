//! Shared fixtures for the end-to-end tests

use neat_buckets::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution as _, Normal};
use tracing_subscriber::EnvFilter;

/// Install a subscriber honouring `RUST_LOG`; repeated calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn dec(value: f64, dp: u32) -> Decimal {
    Decimal::try_from(value).unwrap().round_dp(dp)
}

/// Seeded structure table with resolution, r_free, clashscore and release year.
///
/// Every tenth structure lacks an r_free value.
pub fn structures(n: usize, seed: u64) -> Dataset {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let resolution = Normal::<f64>::new(2.2, 0.5).unwrap();
    let noise = Normal::<f64>::new(0.0, 0.02).unwrap();
    let clash = Normal::<f64>::new(6.0, 3.0).unwrap();

    let mut res = Vec::with_capacity(n);
    let mut r_free = Vec::with_capacity(n);
    let mut clashscore = Vec::with_capacity(n);
    let mut year = Vec::with_capacity(n);
    for i in 0..n {
        let r: f64 = resolution.sample(&mut rng).clamp(0.8, 4.5);
        res.push(Some(dec(r, 2)));
        let rf = 0.12 + 0.05 * r + noise.sample(&mut rng);
        r_free.push((i % 10 != 0).then(|| dec(rf, 4)));
        clashscore.push(Some(dec(clash.sample(&mut rng).abs(), 2)));
        year.push(Some(Decimal::from(1995 + (i % 30) as i64)));
    }

    let ids = (0..n).map(|i| format!("{i:04X}")).collect();
    Dataset::new(ids)
        .with_column(FactorColumn::new("resolution", FactorKind::Numeric, res))
        .unwrap()
        .with_column(FactorColumn::new("r_free", FactorKind::Numeric, r_free))
        .unwrap()
        .with_column(FactorColumn::new("clashscore", FactorKind::Numeric, clashscore))
        .unwrap()
        .with_column(FactorColumn::new("release_year", FactorKind::Year, year))
        .unwrap()
}

pub const HIERARCHY: &str = r#"[
    {
        "Id": "refinement",
        "Children": [
            {"Id": "resolution", "ApplicableX": true, "ApplicableY": true},
            {"Id": "r_free", "ApplicableY": true},
            {"Id": "clashscore", "ApplicableX": true, "ApplicableY": true, "Format": "0.00"}
        ]
    },
    {"Id": "release_year", "ApplicableX": true},
    {"Id": "ligand_count", "ApplicableX": true}
]"#;
