//! Summary statistics over float slices
//!
//! Binary floating point is used only here; every edge or size that a human
//! reads stays a [`rust_decimal::Decimal`].

use serde::{Deserialize, Serialize};
use statrs::statistics::{Data, Distribution, Max, Min, OrderStatistics};

/// Arithmetic mean, or NaN for an empty slice
///
/// # Examples
///
/// ```rust
/// use neat_core::stats::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert!(mean(&[]).is_nan());
/// ```
pub fn mean(data: &[f64]) -> f64 {
    use statrs::statistics::Statistics;
    data.iter().mean()
}

/// Population standard deviation (divides by `n`)
///
/// # Examples
///
/// ```rust
/// use neat_core::stats::population_std_dev;
///
/// let sd = population_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// assert!((sd - 2.0).abs() < 1e-12);
/// ```
pub fn population_std_dev(data: &[f64]) -> f64 {
    use statrs::statistics::Statistics;
    data.iter().population_std_dev()
}

/// Distribution summary of one bucket's companion values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub mean: f64,
    pub lower_quartile: f64,
    pub median: f64,
    pub upper_quartile: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    /// Summarize `values`; `None` when empty or not finite
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() || values.iter().any(|v| !v.is_finite()) {
            return None;
        }
        let mut data = Data::new(values.to_vec());
        let mean = Distribution::mean(&data)?;
        Some(Self {
            mean,
            lower_quartile: data.lower_quartile(),
            median: data.quantile(0.5),
            upper_quartile: data.upper_quartile(),
            min: data.min(),
            max: data.max(),
        })
    }
}
