//! Standard-deviation based outlier trimming

use neat_core::stats::{mean, population_std_dev};
use neat_core::{to_f64, Dataset, Decimal, Error, Result};
use tracing::debug;

/// Excludes values more than `k` population standard deviations from the
/// mean before a display range is computed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeTrimmer {
    std_multiplier: f64,
}

impl RangeTrimmer {
    /// Create with the given multiple of the standard deviation
    pub fn new(std_multiplier: f64) -> Result<Self> {
        if !std_multiplier.is_finite() || std_multiplier <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "outlier multiplier must be positive and finite, got {std_multiplier}"
            )));
        }
        Ok(Self { std_multiplier })
    }

    pub fn std_multiplier(&self) -> f64 {
        self.std_multiplier
    }

    /// Min and max of the values within `mean ± k·std`.
    ///
    /// The bounds are actual data values, so they stay exact. Fails with
    /// [`Error::EmptyRange`] when fewer than two distinct values are given or
    /// when trimming leaves a single value.
    pub fn trim(&self, factor: &str, values: &[Decimal]) -> Result<(Decimal, Decimal)> {
        let first = values.first().ok_or_else(|| Error::empty_range(factor))?;
        if values.iter().all(|v| v == first) {
            return Err(Error::empty_range(factor));
        }

        let floats: Vec<f64> = values.iter().map(|&v| to_f64(v)).collect();
        let centre = mean(&floats);
        let limit = self.std_multiplier * population_std_dev(&floats);

        let (lo, hi) = values
            .iter()
            .zip(&floats)
            .filter(|(_, &f)| (f - centre).abs() <= limit)
            .fold(None, |acc: Option<(Decimal, Decimal)>, (&v, _)| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .ok_or_else(|| Error::empty_range(factor))?;

        if lo == hi {
            return Err(Error::EmptyRange(format!(
                "factor '{factor}' collapses to the single value {lo} after trimming"
            )));
        }
        debug!(factor, %lo, %hi, centre, limit, "trimmed range");
        Ok((lo, hi))
    }

    /// Intersection of the trimmed ranges of `factor` against every
    /// companion.
    ///
    /// Each pairing trims only the rows where the companion is present. The
    /// result is the largest of the minimums and the smallest of the
    /// maximums, so a boundary drawn from it is valid whichever companion is
    /// plotted later. Without companions the factor's own values are trimmed.
    pub fn joint_range(
        &self,
        dataset: &Dataset,
        factor: &str,
        companions: &[&str],
    ) -> Result<(Decimal, Decimal)> {
        if companions.is_empty() {
            let values: Vec<Decimal> = dataset.factor(factor)?.present().collect();
            return self.trim(factor, &values);
        }

        let mut joint: Option<(Decimal, Decimal)> = None;
        for companion in companions {
            let values = dataset.values_where_present(factor, companion)?;
            let (lo, hi) = self.trim(factor, &values).map_err(|e| match e {
                Error::EmptyRange(_) => Error::EmptyRange(format!(
                    "factor '{factor}' has no usable range alongside '{companion}'"
                )),
                other => other,
            })?;
            joint = Some(match joint {
                None => (lo, hi),
                Some((jlo, jhi)) => (jlo.max(lo), jhi.min(hi)),
            });
        }

        match joint {
            Some((lo, hi)) if lo < hi => Ok((lo, hi)),
            _ => Err(Error::EmptyRange(format!(
                "trimmed ranges of '{factor}' do not intersect across companions"
            ))),
        }
    }
}

impl Default for RangeTrimmer {
    fn default() -> Self {
        Self { std_multiplier: 3.0 }
    }
}
