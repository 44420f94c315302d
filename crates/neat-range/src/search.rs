//! Neat bucket-width search under a minimum-rows constraint
//!
//! Candidate widths come from the ascending sequence of allowed neat sizes,
//! starting at the width that would split the range into the maximum number
//! of buckets. The first width whose buckets all hold enough rows for every
//! companion column wins.

use neat_core::{AllowedBases, Dataset, Decimal, Error, FactorKind, NeatNumber, Result};
use serde::Serialize;
use tracing::{debug, instrument};

/// Sorted X values per companion column, for fast range counts
#[derive(Debug, Clone, Default)]
pub struct CompanionSupport {
    columns: Vec<(String, Vec<Decimal>)>,
}

impl CompanionSupport {
    /// Support for `factor` against each companion.
    ///
    /// Each entry holds the values of `factor` on rows where the companion is
    /// also present. Without companions the factor supports itself.
    pub fn from_dataset(dataset: &Dataset, factor: &str, companions: &[&str]) -> Result<Self> {
        let mut support = Self::default();
        if companions.is_empty() {
            support.push(factor, dataset.factor(factor)?.present().collect());
        }
        for companion in companions {
            support.push(*companion, dataset.values_where_present(factor, companion)?);
        }
        Ok(support)
    }

    /// Add one companion; values need not be sorted
    pub fn push(&mut self, name: impl Into<String>, mut values: Vec<Decimal>) {
        values.sort_unstable();
        self.columns.push((name.into(), values));
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Rows of companion `index` with X in `[lo, hi)`
    pub fn count_in(&self, index: usize, lo: Decimal, hi: Decimal) -> usize {
        let values = &self.columns[index].1;
        let start = values.partition_point(|v| *v < lo);
        let end = values.partition_point(|v| *v < hi);
        end.saturating_sub(start)
    }

    /// Companion with the fewest rows in `[lo, hi)`
    pub fn weakest(&self, lo: Decimal, hi: Decimal) -> Option<(&str, usize)> {
        (0..self.columns.len())
            .map(|i| (self.columns[i].0.as_str(), self.count_in(i, lo, hi)))
            .min_by_key(|&(_, count)| count)
    }
}

/// Accepted width and edges of a bucket-size search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketPlan {
    pub width: NeatNumber,
    /// Ascending edges; bucket `i` is `[edges[i], edges[i + 1])`
    pub edges: Vec<Decimal>,
}

impl BucketPlan {
    pub fn bucket_count(&self) -> usize {
        self.edges.len().saturating_sub(1)
    }

    pub fn lower_limit(&self) -> Decimal {
        self.edges[0]
    }

    pub fn upper_limit(&self) -> Decimal {
        self.edges[self.edges.len() - 1]
    }
}

/// Search for the finest neat width meeting the minimum-rows constraint
#[derive(Debug, Clone)]
pub struct BucketSizeSearch {
    max_buckets: usize,
    min_rows: usize,
    bases: AllowedBases,
}

impl BucketSizeSearch {
    pub fn new(max_buckets: usize, min_rows: usize, bases: AllowedBases) -> Result<Self> {
        if max_buckets == 0 {
            return Err(Error::InvalidParameter(
                "maximum bucket count must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            max_buckets,
            min_rows,
            bases,
        })
    }

    pub fn max_buckets(&self) -> usize {
        self.max_buckets
    }

    pub fn min_rows(&self) -> usize {
        self.min_rows
    }

    /// Find the first neat width whose buckets over `[min, max]` each hold at
    /// least `min_rows` rows for every companion in `support`.
    ///
    /// Year factors only use whole-number widths. The search gives up once a
    /// failing width is wider than both ends of the range measured from zero,
    /// since every larger width yields the same buckets.
    #[instrument(skip(self, support), fields(max_buckets = self.max_buckets, min_rows = self.min_rows))]
    pub fn search(
        &self,
        factor: &str,
        kind: FactorKind,
        min: Decimal,
        max: Decimal,
        support: &CompanionSupport,
    ) -> Result<BucketPlan> {
        if min >= max {
            return Err(Error::EmptyRange(format!(
                "factor '{factor}' has an empty range [{min}, {max}]"
            )));
        }

        let mut start = self.bases.neat_ceil((max - min) / Decimal::from(self.max_buckets))?;
        if kind == FactorKind::Year {
            start = start.max(NeatNumber::new(10, -1)?);
        }
        let reach = min.abs().max(max.abs());

        let mut last_weakest = 0;
        let candidates = self
            .bases
            .sizes_from(start)
            .filter(|w| kind != FactorKind::Year || w.value().fract().is_zero());
        for width in candidates {
            let edges = edges_for(width.value(), min, max);
            let buckets = edges.len() - 1;

            let weakest = edges
                .windows(2)
                .filter_map(|w| support.weakest(w[0], w[1]))
                .map(|(_, count)| count)
                .min();

            match weakest.filter(|&count| count < self.min_rows) {
                None => {
                    debug!(%width, buckets, "accepted bucket width");
                    return Ok(BucketPlan { width, edges });
                }
                Some(actual) if buckets <= 1 || width.value() > reach => {
                    return Err(Error::insufficient(factor, self.min_rows, actual));
                }
                Some(actual) => {
                    last_weakest = actual;
                    debug!(%width, buckets, actual, "bucket width rejected");
                }
            }
        }

        Err(Error::insufficient(factor, self.min_rows, last_weakest))
    }
}

/// Edges from the largest multiple of `width` not above `min` until one
/// exceeds `max`
fn edges_for(width: Decimal, min: Decimal, max: Decimal) -> Vec<Decimal> {
    let mut edge = ((min / width).floor() * width).normalize();
    let mut edges = vec![edge];
    while edge <= max {
        edge = (edge + width).normalize();
        edges.push(edge);
    }
    edges
}
