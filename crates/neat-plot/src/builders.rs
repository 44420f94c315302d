//! Scatter summary construction

use crate::limits::BucketLimitTable;
use crate::merge::{merge_undersized, partition, repair_gaps, WorkingBucket};
use crate::types::{EdgeValue, PlotBucket, PlotSummary};
use neat_core::{to_f64, Dataset, Decimal, Edge, Error, Result, Summary};
use tracing::{debug, instrument};

/// Builds a [`PlotSummary`] for an X/Y factor pair from prior X edges
#[derive(Debug, Clone)]
pub struct PlotBuilder {
    min_rows: usize,
}

impl PlotBuilder {
    /// Create a builder; buckets end with at least `min_rows` rows
    pub fn new(min_rows: usize) -> Self {
        Self {
            min_rows: min_rows.max(1),
        }
    }

    pub fn min_rows(&self) -> usize {
        self.min_rows
    }

    /// Summarize `y` along `x` using the limits stored for `x`
    #[instrument(skip(self, dataset, limits), fields(min_rows = self.min_rows))]
    pub fn build(
        &self,
        dataset: &Dataset,
        limits: &BucketLimitTable,
        x: &str,
        y: &str,
    ) -> Result<PlotSummary> {
        let edges = limits.get(x)?;
        let mut rows = dataset.pairs(x, y)?;
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        self.build_from_rows(x, y, &rows, edges)
    }

    /// Summarize `(x, y)` rows sorted by X over the given edges
    pub fn build_from_rows(
        &self,
        x: &str,
        y: &str,
        sorted_rows: &[(Decimal, Decimal)],
        edges: &[Edge],
    ) -> Result<PlotSummary> {
        let context = format!("{y} vs {x}");

        let mut buckets = partition(sorted_rows, edges)?;
        if buckets.is_empty() {
            return Err(Error::EmptyRange(format!(
                "no rows of '{context}' fall within the bucket limits"
            )));
        }
        let working = buckets.len();
        repair_gaps(&mut buckets);
        let merged = merge_undersized(buckets, self.min_rows, &context)?;
        debug!(working, merged = merged.len(), "merged plot buckets");

        let buckets = merged
            .iter()
            .enumerate()
            .map(|(i, b)| final_bucket(i + 1, b))
            .collect::<Result<Vec<_>>>()?;

        // Rows stay sorted through partition and merge
        let x_min = merged.first().and_then(|b| b.rows().first()).map(|r| r.0);
        let x_max = merged.last().and_then(|b| b.rows().last()).map(|r| r.0);
        let (Some(x_min), Some(x_max)) = (x_min, x_max) else {
            return Err(Error::EmptyRange(context));
        };

        Ok(PlotSummary {
            x_factor: x.to_string(),
            y_factor: y.to_string(),
            x_min,
            x_max,
            structure_count: merged.iter().map(WorkingBucket::len).sum(),
            buckets,
        })
    }
}

impl Default for PlotBuilder {
    fn default() -> Self {
        Self { min_rows: 100 }
    }
}

/// Final bucket with statistics; infinite ends become the observed extremes
fn final_bucket(position: usize, bucket: &WorkingBucket) -> Result<PlotBucket> {
    let interval = bucket.interval();
    let xs = bucket.rows().iter().map(|&(x, _)| x);
    let observed_min = xs.clone().min();
    let observed_max = xs.max();

    let end = |edge: Edge, closed: bool, observed: Option<Decimal>| -> Result<EdgeValue> {
        match edge.finite() {
            Some(value) => Ok(EdgeValue { value, closed }),
            None => observed
                .map(|value| EdgeValue { value, closed: true })
                .ok_or_else(|| Error::InvalidInput(format!("bucket {interval} has no rows"))),
        }
    };

    let ys: Vec<f64> = bucket.rows().iter().map(|&(_, y)| to_f64(y)).collect();
    let y = Summary::from_values(&ys).ok_or_else(|| {
        Error::InvalidInput(format!("bucket {interval} has no finite Y values"))
    })?;

    Ok(PlotBucket {
        position,
        count: bucket.len(),
        x_from: end(interval.left(), interval.left_closed(), observed_min)?,
        x_to: end(interval.right(), interval.right_closed(), observed_max)?,
        y,
    })
}
