//! Working buckets and their repair passes
//!
//! Rows are first partitioned over the prior edges. Empty intervals are
//! dropped, which can leave gaps; [`repair_gaps`] closes them before
//! [`merge_undersized`] folds buckets below the minimum row count into a
//! neighbour.

use neat_core::{Decimal, Edge, Error, Interval, Result};
use std::cmp::Ordering;
use tracing::debug;

/// An interval with the `(x, y)` rows that fall inside it
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingBucket {
    interval: Interval,
    rows: Vec<(Decimal, Decimal)>,
}

impl WorkingBucket {
    pub fn new(interval: Interval, rows: Vec<(Decimal, Decimal)>) -> Self {
        Self { interval, rows }
    }

    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    pub fn rows(&self) -> &[(Decimal, Decimal)] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Take over the bucket that immediately follows this one
    pub fn absorb(&mut self, next: WorkingBucket) -> Result<()> {
        self.interval = self.interval.join(&next.interval)?;
        self.rows.extend(next.rows);
        Ok(())
    }
}

/// Intervals between consecutive edges.
///
/// Finite left edges are closed; the last right edge is closed when finite so
/// the maximum stays inside.
pub fn intervals_from_edges(edges: &[Edge]) -> Result<Vec<Interval>> {
    let last = edges.len().saturating_sub(2);
    edges
        .windows(2)
        .enumerate()
        .map(|(i, w)| Interval::new(w[0], w[1], w[0].is_finite(), i == last && w[1].is_finite()))
        .collect()
}

/// Assign rows, sorted by X, to the intervals between `edges`.
///
/// Rows outside every interval are skipped; intervals without rows yield no
/// bucket.
pub fn partition(sorted_rows: &[(Decimal, Decimal)], edges: &[Edge]) -> Result<Vec<WorkingBucket>> {
    let intervals = intervals_from_edges(edges)?;
    let mut rows_per: Vec<Vec<(Decimal, Decimal)>> = vec![Vec::new(); intervals.len()];

    let mut current = 0;
    for &(x, y) in sorted_rows {
        while current < intervals.len() && intervals[current].position(x) == Ordering::Greater {
            current += 1;
        }
        if current == intervals.len() {
            break;
        }
        if intervals[current].contains(x) {
            rows_per[current].push((x, y));
        }
    }

    Ok(intervals
        .into_iter()
        .zip(rows_per)
        .filter(|(_, rows)| !rows.is_empty())
        .map(|(interval, rows)| WorkingBucket::new(interval, rows))
        .collect())
}

/// Close gaps left by dropped empty intervals.
///
/// Of two neighbours that do not meet, the one with fewer rows is stretched
/// to meet the other; on a tie the earlier bucket is stretched.
pub fn repair_gaps(buckets: &mut [WorkingBucket]) {
    for i in 1..buckets.len() {
        let (head, tail) = buckets.split_at_mut(i);
        let (prev, next) = (&mut head[i - 1], &mut tail[0]);
        if prev.interval.is_adjacent_to(&next.interval) {
            continue;
        }
        if prev.len() <= next.len() {
            prev.interval.extend_to(&next.interval);
        } else {
            next.interval.extend_back_to(&prev.interval);
        }
        debug!(left = %prev.interval, right = %next.interval, "closed gap");
    }
}

/// Fold buckets with fewer than `min_rows` rows into a neighbour.
///
/// A small bucket joins the previous finalized bucket when that one has fewer
/// rows than the next bucket, otherwise it is carried into the next bucket.
/// The last bucket can only merge backward. A single bucket below the minimum
/// is [`Error::InsufficientData`].
pub fn merge_undersized(
    buckets: Vec<WorkingBucket>,
    min_rows: usize,
    context: &str,
) -> Result<Vec<WorkingBucket>> {
    let mut merged: Vec<WorkingBucket> = Vec::with_capacity(buckets.len());
    let mut carried: Option<WorkingBucket> = None;
    let mut remaining = buckets.into_iter().peekable();

    while let Some(bucket) = remaining.next() {
        let current = match carried.take() {
            Some(mut small) => {
                small.absorb(bucket)?;
                small
            }
            None => bucket,
        };
        if current.len() >= min_rows {
            merged.push(current);
            continue;
        }

        match (merged.last_mut(), remaining.peek()) {
            (Some(prev), Some(next)) if prev.len() < next.len() => prev.absorb(current)?,
            (_, Some(_)) => carried = Some(current),
            (Some(prev), None) => prev.absorb(current)?,
            (None, None) => {
                return Err(Error::insufficient(context, min_rows, current.len()));
            }
        }
    }

    Ok(merged)
}
