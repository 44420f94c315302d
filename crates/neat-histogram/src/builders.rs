//! Smallest-first merging of distinct values down to a bucket ceiling

use crate::ops::value_counts;
use crate::traits::DistributionBuilder;
use crate::types::{Distribution, DistributionBucket};
use neat_core::{Decimal, Error, Result};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::{debug, instrument};

/// Working bucket in the merge arena
#[derive(Debug, Clone)]
struct Slot {
    from: Decimal,
    to: Decimal,
    count: usize,
    distinct: usize,
    prev: Option<usize>,
    next: Option<usize>,
    alive: bool,
}

/// Smallest-first merge builder
///
/// Starts with one bucket per distinct rounded value and repeatedly folds the
/// smallest bucket into its smaller neighbour until at most `max_buckets`
/// remain. Ties pick the leftmost bucket and the left neighbour.
#[derive(Debug, Clone)]
pub struct SmallestFirstMerge {
    max_buckets: usize,
    precision_digits: u32,
}

impl SmallestFirstMerge {
    /// Create a builder; `precision_digits` is clamped to `1..=28`
    pub fn new(max_buckets: usize, precision_digits: u32) -> Result<Self> {
        if max_buckets == 0 {
            return Err(Error::InvalidParameter(
                "bucket ceiling must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            max_buckets,
            precision_digits: precision_digits.clamp(1, 28),
        })
    }

    pub fn precision_digits(&self) -> u32 {
        self.precision_digits
    }
}

impl Default for SmallestFirstMerge {
    fn default() -> Self {
        Self {
            max_buckets: 200,
            precision_digits: 3,
        }
    }
}

impl DistributionBuilder for SmallestFirstMerge {
    #[instrument(skip(self, values), fields(n = values.len(), max_buckets = self.max_buckets))]
    fn build(&self, factor: &str, values: &[Decimal]) -> Result<Distribution> {
        let counts = value_counts(values, self.precision_digits);
        if counts.is_empty() {
            return Err(Error::EmptyRange(format!("factor '{factor}' has no values")));
        }

        let last = counts.len() - 1;
        let mut slots: Vec<Slot> = counts
            .into_iter()
            .enumerate()
            .map(|(i, (value, count))| Slot {
                from: value,
                to: value,
                count,
                distinct: 1,
                prev: i.checked_sub(1),
                next: (i < last).then_some(i + 1),
                alive: true,
            })
            .collect();

        // Arena indices stay in left-to-right order, so the smallest index
        // among equal counts is the leftmost bucket
        let mut heap: BinaryHeap<Reverse<(usize, usize)>> = slots
            .iter()
            .enumerate()
            .map(|(i, s)| Reverse((s.count, i)))
            .collect();
        let distinct = slots.len();
        let mut live = distinct;

        while live > self.max_buckets {
            let Some(Reverse((count, i))) = heap.pop() else {
                break;
            };
            if !slots[i].alive || slots[i].count != count {
                continue;
            }

            let target = match (slots[i].prev, slots[i].next) {
                (Some(p), Some(n)) if slots[p].count <= slots[n].count => p,
                (Some(_), Some(n)) => n,
                (Some(p), None) => p,
                (None, Some(n)) => n,
                (None, None) => break,
            };

            let absorbed = slots[i].clone();
            {
                let t = &mut slots[target];
                t.from = t.from.min(absorbed.from);
                t.to = t.to.max(absorbed.to);
                t.count += absorbed.count;
                t.distinct += absorbed.distinct;
            }
            if let Some(p) = absorbed.prev {
                slots[p].next = absorbed.next;
            }
            if let Some(n) = absorbed.next {
                slots[n].prev = absorbed.prev;
            }
            slots[i].alive = false;
            live -= 1;
            heap.push(Reverse((slots[target].count, target)));
        }

        let mut buckets = Vec::with_capacity(live);
        let mut cursor = slots.iter().position(|s| s.alive);
        while let Some(i) = cursor {
            let s = &slots[i];
            buckets.push(DistributionBucket {
                from: s.from,
                to: s.to,
                is_interval: s.distinct > 1,
                count: s.count,
            });
            cursor = s.next;
        }

        debug!(factor, distinct, buckets = buckets.len(), "merged distribution");
        Ok(Distribution::new(factor, buckets))
    }

    fn max_buckets(&self) -> Option<usize> {
        Some(self.max_buckets)
    }
}
