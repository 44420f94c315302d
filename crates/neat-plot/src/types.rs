//! Output types for paired scatter summaries

use neat_core::serde_support::count_as_string;
use neat_core::{Decimal, Summary};
use serde::Serialize;
use std::fmt;

/// One end of a plotted X range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeValue {
    pub value: Decimal,
    pub closed: bool,
}

/// Final bucket of a scatter summary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotBucket {
    /// 1-based position in the summary
    pub position: usize,
    #[serde(serialize_with = "count_as_string")]
    pub count: usize,
    pub x_from: EdgeValue,
    pub x_to: EdgeValue,
    pub y: Summary,
}

impl fmt::Display for PlotBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {}{}, {}{}: count={}, y_mean={:.3}",
            self.position,
            if self.x_from.closed { '[' } else { '(' },
            self.x_from.value,
            self.x_to.value,
            if self.x_to.closed { ']' } else { ')' },
            self.count,
            self.y.mean
        )
    }
}

/// Bucketed Y statistics along X for one factor pair
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotSummary {
    pub x_factor: String,
    pub y_factor: String,
    /// Smallest X among the summarized rows
    pub x_min: Decimal,
    /// Largest X among the summarized rows
    pub x_max: Decimal,
    #[serde(serialize_with = "count_as_string")]
    pub structure_count: usize,
    pub buckets: Vec<PlotBucket>,
}

impl PlotSummary {
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn counts(&self) -> Vec<usize> {
        self.buckets.iter().map(|b| b.count).collect()
    }
}

impl fmt::Display for PlotSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PlotSummary({} vs {}, {} buckets, n={})",
            self.y_factor,
            self.x_factor,
            self.len(),
            self.structure_count
        )
    }
}
