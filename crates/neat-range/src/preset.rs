//! Default axis ranges and bucket widths per factor

use crate::search::{BucketPlan, BucketSizeSearch, CompanionSupport};
use crate::trim::RangeTrimmer;
use neat_core::{Dataset, Decimal, Error, NeatNumber, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Raw, trimmed and accepted range of one factor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorRangeSpec {
    pub factor: String,
    pub raw_min: Decimal,
    pub raw_max: Decimal,
    pub trimmed_min: Decimal,
    pub trimmed_max: Decimal,
    pub width: NeatNumber,
    /// Accepted bucket edges, from the lower to the upper limit
    pub edges: Vec<Decimal>,
}

impl FactorRangeSpec {
    pub fn lower_limit(&self) -> Decimal {
        self.edges[0]
    }

    pub fn upper_limit(&self) -> Decimal {
        self.edges[self.edges.len() - 1]
    }

    /// Edges strictly inside the accepted range
    pub fn interior_edges(&self) -> &[Decimal] {
        match self.edges.len() {
            0..=2 => &[],
            n => &self.edges[1..n - 1],
        }
    }

    pub fn to_preset(&self, label: impl Into<String>) -> Preset {
        Preset {
            factor: self.factor.clone(),
            label: label.into(),
            bucket_width: self.width.value(),
            lower_limit: self.lower_limit(),
            upper_limit: self.upper_limit(),
        }
    }
}

/// Default range and bucket width shown for a factor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub factor: String,
    pub label: String,
    pub bucket_width: Decimal,
    pub lower_limit: Decimal,
    pub upper_limit: Decimal,
}

/// Trims each factor and searches its bucket width against all companions
#[derive(Debug, Clone)]
pub struct PresetPlanner {
    trimmer: RangeTrimmer,
    search: BucketSizeSearch,
}

impl PresetPlanner {
    pub fn new(trimmer: RangeTrimmer, search: BucketSizeSearch) -> Self {
        Self { trimmer, search }
    }

    /// Range spec of `factor` valid for every companion in `companions`
    #[instrument(skip(self, dataset))]
    pub fn plan(
        &self,
        dataset: &Dataset,
        factor: &str,
        companions: &[&str],
    ) -> Result<FactorRangeSpec> {
        let column = dataset.factor(factor)?;
        let (raw_min, raw_max) = column
            .min_max()
            .ok_or_else(|| Error::empty_range(factor))?;

        let (trimmed_min, trimmed_max) = self.trimmer.joint_range(dataset, factor, companions)?;
        let support = CompanionSupport::from_dataset(dataset, factor, companions)?;
        let BucketPlan { width, edges } =
            self.search
                .search(factor, column.kind(), trimmed_min, trimmed_max, &support)?;

        debug!(%width, buckets = edges.len() - 1, "planned factor range");
        Ok(FactorRangeSpec {
            factor: factor.to_string(),
            raw_min,
            raw_max,
            trimmed_min,
            trimmed_max,
            width,
            edges,
        })
    }
}
