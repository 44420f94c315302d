//! Core traits for distribution building

use crate::types::Distribution;
use neat_core::{Decimal, FactorColumn, Result};

/// Trait for building distributions from a factor's values
pub trait DistributionBuilder {
    /// Build a distribution from the given values
    fn build(&self, factor: &str, values: &[Decimal]) -> Result<Distribution>;

    /// Build from the non-missing values of a column
    fn build_column(&self, column: &FactorColumn) -> Result<Distribution> {
        let values: Vec<Decimal> = column.present().collect();
        self.build(column.name(), &values)
    }

    /// Get the bucket-count ceiling (if any)
    fn max_buckets(&self) -> Option<usize> {
        None
    }
}
