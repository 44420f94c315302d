//! Factor columns and the tabular dataset they belong to

use crate::{Error, Result};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How the values of a factor should be treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FactorKind {
    /// Continuous measurement, rounded to neat numbers
    #[default]
    Numeric,
    /// Calendar year, stepped by whole units
    Year,
}

/// A named column of optional values, one per dataset row
#[derive(Debug, Clone, PartialEq)]
pub struct FactorColumn {
    name: String,
    kind: FactorKind,
    values: Vec<Option<Decimal>>,
}

impl FactorColumn {
    pub fn new(name: impl Into<String>, kind: FactorKind, values: Vec<Option<Decimal>>) -> Self {
        Self {
            name: name.into(),
            kind,
            values,
        }
    }

    /// Numeric column from plain floats; non-finite values become missing
    pub fn from_f64(name: impl Into<String>, values: &[Option<f64>]) -> Self {
        use num_traits::FromPrimitive;
        let values = values
            .iter()
            .map(|v| v.and_then(Decimal::from_f64).map(|d| d.normalize()))
            .collect();
        Self::new(name, FactorKind::Numeric, values)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FactorKind {
        self.kind
    }

    pub fn is_year_like(&self) -> bool {
        self.kind == FactorKind::Year
    }

    /// Number of rows, including missing ones
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<Decimal> {
        self.values.get(row).copied().flatten()
    }

    pub fn values(&self) -> &[Option<Decimal>] {
        &self.values
    }

    /// Non-missing values in row order
    pub fn present(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.values.iter().filter_map(|v| *v)
    }

    /// Smallest and largest non-missing value
    pub fn min_max(&self) -> Option<(Decimal, Decimal)> {
        self.present().fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    /// Number of distinct non-missing values, capped at `limit`
    pub fn distinct_at_least(&self, limit: usize) -> usize {
        let mut seen: Vec<Decimal> = Vec::with_capacity(limit);
        for v in self.present() {
            if !seen.contains(&v) {
                seen.push(v);
                if seen.len() >= limit {
                    break;
                }
            }
        }
        seen.len()
    }
}

/// Rows keyed by structure id, with one [`FactorColumn`] per factor
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    ids: Vec<String>,
    columns: Vec<FactorColumn>,
    index: HashMap<String, usize>,
}

impl Dataset {
    /// Create an empty dataset over the given structure ids
    pub fn new(ids: Vec<String>) -> Self {
        Self {
            ids,
            columns: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add a column, checking its length and name
    pub fn with_column(mut self, column: FactorColumn) -> Result<Self> {
        self.push_column(column)?;
        Ok(self)
    }

    pub fn push_column(&mut self, column: FactorColumn) -> Result<()> {
        if column.len() != self.ids.len() {
            return Err(Error::InvalidInput(format!(
                "column '{}' has {} rows, dataset has {}",
                column.name(),
                column.len(),
                self.ids.len()
            )));
        }
        if self.index.contains_key(column.name()) {
            return Err(Error::InvalidInput(format!(
                "duplicate column '{}'",
                column.name()
            )));
        }
        self.index.insert(column.name().to_string(), self.columns.len());
        self.columns.push(column);
        Ok(())
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn row_count(&self) -> usize {
        self.ids.len()
    }

    pub fn columns(&self) -> &[FactorColumn] {
        &self.columns
    }

    /// Factor names in insertion order
    pub fn factor_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name())
    }

    pub fn factor(&self, name: &str) -> Result<&FactorColumn> {
        self.index
            .get(name)
            .map(|&i| &self.columns[i])
            .ok_or_else(|| Error::UnknownFactor(name.to_string()))
    }

    /// Rows where both factors are present, as `(x, y)`
    pub fn pairs(&self, x: &str, y: &str) -> Result<Vec<(Decimal, Decimal)>> {
        let xs = self.factor(x)?;
        let ys = self.factor(y)?;
        Ok(xs
            .values()
            .iter()
            .zip(ys.values())
            .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
            .collect())
    }

    /// Values of `x` on rows where `companion` is also present
    pub fn values_where_present(&self, x: &str, companion: &str) -> Result<Vec<Decimal>> {
        Ok(self.pairs(x, companion)?.into_iter().map(|(a, _)| a).collect())
    }
}

/// Lossy conversion used only for statistics
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
