//! Conversion of Polars DataFrames into bucketing datasets

use crate::{Error, Result};
use neat_core::{Dataset, Decimal, FactorColumn, FactorKind};
use num_traits::FromPrimitive;
use polars::prelude::*;

/// Extension trait turning a DataFrame into a [`Dataset`]
pub trait DatasetExt {
    /// Convert every numeric column into a factor
    ///
    /// # Arguments
    /// * `id_column` - Column holding the structure id of each row
    /// * `year_columns` - Numeric columns to treat as calendar years
    ///
    /// # Returns
    /// Dataset with one factor per numeric column; other columns are ignored
    fn to_dataset(&self, id_column: &str, year_columns: &[&str]) -> Result<Dataset>;

    /// Convert a single numeric column
    ///
    /// Nulls and non-finite floats become missing values.
    fn factor_column(&self, name: &str, kind: FactorKind) -> Result<FactorColumn>;
}

fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float64
            | DataType::Float32
            | DataType::Int64
            | DataType::Int32
            | DataType::Int16
            | DataType::Int8
            | DataType::UInt64
            | DataType::UInt32
            | DataType::UInt16
            | DataType::UInt8
    )
}

impl DatasetExt for DataFrame {
    fn to_dataset(&self, id_column: &str, year_columns: &[&str]) -> Result<Dataset> {
        let ids_column = self
            .column(id_column)
            .map_err(|_| Error::InvalidColumn(id_column.to_string()))?
            .cast(&DataType::String)?;
        let ids = ids_column
            .str()?
            .into_iter()
            .enumerate()
            .map(|(row, id)| {
                id.map(str::to_string).ok_or_else(|| {
                    Error::InvalidInput(format!("row {row} has no value in '{id_column}'"))
                })
            })
            .collect::<Result<Vec<String>>>()?;

        let mut dataset = Dataset::new(ids);
        for column in self.get_columns() {
            let name = column.name().as_str();
            if name == id_column || !is_numeric_dtype(column.dtype()) {
                continue;
            }
            let kind = if year_columns.contains(&name) {
                FactorKind::Year
            } else {
                FactorKind::Numeric
            };
            dataset.push_column(self.factor_column(name, kind)?)?;
        }

        if let Some(missing) = year_columns.iter().find(|c| dataset.factor(c).is_err()) {
            return Err(Error::InvalidColumn(missing.to_string()));
        }
        Ok(dataset)
    }

    fn factor_column(&self, name: &str, kind: FactorKind) -> Result<FactorColumn> {
        let column = self
            .column(name)
            .map_err(|_| Error::InvalidColumn(name.to_string()))?;

        let floats = match column.dtype() {
            DataType::Float64 => column.clone(),
            dtype if is_numeric_dtype(dtype) => column.cast(&DataType::Float64)?,
            other => {
                return Err(Error::TypeMismatch {
                    expected: "numeric".to_string(),
                    got: other.to_string(),
                })
            }
        };

        let values: Vec<Option<Decimal>> = floats
            .f64()?
            .into_iter()
            .map(|v| {
                v.filter(|f| f.is_finite())
                    .and_then(Decimal::from_f64)
                    .map(|d| d.normalize())
            })
            .collect();
        Ok(FactorColumn::new(name, kind, values))
    }
}
