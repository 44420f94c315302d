//! Field kinds for raw extracted values
//!
//! Loaders hand over raw strings per field. The expected kind of each field
//! is declared statically in a [`FieldSchema`]; coercion is a plain `match`
//! on that kind.

use crate::dataset::{Dataset, FactorColumn, FactorKind};
use crate::{Error, Result};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

/// Expected type of a raw field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Decimal,
    Year,
    /// `YYYY-MM-DD`, reduced to its year
    Date,
    Text,
}

impl FieldKind {
    /// Factor kind of the column this field produces, if it is a factor
    pub fn factor_kind(self) -> Option<FactorKind> {
        match self {
            FieldKind::Integer | FieldKind::Decimal => Some(FactorKind::Numeric),
            FieldKind::Year | FieldKind::Date => Some(FactorKind::Year),
            FieldKind::Text => None,
        }
    }
}

/// A coerced field value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(Decimal),
    Text(String),
    Missing,
}

/// Quality metrics extracted per structure
pub const STRUCTURE_FIELDS: &[(&str, FieldKind)] = &[
    ("resolution", FieldKind::Decimal),
    ("r_work", FieldKind::Decimal),
    ("r_free", FieldKind::Decimal),
    ("clashscore", FieldKind::Decimal),
    ("ramachandran_outliers", FieldKind::Decimal),
    ("sidechain_outliers", FieldKind::Decimal),
    ("rsrz_outliers", FieldKind::Decimal),
    ("average_b_factor", FieldKind::Decimal),
    ("atom_count", FieldKind::Integer),
    ("residue_count", FieldKind::Integer),
    ("deposition_date", FieldKind::Date),
    ("release_year", FieldKind::Year),
    ("experimental_method", FieldKind::Text),
];

/// Statically declared mapping from field name to expected kind
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    fields: &'static [(&'static str, FieldKind)],
}

impl FieldSchema {
    pub const fn new(fields: &'static [(&'static str, FieldKind)]) -> Self {
        Self { fields }
    }

    pub fn kind_of(&self, field: &str) -> Option<FieldKind> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|&(_, kind)| kind)
    }

    pub fn fields(&self) -> &'static [(&'static str, FieldKind)] {
        self.fields
    }

    /// Coerce a raw string to the declared kind of `field`.
    ///
    /// Empty strings and the mmCIF placeholders `?` and `.` are missing.
    pub fn coerce(&self, field: &str, raw: &str) -> Result<FieldValue> {
        let kind = self
            .kind_of(field)
            .ok_or_else(|| Error::UnknownFactor(field.to_string()))?;
        let raw = raw.trim();
        if raw.is_empty() || raw == "?" || raw == "." {
            return Ok(FieldValue::Missing);
        }
        let invalid = |what: &str| Error::InvalidInput(format!("field '{field}': '{raw}' is not {what}"));

        match kind {
            FieldKind::Integer | FieldKind::Year => raw
                .parse::<i64>()
                .map(|v| FieldValue::Number(Decimal::from(v)))
                .map_err(|_| invalid("an integer")),
            FieldKind::Decimal => Decimal::from_str(raw)
                .or_else(|_| Decimal::from_scientific(raw))
                .map(|v| FieldValue::Number(v.normalize()))
                .map_err(|_| invalid("a decimal")),
            FieldKind::Date => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(|d| FieldValue::Number(Decimal::from(d.year())))
                .map_err(|_| invalid("a YYYY-MM-DD date")),
            FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
        }
    }

    /// Build a dataset from raw records keyed by structure id.
    ///
    /// Every factor field of the schema becomes a column; text fields and
    /// fields not in the schema are ignored.
    pub fn build_dataset<'a, I>(&self, records: I) -> Result<Dataset>
    where
        I: IntoIterator<Item = (String, &'a HashMap<String, String>)>,
    {
        let factor_fields: Vec<(&str, FactorKind)> = self
            .fields
            .iter()
            .filter_map(|&(name, kind)| kind.factor_kind().map(|k| (name, k)))
            .collect();

        let mut ids = Vec::new();
        let mut columns: Vec<Vec<Option<Decimal>>> = vec![Vec::new(); factor_fields.len()];
        for (id, record) in records {
            for ((name, _), column) in factor_fields.iter().zip(columns.iter_mut()) {
                let value = match record.get(*name) {
                    Some(raw) => match self.coerce(name, raw)? {
                        FieldValue::Number(v) => Some(v),
                        _ => None,
                    },
                    None => None,
                };
                column.push(value);
            }
            ids.push(id);
        }

        let mut dataset = Dataset::new(ids);
        for ((name, kind), values) in factor_fields.into_iter().zip(columns) {
            dataset.push_column(FactorColumn::new(name, kind, values))?;
        }
        Ok(dataset)
    }
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self::new(STRUCTURE_FIELDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_lookup() {
        let schema = FieldSchema::default();
        assert_eq!(schema.kind_of("resolution"), Some(FieldKind::Decimal));
        assert_eq!(schema.kind_of("deposition_date"), Some(FieldKind::Date));
        assert_eq!(schema.kind_of("unheard_of"), None);
    }

    #[test]
    fn test_coerce_by_kind() {
        let schema = FieldSchema::default();
        assert_eq!(
            schema.coerce("resolution", "1.85").unwrap(),
            FieldValue::Number(Decimal::new(185, 2))
        );
        assert_eq!(
            schema.coerce("average_b_factor", "2.5e1").unwrap(),
            FieldValue::Number(Decimal::from(25))
        );
        assert_eq!(
            schema.coerce("atom_count", " 1024 ").unwrap(),
            FieldValue::Number(Decimal::from(1024))
        );
        assert_eq!(
            schema.coerce("deposition_date", "2015-06-01").unwrap(),
            FieldValue::Number(Decimal::from(2015))
        );
        assert_eq!(
            schema.coerce("experimental_method", "X-RAY DIFFRACTION").unwrap(),
            FieldValue::Text("X-RAY DIFFRACTION".to_string())
        );
    }

    #[test]
    fn test_placeholders_are_missing() {
        let schema = FieldSchema::default();
        for raw in ["", "?", ".", "   "] {
            assert_eq!(schema.coerce("r_free", raw).unwrap(), FieldValue::Missing);
        }
    }

    #[test]
    fn test_coerce_errors() {
        let schema = FieldSchema::default();
        assert!(matches!(
            schema.coerce("atom_count", "12.5"),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            schema.coerce("deposition_date", "June 2015"),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            schema.coerce("nonexistent", "1"),
            Err(Error::UnknownFactor(_))
        ));
    }

    #[test]
    fn test_build_dataset() {
        const FIELDS: &[(&str, FieldKind)] = &[
            ("resolution", FieldKind::Decimal),
            ("deposition_date", FieldKind::Date),
            ("experimental_method", FieldKind::Text),
        ];
        let schema = FieldSchema::new(FIELDS);

        let a: HashMap<String, String> = [
            ("resolution".to_string(), "2.1".to_string()),
            ("deposition_date".to_string(), "1999-12-31".to_string()),
            ("experimental_method".to_string(), "NMR".to_string()),
        ]
        .into_iter()
        .collect();
        let b: HashMap<String, String> =
            [("resolution".to_string(), "?".to_string())].into_iter().collect();

        let ds = schema
            .build_dataset(vec![("1ABC".to_string(), &a), ("2XYZ".to_string(), &b)])
            .unwrap();

        assert_eq!(ds.row_count(), 2);
        assert_eq!(ds.columns().len(), 2);
        let year = ds.factor("deposition_date").unwrap();
        assert!(year.is_year_like());
        assert_eq!(year.get(0), Some(Decimal::from(1999)));
        assert_eq!(year.get(1), None);
        assert_eq!(ds.factor("resolution").unwrap().get(1), None);
        assert!(ds.factor("experimental_method").is_err());
    }
}
