//! Prior bucket limits keyed by X factor

use neat_core::{Decimal, Edge, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ascending bucket edges per X factor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "HashMap<String, Vec<Edge>>",
    into = "HashMap<String, Vec<Edge>>"
)]
pub struct BucketLimitTable {
    limits: HashMap<String, Vec<Edge>>,
}

impl BucketLimitTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the edges of a factor; they must be strictly ascending and at
    /// least two
    pub fn insert(&mut self, factor: impl Into<String>, edges: Vec<Edge>) -> Result<()> {
        let factor = factor.into();
        validate(&factor, &edges)?;
        self.limits.insert(factor, edges);
        Ok(())
    }

    /// Edges that are unbounded on both sides around the given interior
    /// edges, so no row is ever outside the table
    pub fn insert_open_ended(&mut self, factor: impl Into<String>, interior: &[Decimal]) -> Result<()> {
        let mut edges = Vec::with_capacity(interior.len() + 2);
        edges.push(Edge::NegInfinity);
        edges.extend(interior.iter().map(|&v| Edge::Finite(v)));
        edges.push(Edge::PosInfinity);
        self.insert(factor, edges)
    }

    pub fn get(&self, factor: &str) -> Result<&[Edge]> {
        self.limits
            .get(factor)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::UnknownFactor(factor.to_string()))
    }

    pub fn contains(&self, factor: &str) -> bool {
        self.limits.contains_key(factor)
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    pub fn factors(&self) -> impl Iterator<Item = &str> {
        self.limits.keys().map(String::as_str)
    }
}

fn validate(factor: &str, edges: &[Edge]) -> Result<()> {
    if edges.len() < 2 {
        return Err(Error::InvalidParameter(format!(
            "bucket limits of '{factor}' need at least two edges, got {}",
            edges.len()
        )));
    }
    if edges.windows(2).any(|w| w[0] >= w[1]) {
        return Err(Error::InvalidParameter(format!(
            "bucket limits of '{factor}' must be strictly ascending"
        )));
    }
    Ok(())
}

impl TryFrom<HashMap<String, Vec<Edge>>> for BucketLimitTable {
    type Error = Error;

    fn try_from(limits: HashMap<String, Vec<Edge>>) -> Result<Self> {
        for (factor, edges) in &limits {
            validate(factor, edges)?;
        }
        Ok(Self { limits })
    }
}

impl From<BucketLimitTable> for HashMap<String, Vec<Edge>> {
    fn from(table: BucketLimitTable) -> Self {
        table.limits
    }
}
