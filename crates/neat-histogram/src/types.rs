//! Output types for distribution histograms

use neat_core::serde_support::count_as_string;
use neat_core::Decimal;
use serde::Serialize;
use std::fmt;

/// One bucket of a single-factor distribution
///
/// Both edges are inclusive: a bucket spans the rounded values it absorbed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionBucket {
    pub from: Decimal,
    pub to: Decimal,
    /// Whether the bucket spans more than one distinct rounded value
    pub is_interval: bool,
    #[serde(serialize_with = "count_as_string")]
    pub count: usize,
}

impl DistributionBucket {
    /// Check if a rounded value falls within this bucket
    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.from && value <= self.to
    }

    pub fn width(&self) -> Decimal {
        self.to - self.from
    }
}

impl fmt::Display for DistributionBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_interval {
            write!(f, "[{}, {}]: count={}", self.from, self.to, self.count)
        } else {
            write!(f, "{}: count={}", self.from, self.count)
        }
    }
}

/// Ordered buckets of one factor's distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Distribution {
    factor: String,
    buckets: Vec<DistributionBucket>,
}

impl Distribution {
    pub fn new(factor: impl Into<String>, buckets: Vec<DistributionBucket>) -> Self {
        Self {
            factor: factor.into(),
            buckets,
        }
    }

    pub fn factor(&self) -> &str {
        &self.factor
    }

    pub fn buckets(&self) -> &[DistributionBucket] {
        &self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of values across all buckets
    pub fn total_count(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }

    pub fn counts(&self) -> Vec<usize> {
        self.buckets.iter().map(|b| b.count).collect()
    }

    /// Index of the bucket holding a rounded value
    pub fn find_bucket(&self, value: Decimal) -> Option<usize> {
        self.buckets.iter().position(|b| b.contains(value))
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Distribution({}, {} buckets, n={})",
            self.factor,
            self.len(),
            self.total_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(from: i64, to: i64, count: usize) -> DistributionBucket {
        DistributionBucket {
            from: Decimal::from(from),
            to: Decimal::from(to),
            is_interval: from != to,
            count,
        }
    }

    #[test]
    fn test_bucket_contains_both_edges() {
        let b = bucket(2, 4, 7);
        assert!(b.contains(Decimal::from(2)));
        assert!(b.contains(Decimal::from(4)));
        assert!(!b.contains(Decimal::from(5)));
        assert_eq!(b.width(), Decimal::from(2));
        assert_eq!(b.to_string(), "[2, 4]: count=7");
        assert_eq!(bucket(3, 3, 1).to_string(), "3: count=1");
    }

    #[test]
    fn test_distribution_accessors() {
        let d = Distribution::new("resolution", vec![bucket(1, 1, 3), bucket(2, 4, 4)]);
        assert_eq!(d.len(), 2);
        assert_eq!(d.total_count(), 7);
        assert_eq!(d.counts(), vec![3, 4]);
        assert_eq!(d.find_bucket(Decimal::from(3)), Some(1));
        assert_eq!(d.find_bucket(Decimal::from(9)), None);
        assert_eq!(d.to_string(), "Distribution(resolution, 2 buckets, n=7)");
    }

    #[test]
    fn test_serialized_shape() {
        let d = Distribution::new("clashscore", vec![bucket(0, 5, 280)]);
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["factor"], "clashscore");
        assert_eq!(json["buckets"][0]["from"], "0");
        assert_eq!(json["buckets"][0]["isInterval"], true);
        assert_eq!(json["buckets"][0]["count"], "280");
    }
}
