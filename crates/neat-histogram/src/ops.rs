//! Rounding and counting of raw values

use neat_core::Decimal;
use std::collections::BTreeMap;

/// Round to `digits` significant digits, dropping trailing zeros
pub fn round_significant(value: Decimal, digits: u32) -> Decimal {
    value.round_sf(digits).unwrap_or(value).normalize()
}

/// Occurrences of each rounded value, in ascending order
pub fn value_counts(values: &[Decimal], digits: u32) -> BTreeMap<Decimal, usize> {
    let mut counts = BTreeMap::new();
    for &v in values {
        *counts.entry(round_significant(v, digits)).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_significant() {
        assert_eq!(round_significant(d("1.2345"), 3).to_string(), "1.23");
        assert_eq!(round_significant(d("0.0012399"), 3).to_string(), "0.00124");
        assert_eq!(round_significant(d("2.50"), 3).to_string(), "2.5");
        assert_eq!(round_significant(d("-7.777"), 2).to_string(), "-7.8");
        assert_eq!(round_significant(Decimal::ZERO, 3), Decimal::ZERO);
    }

    #[test]
    fn test_value_counts_merge_after_rounding() {
        let values = [d("1.001"), d("1.0004"), d("2"), d("1")];
        let counts = value_counts(&values, 3);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&d("1")], 3);
        assert_eq!(counts[&d("2")], 1);
    }
}
