//! Two-significant-digit "neat" numbers
//!
//! Every human-facing size in this workspace (bucket widths, slider steps,
//! bucket edges) is funnelled through this module so that axis labels read
//! like 10, 20, 25, 50, 100 rather than 37.
//!
//! A [`NeatNumber`] is `base × 10^exponent` with a two-digit `base`. The
//! [`AllowedBases`] list restricts which bases may be produced and drives the
//! ascending sequence of candidate sizes used by the bucket searches.
//!
//! # Examples
//!
//! ```rust
//! use neat_core::neat::{decompose, AllowedBases};
//! use rust_decimal::Decimal;
//!
//! let n = decompose(Decimal::from(1234)).unwrap();
//! assert_eq!((n.base(), n.exponent()), (13, 2));
//! assert_eq!(n.value(), Decimal::from(1300));
//!
//! let bases = AllowedBases::default(); // [10, 20, 25, 50]
//! assert_eq!(bases.ceil(n).value(), Decimal::from(2000));
//! ```

use crate::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Bases used when no list is configured
pub const DEFAULT_ALLOWED_BASES: [u8; 4] = [10, 20, 25, 50];

/// Smallest exponent whose neat numbers are still exact decimals
pub const MIN_EXPONENT: i32 = -27;

/// Largest exponent whose neat numbers fit the decimal mantissa
pub const MAX_EXPONENT: i32 = 26;

/// A rounded value `base × 10^exponent` with `base` in `[10, 99]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NeatNumber {
    base: u8,
    exponent: i32,
}

impl NeatNumber {
    /// Create a neat number, validating the base and exponent ranges
    pub fn new(base: u8, exponent: i32) -> Result<Self> {
        if !(10..=99).contains(&base) {
            return Err(Error::InvalidParameter(format!(
                "neat base {base} must be a two-digit integer"
            )));
        }
        if !(MIN_EXPONENT..=MAX_EXPONENT).contains(&exponent) {
            return Err(Error::InvalidParameter(format!(
                "neat exponent {exponent} outside [{MIN_EXPONENT}, {MAX_EXPONENT}]"
            )));
        }
        Ok(Self { base, exponent })
    }

    /// The two significant digits
    pub fn base(&self) -> u8 {
        self.base
    }

    /// The power of ten applied to the base
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Exact decimal value, normalized (no trailing zeros)
    pub fn value(&self) -> Decimal {
        let raw = if self.exponent >= 0 {
            Decimal::from_i128_with_scale(
                i128::from(self.base) * 10i128.pow(self.exponent as u32),
                0,
            )
        } else {
            Decimal::from_i128_with_scale(i128::from(self.base), self.exponent.unsigned_abs())
        };
        raw.normalize()
    }
}

impl Ord for NeatNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.exponent
            .cmp(&other.exponent)
            .then(self.base.cmp(&other.base))
    }
}

impl PartialOrd for NeatNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for NeatNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

fn count_digits(mut n: u128) -> i32 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

fn split(value: Decimal, round_up: bool) -> Result<NeatNumber> {
    if value <= Decimal::ZERO {
        return Err(Error::InvalidMagnitude(value));
    }
    let value = value.normalize();
    let mantissa = value.mantissa().unsigned_abs();
    let scale = value.scale() as i32;
    let dropped = count_digits(mantissa) - 2;

    let mut base = if dropped <= 0 {
        mantissa * 10u128.pow(dropped.unsigned_abs())
    } else {
        let divisor = 10u128.pow(dropped as u32);
        let head = mantissa / divisor;
        if round_up && mantissa % divisor != 0 {
            head + 1
        } else {
            head
        }
    };
    let mut exponent = dropped - scale;
    if base == 100 {
        base = 10;
        exponent += 1;
    }

    if !(MIN_EXPONENT..=MAX_EXPONENT).contains(&exponent) {
        return Err(Error::InvalidMagnitude(value));
    }
    Ok(NeatNumber {
        base: base as u8,
        exponent,
    })
}

/// Two most significant digits of `value`, rounding the dropped part up.
///
/// `decompose(1234)` is `13 × 10^2`; an exact two-digit value is returned
/// unchanged. Fails with [`Error::InvalidMagnitude`] on zero or negative input.
pub fn decompose(value: Decimal) -> Result<NeatNumber> {
    split(value, true)
}

/// Two most significant digits of `value`, truncating the dropped part.
pub fn decompose_floor(value: Decimal) -> Result<NeatNumber> {
    split(value, false)
}

/// Signed two-significant-digit ceiling; zero maps to zero
pub fn ceil_significant(value: Decimal) -> Result<Decimal> {
    match value.cmp(&Decimal::ZERO) {
        Ordering::Greater => Ok(decompose(value)?.value()),
        Ordering::Less => Ok(-decompose_floor(-value)?.value()),
        Ordering::Equal => Ok(Decimal::ZERO),
    }
}

/// Signed two-significant-digit floor; zero maps to zero
pub fn floor_significant(value: Decimal) -> Result<Decimal> {
    match value.cmp(&Decimal::ZERO) {
        Ordering::Greater => Ok(decompose_floor(value)?.value()),
        Ordering::Less => Ok(-decompose(-value)?.value()),
        Ordering::Equal => Ok(Decimal::ZERO),
    }
}

/// Ascending list of two-digit bases a neat number may use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct AllowedBases(Vec<u8>);

impl AllowedBases {
    /// Validate a non-empty, strictly ascending list within `[10, 99]`
    pub fn new(bases: impl Into<Vec<u8>>) -> Result<Self> {
        let bases = bases.into();
        if bases.is_empty() {
            return Err(Error::InvalidParameter(
                "allowed bases must not be empty".to_string(),
            ));
        }
        if let Some(&bad) = bases.iter().find(|b| !(10..=99).contains(*b)) {
            return Err(Error::InvalidParameter(format!(
                "allowed base {bad} is not a two-digit integer"
            )));
        }
        if bases.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::InvalidParameter(format!(
                "allowed bases {bases:?} must be strictly ascending"
            )));
        }
        Ok(Self(bases))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    fn first(&self) -> u8 {
        self.0[0]
    }

    fn last(&self) -> u8 {
        self.0[self.0.len() - 1]
    }

    /// Whether `n` already uses one of the allowed bases
    pub fn contains(&self, n: NeatNumber) -> bool {
        self.0.binary_search(&n.base).is_ok()
    }

    /// Smallest allowed size `>= n`.
    ///
    /// Keeps the exponent when some allowed base is large enough, otherwise
    /// wraps to the first base one power of ten up. With `[10, 20, 25, 50]`,
    /// base 12 becomes 20 and base 92 becomes 10 at `exponent + 1`.
    pub fn ceil(&self, n: NeatNumber) -> NeatNumber {
        match self.0.iter().find(|&&b| b >= n.base) {
            Some(&base) => NeatNumber { base, ..n },
            None => NeatNumber {
                base: self.first(),
                exponent: n.exponent + 1,
            },
        }
    }

    /// Largest allowed size `<= n`, wrapping to the last base one power of
    /// ten down when `n` is below every allowed base.
    pub fn floor(&self, n: NeatNumber) -> NeatNumber {
        match self.0.iter().rev().find(|&&b| b <= n.base) {
            Some(&base) => NeatNumber { base, ..n },
            None => NeatNumber {
                base: self.last(),
                exponent: n.exponent - 1,
            },
        }
    }

    /// Next size strictly above `previous` in the allowed sequence.
    ///
    /// Returns `None` once the sequence leaves the exact decimal range.
    pub fn next(&self, previous: NeatNumber) -> Option<NeatNumber> {
        let next = match self.0.iter().find(|&&b| b > previous.base) {
            Some(&base) => NeatNumber { base, ..previous },
            None => NeatNumber {
                base: self.first(),
                exponent: previous.exponent + 1,
            },
        };
        (next.exponent <= MAX_EXPONENT).then_some(next)
    }

    /// Round `value` up to a neat size: `ceil(decompose(value))`
    pub fn neat_ceil(&self, value: Decimal) -> Result<NeatNumber> {
        decompose(value).map(|n| self.ceil(n))
    }

    /// Ascending sequence of neat sizes starting at `ceil(start)`
    pub fn sizes_from(&self, start: NeatNumber) -> NeatSizes<'_> {
        NeatSizes {
            bases: self,
            next: Some(self.ceil(start)),
        }
    }
}

impl Default for AllowedBases {
    fn default() -> Self {
        Self(DEFAULT_ALLOWED_BASES.to_vec())
    }
}

impl TryFrom<Vec<u8>> for AllowedBases {
    type Error = Error;

    fn try_from(bases: Vec<u8>) -> Result<Self> {
        Self::new(bases)
    }
}

impl From<AllowedBases> for Vec<u8> {
    fn from(bases: AllowedBases) -> Self {
        bases.0
    }
}

/// Iterator over ascending neat sizes, see [`AllowedBases::sizes_from`]
#[derive(Debug, Clone)]
pub struct NeatSizes<'a> {
    bases: &'a AllowedBases,
    next: Option<NeatNumber>,
}

impl Iterator for NeatSizes<'_> {
    type Item = NeatNumber;

    fn next(&mut self) -> Option<NeatNumber> {
        let current = self.next?;
        self.next = self.bases.next(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn neat(base: u8, exponent: i32) -> NeatNumber {
        NeatNumber::new(base, exponent).unwrap()
    }

    #[test]
    fn test_decompose_rounds_dropped_digits_up() {
        assert_eq!(decompose(d("1234")).unwrap(), neat(13, 2));
        assert_eq!(decompose(d("1234")).unwrap().value(), d("1300"));
        assert_eq!(decompose(d("1200")).unwrap(), neat(12, 2));
        assert_eq!(decompose(d("0.001222")).unwrap(), neat(13, -4));
    }

    #[test]
    fn test_decompose_short_values() {
        assert_eq!(decompose(d("0.1")).unwrap(), neat(10, -2));
        assert_eq!(decompose(d("7")).unwrap(), neat(70, -1));
        assert_eq!(decompose(d("45")).unwrap(), neat(45, 0));
        assert_eq!(decompose(d("0.10")).unwrap(), neat(10, -2));
    }

    #[test]
    fn test_decompose_carries_into_next_power() {
        let n = decompose(d("995")).unwrap();
        assert_eq!(n, neat(10, 2));
        assert_eq!(n.value(), d("1000"));
    }

    #[test]
    fn test_decompose_floor() {
        assert_eq!(decompose_floor(d("1299")).unwrap(), neat(12, 2));
        assert_eq!(decompose_floor(d("0.01292")).unwrap(), neat(12, -3));
        assert_eq!(decompose_floor(d("995")).unwrap(), neat(99, 1));
    }

    #[test]
    fn test_decompose_rejects_non_positive() {
        assert!(matches!(
            decompose(Decimal::ZERO),
            Err(Error::InvalidMagnitude(_))
        ));
        assert!(matches!(
            decompose(d("-3.5")),
            Err(Error::InvalidMagnitude(_))
        ));
    }

    #[test]
    fn test_value_is_normalized() {
        assert_eq!(neat(10, -2).value().to_string(), "0.1");
        assert_eq!(neat(25, -1).value().to_string(), "2.5");
        assert_eq!(neat(50, 1).value().to_string(), "500");
        assert_eq!(neat(20, -4).to_string(), "0.002");
    }

    #[test]
    fn test_ordering_follows_magnitude() {
        assert!(neat(99, 0) < neat(10, 1));
        assert!(neat(20, 3) < neat(25, 3));
        assert!(neat(50, -3) > neat(10, -3));
    }

    #[test]
    fn test_ceil_to_allowed_base() {
        let bases = AllowedBases::default();
        assert_eq!(bases.ceil(neat(12, 0)), neat(20, 0));
        assert_eq!(bases.ceil(neat(25, 3)), neat(25, 3));
        assert_eq!(bases.ceil(neat(92, 0)), neat(10, 1));
        assert_eq!(bases.ceil(neat(51, -2)), neat(10, -1));
    }

    #[test]
    fn test_floor_to_allowed_base() {
        let bases = AllowedBases::new(vec![20, 25, 50]).unwrap();
        assert_eq!(bases.floor(neat(30, 0)), neat(25, 0));
        assert_eq!(bases.floor(neat(99, 0)), neat(50, 0));
        assert_eq!(bases.floor(neat(12, 0)), neat(50, -1));
    }

    #[test]
    fn test_next_size_walks_bases_then_exponent() {
        let bases = AllowedBases::default();
        let sizes: Vec<String> = bases
            .sizes_from(neat(13, 0))
            .take(6)
            .map(|n| n.to_string())
            .collect();
        assert_eq!(sizes, vec!["20", "25", "50", "100", "200", "250"]);
    }

    #[test]
    fn test_next_size_from_unlisted_base() {
        let bases = AllowedBases::default();
        assert_eq!(bases.next(neat(30, 0)), Some(neat(50, 0)));
        assert_eq!(bases.next(neat(77, 0)), Some(neat(10, 1)));
    }

    #[test]
    fn test_sizes_end_at_decimal_limit() {
        let bases = AllowedBases::new(vec![10]).unwrap();
        let last = bases.sizes_from(neat(10, MAX_EXPONENT - 1)).last();
        assert_eq!(last, Some(neat(10, MAX_EXPONENT)));
    }

    #[test]
    fn test_allowed_bases_validation() {
        assert!(AllowedBases::new(Vec::<u8>::new()).is_err());
        assert!(AllowedBases::new(vec![5, 10]).is_err());
        assert!(AllowedBases::new(vec![10, 100]).is_err());
        assert!(AllowedBases::new(vec![20, 10]).is_err());
        assert!(AllowedBases::new(vec![10, 10]).is_err());
        assert!(AllowedBases::new(vec![10, 15, 20, 50]).is_ok());
    }

    #[test]
    fn test_allowed_bases_serde() {
        let bases: AllowedBases = serde_json::from_str("[10, 25, 50]").unwrap();
        assert_eq!(bases.as_slice(), &[10, 25, 50]);
        assert!(serde_json::from_str::<AllowedBases>("[50, 10]").is_err());
    }

    #[test]
    fn test_significant_rounding_is_signed() {
        assert_eq!(ceil_significant(d("0.123")).unwrap(), d("0.13"));
        assert_eq!(floor_significant(d("0.0008")).unwrap(), d("0.0008"));
        assert_eq!(floor_significant(d("0.1299")).unwrap(), d("0.12"));
        assert_eq!(floor_significant(d("-0.123")).unwrap(), d("-0.13"));
        assert_eq!(ceil_significant(d("-0.123")).unwrap(), d("-0.12"));
        assert_eq!(ceil_significant(Decimal::ZERO).unwrap(), Decimal::ZERO);
    }
}
