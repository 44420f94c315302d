//! Numeric intervals with independent open/closed ends

use crate::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// An interval endpoint, possibly unbounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Edge {
    NegInfinity,
    Finite(Decimal),
    PosInfinity,
}

impl Edge {
    pub fn is_finite(&self) -> bool {
        matches!(self, Edge::Finite(_))
    }

    pub fn finite(&self) -> Option<Decimal> {
        match self {
            Edge::Finite(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<Decimal> for Edge {
    fn from(value: Decimal) -> Self {
        Edge::Finite(value)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::NegInfinity => write!(f, "-inf"),
            Edge::Finite(v) => write!(f, "{v}"),
            Edge::PosInfinity => write!(f, "inf"),
        }
    }
}

/// A contiguous range of values between two edges.
///
/// Infinite edges are always open. A degenerate interval (`left == right`)
/// must be closed on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    left: Edge,
    right: Edge,
    left_closed: bool,
    right_closed: bool,
}

impl Interval {
    /// Create an interval, validating edge order and closures
    pub fn new(left: Edge, right: Edge, left_closed: bool, right_closed: bool) -> Result<Self> {
        let left_closed = left_closed && left.is_finite();
        let right_closed = right_closed && right.is_finite();
        match left.cmp(&right) {
            Ordering::Greater => Err(Error::InvalidInput(format!(
                "interval edges out of order: {left} > {right}"
            ))),
            Ordering::Equal if !(left_closed && right_closed) => Err(Error::InvalidInput(format!(
                "empty interval at {left}"
            ))),
            _ => Ok(Self {
                left,
                right,
                left_closed,
                right_closed,
            }),
        }
    }

    /// `[left, right)`, or `(left, right)` when `left` is unbounded
    pub fn closed_open(left: Edge, right: Edge) -> Result<Self> {
        Self::new(left, right, true, false)
    }

    pub fn left(&self) -> Edge {
        self.left
    }

    pub fn right(&self) -> Edge {
        self.right
    }

    pub fn left_closed(&self) -> bool {
        self.left_closed
    }

    pub fn right_closed(&self) -> bool {
        self.right_closed
    }

    /// Where `value` lies relative to this interval
    ///
    /// `Less` means left of the interval, `Greater` right of it.
    pub fn position(&self, value: Decimal) -> Ordering {
        let v = Edge::Finite(value);
        match v.cmp(&self.left) {
            Ordering::Less => return Ordering::Less,
            Ordering::Equal if !self.left_closed => return Ordering::Less,
            _ => {}
        }
        match v.cmp(&self.right) {
            Ordering::Greater => Ordering::Greater,
            Ordering::Equal if !self.right_closed => Ordering::Greater,
            _ => Ordering::Equal,
        }
    }

    /// Check if a value falls within this interval
    pub fn contains(&self, value: Decimal) -> bool {
        self.position(value) == Ordering::Equal
    }

    /// Whether the two intervals share at least one value
    pub fn overlaps(&self, other: &Self) -> bool {
        let (lo, lo_closed) = match self.left.cmp(&other.left) {
            Ordering::Greater => (self.left, self.left_closed),
            Ordering::Less => (other.left, other.left_closed),
            Ordering::Equal => (self.left, self.left_closed && other.left_closed),
        };
        let (hi, hi_closed) = match self.right.cmp(&other.right) {
            Ordering::Less => (self.right, self.right_closed),
            Ordering::Greater => (other.right, other.right_closed),
            Ordering::Equal => (self.right, self.right_closed && other.right_closed),
        };
        lo < hi || (lo == hi && lo_closed && hi_closed)
    }

    /// Whether `next` starts exactly where this interval ends, without
    /// overlap or gap
    pub fn is_adjacent_to(&self, next: &Self) -> bool {
        self.right.is_finite()
            && self.right == next.left
            && self.right_closed != next.left_closed
    }

    /// Whether the two intervals touch or overlap in either order
    pub fn touches(&self, other: &Self) -> bool {
        self.overlaps(other) || self.is_adjacent_to(other) || other.is_adjacent_to(self)
    }

    /// Join with the interval that immediately follows this one
    pub fn join(&self, next: &Self) -> Result<Self> {
        if !self.is_adjacent_to(next) {
            return Err(Error::IncompatibleIntervals {
                left: self.to_string(),
                right: next.to_string(),
            });
        }
        Ok(Self {
            left: self.left,
            right: next.right,
            left_closed: self.left_closed,
            right_closed: next.right_closed,
        })
    }

    /// Move the right edge so this interval meets `next` exactly
    pub fn extend_to(&mut self, next: &Self) {
        self.right = next.left;
        self.right_closed = !next.left_closed && next.left.is_finite();
    }

    /// Move the left edge so this interval starts exactly after `previous`
    pub fn extend_back_to(&mut self, previous: &Self) {
        self.left = previous.right;
        self.left_closed = !previous.right_closed && previous.right.is_finite();
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}, {}{}",
            if self.left_closed { '[' } else { '(' },
            self.left,
            self.right,
            if self.right_closed { ']' } else { ')' }
        )
    }
}
