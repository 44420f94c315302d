//! Error types for neat-number bucketing
//!
//! Provides a unified error type for all neat-buckets crates.

use rust_decimal::Decimal;
use thiserror::Error;

/// Core error type for bucketing operations
#[derive(Error, Debug)]
pub enum Error {
    /// A non-positive value reached the significant-digit rounder
    #[error("Invalid magnitude: {0} cannot be decomposed into a neat number")]
    InvalidMagnitude(Decimal),

    /// Fewer than two usable values remain for a factor
    #[error("Empty range: {0}")]
    EmptyRange(String),

    /// No bucket width satisfies the minimum-rows constraint
    #[error("Insufficient data for {context}: expected at least {expected} rows per bucket, got {actual}")]
    InsufficientData {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// Attempted join of intervals that are not exactly adjacent
    #[error("Incompatible intervals: cannot join {left} with {right}")]
    IncompatibleIntervals { left: String, right: String },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Factor id not present in the dataset or side table
    #[error("Unknown factor: {0}")]
    UnknownFactor(String),

    /// Some independent items of a batch failed
    #[error("Batch failed: {failed} of {total} {stage} could not be produced")]
    BatchFailed {
        stage: &'static str,
        failed: usize,
        total: usize,
    },

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a factor without enough distinct values
    pub fn empty_range(factor: &str) -> Self {
        Self::EmptyRange(format!("factor '{factor}' has fewer than 2 distinct usable values"))
    }

    /// Create an error for a bucket that cannot reach the minimum row count
    pub fn insufficient(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::InsufficientData {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Whether the failure only concerns the current factor or pair.
    ///
    /// Recoverable errors are skipped and counted by batch drivers; all other
    /// kinds indicate a programming error and abort the batch.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::EmptyRange(_) | Self::InsufficientData { .. } | Self::UnknownFactor(_)
        )
    }
}
