//! Fail-soft batch driver
//!
//! Factors and pairs are independent, so a recoverable failure of one only
//! removes that item from the output. Failures are logged when they happen
//! and counted in the [`BatchOutcome`]; callers that need everything turn the
//! outcome into a single [`Error::BatchFailed`].

use neat_core::{Error, Result};
use tracing::{info, warn};

/// An item that could not be produced
#[derive(Debug)]
pub struct Failure {
    pub id: String,
    pub error: Error,
}

/// Produced items plus the recoverable failures of one batch
#[derive(Debug)]
pub struct BatchOutcome<T> {
    pub items: Vec<T>,
    pub failures: Vec<Failure>,
}

impl<T> BatchOutcome<T> {
    /// Number of inputs the batch was run over
    pub fn total(&self) -> usize {
        self.items.len() + self.failures.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> BatchOutcome<U> {
        BatchOutcome {
            items: self.items.into_iter().map(f).collect(),
            failures: self.failures,
        }
    }

    /// All items, or one aggregate error naming the failure count
    pub fn into_result(self, stage: &'static str) -> Result<Vec<T>> {
        if self.failures.is_empty() {
            return Ok(self.items);
        }
        Err(Error::BatchFailed {
            stage,
            failed: self.failures.len(),
            total: self.total(),
        })
    }
}

/// Run `f` over every input, in input order.
///
/// Recoverable errors are logged with the item id and collected; any other
/// error aborts the batch. With the `parallel` feature inputs are processed
/// on the rayon thread pool.
pub fn run_batch<I, T, F>(
    stage: &'static str,
    inputs: &[I],
    id_of: impl Fn(&I) -> String,
    f: F,
) -> Result<BatchOutcome<T>>
where
    I: Sync,
    T: Send,
    F: Fn(&I) -> Result<T> + Sync + Send,
{
    #[cfg(feature = "parallel")]
    let results: Vec<Result<T>> = {
        use rayon::prelude::*;
        inputs.par_iter().map(&f).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let results: Vec<Result<T>> = inputs.iter().map(&f).collect();

    let mut outcome = BatchOutcome {
        items: Vec::with_capacity(inputs.len()),
        failures: Vec::new(),
    };
    for (input, result) in inputs.iter().zip(results) {
        match result {
            Ok(item) => outcome.items.push(item),
            Err(error) if error.is_recoverable() => {
                let id = id_of(input);
                warn!(stage, id = %id, %error, "skipped");
                outcome.failures.push(Failure { id, error });
            }
            Err(error) => return Err(error),
        }
    }

    info!(
        stage,
        produced = outcome.items.len(),
        skipped = outcome.failures.len(),
        "batch finished"
    );
    Ok(outcome)
}
