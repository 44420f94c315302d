//! Single-factor distribution histograms
//!
//! Values are rounded to a fixed number of significant digits and counted
//! per distinct rounded value. While there are more buckets than the ceiling
//! allows, the bucket with the fewest values is folded into its smaller
//! neighbour.
//!
//! # Key Features
//!
//! - **Bounded output**: never more buckets than the configured ceiling
//! - **Stable tie-breaks**: the leftmost smallest bucket merges first, and
//!   into its left neighbour when both neighbours are equal
//! - **Exact edges**: bucket edges are the rounded [`Decimal`](neat_core::Decimal)
//!   values they span
//!
//! # Examples
//!
//! ```rust
//! use neat_histogram::{DistributionBuilder, SmallestFirstMerge};
//! use rust_decimal::Decimal;
//!
//! let values: Vec<Decimal> = [1, 1, 1, 2, 3, 3, 4].into_iter().map(Decimal::from).collect();
//! let builder = SmallestFirstMerge::new(2, 3).unwrap();
//! let distribution = builder.build("clashscore", &values).unwrap();
//!
//! assert_eq!(distribution.counts(), vec![3, 4]);
//! assert!(distribution.buckets()[1].is_interval);
//! ```

pub mod builders;
pub mod ops;
pub mod traits;
pub mod types;

// Re-export main types
pub use builders::SmallestFirstMerge;
pub use ops::{round_significant, value_counts};
pub use traits::DistributionBuilder;
pub use types::{Distribution, DistributionBucket};

pub use neat_core::{Error, Result};
