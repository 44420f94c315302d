//! Core types for neat-number bucketing of structure quality metrics
//!
//! This crate provides the building blocks shared by the bucketing crates:
//!
//! 1. **Neat numbers** - two-significant-digit rounding restricted to a curated
//!    list of bases, so widths and steps read like 10, 20, 25, 50
//! 2. **Intervals** - half-open ranges with independent closures that can be
//!    tested, extended and joined
//! 3. **Datasets** - named factor columns of optional exact decimals, one row
//!    per structure, plus a static field schema for raw values
//! 4. **Statistics** - mean, spread and quartile summaries over floats
//!
//! # Example
//!
//! ```rust
//! use neat_core::{decompose, AllowedBases, Dataset, FactorColumn, FactorKind};
//! use rust_decimal::Decimal;
//!
//! let width = AllowedBases::default().ceil(decompose(Decimal::new(1222, 6)).unwrap());
//! assert_eq!(width.to_string(), "0.002");
//!
//! let years = FactorColumn::new(
//!     "release_year",
//!     FactorKind::Year,
//!     vec![Some(Decimal::from(1990)), None],
//! );
//! let dataset = Dataset::new(vec!["1ABC".into(), "2XYZ".into()])
//!     .with_column(years)
//!     .unwrap();
//! assert_eq!(dataset.factor("release_year").unwrap().present().count(), 1);
//! ```

pub mod dataset;
pub mod error;
pub mod interval;
pub mod neat;
pub mod schema;
pub mod serde_support;
pub mod stats;

// Re-export core types
pub use error::{Error, Result};

pub use dataset::{to_f64, Dataset, FactorColumn, FactorKind};
pub use interval::{Edge, Interval};
pub use neat::{
    ceil_significant, decompose, decompose_floor, floor_significant, AllowedBases, NeatNumber,
    NeatSizes, DEFAULT_ALLOWED_BASES,
};
pub use schema::{FieldKind, FieldSchema, FieldValue, STRUCTURE_FIELDS};
pub use stats::Summary;

pub use rust_decimal::Decimal;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AllowedBases, Dataset, Decimal, Edge, Error, FactorColumn, FactorKind, Interval,
        NeatNumber, Result, Summary,
    };
}
