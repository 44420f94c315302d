//! Polars integration for neat-number bucketing
//!
//! Loaders that already hold their table as a Polars `DataFrame` can hand it
//! to the bucketing engine through a single extension trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use polars::prelude::*;
//! use neat_polars::DatasetExt;
//!
//! let df = df![
//!     "pdb_id" => ["1ABC", "2XYZ"],
//!     "resolution" => [1.8, 2.4],
//!     "release_year" => [1999i64, 2015],
//! ]?;
//!
//! let dataset = df.to_dataset("pdb_id", &["release_year"]).unwrap();
//! assert!(dataset.factor("release_year").unwrap().is_year_like());
//! ```

mod error;
mod traits;


pub use error::{Error, Result};
pub use traits::*;
