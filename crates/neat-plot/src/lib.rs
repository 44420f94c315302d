//! Paired X/Y scatter summaries
//!
//! Given prior bucket edges for an X factor, rows with both X and Y present
//! are grouped into buckets along X and each bucket reports the distribution
//! of its Y values. Buckets are repaired in two passes:
//!
//! 1. **Gap repair** - intervals left without rows are dropped and their
//!    neighbours stretched until they meet again
//! 2. **Undersize merge** - buckets below the minimum row count are folded
//!    into a neighbour in a single forward walk
//!
//! # Examples
//!
//! ```rust
//! use neat_core::{Decimal, Edge};
//! use neat_plot::PlotBuilder;
//!
//! let mut rows = vec![(Decimal::from(1990), Decimal::ONE); 100];
//! rows.extend(vec![(Decimal::from(2015), Decimal::TWO); 100]);
//! let edges = [Edge::NegInfinity, Edge::Finite(Decimal::from(2000)), Edge::PosInfinity];
//!
//! let summary = PlotBuilder::new(100)
//!     .build_from_rows("release_year", "r_free", &rows, &edges)
//!     .unwrap();
//! assert_eq!(summary.counts(), vec![100, 100]);
//! assert_eq!(summary.buckets[0].x_from.value, Decimal::from(1990));
//! ```

pub mod builders;
pub mod limits;
pub mod merge;
pub mod types;

// Re-export main types
pub use builders::PlotBuilder;
pub use limits::BucketLimitTable;
pub use merge::{intervals_from_edges, merge_undersized, partition, repair_gaps, WorkingBucket};
pub use types::{EdgeValue, PlotBucket, PlotSummary};

pub use neat_core::{Error, Result};
