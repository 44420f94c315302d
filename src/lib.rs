//! # neat-buckets
//!
//! Adaptive neat-number bucketing of structure quality metrics.
//!
//! Turns large numeric columns into a few human-readable buckets whose edges
//! are round numbers and whose every bucket is backed by enough rows. Four
//! products share that machinery:
//!
//! | Product | Crate | Entry point |
//! |---------|-------|-------------|
//! | Default axis ranges and bucket widths | `neat-range` | [`PresetPlanner`] |
//! | Slider floor, ceiling and step | `neat-range` | [`SliderStepSelector`] |
//! | Paired X/Y scatter summaries | `neat-plot` | [`PlotBuilder`] |
//! | Single-factor distributions | `neat-histogram` | [`SmallestFirstMerge`] |
//!
//! This crate adds the configuration, the factor hierarchy, name translations
//! and a batch driver on top. Enable the `parallel` feature to spread a batch
//! over the rayon thread pool.
//!
//! ## Quick Start
//!
//! ```rust
//! use neat_buckets::prelude::*;
//!
//! # fn main() -> neat_buckets::Result<()> {
//! let ids = (0..300).map(|i| format!("{i}ABC")).collect();
//! let resolution = (0..300).map(|i| Some(Decimal::from(i % 30) / Decimal::from(10))).collect();
//! let dataset = Dataset::new(ids)
//!     .with_column(FactorColumn::new("resolution", FactorKind::Numeric, resolution))?;
//!
//! let mut config = EngineConfig::default();
//! config.preset.min_rows_per_bucket = 10;
//! let summarizer = Summarizer::new(config)?;
//!
//! let hierarchy = FactorHierarchy::new(vec![FactorNode::new("resolution").with_axes(true, true)]);
//! let ranges = summarizer.plan_ranges(&dataset, &hierarchy)?.into_result("ranges")?;
//! assert_eq!(ranges[0].lower_limit(), Decimal::ZERO);
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod config;
pub mod hierarchy;
pub mod pipeline;
pub mod translations;

pub use neat_core;
pub use neat_histogram;
pub use neat_plot;
pub use neat_range;

pub use batch::{run_batch, BatchOutcome, Failure};
pub use config::{DistributionConfig, EngineConfig, PlotConfig, PresetConfig, SliderConfig};
pub use hierarchy::{FactorHierarchy, FactorNode};
pub use pipeline::{FactorPair, Summarizer};
pub use translations::NameTranslations;

pub use neat_core::{Error, Result};
pub use neat_histogram::{Distribution, DistributionBuilder, SmallestFirstMerge};
pub use neat_plot::{BucketLimitTable, PlotBuilder, PlotSummary};
pub use neat_range::{FactorRangeSpec, Preset, PresetPlanner, SliderRangeSpec, SliderStepSelector};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BatchOutcome, EngineConfig, FactorHierarchy, FactorNode, FactorPair, NameTranslations,
        Summarizer,
    };
    pub use neat_core::prelude::*;
    pub use neat_histogram::{Distribution, DistributionBuilder};
    pub use neat_plot::{BucketLimitTable, PlotSummary};
    pub use neat_range::{FactorRangeSpec, Preset, SliderRangeSpec};
}
