//! Range planning for neat-number bucketing
//!
//! This crate decides *where* buckets go before any row is assigned to one:
//!
//! | Component | Input | Output |
//! |-----------|-------|--------|
//! | [`RangeTrimmer`] | a factor's values | min/max without outliers |
//! | [`BucketSizeSearch`] | trimmed range, companion support | neat width and edges |
//! | [`PresetPlanner`] | dataset, factor, companions | [`FactorRangeSpec`] / [`Preset`] |
//! | [`SliderStepSelector`] | raw min/max | [`SliderRangeSpec`] |
//!
//! Every edge, width and step is an exact [`Decimal`](neat_core::Decimal);
//! floating point is used only for the mean and standard deviation inside
//! the trimmer.
//!
//! # Examples
//!
//! ```rust
//! use neat_core::{AllowedBases, FactorKind};
//! use neat_range::{SliderStepSelector, SliderTargets};
//! use rust_decimal::Decimal;
//!
//! let selector = SliderStepSelector::new(
//!     SliderTargets::new(10, 100, 100).unwrap(),
//!     AllowedBases::default(),
//! );
//! let spec = selector
//!     .select("r_free", FactorKind::Numeric, Decimal::new(8, 4), Decimal::new(123, 3))
//!     .unwrap();
//! assert_eq!(spec.step.to_string(), "0.002");
//! assert_eq!(spec.ceiling.to_string(), "0.13");
//! ```

pub mod preset;
pub mod search;
pub mod slider;
pub mod trim;

// Re-exports
pub use preset::{FactorRangeSpec, Preset, PresetPlanner};
pub use search::{BucketPlan, BucketSizeSearch, CompanionSupport};
pub use slider::{SliderRangeSpec, SliderStepSelector, SliderTargets};
pub use trim::RangeTrimmer;

pub use neat_core::{Error, Result};
