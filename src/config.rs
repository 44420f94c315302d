//! Engine configuration

use neat_core::{AllowedBases, Error, Result};
use neat_histogram::SmallestFirstMerge;
use neat_plot::PlotBuilder;
use neat_range::{BucketSizeSearch, PresetPlanner, RangeTrimmer, SliderStepSelector, SliderTargets};
use serde::{Deserialize, Serialize};

/// All tunables of the bucketing engine
///
/// Every section falls back to its defaults when absent from the input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Two-digit bases neat widths and steps may use
    pub allowed_bases: AllowedBases,
    pub plot: PlotConfig,
    pub preset: PresetConfig,
    pub slider: SliderConfig,
    pub distribution: DistributionConfig,
}

/// Paired scatter summaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub min_rows_per_bucket: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            min_rows_per_bucket: 100,
        }
    }
}

/// Default axis ranges and bucket widths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetConfig {
    pub max_buckets: usize,
    pub min_rows_per_bucket: usize,
    /// Values further than this many standard deviations from the mean are
    /// ignored when choosing the range
    pub outlier_std_multiplier: f64,
}

impl Default for PresetConfig {
    fn default() -> Self {
        Self {
            max_buckets: 10,
            min_rows_per_bucket: 100,
            outlier_std_multiplier: 3.0,
        }
    }
}

/// Slider interval counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub min_intervals: usize,
    pub ideal_intervals: usize,
    pub max_intervals: usize,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min_intervals: 10,
            ideal_intervals: 100,
            max_intervals: 100,
        }
    }
}

/// Single-factor distributions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionConfig {
    pub max_buckets: usize,
    /// Significant digits kept before counting distinct values
    pub precision_digits: u32,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            max_buckets: 200,
            precision_digits: 3,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::InvalidParameter(format!("configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section by building its component
    pub fn validate(&self) -> Result<()> {
        self.preset_planner()?;
        self.slider_selector()?;
        self.distribution_builder()?;
        Ok(())
    }

    pub fn preset_planner(&self) -> Result<PresetPlanner> {
        let trimmer = RangeTrimmer::new(self.preset.outlier_std_multiplier)?;
        let search = BucketSizeSearch::new(
            self.preset.max_buckets,
            self.preset.min_rows_per_bucket,
            self.allowed_bases.clone(),
        )?;
        Ok(PresetPlanner::new(trimmer, search))
    }

    pub fn slider_selector(&self) -> Result<SliderStepSelector> {
        let targets = SliderTargets::new(
            self.slider.min_intervals,
            self.slider.ideal_intervals,
            self.slider.max_intervals,
        )?;
        Ok(SliderStepSelector::new(targets, self.allowed_bases.clone()))
    }

    pub fn distribution_builder(&self) -> Result<SmallestFirstMerge> {
        SmallestFirstMerge::new(
            self.distribution.max_buckets,
            self.distribution.precision_digits,
        )
    }

    pub fn plot_builder(&self) -> PlotBuilder {
        PlotBuilder::new(self.plot.min_rows_per_bucket)
    }
}
