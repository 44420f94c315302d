//! Batch entry points over a whole dataset
//!
//! [`Summarizer`] runs the four bucketing engines over every eligible factor
//! or factor pair. Each stage returns a [`BatchOutcome`] so callers get the
//! partial output together with the skipped items.

use crate::batch::{run_batch, BatchOutcome};
use crate::config::EngineConfig;
use crate::hierarchy::FactorHierarchy;
use crate::translations::NameTranslations;
use neat_core::{Dataset, Result};
use neat_histogram::{Distribution, DistributionBuilder};
use neat_plot::{BucketLimitTable, PlotSummary};
use neat_range::{FactorRangeSpec, Preset, SliderRangeSpec};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// An X/Y factor combination to summarize
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactorPair {
    pub x: String,
    pub y: String,
}

impl FactorPair {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl fmt::Display for FactorPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.y, self.x)
    }
}

/// Runs presets, sliders, plots and distributions for one dataset
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: EngineConfig,
    translations: NameTranslations,
}

impl Summarizer {
    /// Create a summarizer; the configuration is validated up front
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            translations: NameTranslations::default(),
        })
    }

    pub fn with_translations(mut self, translations: NameTranslations) -> Self {
        self.translations = translations;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Range specs for every X factor of the hierarchy present in the dataset.
    ///
    /// Each factor is planned against all Y factors it can be plotted with.
    #[instrument(skip_all)]
    pub fn plan_ranges(
        &self,
        dataset: &Dataset,
        hierarchy: &FactorHierarchy,
    ) -> Result<BatchOutcome<FactorRangeSpec>> {
        let planner = self.config.preset_planner()?;
        let ys: Vec<&str> = hierarchy
            .y_factors()
            .into_iter()
            .filter(|y| dataset.factor(y).is_ok())
            .collect();
        let xs: Vec<String> = hierarchy
            .x_factors()
            .into_iter()
            .map(str::to_string)
            .collect();

        run_batch("ranges", &xs, Clone::clone, |x| {
            let companions: Vec<&str> = ys.iter().copied().filter(|y| y != x).collect();
            planner.plan(dataset, x, &companions)
        })
    }

    /// Labelled presets from accepted range specs
    pub fn presets(&self, specs: &[FactorRangeSpec]) -> Vec<Preset> {
        specs
            .iter()
            .map(|spec| spec.to_preset(self.translations.label(&spec.factor)))
            .collect()
    }

    /// Open-ended bucket limits derived from accepted range specs
    pub fn limits_from_ranges(&self, specs: &[FactorRangeSpec]) -> Result<BucketLimitTable> {
        let mut limits = BucketLimitTable::new();
        for spec in specs {
            limits.insert_open_ended(spec.factor.as_str(), spec.interior_edges())?;
        }
        debug!(factors = limits.len(), "derived bucket limits");
        Ok(limits)
    }

    /// Choose slider ranges for every plottable factor in the dataset and
    /// write them into the hierarchy
    #[instrument(skip_all)]
    pub fn sliders(
        &self,
        dataset: &Dataset,
        hierarchy: &mut FactorHierarchy,
    ) -> Result<BatchOutcome<(String, SliderRangeSpec)>> {
        let selector = self.config.slider_selector()?;
        let ids: Vec<String> = hierarchy
            .nodes()
            .into_iter()
            .filter(|n| n.applicable_x || n.applicable_y)
            .map(|n| n.id.clone())
            .collect();

        let outcome = run_batch("sliders", &ids, Clone::clone, |id| {
            let spec = selector.select_for(dataset.factor(id)?)?;
            Ok((id.clone(), spec))
        })?;
        for (id, spec) in &outcome.items {
            hierarchy.apply_slider(id, spec)?;
        }
        Ok(outcome)
    }

    /// Scatter summaries for every pair whose X factor has bucket limits
    #[instrument(skip_all, fields(pairs = pairs.len()))]
    pub fn plots(
        &self,
        dataset: &Dataset,
        pairs: &[FactorPair],
        limits: &BucketLimitTable,
    ) -> Result<BatchOutcome<PlotSummary>> {
        let builder = self.config.plot_builder();
        run_batch("plots", pairs, FactorPair::to_string, |pair| {
            builder.build(dataset, limits, &pair.x, &pair.y)
        })
    }

    /// Distribution histograms for the given factors
    #[instrument(skip_all, fields(factors = factors.len()))]
    pub fn distributions(
        &self,
        dataset: &Dataset,
        factors: &[String],
    ) -> Result<BatchOutcome<Distribution>> {
        let builder = self.config.distribution_builder()?;
        run_batch("distributions", factors, Clone::clone, |factor| {
            builder.build_column(dataset.factor(factor)?)
        })
    }
}
