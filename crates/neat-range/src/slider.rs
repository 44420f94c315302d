//! Slider step selection
//!
//! Three candidate steps are derived from the minimum, ideal and maximum
//! interval counts. Each is scored by how far its interval count lands from
//! the ideal and the best one is kept.

use neat_core::{
    ceil_significant, decompose, decompose_floor, floor_significant, AllowedBases, Decimal,
    Error, FactorColumn, FactorKind, NeatNumber, Result,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Interval counts a slider should aim for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderTargets {
    pub min: usize,
    pub ideal: usize,
    pub max: usize,
}

impl SliderTargets {
    /// Validate `1 <= min <= ideal <= max`
    pub fn new(min: usize, ideal: usize, max: usize) -> Result<Self> {
        if min == 0 || min > ideal || ideal > max {
            return Err(Error::InvalidParameter(format!(
                "slider interval counts must satisfy 1 <= min <= ideal <= max, got {min}/{ideal}/{max}"
            )));
        }
        Ok(Self { min, ideal, max })
    }
}

impl Default for SliderTargets {
    fn default() -> Self {
        Self {
            min: 10,
            ideal: 100,
            max: 100,
        }
    }
}

/// Floor, ceiling and step of a range slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderRangeSpec {
    pub floor: Decimal,
    pub ceiling: Decimal,
    pub step: Decimal,
}

impl SliderRangeSpec {
    /// Number of steps between floor and ceiling
    pub fn intervals(&self) -> Decimal {
        (self.ceiling - self.floor) / self.step
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    spec: SliderRangeSpec,
    intervals: Decimal,
    score: Decimal,
}

impl Candidate {
    fn new(step: NeatNumber, lo: Decimal, hi: Decimal, ideal: Decimal) -> Self {
        let step = step.value();
        let floor = ((lo / step).floor() * step).normalize();
        let ceiling = ((hi / step).ceil() * step).normalize();
        let intervals = ((ceiling - floor) / step).normalize();
        Self {
            spec: SliderRangeSpec {
                floor,
                ceiling,
                step,
            },
            intervals,
            score: (intervals - ideal).abs(),
        }
    }
}

/// Picks a neat slider step for a factor's raw range
#[derive(Debug, Clone, Default)]
pub struct SliderStepSelector {
    targets: SliderTargets,
    bases: AllowedBases,
}

impl SliderStepSelector {
    pub fn new(targets: SliderTargets, bases: AllowedBases) -> Self {
        Self { targets, bases }
    }

    pub fn targets(&self) -> SliderTargets {
        self.targets
    }

    /// Slider spec for a column, using its raw min and max
    pub fn select_for(&self, column: &FactorColumn) -> Result<SliderRangeSpec> {
        let (min, max) = column
            .min_max()
            .ok_or_else(|| Error::empty_range(column.name()))?;
        self.select(column.name(), column.kind(), min, max)
    }

    /// Slider spec for the raw range `[min, max]`.
    ///
    /// Year factors always step by one whole year. Other factors widen the
    /// range to two significant digits and compare the candidate steps.
    pub fn select(
        &self,
        factor: &str,
        kind: FactorKind,
        min: Decimal,
        max: Decimal,
    ) -> Result<SliderRangeSpec> {
        if min >= max {
            return Err(Error::empty_range(factor));
        }

        if kind == FactorKind::Year {
            return Ok(SliderRangeSpec {
                floor: min.floor(),
                ceiling: max.ceil(),
                step: Decimal::ONE,
            });
        }

        let lo = floor_significant(min)?;
        let hi = ceil_significant(max)?;
        if hi <= lo {
            return Err(Error::empty_range(factor));
        }
        let range = hi - lo;
        let ideal = Decimal::from(self.targets.ideal);

        let step_for = |count: usize, round_up: bool| -> Result<NeatNumber> {
            let raw = range / Decimal::from(count);
            let n = if round_up {
                decompose(raw)?
            } else {
                decompose_floor(raw)?
            };
            Ok(self.bases.ceil(n))
        };

        let max_based = Candidate::new(step_for(self.targets.max, true)?, lo, hi, ideal);
        let ideal_based = Candidate::new(step_for(self.targets.ideal, true)?, lo, hi, ideal);
        let min_based = Candidate::new(step_for(self.targets.min, false)?, lo, hi, ideal);

        let chosen = if ideal_based.intervals > max_based.intervals
            || max_based.score < ideal_based.score
        {
            max_based
        } else if ideal_based.intervals < min_based.intervals
            || min_based.score < ideal_based.score
        {
            min_based
        } else {
            ideal_based
        };

        debug!(
            factor,
            step = %chosen.spec.step,
            floor = %chosen.spec.floor,
            ceiling = %chosen.spec.ceiling,
            intervals = %chosen.intervals,
            "selected slider step"
        );
        Ok(chosen.spec)
    }
}
