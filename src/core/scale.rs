use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Affine mapping from a numeric data domain onto an output coordinate range.
///
/// The domain span is never zero: collapsed domains are widened to a unit
/// span at construction, so `map` never divides by zero. The range may be
/// decreasing, which is how vertical pixel axes are inverted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    /// Builds a scale over an explicit domain.
    ///
    /// When `domain_min == domain_max` the span is substituted with `1`,
    /// keeping `domain_min` as the lower bound.
    pub fn new(
        domain_min: f64,
        domain_max: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        for (name, value) in [
            ("domain min", domain_min),
            ("domain max", domain_max),
            ("range start", range_start),
            ("range end", range_end),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "scale {name} must be finite"
                )));
            }
        }

        let domain_max = if domain_max == domain_min {
            domain_min + 1.0
        } else {
            domain_max
        };

        Ok(Self {
            domain_min,
            domain_max,
            range_start,
            range_end,
        })
    }

    /// Builds a scale whose domain is the min/max of `values`.
    ///
    /// A constant series gets a unit span centered on its value, so the value
    /// maps to the middle of the range. Callers handle the empty series before
    /// reaching this point; an empty slice is reported as invalid data.
    pub fn from_values(values: &[f64], range_start: f64, range_end: f64) -> ChartResult<Self> {
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ChartError::InvalidData(
                "scale values must be finite".to_owned(),
            ));
        }
        let min = values.iter().copied().map(OrderedFloat).min();
        let max = values.iter().copied().map(OrderedFloat).max();
        let (Some(OrderedFloat(min)), Some(OrderedFloat(max))) = (min, max) else {
            return Err(ChartError::InvalidData(
                "scale requires at least one value".to_owned(),
            ));
        };

        if max - min == 0.0 {
            return Self::new(min - 0.5, max + 0.5, range_start, range_end);
        }
        Self::new(min, max, range_start, range_end)
    }

    /// Builds a scale anchored at zero, used by bar heights.
    ///
    /// A non-positive maximum is substituted with `1` so every bar collapses to
    /// zero length instead of producing `NaN`.
    pub fn from_zero(max: f64, range_start: f64, range_end: f64) -> ChartResult<Self> {
        let max = if max > 0.0 { max } else { 1.0 };
        Self::new(0.0, max, range_start, range_end)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.domain_max - self.domain_min
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let normalized = (value - self.domain_min) / self.span();
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps an output position back into the domain.
    ///
    /// A zero-length range maps every position to `domain_min`.
    #[must_use]
    pub fn invert(self, position: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return self.domain_min;
        }
        let normalized = (position - self.range_start) / range_span;
        self.domain_min + normalized * self.span()
    }
}
