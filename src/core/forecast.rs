//! Forecast result structure for holding predictions with interval bands.

use crate::core::index::IndexValue;

/// One forecast step: an index label, a point estimate, and its band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastStep {
    pub label: IndexValue,
    pub point: f64,
    pub lower: f64,
    pub upper: f64,
}

/// A forecast over a horizon, with a confidence band per step.
///
/// Every forecasting operation in this crate returns its band alongside the
/// point estimates; the vectors are always the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResult {
    labels: Vec<IndexValue>,
    point: Vec<f64>,
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl ForecastResult {
    pub(crate) fn new(
        labels: Vec<IndexValue>,
        point: Vec<f64>,
        lower: Vec<f64>,
        upper: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(labels.len(), point.len());
        debug_assert_eq!(labels.len(), lower.len());
        debug_assert_eq!(labels.len(), upper.len());
        Self {
            labels,
            point,
            lower,
            upper,
        }
    }

    /// Number of forecast steps.
    pub fn len(&self) -> usize {
        self.point.len()
    }

    /// Whether the forecast holds no steps.
    pub fn is_empty(&self) -> bool {
        self.point.is_empty()
    }

    /// Index labels, one per step.
    pub fn labels(&self) -> &[IndexValue] {
        &self.labels
    }

    /// Point estimates.
    pub fn point(&self) -> &[f64] {
        &self.point
    }

    /// Lower band bounds.
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Upper band bounds.
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// The step at `position`, if any.
    pub fn step(&self, position: usize) -> Option<ForecastStep> {
        if position >= self.len() {
            return None;
        }
        Some(ForecastStep {
            label: self.labels[position],
            point: self.point[position],
            lower: self.lower[position],
            upper: self.upper[position],
        })
    }

    /// Iterate over the steps in horizon order.
    pub fn iter(&self) -> impl Iterator<Item = ForecastStep> + '_ {
        (0..self.len()).map(|i| ForecastStep {
            label: self.labels[i],
            point: self.point[i],
            lower: self.lower[i],
            upper: self.upper[i],
        })
    }
}
