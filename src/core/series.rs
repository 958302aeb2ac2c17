//! Univariate series consumed by model selection and forecasting.
//!
//! The series is the contract with the external preprocessing collaborator:
//! numeric, gap-free, uniformly indexed. Construction validates that contract
//! once; everything downstream reads the series immutably.

use crate::core::index::{IndexValue, TimeIndex};
use crate::error::{ForecastError, Result};
use chrono::{DateTime, Utc};

/// A univariate time series with an ordinal or calendar index.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    index: TimeIndex,
    values: Vec<f64>,
}

impl Series {
    /// Create a series on a zero-based ordinal index.
    pub fn ordinal(values: Vec<f64>) -> Result<Self> {
        Self::ordinal_from(0, values)
    }

    /// Create a series on an ordinal index starting at `start`.
    pub fn ordinal_from(start: i64, values: Vec<f64>) -> Result<Self> {
        let index = TimeIndex::ordinal(start, values.len());
        Self::build(index, values)
    }

    /// Create a series on an evenly spaced calendar index.
    pub fn calendar(timestamps: Vec<DateTime<Utc>>, values: Vec<f64>) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: timestamps.len(),
                got: values.len(),
            });
        }
        let index = TimeIndex::from_timestamps(&timestamps)?;
        Self::build(index, values)
    }

    fn build(index: TimeIndex, values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(ForecastError::EmptyData);
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ForecastError::MissingValues);
        }
        Ok(Self { index, values })
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no observations.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The observed values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The time index.
    pub fn index(&self) -> &TimeIndex {
        &self.index
    }

    /// Label of the observation at `position`.
    pub fn label(&self, position: usize) -> IndexValue {
        self.index.label(position)
    }

    /// Resolve an index value to its observation position.
    pub fn position(&self, value: &IndexValue) -> Result<usize> {
        self.index.position(value)
    }
}
