//! Time index abstraction shared by ordinal and calendar series.
//!
//! Forecast origins and window anchors arrive as [`IndexValue`]s and must be
//! resolved against the index variant the series was built with; resolving an
//! ordinal value against a calendar index (or vice versa) is an error rather
//! than a silent mis-slice.

use crate::error::{ForecastError, Result};
use chrono::{DateTime, Duration, Utc};

/// A single index label: either a sequential integer or a timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndexValue {
    /// Position on an integer axis.
    Ordinal(i64),
    /// Position on an evenly spaced calendar axis.
    Calendar(DateTime<Utc>),
}

impl IndexValue {
    fn variant_name(&self) -> &'static str {
        match self {
            IndexValue::Ordinal(_) => "ordinal",
            IndexValue::Calendar(_) => "calendar",
        }
    }
}

impl std::fmt::Display for IndexValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexValue::Ordinal(i) => write!(f, "{i}"),
            IndexValue::Calendar(ts) => write!(f, "{}", ts.to_rfc3339()),
        }
    }
}

/// Uniform time index over a series.
///
/// Both variants expose the same contract: map a position to a label, resolve
/// a label back to a position, and extend labels past the end of the observed
/// range for future forecasts.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeIndex {
    /// Sequential integers starting at `start`.
    Ordinal { start: i64, len: usize },
    /// Evenly spaced timestamps starting at `start` with spacing `step`.
    Calendar {
        start: DateTime<Utc>,
        step: Duration,
        len: usize,
    },
}

impl TimeIndex {
    /// Build an ordinal index of the given length starting at `start`.
    pub fn ordinal(start: i64, len: usize) -> Self {
        TimeIndex::Ordinal { start, len }
    }

    /// Build a calendar index from explicit timestamps.
    ///
    /// Timestamps must be strictly increasing and evenly spaced; at least two
    /// are required to establish the spacing.
    pub fn from_timestamps(timestamps: &[DateTime<Utc>]) -> Result<Self> {
        if timestamps.is_empty() {
            return Err(ForecastError::EmptyData);
        }
        if timestamps.len() < 2 {
            return Err(ForecastError::TimestampError(
                "at least two timestamps are required to infer spacing".to_string(),
            ));
        }

        let step = timestamps[1] - timestamps[0];
        if step <= Duration::zero() {
            return Err(ForecastError::TimestampError(
                "timestamps must be strictly increasing".to_string(),
            ));
        }
        for window in timestamps.windows(2) {
            if window[1] - window[0] != step {
                return Err(ForecastError::TimestampError(format!(
                    "timestamps must be evenly spaced: gap at {} differs from {}",
                    window[1].to_rfc3339(),
                    step
                )));
            }
        }

        Ok(TimeIndex::Calendar {
            start: timestamps[0],
            step,
            len: timestamps.len(),
        })
    }

    /// Number of positions covered by the index.
    pub fn len(&self) -> usize {
        match self {
            TimeIndex::Ordinal { len, .. } | TimeIndex::Calendar { len, .. } => *len,
        }
    }

    /// Whether the index covers no positions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn variant_name(&self) -> &'static str {
        match self {
            TimeIndex::Ordinal { .. } => "ordinal",
            TimeIndex::Calendar { .. } => "calendar",
        }
    }

    /// Label at a position. Positions at or past `len` extrapolate beyond the
    /// observed range, which is how future forecast labels are produced.
    pub fn label(&self, position: usize) -> IndexValue {
        match self {
            TimeIndex::Ordinal { start, .. } => IndexValue::Ordinal(start + position as i64),
            TimeIndex::Calendar { start, step, .. } => {
                IndexValue::Calendar(*start + *step * position as i32)
            }
        }
    }

    /// Labels for a range of positions.
    pub fn labels(&self, range: std::ops::Range<usize>) -> Vec<IndexValue> {
        range.map(|pos| self.label(pos)).collect()
    }

    /// Labels for `horizon` positions immediately past the end of the index.
    pub fn future_labels(&self, horizon: usize) -> Vec<IndexValue> {
        self.labels(self.len()..self.len() + horizon)
    }

    /// Resolve an index value to its position.
    ///
    /// Branches on the index variant: the value must match it, lie inside the
    /// observed range, and (for calendar indexes) fall exactly on the grid.
    pub fn position(&self, value: &IndexValue) -> Result<usize> {
        match (self, value) {
            (TimeIndex::Ordinal { start, len }, IndexValue::Ordinal(i)) => {
                if *i < *start || (*i - *start) as usize >= *len {
                    return Err(ForecastError::IndexNotFound(value.to_string()));
                }
                Ok((*i - *start) as usize)
            }
            (TimeIndex::Calendar { start, step, len }, IndexValue::Calendar(ts)) => {
                let step_ns = step.num_nanoseconds().ok_or_else(|| {
                    ForecastError::TimestampError(
                        "index step overflows nanosecond precision".to_string(),
                    )
                })?;
                if step_ns <= 0 {
                    return Err(ForecastError::TimestampError(
                        "index step must be positive".to_string(),
                    ));
                }
                let delta_ns = (*ts - *start).num_nanoseconds().ok_or_else(|| {
                    ForecastError::TimestampError(
                        "index span overflows nanosecond precision".to_string(),
                    )
                })?;
                if delta_ns < 0 || delta_ns % step_ns != 0 {
                    return Err(ForecastError::IndexNotFound(value.to_string()));
                }
                let position = (delta_ns / step_ns) as usize;
                if position >= *len {
                    return Err(ForecastError::IndexNotFound(value.to_string()));
                }
                Ok(position)
            }
            _ => Err(ForecastError::IndexTypeMismatch {
                expected: self.variant_name(),
                got: value.variant_name(),
            }),
        }
    }
}
