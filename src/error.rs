//! Error types for the gridcast library.

use thiserror::Error;

/// Result type alias for model selection and forecasting operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur during model selection and forecasting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Missing (NaN or infinite) values detected in the input series.
    #[error("missing values detected in data")]
    MissingValues,

    /// Timestamp-related error.
    #[error("timestamp error: {0}")]
    TimestampError(String),

    /// An index value of one variant was resolved against an index of the other.
    #[error("index type mismatch: expected {expected} value, got {got}")]
    IndexTypeMismatch {
        expected: &'static str,
        got: &'static str,
    },

    /// An index value does not correspond to any position in the series.
    #[error("index value not found in series: {0}")]
    IndexNotFound(String),

    /// Every candidate in the search space failed to produce a scored fit.
    #[error("no viable model: all {attempted} candidates failed ({failed} fit failures)")]
    NoViableModel { attempted: usize, failed: usize },

    /// Forecasting was requested before a model was fitted.
    #[error("model must be fitted before prediction")]
    ModelNotFitted,

    /// Forecast horizon must be positive.
    #[error("forecast horizon must be positive, got {horizon}")]
    InvalidHorizon { horizon: usize },

    /// Numerical failure while computing predictions or intervals.
    #[error("forecast computation failed: {0}")]
    ForecastComputation(String),
}
