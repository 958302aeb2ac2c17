//! # gridcast
//!
//! Grid-search model selection and forecasting for seasonal ARIMA models
//! over univariate time series.
//!
//! The engine enumerates a candidate space of (p, d, q)(P, D, Q)\[s\] orders,
//! fits each candidate, scores it by AIC, and selects the best. The selected
//! model then produces one-step-ahead predictions, dynamic multi-step
//! predictions, and future forecasts, each with confidence bands.
//!
//! ```
//! use gridcast::prelude::*;
//!
//! let values: Vec<f64> = (0..70)
//!     .map(|i| 50.0 + 0.3 * i as f64
//!         + 8.0 * (2.0 * std::f64::consts::PI * i as f64 / 7.0).sin())
//!     .collect();
//! let series = Series::ordinal(values)?;
//!
//! let selected = GridSearch::seasonal(7).fit(&series)?;
//! let forecaster = Forecaster::new(&selected);
//!
//! let prediction = forecaster.predict(
//!     &series,
//!     &PredictOptions::new(IndexValue::Ordinal(0), IndexValue::Ordinal(40), false),
//! )?;
//! assert_eq!(prediction.forecast().len(), 30);
//!
//! let future = forecaster.forecast(&series, 7)?;
//! assert_eq!(future.len(), 7);
//! # Ok::<(), gridcast::ForecastError>(())
//! ```

#![allow(clippy::needless_range_loop)]

pub mod core;
pub mod error;
pub mod models;
pub mod utils;
pub mod validation;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::core::{ForecastResult, ForecastStep, IndexValue, Series, TimeIndex};
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::sarima::{
        Forecaster, GridSearch, GridSearchConfig, OrderRanges, PredictOptions, SelectedModel,
    };
}
