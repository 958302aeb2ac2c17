//! Forecasting against a selected model: one-step, dynamic, and future.

use crate::core::{ForecastResult, IndexValue, Series};
use crate::error::{ForecastError, Result};
use crate::models::sarima::model::ForecastPath;
use crate::models::sarima::selector::SelectedModel;
use crate::utils::stats::normal_quantile;

const DEFAULT_LEVEL: f64 = 0.95;

/// Options for in-sample prediction.
///
/// `window_start` anchors the observed window returned alongside the
/// forecast; `forecast_origin` is the first index at which predicted values
/// replace observed ones. Both are index values and must match the series'
/// index variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictOptions {
    pub window_start: IndexValue,
    pub forecast_origin: IndexValue,
    pub dynamic: bool,
}

impl PredictOptions {
    /// Create prediction options.
    pub fn new(window_start: IndexValue, forecast_origin: IndexValue, dynamic: bool) -> Self {
        Self {
            window_start,
            forecast_origin,
            dynamic,
        }
    }
}

/// The observed slice of the series from the window anchor to its end.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservedWindow {
    labels: Vec<IndexValue>,
    values: Vec<f64>,
}

impl ObservedWindow {
    /// Number of observations in the window.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the window is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Index labels of the window.
    pub fn labels(&self) -> &[IndexValue] {
        &self.labels
    }

    /// Observed values of the window.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// A plot-ready in-sample prediction: the observed window plus the banded
/// forecast from the origin onward.
#[derive(Debug, Clone, PartialEq)]
pub struct InSamplePrediction {
    observed: ObservedWindow,
    forecast: ForecastResult,
}

impl InSamplePrediction {
    /// The observed window, starting at the requested anchor.
    pub fn observed(&self) -> &ObservedWindow {
        &self.observed
    }

    /// Predicted values with their band, starting at the forecast origin.
    pub fn forecast(&self) -> &ForecastResult {
        &self.forecast
    }
}

/// Produces forecasts from a [`SelectedModel`].
///
/// All state lives in the selected model passed at construction; the
/// forecaster itself only carries the confidence level.
#[derive(Debug, Clone)]
pub struct Forecaster<'a> {
    selected: &'a SelectedModel,
    level: f64,
}

impl<'a> Forecaster<'a> {
    /// Create a forecaster over a selected model with a 95% band.
    pub fn new(selected: &'a SelectedModel) -> Self {
        Self {
            selected,
            level: DEFAULT_LEVEL,
        }
    }

    /// Use a different confidence level, e.g. 0.8 for an 80% band.
    pub fn with_level(mut self, level: f64) -> Self {
        self.level = level;
        self
    }

    /// In-sample prediction over the tail of the training series.
    ///
    /// With `dynamic` false each step is one-step-ahead from the actual
    /// observations; with `dynamic` true predictions from the origin onward
    /// are generated from the model's own prior predictions.
    pub fn predict(&self, series: &Series, options: &PredictOptions) -> Result<InSamplePrediction> {
        self.check_series(series)?;
        let window_pos = series.position(&options.window_start)?;
        let origin_pos = series.position(&options.forecast_origin)?;
        if window_pos > origin_pos {
            return Err(ForecastError::InvalidParameter(format!(
                "window start {} is after the forecast origin {}",
                options.window_start, options.forecast_origin
            )));
        }

        let path = self
            .selected
            .model()
            .predict_span(origin_pos, options.dynamic)?;
        let forecast = self.banded(series.index().labels(origin_pos..series.len()), path)?;
        let observed = ObservedWindow {
            labels: series.index().labels(window_pos..series.len()),
            values: series.values()[window_pos..].to_vec(),
        };

        Ok(InSamplePrediction { observed, forecast })
    }

    /// Forecast `horizon` points strictly beyond the end of the series.
    pub fn forecast(&self, series: &Series, horizon: usize) -> Result<ForecastResult> {
        self.check_series(series)?;
        let path = self.selected.model().forecast_ahead(horizon)?;
        self.banded(series.index().future_labels(horizon), path)
    }

    fn check_series(&self, series: &Series) -> Result<()> {
        match self.selected.model().training_len() {
            Some(n) if n == series.len() => Ok(()),
            Some(n) => Err(ForecastError::DimensionMismatch {
                expected: n,
                got: series.len(),
            }),
            None => Err(ForecastError::ModelNotFitted),
        }
    }

    fn banded(&self, labels: Vec<IndexValue>, path: ForecastPath) -> Result<ForecastResult> {
        if !(self.level > 0.0 && self.level < 1.0) {
            return Err(ForecastError::InvalidParameter(format!(
                "confidence level must be in (0, 1), got {}",
                self.level
            )));
        }
        let z = normal_quantile((1.0 + self.level) / 2.0);

        let ForecastPath {
            points,
            standard_errors,
        } = path;
        let lower: Vec<f64> = points
            .iter()
            .zip(standard_errors.iter())
            .map(|(p, se)| p - z * se)
            .collect();
        let upper: Vec<f64> = points
            .iter()
            .zip(standard_errors.iter())
            .map(|(p, se)| p + z * se)
            .collect();

        Ok(ForecastResult::new(labels, points, lower, upper))
    }
}
