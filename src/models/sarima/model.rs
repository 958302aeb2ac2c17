//! Seasonal ARIMA model with conditional-sum-of-squares estimation.

use crate::core::Series;
use crate::error::{ForecastError, Result};
use crate::models::sarima::candidates::{Candidate, Order, SeasonalOrder};
use crate::models::sarima::diff::{
    difference, differencing_polynomial, poly_mul, seasonal_difference,
};
use crate::utils::optimization::{nelder_mead, NelderMeadConfig};

// Coefficients stay box-bounded during estimation; no candidate is rejected
// for a non-stationary or non-invertible parameterization.
const COEFFICIENT_BOUND: f64 = 0.99;

/// Full SARIMA specification: (p, d, q)(P, D, Q)[s].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SarimaSpec {
    /// Non-seasonal orders.
    pub order: Order,
    /// Seasonal orders and period.
    pub seasonal: SeasonalOrder,
}

impl SarimaSpec {
    /// Create a specification; seasonal orders are zeroed when the period
    /// disables seasonality.
    pub fn new(order: Order, seasonal: SeasonalOrder) -> Self {
        Self {
            order,
            seasonal: SeasonalOrder::new(seasonal.p, seasonal.d, seasonal.q, seasonal.period),
        }
    }

    /// Number of estimated parameters: AR + MA + seasonal AR + seasonal MA
    /// plus the intercept.
    pub fn num_params(&self) -> usize {
        self.order.p + self.order.q + self.seasonal.p + self.seasonal.q + 1
    }

    /// Observations consumed by differencing.
    fn differencing_span(&self) -> usize {
        self.order.d + self.seasonal.d * self.seasonal.period
    }

    /// Longest lag the prediction recursion reaches back to.
    fn warmup(&self) -> usize {
        let ar_span = self.order.p + self.seasonal.p * self.seasonal.period;
        let ma_span = self.order.q + self.seasonal.q * self.seasonal.period;
        ar_span.max(ma_span)
    }

    /// Minimum series length required to fit this specification.
    pub fn min_observations(&self) -> usize {
        self.differencing_span() + self.warmup() + 2
    }
}

impl From<Candidate> for SarimaSpec {
    fn from(candidate: Candidate) -> Self {
        Self::new(candidate.order, candidate.seasonal)
    }
}

/// Point forecasts with per-step standard errors, on the original scale.
#[derive(Debug, Clone)]
pub struct ForecastPath {
    /// Point estimates in horizon order.
    pub points: Vec<f64>,
    /// Forecast standard error per step.
    pub standard_errors: Vec<f64>,
}

/// Seasonal ARIMA forecasting model.
///
/// The multiplicative seasonal AR and MA polynomials are expanded to flat lag
/// weights, and parameters are estimated by minimizing the conditional sum of
/// squares of the differenced series with Nelder-Mead.
#[derive(Debug, Clone)]
pub struct Sarima {
    spec: SarimaSpec,
    /// Non-seasonal AR coefficients.
    ar: Vec<f64>,
    /// Non-seasonal MA coefficients.
    ma: Vec<f64>,
    /// Seasonal AR coefficients.
    seasonal_ar: Vec<f64>,
    /// Seasonal MA coefficients.
    seasonal_ma: Vec<f64>,
    /// Intercept (mean of the differenced series).
    intercept: f64,
    /// Expanded AR lag weights (multiplicative polynomials multiplied out).
    ar_weights: Vec<f64>,
    /// Expanded MA lag weights.
    ma_weights: Vec<f64>,
    /// Training series on the original scale.
    original: Option<Vec<f64>>,
    /// Training series after regular and seasonal differencing.
    transformed: Option<Vec<f64>>,
    /// One-step predictions on the transformed scale (NaN during warmup).
    fitted_transformed: Option<Vec<f64>>,
    /// Residuals on the transformed scale (zero during warmup).
    residuals: Option<Vec<f64>>,
    /// Residual variance.
    sigma2: Option<f64>,
    aic: Option<f64>,
    bic: Option<f64>,
}

impl Sarima {
    /// Create an unfitted model for the given specification.
    pub fn new(spec: SarimaSpec) -> Self {
        Self {
            spec,
            ar: vec![],
            ma: vec![],
            seasonal_ar: vec![],
            seasonal_ma: vec![],
            intercept: 0.0,
            ar_weights: vec![],
            ma_weights: vec![],
            original: None,
            transformed: None,
            fitted_transformed: None,
            residuals: None,
            sigma2: None,
            aic: None,
            bic: None,
        }
    }

    /// Create a non-seasonal ARIMA(p, d, q) model.
    pub fn arima(p: usize, d: usize, q: usize) -> Self {
        Self::new(SarimaSpec::new(Order::new(p, d, q), SeasonalOrder::none(0)))
    }

    /// The model specification.
    pub fn spec(&self) -> SarimaSpec {
        self.spec
    }

    /// Non-seasonal AR coefficients.
    pub fn ar_coefficients(&self) -> &[f64] {
        &self.ar
    }

    /// Non-seasonal MA coefficients.
    pub fn ma_coefficients(&self) -> &[f64] {
        &self.ma
    }

    /// Seasonal AR coefficients.
    pub fn seasonal_ar_coefficients(&self) -> &[f64] {
        &self.seasonal_ar
    }

    /// Seasonal MA coefficients.
    pub fn seasonal_ma_coefficients(&self) -> &[f64] {
        &self.seasonal_ma
    }

    /// The intercept.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Akaike information criterion of the fit.
    pub fn aic(&self) -> Option<f64> {
        self.aic
    }

    /// Bayesian information criterion of the fit.
    pub fn bic(&self) -> Option<f64> {
        self.bic
    }

    /// Residual variance of the fit.
    pub fn sigma2(&self) -> Option<f64> {
        self.sigma2
    }

    /// Residuals on the differenced scale (zero during warmup).
    pub fn residuals(&self) -> Option<&[f64]> {
        self.residuals.as_deref()
    }

    /// Residuals past the recursion warmup.
    pub fn effective_residuals(&self) -> Option<&[f64]> {
        self.residuals
            .as_deref()
            .map(|r| &r[self.spec.warmup().min(r.len())..])
    }

    /// One-step fitted values on the differenced scale (NaN during warmup).
    pub fn fitted_values(&self) -> Option<&[f64]> {
        self.fitted_transformed.as_deref()
    }

    /// Whether the model has been fitted.
    pub fn is_fitted(&self) -> bool {
        self.original.is_some()
    }

    /// Length of the training series, once fitted.
    pub fn training_len(&self) -> Option<usize> {
        self.original.as_ref().map(|v| v.len())
    }

    /// Fit the model to the series by conditional least squares.
    pub fn fit(&mut self, series: &Series) -> Result<()> {
        let values = series.values();
        let min_len = self.spec.min_observations();
        if values.len() < min_len {
            return Err(ForecastError::InsufficientData {
                needed: min_len,
                got: values.len(),
            });
        }

        let transformed = seasonal_difference(
            &difference(values, self.spec.order.d),
            self.spec.seasonal.d,
            self.spec.seasonal.period,
        );

        self.estimate(&transformed);
        self.summarize_fit(&transformed);
        self.original = Some(values.to_vec());
        self.transformed = Some(transformed);
        Ok(())
    }

    /// Expand the multiplicative lag polynomials into flat per-lag weights.
    ///
    /// `sign` is -1 for the AR side (weights apply to centered past values)
    /// and +1 for the MA side (weights apply to past residuals).
    fn lag_weights(coeffs: &[f64], seasonal_coeffs: &[f64], period: usize, sign: f64) -> Vec<f64> {
        let mut base = vec![0.0; coeffs.len() + 1];
        base[0] = 1.0;
        for (i, &c) in coeffs.iter().enumerate() {
            base[i + 1] = sign * c;
        }

        let mut seasonal = vec![0.0; seasonal_coeffs.len() * period + 1];
        seasonal[0] = 1.0;
        for (j, &c) in seasonal_coeffs.iter().enumerate() {
            seasonal[(j + 1) * period] = sign * c;
        }

        let product = poly_mul(&base, &seasonal);
        product[1..].iter().map(|&c| sign * c).collect()
    }

    /// Split a flat parameter vector into expanded AR and MA lag weights.
    fn weights_from_params(spec: &SarimaSpec, params: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let p = spec.order.p;
        let q = spec.order.q;
        let cap_p = spec.seasonal.p;
        let period = spec.seasonal.period;

        let ar = &params[1..1 + p];
        let ma = &params[1 + p..1 + p + q];
        let sar = &params[1 + p + q..1 + p + q + cap_p];
        let sma = &params[1 + p + q + cap_p..];

        (
            Self::lag_weights(ar, sar, period, -1.0),
            Self::lag_weights(ma, sma, period, 1.0),
        )
    }

    /// Conditional sum of squares for a given parameterization.
    fn conditional_sum_of_squares(
        w: &[f64],
        ar_weights: &[f64],
        ma_weights: &[f64],
        intercept: f64,
    ) -> f64 {
        let warmup = ar_weights.len().max(ma_weights.len());
        if w.len() <= warmup {
            return f64::MAX;
        }

        let mut residuals = vec![0.0; w.len()];
        let mut css = 0.0;
        for t in warmup..w.len() {
            let mut pred = intercept;
            for (i, a) in ar_weights.iter().enumerate() {
                pred += a * (w[t - 1 - i] - intercept);
            }
            for (i, m) in ma_weights.iter().enumerate() {
                pred += m * residuals[t - 1 - i];
            }
            let error = w[t] - pred;
            residuals[t] = error;
            css += error * error;
        }
        css
    }

    /// Estimate parameters by minimizing the conditional sum of squares.
    fn estimate(&mut self, w: &[f64]) {
        let spec = self.spec;
        let mean = w.iter().sum::<f64>() / w.len() as f64;
        let n_coeffs = spec.num_params() - 1;

        if n_coeffs == 0 {
            self.intercept = mean;
            self.ar.clear();
            self.ma.clear();
            self.seasonal_ar.clear();
            self.seasonal_ma.clear();
            self.ar_weights.clear();
            self.ma_weights.clear();
            return;
        }

        let mut initial = vec![0.0; n_coeffs + 1];
        initial[0] = mean;
        for (i, slot) in initial[1..].iter_mut().enumerate() {
            *slot = 0.1 / (i + 1) as f64;
        }

        let mut bounds = vec![(f64::NEG_INFINITY, f64::INFINITY)];
        bounds.resize(n_coeffs + 1, (-COEFFICIENT_BOUND, COEFFICIENT_BOUND));

        let config = NelderMeadConfig {
            max_iter: 1000,
            tolerance: 1e-8,
            ..Default::default()
        };
        let result = nelder_mead(
            |params| {
                let (ar_weights, ma_weights) = Self::weights_from_params(&spec, params);
                Self::conditional_sum_of_squares(w, &ar_weights, &ma_weights, params[0])
            },
            &initial,
            Some(&bounds),
            config,
        );

        let p = spec.order.p;
        let q = spec.order.q;
        let cap_p = spec.seasonal.p;
        let params = &result.optimal_point;
        self.intercept = params[0];
        self.ar = params[1..1 + p].to_vec();
        self.ma = params[1 + p..1 + p + q].to_vec();
        self.seasonal_ar = params[1 + p + q..1 + p + q + cap_p].to_vec();
        self.seasonal_ma = params[1 + p + q + cap_p..].to_vec();

        let (ar_weights, ma_weights) = Self::weights_from_params(&spec, params);
        self.ar_weights = ar_weights;
        self.ma_weights = ma_weights;
    }

    /// One-step prediction on the transformed scale at position `t`, from
    /// past values `w` and past residuals `e`. Requires `t >= warmup`.
    fn predict_transformed(&self, w: &[f64], e: &[f64], t: usize) -> f64 {
        let mut pred = self.intercept;
        for (i, a) in self.ar_weights.iter().enumerate() {
            pred += a * (w[t - 1 - i] - self.intercept);
        }
        for (i, m) in self.ma_weights.iter().enumerate() {
            pred += m * e[t - 1 - i];
        }
        pred
    }

    /// Compute fitted values, residuals, and information criteria.
    fn summarize_fit(&mut self, w: &[f64]) {
        let warmup = self.spec.warmup();
        let mut fitted = vec![f64::NAN; w.len()];
        let mut residuals = vec![0.0; w.len()];

        for t in warmup..w.len() {
            let pred = self.predict_transformed(w, &residuals, t);
            fitted[t] = pred;
            residuals[t] = w[t] - pred;
        }

        let effective = &residuals[warmup..];
        let n_eff = effective.len() as f64;
        let variance = effective.iter().map(|r| r * r).sum::<f64>() / n_eff;
        let k = self.spec.num_params() as f64;
        let ll = -0.5 * n_eff * (1.0 + variance.ln() + (2.0 * std::f64::consts::PI).ln());

        self.sigma2 = Some(variance);
        self.aic = Some(-2.0 * ll + 2.0 * k);
        self.bic = Some(-2.0 * ll + k * n_eff.ln());
        self.fitted_transformed = Some(fitted);
        self.residuals = Some(residuals);
    }

    /// Reconstruction offset at original-scale position `t`: the lagged part
    /// of the differencing operator applied to `history`.
    fn reconstruction_offset(diff_coeffs: &[f64], history: &[f64], t: usize) -> f64 {
        -diff_coeffs[1..]
            .iter()
            .enumerate()
            .map(|(k, c)| c * history[t - 1 - k])
            .sum::<f64>()
    }

    fn fitted_state(&self) -> Result<(&[f64], &[f64], &[f64], &[f64], f64)> {
        Ok((
            self.original.as_deref().ok_or(ForecastError::ModelNotFitted)?,
            self.transformed
                .as_deref()
                .ok_or(ForecastError::ModelNotFitted)?,
            self.fitted_transformed
                .as_deref()
                .ok_or(ForecastError::ModelNotFitted)?,
            self.residuals.as_deref().ok_or(ForecastError::ModelNotFitted)?,
            self.sigma2.ok_or(ForecastError::ModelNotFitted)?,
        ))
    }

    /// In-sample predictions from `origin` (a position in the training
    /// series) through its end.
    ///
    /// With `dynamic` false every step is one-step-ahead, re-anchored on the
    /// actual observations. With `dynamic` true, predictions from `origin`
    /// onward feed back into the recursion in place of the actuals, so errors
    /// compound the way they would in a real multi-step forecast. Both modes
    /// agree exactly at the first predicted step.
    pub fn predict_span(&self, origin: usize, dynamic: bool) -> Result<ForecastPath> {
        let (original, w, fitted, residuals, sigma2) = self.fitted_state()?;
        let n = original.len();
        let diff_span = self.spec.differencing_span();
        let earliest = diff_span + self.spec.warmup();

        if origin >= n {
            return Err(ForecastError::InvalidParameter(format!(
                "forecast origin {origin} is past the end of the series (length {n})"
            )));
        }
        if origin < earliest {
            return Err(ForecastError::InvalidParameter(format!(
                "forecast origin must leave at least {earliest} observations of history, got {origin}"
            )));
        }

        let sigma = sigma2.sqrt();
        let diff_coeffs = differencing_polynomial(
            self.spec.order.d,
            self.spec.seasonal.d,
            self.spec.seasonal.period,
        );

        let steps = n - origin;
        let mut points = Vec::with_capacity(steps);
        let mut standard_errors = Vec::with_capacity(steps);

        if dynamic {
            let j0 = origin - diff_span;
            let mut w_work = w[..j0].to_vec();
            let mut e_work = residuals[..j0].to_vec();
            let mut y_work = original[..origin].to_vec();

            for (step, t) in (origin..n).enumerate() {
                let j = t - diff_span;
                let w_hat = self.predict_transformed(&w_work, &e_work, j);
                let y_hat = w_hat + Self::reconstruction_offset(&diff_coeffs, &y_work, t);
                w_work.push(w_hat);
                e_work.push(0.0);
                y_work.push(y_hat);
                points.push(y_hat);
                standard_errors.push(sigma * ((step + 1) as f64).sqrt());
            }
        } else {
            for t in origin..n {
                let j = t - diff_span;
                let y_hat = fitted[j] + Self::reconstruction_offset(&diff_coeffs, original, t);
                points.push(y_hat);
                standard_errors.push(sigma);
            }
        }

        Self::ensure_finite(&points, &standard_errors)?;
        Ok(ForecastPath {
            points,
            standard_errors,
        })
    }

    /// Forecast `horizon` steps past the end of the training series.
    pub fn forecast_ahead(&self, horizon: usize) -> Result<ForecastPath> {
        if horizon == 0 {
            return Err(ForecastError::InvalidHorizon { horizon });
        }
        let (original, w, _, residuals, sigma2) = self.fitted_state()?;
        let n = original.len();
        let diff_span = self.spec.differencing_span();
        let sigma = sigma2.sqrt();
        let diff_coeffs = differencing_polynomial(
            self.spec.order.d,
            self.spec.seasonal.d,
            self.spec.seasonal.period,
        );

        let mut w_work = w.to_vec();
        let mut e_work = residuals.to_vec();
        let mut y_work = original.to_vec();
        let mut points = Vec::with_capacity(horizon);
        let mut standard_errors = Vec::with_capacity(horizon);

        for step in 1..=horizon {
            let t = n - 1 + step;
            let j = t - diff_span;
            let w_hat = self.predict_transformed(&w_work, &e_work, j);
            let y_hat = w_hat + Self::reconstruction_offset(&diff_coeffs, &y_work, t);
            w_work.push(w_hat);
            e_work.push(0.0);
            y_work.push(y_hat);
            points.push(y_hat);
            standard_errors.push(sigma * (step as f64).sqrt());
        }

        Self::ensure_finite(&points, &standard_errors)?;
        Ok(ForecastPath {
            points,
            standard_errors,
        })
    }

    fn ensure_finite(points: &[f64], standard_errors: &[f64]) -> Result<()> {
        if points.iter().chain(standard_errors).all(|v| v.is_finite()) {
            Ok(())
        } else {
            Err(ForecastError::ForecastComputation(
                "prediction produced non-finite values".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn spec(p: usize, d: usize, q: usize) -> SarimaSpec {
        SarimaSpec::new(Order::new(p, d, q), SeasonalOrder::none(0))
    }

    fn seasonal_spec(
        (p, d, q): (usize, usize, usize),
        (cap_p, cap_d, cap_q): (usize, usize, usize),
        period: usize,
    ) -> SarimaSpec {
        SarimaSpec::new(
            Order::new(p, d, q),
            SeasonalOrder::new(cap_p, cap_d, cap_q, period),
        )
    }

    fn ar1_series(n: usize) -> Series {
        let mut values = vec![10.0];
        for i in 1..n {
            values.push(0.7 * values[i - 1] + 3.0 + (i as f64 * 0.1).sin());
        }
        Series::ordinal(values).unwrap()
    }

    fn weekly_series(n: usize) -> Series {
        let values: Vec<f64> = (0..n)
            .map(|i| {
                50.0 + 0.3 * i as f64
                    + 8.0 * (2.0 * std::f64::consts::PI * i as f64 / 7.0).sin()
            })
            .collect();
        Series::ordinal(values).unwrap()
    }

    #[test]
    fn fit_estimates_requested_coefficient_counts() {
        let mut model = Sarima::new(seasonal_spec((1, 1, 1), (1, 0, 1), 7));
        model.fit(&weekly_series(60)).unwrap();

        assert_eq!(model.ar_coefficients().len(), 1);
        assert_eq!(model.ma_coefficients().len(), 1);
        assert_eq!(model.seasonal_ar_coefficients().len(), 1);
        assert_eq!(model.seasonal_ma_coefficients().len(), 1);
        assert!(model.aic().is_some());
        assert!(model.bic().is_some());
        assert!(model.sigma2().is_some());
    }

    #[test]
    fn ar1_coefficient_is_recovered_roughly() {
        let mut model = Sarima::new(spec(1, 0, 0));
        model.fit(&ar1_series(120)).unwrap();
        assert!(model.ar_coefficients()[0] > 0.3);
    }

    #[test]
    fn mean_only_model_forecasts_the_mean() {
        let values = vec![5.0, 5.5, 4.5, 5.2, 4.8, 5.1, 4.9, 5.0];
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let series = Series::ordinal(values).unwrap();

        let mut model = Sarima::new(spec(0, 0, 0));
        model.fit(&series).unwrap();

        let path = model.forecast_ahead(3).unwrap();
        for point in &path.points {
            assert_relative_eq!(*point, mean, epsilon = 1e-9);
        }
    }

    #[test]
    fn differenced_model_continues_a_trend() {
        let values: Vec<f64> = (0..50).map(|i| 10.0 + 2.0 * i as f64).collect();
        let series = Series::ordinal(values.clone()).unwrap();

        let mut model = Sarima::new(spec(0, 1, 0));
        model.fit(&series).unwrap();

        let path = model.forecast_ahead(3).unwrap();
        // The first difference is constant at 2, so the forecast keeps climbing.
        assert_relative_eq!(path.points[0], 110.0, epsilon = 0.5);
        assert_relative_eq!(path.points[2], 114.0, epsilon = 1.0);
    }

    #[test]
    fn insufficient_data_is_rejected() {
        let series = Series::ordinal(vec![1.0, 2.0, 3.0]).unwrap();
        let mut model = Sarima::new(seasonal_spec((1, 1, 1), (1, 1, 1), 7));
        assert!(matches!(
            model.fit(&series),
            Err(ForecastError::InsufficientData { .. })
        ));
    }

    #[test]
    fn prediction_requires_fit() {
        let model = Sarima::new(spec(1, 0, 0));
        assert!(matches!(
            model.forecast_ahead(5),
            Err(ForecastError::ModelNotFitted)
        ));
        assert!(matches!(
            model.predict_span(10, false),
            Err(ForecastError::ModelNotFitted)
        ));
    }

    #[test]
    fn zero_horizon_is_invalid() {
        let mut model = Sarima::new(spec(1, 0, 0));
        model.fit(&ar1_series(40)).unwrap();
        assert!(matches!(
            model.forecast_ahead(0),
            Err(ForecastError::InvalidHorizon { horizon: 0 })
        ));
    }

    #[test]
    fn forecast_length_matches_horizon() {
        let mut model = Sarima::new(spec(1, 0, 1));
        model.fit(&ar1_series(60)).unwrap();
        let path = model.forecast_ahead(10).unwrap();
        assert_eq!(path.points.len(), 10);
        assert_eq!(path.standard_errors.len(), 10);
    }

    #[test]
    fn standard_errors_widen_with_horizon() {
        let mut model = Sarima::new(spec(1, 0, 1));
        model.fit(&ar1_series(60)).unwrap();
        let path = model.forecast_ahead(8).unwrap();
        for pair in path.standard_errors.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn one_step_and_dynamic_agree_at_the_first_step() {
        let series = weekly_series(60);
        let mut model = Sarima::new(seasonal_spec((1, 0, 1), (1, 0, 0), 7));
        model.fit(&series).unwrap();

        let origin = 30;
        let one_step = model.predict_span(origin, false).unwrap();
        let dynamic = model.predict_span(origin, true).unwrap();

        assert_eq!(one_step.points[0], dynamic.points[0]);
        assert_eq!(one_step.standard_errors[0], dynamic.standard_errors[0]);
    }

    #[test]
    fn dynamic_predictions_diverge_after_the_first_step() {
        let series = weekly_series(60);
        let mut model = Sarima::new(seasonal_spec((1, 0, 1), (1, 0, 0), 7));
        model.fit(&series).unwrap();

        let one_step = model.predict_span(30, false).unwrap();
        let dynamic = model.predict_span(30, true).unwrap();

        let diverged = one_step
            .points
            .iter()
            .zip(dynamic.points.iter())
            .skip(1)
            .any(|(a, b)| (a - b).abs() > 1e-12);
        assert!(diverged);
    }

    #[test]
    fn early_origin_is_rejected() {
        let mut model = Sarima::new(seasonal_spec((1, 0, 0), (1, 1, 0), 7));
        model.fit(&weekly_series(60)).unwrap();
        // Differencing consumes D*s = 7 and the recursion reaches back
        // p + P*s = 8 more; origins before position 15 are invalid.
        assert!(matches!(
            model.predict_span(5, false),
            Err(ForecastError::InvalidParameter(_))
        ));
    }

    #[test]
    fn origin_past_the_end_is_rejected() {
        let mut model = Sarima::new(spec(1, 0, 0));
        model.fit(&ar1_series(40)).unwrap();
        assert!(matches!(
            model.predict_span(40, false),
            Err(ForecastError::InvalidParameter(_))
        ));
    }

    #[test]
    fn one_step_predictions_track_a_smooth_series() {
        let series = weekly_series(70);
        let mut model = Sarima::new(seasonal_spec((1, 0, 0), (1, 1, 0), 7));
        model.fit(&series).unwrap();

        let origin = 40;
        let path = model.predict_span(origin, false).unwrap();
        let actual = &series.values()[origin..];
        let mae = path
            .points
            .iter()
            .zip(actual.iter())
            .map(|(p, a)| (p - a).abs())
            .sum::<f64>()
            / actual.len() as f64;
        // One-step predictions re-anchor on actuals, so they stay close.
        assert!(mae < 3.0, "one-step MAE too large: {mae}");
    }

    #[test]
    fn min_observations_accounts_for_seasonal_structure() {
        assert_eq!(spec(1, 1, 1).min_observations(), 1 + 1 + 2);
        let s = seasonal_spec((1, 1, 1), (1, 1, 1), 7);
        // d + D*s = 8 consumed by differencing, warmup max(1+7, 1+7) = 8.
        assert_eq!(s.min_observations(), 8 + 8 + 2);
    }

    #[test]
    fn seasonal_orders_are_inert_without_a_period() {
        let spec = SarimaSpec::new(Order::new(1, 0, 0), SeasonalOrder::new(2, 1, 2, 0));
        assert_eq!(spec.seasonal, SeasonalOrder::none(0));
        assert_eq!(spec.num_params(), 2);
    }
}
