//! End-to-end tests for grid-search selection and forecasting.

use chrono::{Duration, TimeZone, Utc};
use gridcast::core::{IndexValue, Series};
use gridcast::models::sarima::{
    Forecaster, GridSearch, GridSearchConfig, OrderRanges, PredictOptions,
};
use gridcast::ForecastError;

fn weekly_values(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            40.0 + 0.5 * i as f64 + 6.0 * (2.0 * std::f64::consts::PI * i as f64 / 7.0).sin()
        })
        .collect()
}

#[test]
fn twenty_point_weekly_scenario() {
    // 20 points with weekly seasonality, p/d/q ranges {0, 1}, period 7.
    let series = Series::ordinal(weekly_values(20)).unwrap();
    let search = GridSearch::new(
        GridSearchConfig::default()
            .with_ranges(OrderRanges::up_to(1, 1, 1))
            .with_seasonal_period(7),
    );

    let selected = search.fit(&series).unwrap();
    assert!(selected.aic().is_finite());

    // One full seasonal cycle ahead.
    let forecast = Forecaster::new(&selected).forecast(&series, 7).unwrap();
    assert_eq!(forecast.len(), 7);
    for step in forecast.iter() {
        assert!(step.lower <= step.point && step.point <= step.upper);
    }
}

#[test]
fn selection_is_the_argmin_over_all_scores() {
    let series = Series::ordinal(weekly_values(80)).unwrap();
    let selected = GridSearch::seasonal(7).fit(&series).unwrap();

    for score in selected.scores() {
        assert!(selected.aic() <= score.aic);
    }
}

#[test]
fn full_cross_product_search_also_selects() {
    let series = Series::ordinal(weekly_values(80)).unwrap();
    let search = GridSearch::new(
        GridSearchConfig::default()
            .with_seasonal_period(7)
            .cross_product(),
    );
    let selected = search.fit(&series).unwrap();

    // 8 triplets crossed with themselves, minus any fit failures.
    assert_eq!(
        selected.scores().len() + selected.failures().len(),
        64
    );
    assert!(selected.aic().is_finite());
}

#[test]
fn degenerate_series_signals_no_viable_model() {
    let series = Series::ordinal(vec![0.0; 25]).unwrap();
    let result = GridSearch::seasonal(7).fit(&series);

    assert!(matches!(
        result,
        Err(ForecastError::NoViableModel { .. })
    ));
}

#[test]
fn forecast_rejects_zero_horizon() {
    let series = Series::ordinal(weekly_values(40)).unwrap();
    let selected = GridSearch::seasonal(7).fit(&series).unwrap();
    let forecaster = Forecaster::new(&selected);

    assert!(matches!(
        forecaster.forecast(&series, 0),
        Err(ForecastError::InvalidHorizon { horizon: 0 })
    ));

    let forecast = forecaster.forecast(&series, 10).unwrap();
    assert_eq!(forecast.len(), 10);
}

#[test]
fn one_step_and_dynamic_predictions_share_the_first_step() {
    let series = Series::ordinal(weekly_values(60)).unwrap();
    let selected = GridSearch::seasonal(7).fit(&series).unwrap();
    let forecaster = Forecaster::new(&selected);

    let window = IndexValue::Ordinal(0);
    let origin = IndexValue::Ordinal(30);
    let one_step = forecaster
        .predict(&series, &PredictOptions::new(window, origin, false))
        .unwrap();
    let dynamic = forecaster
        .predict(&series, &PredictOptions::new(window, origin, true))
        .unwrap();

    assert_eq!(
        one_step.forecast().point()[0],
        dynamic.forecast().point()[0]
    );
}

#[test]
fn repeated_searches_select_the_same_model() {
    let series = Series::ordinal(weekly_values(60)).unwrap();
    let search = GridSearch::seasonal(7);

    let first = search.fit(&series).unwrap();
    let second = search.fit(&series).unwrap();

    assert_eq!(first.candidate(), second.candidate());
    assert_eq!(first.aic(), second.aic());
    let scores_first: Vec<_> = first.scores().to_vec();
    let scores_second: Vec<_> = second.scores().to_vec();
    assert_eq!(scores_first, scores_second);
}

#[test]
fn calendar_indexed_pipeline_end_to_end() {
    let base = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let timestamps: Vec<_> = (0..60).map(|i| base + Duration::days(i)).collect();
    let series = Series::calendar(timestamps.clone(), weekly_values(60)).unwrap();

    let selected = GridSearch::seasonal(7).fit(&series).unwrap();
    let forecaster = Forecaster::new(&selected);

    let prediction = forecaster
        .predict(
            &series,
            &PredictOptions::new(
                IndexValue::Calendar(timestamps[0]),
                IndexValue::Calendar(timestamps[30]),
                true,
            ),
        )
        .unwrap();
    assert_eq!(prediction.forecast().len(), 30);
    assert_eq!(prediction.observed().len(), 60);

    // An ordinal origin against a calendar series must be rejected, not
    // silently coerced.
    let mismatch = forecaster.predict(
        &series,
        &PredictOptions::new(IndexValue::Ordinal(0), IndexValue::Ordinal(30), true),
    );
    assert!(matches!(
        mismatch,
        Err(ForecastError::IndexTypeMismatch { .. })
    ));

    let forecast = forecaster.forecast(&series, 7).unwrap();
    assert_eq!(
        forecast.labels()[6],
        IndexValue::Calendar(timestamps[59] + Duration::days(7))
    );
}

#[test]
fn diagnostics_follow_selection() {
    let series = Series::ordinal(weekly_values(80)).unwrap();
    let selected = GridSearch::seasonal(7).fit(&series).unwrap();
    let summary = selected.diagnostics();

    assert_eq!(summary.candidate, selected.candidate());
    assert_eq!(summary.aic, selected.aic());
    assert!(summary
        .parameters
        .iter()
        .any(|p| p.name == "sigma2" && p.value >= 0.0));
}

#[test]
fn failures_carry_candidate_context() {
    // Short enough that the most demanding seasonal candidates cannot fit.
    let series = Series::ordinal(weekly_values(14)).unwrap();
    let selected = GridSearch::seasonal(7).fit(&series).unwrap();

    assert!(!selected.failures().is_empty());
    for failure in selected.failures() {
        assert!(failure.reason.contains("insufficient data"));
    }
}
