//! Property-based tests for candidate enumeration, selection, and forecasts.
//!
//! These verify invariants that should hold for all valid inputs, using
//! generated series and search configurations.

use gridcast::core::Series;
use gridcast::models::sarima::{
    CandidateSpace, Forecaster, GridSearch, GridSearchConfig, OrderRanges, SeasonalSearch,
};
use proptest::prelude::*;

/// Series with trend and mild curvature; enough variation for finite AIC.
fn trending_values_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    (min_len..max_len).prop_flat_map(|len| {
        (10.0..100.0_f64, 0.1..2.0_f64).prop_map(move |(base, slope)| {
            (0..len)
                .map(|i| base + slope * i as f64 + (i as f64 * 0.7).sin())
                .collect()
        })
    })
}

/// Series with a seasonal cycle of the given period.
fn seasonal_values_strategy(
    min_len: usize,
    max_len: usize,
    period: usize,
) -> impl Strategy<Value = Vec<f64>> {
    (min_len..max_len).prop_flat_map(move |len| {
        (50.0..100.0_f64, 5.0..20.0_f64).prop_map(move |(base, amplitude)| {
            (0..len)
                .map(|i| {
                    base + 0.2 * i as f64
                        + amplitude
                            * (2.0 * std::f64::consts::PI * i as f64 / period as f64).sin()
                })
                .collect()
        })
    })
}

proptest! {
    #[test]
    fn candidate_space_cardinality_matches_ranges(
        max_p in 0usize..3,
        max_d in 0usize..3,
        max_q in 0usize..3,
        period in 0usize..13,
    ) {
        let ranges = OrderRanges::up_to(max_p, max_d, max_q);
        let triplets = (max_p + 1) * (max_d + 1) * (max_q + 1);

        let coupled = CandidateSpace::enumerate(&ranges, period, SeasonalSearch::Coupled);
        prop_assert_eq!(coupled.len(), triplets);

        let crossed = CandidateSpace::enumerate(&ranges, period, SeasonalSearch::CrossProduct);
        if period > 1 {
            prop_assert_eq!(crossed.len(), triplets * triplets);
        } else {
            prop_assert_eq!(crossed.len(), triplets);
        }
    }

    #[test]
    fn candidate_space_enumeration_is_reproducible(
        max_p in 0usize..3,
        max_d in 0usize..2,
        max_q in 0usize..3,
        period in 0usize..13,
    ) {
        let ranges = OrderRanges::up_to(max_p, max_d, max_q);
        let first = CandidateSpace::enumerate(&ranges, period, SeasonalSearch::CrossProduct);
        let second = CandidateSpace::enumerate(&ranges, period, SeasonalSearch::CrossProduct);
        prop_assert_eq!(first, second);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn selected_model_minimizes_aic(values in trending_values_strategy(40, 80)) {
        let series = Series::ordinal(values).unwrap();
        let selected = GridSearch::new(GridSearchConfig::default())
            .fit(&series)
            .unwrap();

        prop_assert!(selected.aic().is_finite());
        for score in selected.scores() {
            prop_assert!(selected.aic() <= score.aic);
        }
    }

    #[test]
    fn forecast_bands_bracket_the_point_estimates(
        values in seasonal_values_strategy(50, 90, 7),
        horizon in 1usize..20,
    ) {
        let series = Series::ordinal(values).unwrap();
        let selected = GridSearch::seasonal(7).fit(&series).unwrap();
        let forecast = Forecaster::new(&selected).forecast(&series, horizon).unwrap();

        prop_assert_eq!(forecast.len(), horizon);
        for step in forecast.iter() {
            prop_assert!(step.lower <= step.point);
            prop_assert!(step.point <= step.upper);
        }
    }

    #[test]
    fn future_band_width_never_shrinks(values in seasonal_values_strategy(50, 90, 7)) {
        let series = Series::ordinal(values).unwrap();
        let selected = GridSearch::seasonal(7).fit(&series).unwrap();
        let forecast = Forecaster::new(&selected).forecast(&series, 12).unwrap();

        let widths: Vec<f64> = forecast
            .upper()
            .iter()
            .zip(forecast.lower().iter())
            .map(|(u, l)| u - l)
            .collect();
        for pair in widths.windows(2) {
            prop_assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn dynamic_and_one_step_agree_on_the_first_prediction(
        values in seasonal_values_strategy(50, 90, 7),
        origin_fraction in 0.5f64..0.8,
    ) {
        use gridcast::core::IndexValue;
        use gridcast::models::sarima::PredictOptions;

        let series = Series::ordinal(values).unwrap();
        let selected = GridSearch::seasonal(7).fit(&series).unwrap();
        let forecaster = Forecaster::new(&selected);

        let origin = IndexValue::Ordinal((series.len() as f64 * origin_fraction) as i64);
        let window = IndexValue::Ordinal(0);

        let one_step = forecaster
            .predict(&series, &PredictOptions::new(window, origin, false))
            .unwrap();
        let dynamic = forecaster
            .predict(&series, &PredictOptions::new(window, origin, true))
            .unwrap();

        prop_assert_eq!(
            one_step.forecast().point()[0],
            dynamic.forecast().point()[0]
        );
    }
}
