//! Grid search over candidate orders with AIC selection.

use crate::core::Series;
use crate::error::{ForecastError, Result};
use crate::models::sarima::candidates::{
    Candidate, CandidateSpace, OrderRanges, SeasonalSearch,
};
use crate::models::sarima::model::{Sarima, SarimaSpec};
use tracing::{debug, info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Configuration for the grid search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSearchConfig {
    /// Value ranges for the non-seasonal (p, d, q) orders.
    pub ranges: OrderRanges,
    /// Seasonal period; 0 or 1 disables seasonality.
    pub seasonal_period: usize,
    /// How seasonal orders are paired with non-seasonal orders.
    pub seasonal_search: SeasonalSearch,
}

impl Default for GridSearchConfig {
    fn default() -> Self {
        Self {
            ranges: OrderRanges::default(),
            seasonal_period: 0,
            seasonal_search: SeasonalSearch::default(),
        }
    }
}

impl GridSearchConfig {
    /// Set the order ranges.
    pub fn with_ranges(mut self, ranges: OrderRanges) -> Self {
        self.ranges = ranges;
        self
    }

    /// Set the seasonal period.
    pub fn with_seasonal_period(mut self, period: usize) -> Self {
        self.seasonal_period = period;
        self
    }

    /// Search seasonal and non-seasonal orders independently.
    pub fn cross_product(mut self) -> Self {
        self.seasonal_search = SeasonalSearch::CrossProduct;
        self
    }
}

/// A successfully scored candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateScore {
    pub candidate: Candidate,
    pub aic: f64,
}

/// A candidate whose fit failed; recovered by skipping, never fatal.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateFailure {
    pub candidate: Candidate,
    pub reason: String,
}

/// The winning candidate with its fitted model and the search record.
///
/// This value is the sole input to all downstream forecasting: selection
/// state lives here, never in the selector itself, so independent sessions
/// can hold independent selections.
#[derive(Debug, Clone)]
pub struct SelectedModel {
    candidate: Candidate,
    aic: f64,
    model: Sarima,
    scores: Vec<CandidateScore>,
    failures: Vec<CandidateFailure>,
}

impl SelectedModel {
    /// The selected candidate orders.
    pub fn candidate(&self) -> Candidate {
        self.candidate
    }

    /// AIC of the selected fit.
    pub fn aic(&self) -> f64 {
        self.aic
    }

    /// The fitted model.
    pub fn model(&self) -> &Sarima {
        &self.model
    }

    /// All successful candidate scores, ascending by AIC.
    pub fn scores(&self) -> &[CandidateScore] {
        &self.scores
    }

    /// Candidates whose fits failed during the search.
    pub fn failures(&self) -> &[CandidateFailure] {
        &self.failures
    }
}

/// Exhaustive grid search over a SARIMA candidate space, scored by AIC.
///
/// Each candidate is fitted independently; failures are logged and skipped so
/// a single bad parameterization never aborts the search. The candidate with
/// the lowest AIC wins, with ties resolved to the earliest-enumerated
/// candidate.
#[derive(Debug, Clone, Default)]
pub struct GridSearch {
    config: GridSearchConfig,
}

impl GridSearch {
    /// Create a grid search with the given configuration.
    pub fn new(config: GridSearchConfig) -> Self {
        Self { config }
    }

    /// Create a grid search over the default ranges with a seasonal period.
    pub fn seasonal(period: usize) -> Self {
        Self::new(GridSearchConfig::default().with_seasonal_period(period))
    }

    /// The search configuration.
    pub fn config(&self) -> &GridSearchConfig {
        &self.config
    }

    /// The candidate space this configuration enumerates.
    pub fn candidate_space(&self) -> CandidateSpace {
        CandidateSpace::enumerate(
            &self.config.ranges,
            self.config.seasonal_period,
            self.config.seasonal_search,
        )
    }

    /// Fit every candidate and select the one with the lowest AIC.
    ///
    /// Fails with [`ForecastError::NoViableModel`] when no candidate produces
    /// a finite-AIC fit.
    pub fn fit(&self, series: &Series) -> Result<SelectedModel> {
        let space = self.candidate_space();
        let attempted = space.len();
        let outcomes = Self::evaluate_all(series, &space);

        let mut scores = Vec::new();
        let mut failures = Vec::new();
        let mut best: Option<(f64, Candidate, Sarima)> = None;

        for (candidate, outcome) in outcomes {
            match outcome {
                Ok((model, aic)) => {
                    debug!(candidate = %candidate, aic, "candidate scored");
                    scores.push(CandidateScore { candidate, aic });
                    // Strict comparison keeps the earliest candidate on ties.
                    if best.as_ref().map_or(true, |(b, _, _)| aic < *b) {
                        best = Some((aic, candidate, model));
                    }
                }
                Err(err) => {
                    warn!(candidate = %candidate, error = %err, "candidate fit failed, skipping");
                    failures.push(CandidateFailure {
                        candidate,
                        reason: err.to_string(),
                    });
                }
            }
        }

        let (aic, candidate, model) = best.ok_or(ForecastError::NoViableModel {
            attempted,
            failed: failures.len(),
        })?;

        scores.sort_by(|a, b| {
            a.aic
                .partial_cmp(&b.aic)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        info!(selected = %candidate, aic, "grid search selected model");

        Ok(SelectedModel {
            candidate,
            aic,
            model,
            scores,
            failures,
        })
    }

    fn evaluate(series: &Series, candidate: Candidate) -> Result<(Sarima, f64)> {
        let mut model = Sarima::new(SarimaSpec::from(candidate));
        model.fit(series)?;
        let aic = model
            .aic()
            .filter(|a| a.is_finite())
            .ok_or_else(|| {
                ForecastError::ForecastComputation("fit produced a non-finite AIC".to_string())
            })?;
        Ok((model, aic))
    }

    /// Evaluate every candidate, preserving enumeration order in the result.
    #[cfg(not(feature = "parallel"))]
    fn evaluate_all(
        series: &Series,
        space: &CandidateSpace,
    ) -> Vec<(Candidate, Result<(Sarima, f64)>)> {
        space
            .iter()
            .map(|&candidate| (candidate, Self::evaluate(series, candidate)))
            .collect()
    }

    /// Evaluate every candidate, preserving enumeration order in the result.
    ///
    /// Candidate fits share no mutable state, so they map cleanly onto a
    /// worker pool; selection still runs over the ordered results, keeping
    /// tie-breaking identical to the sequential path.
    #[cfg(feature = "parallel")]
    fn evaluate_all(
        series: &Series,
        space: &CandidateSpace,
    ) -> Vec<(Candidate, Result<(Sarima, f64)>)> {
        space
            .as_slice()
            .par_iter()
            .map(|&candidate| (candidate, Self::evaluate(series, candidate)))
            .collect()
    }
}
