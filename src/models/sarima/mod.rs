//! Seasonal ARIMA models with grid-search order selection.
//!
//! This module provides:
//! - The [`Sarima`] model with CSS estimation and information criteria
//! - [`CandidateSpace`] enumeration over (p, d, q)(P, D, Q)\[s\] orders
//! - [`GridSearch`] AIC-based selection over a candidate space
//! - [`Forecaster`] for one-step, dynamic, and future forecasts with bands

mod candidates;
mod diagnostics;
mod diff;
mod forecaster;
mod model;
mod selector;

pub use candidates::{Candidate, CandidateSpace, Order, OrderRanges, SeasonalOrder, SeasonalSearch};
pub use diagnostics::{DiagnosticsSummary, ParameterEstimate, ResidualDiagnostics};
pub use diff::{difference, seasonal_difference};
pub use forecaster::{Forecaster, InSamplePrediction, ObservedWindow, PredictOptions};
pub use model::{ForecastPath, Sarima, SarimaSpec};
pub use selector::{
    CandidateFailure, CandidateScore, GridSearch, GridSearchConfig, SelectedModel,
};
