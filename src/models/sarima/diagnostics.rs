//! Structured diagnostics for a selected model.
//!
//! The summary is reporting output for an external presenter: a parameter
//! table plus residual statistics. Producing it never influences selection
//! and cannot fail.

use crate::models::sarima::candidates::Candidate;
use crate::models::sarima::selector::SelectedModel;
use crate::utils::stats::{autocorrelation, mean, std_dev};
use crate::validation::residual_tests::{ljung_box, LjungBoxResult};

/// One named parameter estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterEstimate {
    /// Parameter name, e.g. `ar.L1`, `ma.S.L7`, `intercept`, `sigma2`.
    pub name: String,
    /// Estimated value.
    pub value: f64,
}

/// Residual statistics for the selected fit.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidualDiagnostics {
    /// Mean of the residuals past the recursion warmup.
    pub mean: f64,
    /// Standard deviation of those residuals.
    pub std_dev: f64,
    /// Autocorrelation at lags 1..=10 (fewer for short series).
    pub acf: Vec<f64>,
    /// Ljung-Box whiteness test.
    pub ljung_box: LjungBoxResult,
}

/// Diagnostics summary for a selected model.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticsSummary {
    /// The selected candidate orders.
    pub candidate: Candidate,
    /// AIC of the selected fit.
    pub aic: f64,
    /// Named parameter estimates.
    pub parameters: Vec<ParameterEstimate>,
    /// Residual statistics.
    pub residual: ResidualDiagnostics,
}

impl SelectedModel {
    /// Build the diagnostics summary for this selection.
    pub fn diagnostics(&self) -> DiagnosticsSummary {
        let model = self.model();
        let spec = model.spec();
        let period = spec.seasonal.period;

        let mut parameters = Vec::with_capacity(spec.num_params() + 1);
        for (i, value) in model.ar_coefficients().iter().enumerate() {
            parameters.push(ParameterEstimate {
                name: format!("ar.L{}", i + 1),
                value: *value,
            });
        }
        for (i, value) in model.ma_coefficients().iter().enumerate() {
            parameters.push(ParameterEstimate {
                name: format!("ma.L{}", i + 1),
                value: *value,
            });
        }
        for (i, value) in model.seasonal_ar_coefficients().iter().enumerate() {
            parameters.push(ParameterEstimate {
                name: format!("ar.S.L{}", (i + 1) * period),
                value: *value,
            });
        }
        for (i, value) in model.seasonal_ma_coefficients().iter().enumerate() {
            parameters.push(ParameterEstimate {
                name: format!("ma.S.L{}", (i + 1) * period),
                value: *value,
            });
        }
        parameters.push(ParameterEstimate {
            name: "intercept".to_string(),
            value: model.intercept(),
        });
        parameters.push(ParameterEstimate {
            name: "sigma2".to_string(),
            value: model.sigma2().unwrap_or(f64::NAN),
        });

        let residuals = model.effective_residuals().unwrap_or(&[]);
        let max_lag = 10.min(residuals.len().saturating_sub(1));
        let acf = (1..=max_lag)
            .map(|lag| autocorrelation(residuals, lag))
            .collect();

        DiagnosticsSummary {
            candidate: self.candidate(),
            aic: self.aic(),
            parameters,
            residual: ResidualDiagnostics {
                mean: mean(residuals),
                std_dev: std_dev(residuals),
                acf,
                ljung_box: ljung_box(residuals, None, spec.num_params() - 1),
            },
        }
    }
}
