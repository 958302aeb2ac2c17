//! Statistical helpers shared across fitting and diagnostics.

use statrs::distribution::{ContinuousCDF, Normal};

/// Quantile of the standard normal distribution.
///
/// # Example
/// ```
/// use gridcast::utils::stats::normal_quantile;
///
/// // 95% confidence level -> z close to 1.96
/// let z = normal_quantile(0.975);
/// assert!((z - 1.96).abs() < 0.01);
/// ```
pub fn normal_quantile(p: f64) -> f64 {
    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }
    let standard = Normal::new(0.0, 1.0).expect("standard normal is well defined");
    standard.inverse_cdf(p)
}

/// Mean of a slice. NaN for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance (n-1 denominator). NaN for fewer than two values.
pub fn variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64
}

/// Sample standard deviation.
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Autocorrelation at a given lag.
pub fn autocorrelation(values: &[f64], lag: usize) -> f64 {
    if values.len() <= lag {
        return f64::NAN;
    }
    let m = mean(values);

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (i, v) in values.iter().enumerate() {
        denominator += (v - m).powi(2);
        if i >= lag {
            numerator += (v - m) * (values[i - lag] - m);
        }
    }

    if denominator == 0.0 {
        return 0.0;
    }
    numerator / denominator
}
