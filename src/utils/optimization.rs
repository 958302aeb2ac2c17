//! Derivative-free minimization used for coefficient estimation.

/// Configuration for the Nelder-Mead simplex search.
#[derive(Debug, Clone)]
pub struct NelderMeadConfig {
    /// Maximum number of iterations.
    pub max_iter: usize,
    /// Convergence tolerance on the objective spread across the simplex.
    pub tolerance: f64,
    /// Relative step used to seed the initial simplex.
    pub initial_step: f64,
}

impl Default for NelderMeadConfig {
    fn default() -> Self {
        Self {
            max_iter: 1000,
            tolerance: 1e-8,
            initial_step: 0.05,
        }
    }
}

/// Result of a Nelder-Mead run.
#[derive(Debug, Clone)]
pub struct NelderMeadResult {
    /// Best point found.
    pub optimal_point: Vec<f64>,
    /// Objective value at the best point.
    pub optimal_value: f64,
    /// Iterations performed.
    pub iterations: usize,
    /// Whether the simplex converged within tolerance.
    pub converged: bool,
}

// Standard Nelder-Mead coefficients.
const REFLECTION: f64 = 1.0;
const EXPANSION: f64 = 2.0;
const CONTRACTION: f64 = 0.5;
const SHRINK: f64 = 0.5;

/// Minimize `objective` with the Nelder-Mead simplex method.
///
/// `bounds`, when given, clamps every evaluated point component-wise. The
/// search is deterministic for a fixed starting point.
///
/// # Example
/// ```
/// use gridcast::utils::optimization::{nelder_mead, NelderMeadConfig};
///
/// let result = nelder_mead(
///     |x| (x[0] - 2.0).powi(2) + (x[1] + 1.0).powi(2),
///     &[0.0, 0.0],
///     None,
///     NelderMeadConfig::default(),
/// );
/// assert!(result.converged);
/// assert!((result.optimal_point[0] - 2.0).abs() < 1e-3);
/// assert!((result.optimal_point[1] + 1.0).abs() < 1e-3);
/// ```
pub fn nelder_mead<F>(
    objective: F,
    initial: &[f64],
    bounds: Option<&[(f64, f64)]>,
    config: NelderMeadConfig,
) -> NelderMeadResult
where
    F: Fn(&[f64]) -> f64,
{
    let n = initial.len();
    if n == 0 {
        return NelderMeadResult {
            optimal_point: vec![],
            optimal_value: f64::NAN,
            iterations: 0,
            converged: false,
        };
    }

    let clamp = |point: Vec<f64>| -> Vec<f64> {
        match bounds {
            None => point,
            Some(b) => point
                .into_iter()
                .zip(b.iter())
                .map(|(x, &(lo, hi))| x.clamp(lo, hi))
                .collect(),
        }
    };

    // Seed the simplex: the starting point plus one perturbed vertex per axis.
    let mut simplex: Vec<Vec<f64>> = Vec::with_capacity(n + 1);
    simplex.push(initial.to_vec());
    for i in 0..n {
        let mut vertex = initial.to_vec();
        let step = if initial[i].abs() > 1e-10 {
            config.initial_step * initial[i].abs()
        } else {
            config.initial_step
        };
        vertex[i] += step;
        simplex.push(clamp(vertex));
    }
    let mut values: Vec<f64> = simplex.iter().map(|v| objective(v)).collect();

    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iter {
        iterations += 1;

        let mut order: Vec<usize> = (0..=n).collect();
        order.sort_by(|&a, &b| {
            values[a]
                .partial_cmp(&values[b])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let (best, second_worst, worst) = (order[0], order[n - 1], order[n]);

        if values[worst] - values[best] < config.tolerance {
            converged = true;
            break;
        }

        // Centroid of all vertices except the worst.
        let mut centroid = vec![0.0; n];
        for (i, vertex) in simplex.iter().enumerate() {
            if i != worst {
                for (c, x) in centroid.iter_mut().zip(vertex.iter()) {
                    *c += x;
                }
            }
        }
        for c in &mut centroid {
            *c /= n as f64;
        }

        let toward = |from: &[f64], to: &[f64], coeff: f64| -> Vec<f64> {
            clamp(
                from.iter()
                    .zip(to.iter())
                    .map(|(f, t)| f + coeff * (t - f))
                    .collect(),
            )
        };

        let reflected = toward(&centroid, &simplex[worst], -REFLECTION);
        let reflected_value = objective(&reflected);

        if reflected_value < values[best] {
            // Reflection was downhill; try going further.
            let expanded = toward(&centroid, &reflected, EXPANSION);
            let expanded_value = objective(&expanded);
            if expanded_value < reflected_value {
                simplex[worst] = expanded;
                values[worst] = expanded_value;
            } else {
                simplex[worst] = reflected;
                values[worst] = reflected_value;
            }
            continue;
        }

        if reflected_value < values[second_worst] {
            simplex[worst] = reflected;
            values[worst] = reflected_value;
            continue;
        }

        // Contract toward the better of the worst vertex and its reflection.
        let anchor = if reflected_value < values[worst] {
            &reflected
        } else {
            &simplex[worst]
        };
        let contracted = toward(&centroid, anchor, CONTRACTION);
        let contracted_value = objective(&contracted);
        if contracted_value < values[worst].min(reflected_value) {
            simplex[worst] = contracted;
            values[worst] = contracted_value;
            continue;
        }

        // Shrink everything toward the best vertex.
        let anchor = simplex[best].clone();
        for i in 0..=n {
            if i != best {
                let shrunk = toward(&anchor, &simplex[i], SHRINK);
                values[i] = objective(&shrunk);
                simplex[i] = shrunk;
            }
        }
    }

    let best = values
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0);

    NelderMeadResult {
        optimal_point: simplex[best].clone(),
        optimal_value: values[best],
        iterations,
        converged,
    }
}
