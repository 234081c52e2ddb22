//! Newton-Raphson iteration.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Finds a root of `f` by Newton-Raphson iteration.
///
/// Iterates `x_{n+1} = x_n - f(x_n) / df(x_n)` from `initial_guess` until
/// either the objective or the step falls below the configured tolerance.
/// The iteration bound always applies, so the call terminates even when
/// the objective is hostile.
///
/// # Errors
///
/// - `MathError::NonFiniteValue` if the objective returns NaN or infinity
/// - `MathError::ZeroDerivative` if the derivative collapses at an iterate
/// - `MathError::ConvergenceFailed` if the iteration bound is exhausted
///
/// # Example
///
/// ```rust
/// use parspot_math::solvers::{newton_raphson, SolverConfig};
///
/// // Cube root of 8.
/// let f = |x: f64| x * x * x - 8.0;
/// let df = |x: f64| 3.0 * x * x;
///
/// let result = newton_raphson(f, df, 1.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - 2.0).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = f(x);
        if !fx.is_finite() {
            return Err(MathError::NonFiniteValue { at: x });
        }

        if fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let dfx = df(x);
        if dfx.abs() < 1e-15 {
            return Err(MathError::ZeroDerivative { value: dfx });
        }

        let step = fx / dfx;
        x -= step;

        if step.abs() < config.tolerance {
            let residual = f(x);
            return Ok(SolverResult {
                root: x,
                iterations: iteration + 1,
                residual,
            });
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f(x).abs(),
    ))
}

/// Newton-Raphson with a central-difference derivative estimate.
///
/// For callers without an analytic derivative. The step size trades
/// truncation against rounding error at double precision.
///
/// # Errors
///
/// Same failure modes as [`newton_raphson`].
pub fn newton_raphson_numerical<F>(
    f: F,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    const H: f64 = 1e-8;

    let df = |x: f64| (f(x + H) - f(x - H)) / (2.0 * H);

    newton_raphson(&f, df, initial_guess, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_two() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;

        let result = newton_raphson(f, df, 1.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
        assert!(result.iterations < 10);
    }

    #[test]
    fn test_par_yield_like_objective() {
        // Flat discounting of a two-period par bond; the root is the
        // coupon rate.
        let coupon = 0.04_f64;
        let f = move |y: f64| {
            coupon / 2.0 / (1.0 + y / 2.0)
                + (1.0 + coupon / 2.0) / (1.0 + y / 2.0).powi(2)
                - 1.0
        };

        let result = newton_raphson_numerical(f, 0.03, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, coupon, epsilon = 1e-9);
    }

    #[test]
    fn test_numerical_matches_analytic() {
        let f = |x: f64| x * x * x - 27.0;
        let df = |x: f64| 3.0 * x * x;
        let config = SolverConfig::default();

        let analytic = newton_raphson(f, df, 2.0, &config).unwrap();
        let numerical = newton_raphson_numerical(f, 2.0, &config).unwrap();

        assert_relative_eq!(analytic.root, numerical.root, epsilon = 1e-8);
    }

    #[test]
    fn test_zero_derivative() {
        let f = |x: f64| x * x * x - 1.0;
        let df = |x: f64| 3.0 * x * x;

        let result = newton_raphson(f, df, 0.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::ZeroDerivative { .. })));
    }

    #[test]
    fn test_iteration_bound_exhausted() {
        // x^2 + 1 has no real root; the bound must stop the iteration.
        let f = |x: f64| x * x + 1.0;
        let df = |x: f64| 2.0 * x;

        let config = SolverConfig::new(1e-12, 20);
        let result = newton_raphson(f, df, 0.5, &config);

        assert!(matches!(
            result,
            Err(MathError::ConvergenceFailed { .. }) | Err(MathError::ZeroDerivative { .. })
        ));
    }

    #[test]
    fn test_non_finite_objective() {
        let f = |x: f64| (x - 1.0).ln();
        let df = |x: f64| 1.0 / (x - 1.0);

        // ln of a negative number is NaN on the first evaluation.
        let result = newton_raphson(f, df, 0.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::NonFiniteValue { .. })));
    }
}
