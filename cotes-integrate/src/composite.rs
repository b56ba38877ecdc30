use cotes_core::{EvaluateError, Integrand, Quadrature, validate_interval};
use thiserror::Error;

/// Errors that can occur during composite integration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("subdivision count must be at least 1")]
    ZeroSubdivisions,

    #[error(transparent)]
    Evaluate(#[from] EvaluateError),
}

/// Estimates the integral of `f` over `[a, b]` by applying `rule` to each of
/// `subdivisions` equal-width pieces and summing the results.
///
/// The pieces are visited strictly left to right and the partial sums are
/// accumulated in that order, so a given `(rule, f, a, b, subdivisions)`
/// always reproduces the same floating-point result. With one subdivision
/// the call reduces to exactly `rule.evaluate(f, a, b)`.
///
/// For smooth integrands, raising the subdivision count moves the estimate
/// toward the true integral: each piece is narrower, so the rule's
/// polynomial model fits the integrand better. This convergence is a
/// property of the rules, not a checked guarantee; no error bound is
/// estimated and the subdivision count is never adjusted internally.
///
/// # Errors
///
/// Returns an error if `subdivisions` is zero or either bound is
/// non-finite. A failure inside the rule or the integrand propagates
/// unmodified; there is no retry and no partial result.
///
/// # Examples
///
/// ```
/// use cotes_integrate::integrate;
/// use cotes_rules::NewtonCotes;
///
/// let estimate = integrate(
///     &NewtonCotes::trapezoid(),
///     &f64::sin,
///     0.0,
///     std::f64::consts::PI,
///     100,
/// )?;
///
/// // The true integral is exactly 2.
/// assert!((estimate - 2.0).abs() < 2e-4);
/// # Ok::<(), cotes_integrate::Error>(())
/// ```
pub fn integrate<Q, F>(
    rule: &Q,
    f: &F,
    a: f64,
    b: f64,
    subdivisions: usize,
) -> Result<f64, Error>
where
    Q: Quadrature,
    F: Integrand,
{
    if subdivisions == 0 {
        return Err(Error::ZeroSubdivisions);
    }

    validate_interval(a, b)?;

    let width = (b - a) / subdivisions as f64;

    let mut total = 0.0;
    let mut left = a;
    for i in 1..=subdivisions {
        // Pin the final break point to b itself so the partition ends at
        // the requested bound rather than a rounded neighbor.
        let right = if i == subdivisions {
            b
        } else {
            a + i as f64 * width
        };

        total += rule.evaluate(f, left, right)?;
        left = right;
    }

    Ok(total)
}
