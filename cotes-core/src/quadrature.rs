use crate::{EvaluateError, Integrand};

/// A fixed quadrature rule: an estimate of `∫ f(x) dx` over one interval,
/// formed from finitely many evaluations of `f`.
///
/// Implementors are immutable values. Evaluation is a pure function of
/// `(f, a, b)`: no per-call state, no side effects, and identical inputs
/// produce identical results, so a rule may be shared freely across threads.
///
/// The interval is directed. `a > b` is permitted and flips the sign of the
/// estimate, consistent with `∫_a^b f = -∫_b^a f`, because every rule scales
/// by the signed width `b - a`. When `a == b` the width is zero and the
/// estimate is exactly `0.0` for any rule with a finite weight sum.
pub trait Quadrature {
    /// Estimates the integral of `f` over `[a, b]`.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is non-finite or if the integrand
    /// fails at an evaluation point. Integrand failures carry the original
    /// error as their source.
    fn evaluate<F: Integrand>(&self, f: &F, a: f64, b: f64) -> Result<f64, EvaluateError>;
}

/// Validates that both interval bounds are finite.
///
/// # Errors
///
/// Returns [`EvaluateError::NonFiniteBound`] for the first bound that is
/// NaN or infinite.
pub fn validate_interval(a: f64, b: f64) -> Result<(), EvaluateError> {
    if !a.is_finite() {
        return Err(EvaluateError::NonFiniteBound { value: a });
    }

    if !b.is_finite() {
        return Err(EvaluateError::NonFiniteBound { value: b });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_bounds_are_accepted() {
        assert!(validate_interval(0.0, 1.0).is_ok());
        assert!(validate_interval(1.0, -1.0).is_ok(), "Reversed bounds are ok");
        assert!(validate_interval(2.0, 2.0).is_ok(), "Empty interval is ok");
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        for (a, b) in [
            (f64::NAN, 1.0),
            (0.0, f64::NAN),
            (f64::INFINITY, 1.0),
            (0.0, f64::NEG_INFINITY),
        ] {
            assert!(matches!(
                validate_interval(a, b),
                Err(EvaluateError::NonFiniteBound { .. })
            ));
        }
    }
}
