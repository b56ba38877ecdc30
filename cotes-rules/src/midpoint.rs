use cotes_core::{EvaluateError, Integrand, Quadrature, validate_interval};

/// The one-point midpoint rule: `(b - a) * f((a + b) / 2)`.
///
/// Midpoint is the degenerate member of the family, kept as a direct formula
/// rather than a [`NewtonCotes`](crate::NewtonCotes) table: its single
/// evaluation point sits at the interval's center, a placement the general
/// equally-spaced indexing cannot produce. Exact for polynomials of degree
/// at most 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Midpoint;

impl Quadrature for Midpoint {
    fn evaluate<F: Integrand>(&self, f: &F, a: f64, b: f64) -> Result<f64, EvaluateError> {
        validate_interval(a, b)?;

        let x = 0.5 * (a + b);
        let y = f.eval(x).map_err(|source| EvaluateError::integrand(x, source))?;

        Ok((b - a) * y)
    }
}
