/// A real-valued function of one real variable, evaluated pointwise during
/// quadrature.
///
/// An integrand is expected to be pure and defined at every point a rule
/// requests within the integration interval. Where it is not, [`eval()`]
/// returns the integrand's own error, which the framework propagates to the
/// caller unmodified — a fault in the integrand is never masked as a numeric
/// result.
///
/// ## Implementing `Integrand`
///
/// Any `Fn(f64) -> f64` is already an integrand with `Error = Infallible`,
/// so plain closures and functions like [`f64::sin`] work directly. Implement
/// the trait by hand when evaluation can fail:
///
/// ```
/// use cotes_core::Integrand;
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("log of non-positive value {0}")]
/// struct NonPositive(f64);
///
/// struct NaturalLog;
///
/// impl Integrand for NaturalLog {
///     type Error = NonPositive;
///
///     fn eval(&self, x: f64) -> Result<f64, Self::Error> {
///         if x > 0.0 { Ok(x.ln()) } else { Err(NonPositive(x)) }
///     }
/// }
///
/// assert!(NaturalLog.eval(1.0).is_ok());
/// assert!(NaturalLog.eval(-1.0).is_err());
/// ```
///
/// [`eval()`]: Integrand::eval
pub trait Integrand {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the integrand at `x`.
    ///
    /// # Errors
    ///
    /// Each integrand defines its own `Error` type, allowing it to determine
    /// what constitutes a failure within its domain.
    fn eval(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F> Integrand for F
where
    F: Fn(f64) -> f64,
{
    type Error = std::convert::Infallible;

    fn eval(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn closures_are_integrands() {
        let square = |x: f64| x * x;
        assert_relative_eq!(square.eval(3.0).unwrap(), 9.0);
    }

    #[test]
    fn function_items_are_integrands() {
        assert_relative_eq!(f64::sin.eval(std::f64::consts::FRAC_PI_2).unwrap(), 1.0);
    }
}
