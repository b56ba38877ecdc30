use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur while evaluating a quadrature rule.
#[derive(Debug, Error)]
pub enum EvaluateError {
    /// An interval endpoint was NaN or infinite.
    #[error("interval bound is not finite: {value}")]
    NonFiniteBound { value: f64 },

    /// The rule's weights sum to zero, so the estimate is undefined.
    ///
    /// Rules shipped with this framework reject a zero weight sum at
    /// construction time; this variant is the evaluation-time fallback for
    /// external [`Quadrature`](crate::Quadrature) implementations whose
    /// weights are not known until they are applied.
    #[error("quadrature weights sum to zero")]
    ZeroWeightSum,

    /// The integrand failed at an evaluation point.
    ///
    /// The integrand's own error is preserved as the source; it is never
    /// retried or replaced with a numeric placeholder.
    #[error("integrand evaluation failed at x = {x}")]
    Integrand {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl EvaluateError {
    /// Wraps an integrand failure at `x`, boxing the integrand's error as
    /// the source.
    pub fn integrand<E>(x: f64, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Integrand {
            x,
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error, PartialEq)]
    #[error("bad input {0}")]
    struct BadInput(f64);

    #[test]
    fn integrand_error_preserves_source() {
        let err = EvaluateError::integrand(2.5, BadInput(2.5));

        assert_eq!(err.to_string(), "integrand evaluation failed at x = 2.5");

        let source = std::error::Error::source(&err)
            .and_then(|s| s.downcast_ref::<BadInput>())
            .expect("source should be the original integrand error");
        assert_eq!(source, &BadInput(2.5));
    }
}
