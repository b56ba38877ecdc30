use cotes_core::{EvaluateError, Integrand, Quadrature};

use crate::{Midpoint, NewtonCotes};

/// A quadrature rule of either kind: the direct midpoint formula or a
/// coefficient-table rule.
///
/// The two kinds are kept as explicit variants rather than hidden behind
/// closures so the midpoint exception stays visible: its single center point
/// is not expressible through the equally spaced indexing that generates the
/// rest of the family. This is the value a [`Catalog`](crate::Catalog)
/// stores and a composite driver consumes.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Midpoint(Midpoint),
    NewtonCotes(NewtonCotes),
}

impl Quadrature for Rule {
    fn evaluate<F: Integrand>(&self, f: &F, a: f64, b: f64) -> Result<f64, EvaluateError> {
        match self {
            Self::Midpoint(rule) => rule.evaluate(f, a, b),
            Self::NewtonCotes(rule) => rule.evaluate(f, a, b),
        }
    }
}

impl From<Midpoint> for Rule {
    fn from(rule: Midpoint) -> Self {
        Self::Midpoint(rule)
    }
}

impl From<NewtonCotes> for Rule {
    fn from(rule: NewtonCotes) -> Self {
        Self::NewtonCotes(rule)
    }
}
