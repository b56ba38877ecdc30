use cotes_core::{EvaluateError, Integrand, Quadrature, validate_interval};
use thiserror::Error;

/// Errors that can occur while building a Newton–Cotes rule.
#[derive(Debug, Error, PartialEq)]
pub enum NewtonCotesError {
    #[error("coefficient table is empty")]
    EmptyWeights,

    #[error("a closed rule needs at least two coefficients")]
    SinglePointClosed,

    #[error("coefficient {value} at index {index} is not finite")]
    NonFiniteWeight { index: usize, value: f64 },

    #[error("coefficient table sums to zero")]
    ZeroWeightSum,
}

/// An equally spaced quadrature rule generated from a coefficient table.
///
/// A table of `k` weights and an open/closed flag determine the rule's
/// degree, `k - 1 + 2 * open`: the number of equal segments the interval is
/// divided into to place the `k` evaluation points. A closed rule evaluates
/// the endpoints; an open rule skips one segment at each end and evaluates
/// interior points only, which suits integrands that are undefined at the
/// boundary.
///
/// The estimate over `[a, b]` is
///
/// ```text
///   (b - a) * Σ cⱼ f(xⱼ) / Σ cⱼ
/// ```
///
/// with the points `xⱼ` visited left to right. Higher-degree tables buy
/// exactness for higher-degree polynomials at the cost of more integrand
/// evaluations per interval; see [`Catalog`](crate::Catalog) for the
/// standard members of the family.
///
/// A rule is validated once at construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonCotes {
    weights: Vec<f64>,
    open: bool,
    degree: usize,
    weight_sum: f64,
}

impl NewtonCotes {
    /// Builds a rule from a coefficient table.
    ///
    /// Building is pure: identical tables always yield behaviorally
    /// identical rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is empty, describes a closed rule with
    /// a single point, contains a non-finite weight, or sums to zero.
    pub fn new(weights: Vec<f64>, open: bool) -> Result<Self, NewtonCotesError> {
        if weights.is_empty() {
            return Err(NewtonCotesError::EmptyWeights);
        }

        // A closed table with one weight has zero segments, so the equally
        // spaced position formula is undefined. The open variant of the
        // same table is well defined: it is the midpoint rule.
        if weights.len() == 1 && !open {
            return Err(NewtonCotesError::SinglePointClosed);
        }

        if let Some((index, &value)) = weights.iter().enumerate().find(|(_, w)| !w.is_finite()) {
            return Err(NewtonCotesError::NonFiniteWeight { index, value });
        }

        let weight_sum: f64 = weights.iter().sum();
        if weight_sum == 0.0 {
            return Err(NewtonCotesError::ZeroWeightSum);
        }

        let degree = weights.len() - 1 + 2 * usize::from(open);

        Ok(Self {
            weights,
            open,
            degree,
            weight_sum,
        })
    }

    /// The closed two-point trapezoid rule, `[1, 1]`.
    ///
    /// Exact for polynomials of degree at most 1.
    #[must_use]
    pub fn trapezoid() -> Self {
        Self::standard(vec![1.0, 1.0], false)
    }

    /// The closed three-point Simpson rule, `[1, 4, 1]`.
    ///
    /// Exact for polynomials of degree at most 3.
    #[must_use]
    pub fn simpson() -> Self {
        Self::standard(vec![1.0, 4.0, 1.0], false)
    }

    /// The closed five-point Boole rule, `[7, 32, 12, 32, 7]`.
    ///
    /// Exact for polynomials of degree at most 5.
    #[must_use]
    pub fn boole() -> Self {
        Self::standard(vec![7.0, 32.0, 12.0, 32.0, 7.0], false)
    }

    /// The open three-point Milne rule, `[2, -1, 2]`.
    ///
    /// Evaluates interior points only, so it tolerates integrands that are
    /// undefined at the interval endpoints. Exact for polynomials of degree
    /// at most 3.
    #[must_use]
    pub fn milne() -> Self {
        Self::standard(vec![2.0, -1.0, 2.0], true)
    }

    /// The coefficient table the rule was built from.
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Whether the rule excludes the interval endpoints.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The number of equal segments used to place the evaluation points.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Builds one of the named standard rules, whose tables are known to be
    /// valid.
    fn standard(weights: Vec<f64>, open: bool) -> Self {
        Self::new(weights, open).expect("Standard rule tables must be valid")
    }
}

impl Quadrature for NewtonCotes {
    fn evaluate<F: Integrand>(&self, f: &F, a: f64, b: f64) -> Result<f64, EvaluateError> {
        validate_interval(a, b)?;

        let width = b - a;
        let degree = self.degree as f64;
        let offset = usize::from(self.open);

        let mut acc = 0.0;
        for (j, weight) in self.weights.iter().enumerate() {
            let index = j + offset;

            // Pin the last closed point to b itself so the endpoint is
            // evaluated exactly rather than at a rounded neighbor.
            let x = if index == self.degree {
                b
            } else {
                a + index as f64 * width / degree
            };

            let y = f.eval(x).map_err(|source| EvaluateError::integrand(x, source))?;
            acc += weight * y;
        }

        Ok(width * acc / self.weight_sum)
    }
}

/// A plain-data description of a Newton–Cotes rule.
///
/// This is the serialization-facing shape: with the `serde-derive` feature
/// enabled it derives `Serialize` and `Deserialize`, so rule tables can live
/// in configuration. Conversion into a usable rule goes through `TryFrom`,
/// which applies the full construction-time validation — a deserialized
/// table cannot bypass the invariants.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct CoefficientTable {
    pub weights: Vec<f64>,
    #[cfg_attr(feature = "serde-derive", serde(default))]
    pub open: bool,
}

impl TryFrom<CoefficientTable> for NewtonCotes {
    type Error = NewtonCotesError;

    fn try_from(table: CoefficientTable) -> Result<Self, Self::Error> {
        Self::new(table.weights, table.open)
    }
}

impl From<NewtonCotes> for CoefficientTable {
    fn from(rule: NewtonCotes) -> Self {
        Self {
            weights: rule.weights,
            open: rule.open,
        }
    }
}
