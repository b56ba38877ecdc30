//! Composite integration for the cotes quadrature framework.
//!
//! A single quadrature rule is exact only for low-degree polynomials.
//! Composite integration recovers accuracy for everything else by
//! partitioning the interval into equal-width pieces and applying the rule
//! to each piece, at the cost of proportionally more integrand evaluations.

mod composite;

pub use composite::{Error, integrate};
