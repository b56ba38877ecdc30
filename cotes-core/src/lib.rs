//! Core abstractions for the cotes quadrature framework.
//!
//! This crate defines the shared traits and error types that rules and
//! drivers build on:
//!
//! - [`Integrand`] — a caller-supplied function of one real variable
//! - [`Quadrature`] — a fixed rule estimating an integral over one interval
//! - [`EvaluateError`] — the failures an evaluation can report
//!
//! Everything here is pure: an implementor of either trait holds no mutable
//! state, and identical inputs always produce identical outputs.

mod error;
mod integrand;
mod quadrature;

pub use error::EvaluateError;
pub use integrand::Integrand;
pub use quadrature::{Quadrature, validate_interval};
