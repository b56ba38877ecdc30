//! Concrete quadrature rules for the cotes framework.
//!
//! - [`Midpoint`] — the one-point midpoint rule, a direct formula
//! - [`NewtonCotes`] — equally spaced rules generated from a coefficient
//!   table, open or closed
//! - [`Rule`] — a tagged union over both kinds, the value a catalog stores
//!   and a driver consumes
//! - [`Catalog`] — an explicit, owned mapping from rule names to built rules
//!
//! Rules are built once, validated at construction, and immutable
//! thereafter. With the `serde-derive` feature enabled, coefficient tables
//! can be deserialized from configuration as [`CoefficientTable`] and
//! converted into validated rules with `TryFrom`.

mod catalog;
mod midpoint;
mod newton_cotes;
mod rule;

pub use catalog::{Catalog, CatalogError};
pub use midpoint::Midpoint;
pub use newton_cotes::{CoefficientTable, NewtonCotes, NewtonCotesError};
pub use rule::Rule;
