use std::collections::HashMap;

use thiserror::Error;

use crate::{Midpoint, NewtonCotes, Rule};

/// Errors that can occur when resolving a rule by name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no quadrature rule named {0:?}")]
    UnknownRule(String),
}

/// An explicit, owned mapping from rule names to built rules.
///
/// There is no ambient registry: a catalog is constructed once, optionally
/// extended by its owner, and then handed (by reference) to whatever needs
/// name resolution. Lookup never mutates, so a built catalog is safe to
/// share across threads.
///
/// # Examples
///
/// ```
/// use cotes_rules::Catalog;
///
/// let catalog = Catalog::standard();
/// assert!(catalog.get("simpson").is_ok());
/// assert!(catalog.get("gauss").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    rules: HashMap<String, Rule>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding the five standard rules: `"midpoint"`,
    /// `"trapezoid"`, `"simpson"`, `"boole"`, and `"milne"`.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();

        catalog.insert("midpoint", Midpoint);
        catalog.insert("trapezoid", NewtonCotes::trapezoid());
        catalog.insert("simpson", NewtonCotes::simpson());
        catalog.insert("boole", NewtonCotes::boole());
        catalog.insert("milne", NewtonCotes::milne());

        catalog
    }

    /// Registers a rule under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, rule: impl Into<Rule>) {
        self.rules.insert(name.into(), rule.into());
    }

    /// Looks up a rule by name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownRule`] if no rule is registered under
    /// `name`.
    pub fn get(&self, name: &str) -> Result<&Rule, CatalogError> {
        self.rules
            .get(name)
            .ok_or_else(|| CatalogError::UnknownRule(name.to_owned()))
    }

    /// Iterates over the registered rule names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_holds_the_five_rules() {
        let catalog = Catalog::standard();

        for name in ["midpoint", "trapezoid", "simpson", "boole", "milne"] {
            assert!(catalog.get(name).is_ok(), "missing standard rule {name:?}");
        }

        assert_eq!(catalog.names().count(), 5);
    }

    #[test]
    fn standard_entries_match_their_constructors() {
        let catalog = Catalog::standard();

        assert_eq!(catalog.get("midpoint"), Ok(&Rule::from(Midpoint)));
        assert_eq!(
            catalog.get("boole"),
            Ok(&Rule::from(NewtonCotes::boole()))
        );
    }

    #[test]
    fn unknown_name_is_an_error() {
        let catalog = Catalog::standard();

        assert_eq!(
            catalog.get("gauss"),
            Err(CatalogError::UnknownRule("gauss".to_owned()))
        );
    }

    #[test]
    fn owners_can_register_their_own_rules() {
        let mut catalog = Catalog::new();
        catalog.insert("parabolic", NewtonCotes::simpson());

        assert!(catalog.get("parabolic").is_ok());
        assert!(catalog.get("simpson").is_err());
    }
}
