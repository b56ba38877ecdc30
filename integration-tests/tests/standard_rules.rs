//! End-to-end scenarios for the standard rule catalog applied over a single
//! interval.

use std::f64::consts::{E, PI};

use approx::{assert_abs_diff_eq, assert_relative_eq};
use cotes_core::Quadrature;
use cotes_rules::Catalog;

#[test]
fn midpoint_of_sin_over_half_period_is_pi() {
    let catalog = Catalog::standard();
    let rule = catalog.get("midpoint").unwrap();

    let estimate = rule.evaluate(&f64::sin, 0.0, PI).unwrap();
    assert_relative_eq!(estimate, PI);
}

#[test]
fn trapezoid_of_sin_over_half_period_vanishes() {
    let catalog = Catalog::standard();
    let rule = catalog.get("trapezoid").unwrap();

    let estimate = rule.evaluate(&f64::sin, 0.0, PI).unwrap();
    assert_abs_diff_eq!(estimate, 0.0, epsilon = 1e-12);
}

#[test]
fn closed_rules_rank_by_degree_on_a_smooth_integrand() {
    // ∫ eˣ dx over [0, 1] = e - 1. A single application of each rule should
    // improve strictly with the rule's exactness degree.
    let exact = E - 1.0;
    let catalog = Catalog::standard();

    let error_of = |name: &str| {
        let rule = catalog.get(name).unwrap();
        (rule.evaluate(&f64::exp, 0.0, 1.0).unwrap() - exact).abs()
    };

    let boole = error_of("boole");
    let simpson = error_of("simpson");
    let midpoint = error_of("midpoint");
    let trapezoid = error_of("trapezoid");

    assert!(boole < simpson);
    assert!(simpson < midpoint);
    assert!(midpoint < trapezoid);
}

#[test]
fn milne_is_accurate_without_touching_the_endpoints() {
    let exact = E - 1.0;
    let catalog = Catalog::standard();
    let rule = catalog.get("milne").unwrap();

    let estimate = rule.evaluate(&f64::exp, 0.0, 1.0).unwrap();
    assert_abs_diff_eq!(estimate, exact, epsilon = 1e-3);
}

#[test]
fn every_standard_rule_is_exact_for_constants() {
    let catalog = Catalog::standard();

    for name in ["midpoint", "trapezoid", "simpson", "boole", "milne"] {
        let rule = catalog.get(name).unwrap();
        let estimate = rule.evaluate(&|_: f64| 3.0, -2.0, 5.0).unwrap();
        assert_relative_eq!(estimate, 21.0, max_relative = 1e-14);
    }
}
