//! End-to-end cross simulation tests.
//!
//! Targets:
//! - founders on both sides: 0.0% and aptitude from the variation term only.
//! - shared parent: 12.5% -> C / Baixa / high risk regardless of aptitude.
//! - missing sire or dam: NotFound(side) before any traversal.
//! - repeated calls give identical results.

mod common;

use common::{MapLookup, public_id};
use pedigree_core::ancestry::IndividualId;
use pedigree_core::scoring::{Advisory, RatingTier, Valuation};
use pedigree_core::simulation::{
    CrossSimulator, Side, SimulationError, SimulationMetrics, SimulatorConfig,
};

#[test]
fn test_founders_score_from_variation_only() {
    let lookup = MapLookup::new().horse(1, None, None).horse(2, None, None);
    let simulator = CrossSimulator::new(&lookup);
    let mut metrics = SimulationMetrics::new();

    let result = simulator
        .simulate_cross(&public_id(1), &public_id(2), &mut metrics)
        .expect("founders resolve");

    // 75 + (sin(0.1) + cos(0.2)) * 10 = 85.799 -> 86
    assert_eq!(result.inbreeding_coefficient_pct, 0.0);
    assert_eq!(result.aptitude_score, 86);
    assert_eq!(result.rating, RatingTier::AaPlus);
    assert_eq!(result.valuation, Valuation::Alta);
    assert_eq!(result.advisory, Advisory::VeryGood);
    assert!(result.common_ancestors.is_empty());
    assert_eq!(metrics.simulations_total(), 1);
}

#[test]
fn test_shared_parent_forces_lowest_rating() {
    // 10 and 11 are half siblings through sire 1.
    let lookup = MapLookup::new()
        .horse(10, Some(1), Some(2))
        .horse(11, Some(1), Some(3))
        .horse(1, None, None)
        .horse(2, None, None)
        .horse(3, None, None);
    let simulator = CrossSimulator::new(&lookup);
    let mut metrics = SimulationMetrics::new();

    let result = simulator
        .simulate_cross(&public_id(10), &public_id(11), &mut metrics)
        .expect("both resolve");

    assert_eq!(result.inbreeding_coefficient_pct, 12.5);
    assert_eq!(result.rating, RatingTier::C);
    assert_eq!(result.valuation, Valuation::Baixa);
    assert_eq!(result.advisory, Advisory::HighInbreedingRisk);
    assert_eq!(result.aptitude_score, 63);
    assert_eq!(result.common_ancestors.len(), 1);
    assert_eq!(result.common_ancestors[0].ancestor, IndividualId(1));
    assert_eq!(metrics.high_risk_total(), 1);
}

#[test]
fn test_distant_shared_ancestor_moderate_or_lower() {
    // Common great-great-grandparent 1 on both sides: 0.5^(4+4+1) = 0.195%
    let lookup = MapLookup::new()
        .horse(50, Some(40), None)
        .horse(40, Some(30), None)
        .horse(30, Some(20), None)
        .horse(20, Some(1), None)
        .horse(51, Some(41), None)
        .horse(41, Some(31), None)
        .horse(31, Some(21), None)
        .horse(21, Some(1), None)
        .horse(1, None, None);
    let simulator = CrossSimulator::new(&lookup);
    let mut metrics = SimulationMetrics::new();

    let result = simulator
        .simulate_cross(&public_id(50), &public_id(51), &mut metrics)
        .expect("both resolve");

    assert_eq!(result.inbreeding_coefficient_pct, 0.2);
    assert!(!result.advisory.is_risk_warning());
}

#[test]
fn test_missing_sire_fails_before_traversal() {
    let lookup = MapLookup::new().horse(2, None, None);
    let simulator = CrossSimulator::new(&lookup);
    let mut metrics = SimulationMetrics::new();

    let err = simulator
        .simulate_cross("H-unknown", &public_id(2), &mut metrics)
        .unwrap_err();

    assert_eq!(err, SimulationError::NotFound(Side::Sire));
    assert_eq!(err.to_string(), "sire not found");
    assert_eq!(lookup.parent_lookups(), 0);
    assert_eq!(lookup.resolve_calls(), 1, "dam is not resolved after a missing sire");
    assert_eq!(metrics.not_found_total(), 1);
    assert_eq!(metrics.simulations_total(), 0);
    assert_eq!(metrics.walk().lookups_total(), 0);
}

#[test]
fn test_missing_dam_fails_before_traversal() {
    let lookup = MapLookup::new().horse(1, None, None);
    let simulator = CrossSimulator::new(&lookup);
    let mut metrics = SimulationMetrics::new();

    let err = simulator
        .simulate_cross(&public_id(1), "H-unknown", &mut metrics)
        .unwrap_err();

    assert_eq!(err, SimulationError::NotFound(Side::Dam));
    assert_eq!(err.side(), Side::Dam);
    assert_eq!(lookup.parent_lookups(), 0);
}

#[test]
fn test_resolve_failure_is_not_reported_as_not_found() {
    let lookup = MapLookup::new()
        .horse(1, None, None)
        .horse(2, None, None)
        .resolve_unavailable();
    let simulator = CrossSimulator::new(&lookup);
    let mut metrics = SimulationMetrics::new();

    let err = simulator
        .simulate_cross(&public_id(1), &public_id(2), &mut metrics)
        .unwrap_err();

    match err {
        SimulationError::LookupUnavailable { side, reason } => {
            assert_eq!(side, Side::Sire);
            assert!(reason.contains("registry offline"));
        }
        other => panic!("expected LookupUnavailable, got {other:?}"),
    }
    assert_eq!(metrics.lookup_unavailable_total(), 1);
    assert_eq!(metrics.not_found_total(), 0);
}

#[test]
fn test_traversal_failure_does_not_fail_simulation() {
    // The shared parent cannot be expanded; the cross still scores.
    let lookup = MapLookup::new()
        .horse(10, Some(1), None)
        .horse(11, Some(1), None)
        .failing(1);
    let simulator = CrossSimulator::new(&lookup);
    let mut metrics = SimulationMetrics::new();

    let result = simulator
        .simulate_cross(&public_id(10), &public_id(11), &mut metrics)
        .expect("traversal failures are recovered");

    assert_eq!(result.inbreeding_coefficient_pct, 12.5);
    assert_eq!(metrics.walk().truncated_branches_total(), 2);
}

#[test]
fn test_same_individual_twice_is_deterministic() {
    let lookup = MapLookup::new()
        .horse(10, Some(1), Some(2))
        .horse(1, None, None)
        .horse(2, None, None);
    let simulator = CrossSimulator::new(&lookup);
    let mut metrics = SimulationMetrics::new();

    let result = simulator
        .simulate_cross(&public_id(10), &public_id(10), &mut metrics)
        .expect("core does not reject self-crossing");

    assert_eq!(result.inbreeding_coefficient_pct, 25.0);
    assert_eq!(result.rating, RatingTier::C);
}

#[test]
fn test_repeated_calls_are_identical() {
    let lookup = MapLookup::new()
        .horse(20, Some(3), Some(4))
        .horse(21, Some(5), Some(4))
        .horse(3, Some(7), None)
        .horse(4, Some(7), None)
        .horse(5, None, None)
        .horse(7, None, None);
    let simulator = CrossSimulator::new(&lookup);
    let mut metrics = SimulationMetrics::new();

    let first = simulator
        .simulate_cross(&public_id(20), &public_id(21), &mut metrics)
        .expect("first");
    let second = simulator
        .simulate_cross(&public_id(20), &public_id(21), &mut metrics)
        .expect("second");

    assert_eq!(first, second);
    assert_eq!(metrics.simulations_total(), 2);
}

#[test]
fn test_generation_cap_is_configurable() {
    // Shared grandparent 1: visible with cap 2, invisible with cap 1.
    let lookup = MapLookup::new()
        .horse(10, Some(5), None)
        .horse(11, Some(6), None)
        .horse(5, Some(1), None)
        .horse(6, Some(1), None)
        .horse(1, None, None);
    let mut metrics = SimulationMetrics::new();

    let shallow = CrossSimulator::with_config(&lookup, SimulatorConfig { max_generations: 1 });
    let result = shallow
        .simulate_cross(&public_id(10), &public_id(11), &mut metrics)
        .expect("resolve");
    assert_eq!(result.inbreeding_coefficient_pct, 0.0);

    let deep = CrossSimulator::new(&lookup);
    assert_eq!(deep.config().max_generations, 5);
    let result = deep
        .simulate_cross(&public_id(10), &public_id(11), &mut metrics)
        .expect("resolve");
    // 0.5^(2+2+1) = 3.125%
    assert_eq!(result.inbreeding_coefficient_pct, 3.13);
    assert_eq!(result.advisory, Advisory::ModerateInbreedingRisk);
}

#[test]
fn test_result_string_accessors() {
    let lookup = MapLookup::new().horse(1, None, None).horse(2, None, None);
    let simulator = CrossSimulator::new(&lookup);
    let mut metrics = SimulationMetrics::new();

    let result = simulator
        .simulate_cross(&public_id(1), &public_id(2), &mut metrics)
        .expect("resolve");

    assert_eq!(result.rating_tier(), "AA+");
    assert_eq!(result.valuation_label(), "Alta");
    assert_eq!(result.advisory_message(), Advisory::VeryGood.message());
}
