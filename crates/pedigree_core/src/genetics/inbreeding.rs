//! Inbreeding estimator (Wright's path counting).
//!
//! **Rule:**
//! - Common ancestors = ancestors present in both the sire map and the dam map.
//! - `contribution = 0.5 ^ (generations_via_sire + generations_via_dam + 1)`
//! - `coefficient_pct = round2(100 * sum(contribution))`
//! - No common ancestor -> exactly `0.0`.

use crate::ancestry::{AncestorMap, IndividualId};

/// An ancestor shared by both sides of a proposed cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonAncestor {
    pub ancestor: IndividualId,
    /// Closest generation reached from the sire.
    pub generations_via_sire: u32,
    /// Closest generation reached from the dam.
    pub generations_via_dam: u32,
}

impl CommonAncestor {
    /// Path contribution as a fraction (not a percentage).
    pub fn contribution(&self) -> f64 {
        let exponent = self.generations_via_sire + self.generations_via_dam + 1;
        0.5_f64.powi(exponent as i32)
    }
}

/// Estimator output.
#[derive(Debug, Clone, PartialEq)]
pub struct InbreedingEstimate {
    /// Percentage, rounded to two decimals.
    pub coefficient_pct: f64,
    /// Shared ancestors ordered by id.
    pub common_ancestors: Vec<CommonAncestor>,
}

/// Intersect the two ancestor maps on ancestor identity.
///
/// Output is sorted by ancestor id so results do not depend on hash order.
pub fn find_common_ancestors(
    sire_ancestors: &AncestorMap,
    dam_ancestors: &AncestorMap,
) -> Vec<CommonAncestor> {
    let mut common: Vec<CommonAncestor> = sire_ancestors
        .iter()
        .filter_map(|(&ancestor, &via_sire)| {
            dam_ancestors.get(&ancestor).map(|&via_dam| CommonAncestor {
                ancestor,
                generations_via_sire: via_sire,
                generations_via_dam: via_dam,
            })
        })
        .collect();
    common.sort_by_key(|c| c.ancestor);
    common
}

/// Estimate the inbreeding coefficient of the offspring of a cross.
pub fn estimate_inbreeding(
    sire_ancestors: &AncestorMap,
    dam_ancestors: &AncestorMap,
) -> InbreedingEstimate {
    let common_ancestors = find_common_ancestors(sire_ancestors, dam_ancestors);
    if common_ancestors.is_empty() {
        return InbreedingEstimate {
            coefficient_pct: 0.0,
            common_ancestors,
        };
    }

    let coefficient: f64 = common_ancestors.iter().map(CommonAncestor::contribution).sum();
    InbreedingEstimate {
        coefficient_pct: round_to_hundredths(coefficient * 100.0),
        common_ancestors,
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
