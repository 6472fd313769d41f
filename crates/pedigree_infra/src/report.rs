//! Serializable view of a simulation result, as handed to API callers.

use pedigree_core::genetics::CommonAncestor;
use pedigree_core::simulation::SimulationResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonAncestorReport {
    pub ancestor_id: u64,
    pub generations_via_sire: u32,
    pub generations_via_dam: u32,
}

impl From<&CommonAncestor> for CommonAncestorReport {
    fn from(ancestor: &CommonAncestor) -> Self {
        Self {
            ancestor_id: ancestor.ancestor.get(),
            generations_via_sire: ancestor.generations_via_sire,
            generations_via_dam: ancestor.generations_via_dam,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub sire_public_id: String,
    pub dam_public_id: String,
    /// Percentage, two decimals.
    pub inbreeding_coefficient: f64,
    pub aptitude_score: u8,
    pub valuation: String,
    pub rating: String,
    pub message: String,
    #[serde(default)]
    pub common_ancestors: Vec<CommonAncestorReport>,
}

impl SimulationReport {
    pub fn from_result(sire_public_id: &str, dam_public_id: &str, result: &SimulationResult) -> Self {
        Self {
            sire_public_id: sire_public_id.to_string(),
            dam_public_id: dam_public_id.to_string(),
            inbreeding_coefficient: result.inbreeding_coefficient_pct,
            aptitude_score: result.aptitude_score,
            valuation: result.valuation_label().to_string(),
            rating: result.rating_tier().to_string(),
            message: result.advisory_message().to_string(),
            common_ancestors: result
                .common_ancestors
                .iter()
                .map(CommonAncestorReport::from)
                .collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
