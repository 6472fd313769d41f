use crate::genetics::CommonAncestor;
use crate::scoring::{Advisory, RatingTier, Valuation};

/// Outcome of one simulated cross. Built once per call and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Inbreeding coefficient as a percentage, two decimals.
    pub inbreeding_coefficient_pct: f64,
    /// Aptitude score in `50..=100`.
    pub aptitude_score: u8,
    pub valuation: Valuation,
    pub rating: RatingTier,
    pub advisory: Advisory,
    /// Shared ancestors behind the coefficient, ordered by id.
    pub common_ancestors: Vec<CommonAncestor>,
}

impl SimulationResult {
    pub fn valuation_label(&self) -> &'static str {
        self.valuation.label()
    }

    pub fn rating_tier(&self) -> &'static str {
        self.rating.as_str()
    }

    pub fn advisory_message(&self) -> &'static str {
        self.advisory.message()
    }
}
