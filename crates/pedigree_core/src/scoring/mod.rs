//! Aptitude, rating and advisory for a proposed cross.

pub mod advisory;
pub mod aptitude;
pub mod rating;

pub use advisory::{Advisory, MODERATE_RISK_INBREEDING_PCT, select_advisory};
pub use aptitude::{
    APTITUDE_MAX, APTITUDE_MIN, AptitudeBreakdown, BASE_APTITUDE, compute_aptitude,
    genetic_variation,
};
pub use rating::{CrossRating, HIGH_RISK_INBREEDING_PCT, RatingTier, Valuation, rate_cross};

use crate::ancestry::IndividualId;

/// Scoring outcome for one cross.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossScore {
    pub aptitude: AptitudeBreakdown,
    pub rating: CrossRating,
    pub advisory: Advisory,
}

/// Score a cross from the two numeric ids and its inbreeding percentage.
pub fn score_cross(sire: IndividualId, dam: IndividualId, inbreeding_pct: f64) -> CrossScore {
    let aptitude = compute_aptitude(sire, dam, inbreeding_pct);
    CrossScore {
        aptitude,
        rating: rate_cross(aptitude.score, inbreeding_pct),
        advisory: select_advisory(aptitude.score, inbreeding_pct),
    }
}
