//! Sportive aptitude score.
//!
//! **Rule:**
//! - `variation = (sin(sire_id * 0.1) + cos(dam_id * 0.1)) * 10`
//! - `penalty = inbreeding_pct * 2`
//! - `score = round(clamp(75 + variation - penalty, 50, 100))`
//!
//! The variation term is a pure function of the two numeric ids, so a given
//! pair always scores the same.

use crate::ancestry::IndividualId;

pub const BASE_APTITUDE: f64 = 75.0;
pub const APTITUDE_MIN: u8 = 50;
pub const APTITUDE_MAX: u8 = 100;
pub const INBREEDING_PENALTY_PER_PCT: f64 = 2.0;

const VARIATION_FREQUENCY: f64 = 0.1;
const VARIATION_AMPLITUDE: f64 = 10.0;

/// Intermediate terms of an aptitude computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AptitudeBreakdown {
    pub base: f64,
    pub variation: f64,
    pub penalty: f64,
    /// Final clamped, rounded score in `APTITUDE_MIN..=APTITUDE_MAX`.
    pub score: u8,
}

/// Deterministic per-pair variation, bounded to about `[-20, 20]`.
pub fn genetic_variation(sire: IndividualId, dam: IndividualId) -> f64 {
    let sire_term = (sire.get() as f64 * VARIATION_FREQUENCY).sin();
    let dam_term = (dam.get() as f64 * VARIATION_FREQUENCY).cos();
    (sire_term + dam_term) * VARIATION_AMPLITUDE
}

pub fn compute_aptitude(
    sire: IndividualId,
    dam: IndividualId,
    inbreeding_pct: f64,
) -> AptitudeBreakdown {
    let variation = genetic_variation(sire, dam);
    let penalty = inbreeding_pct * INBREEDING_PENALTY_PER_PCT;
    let raw = BASE_APTITUDE + variation - penalty;

    // Non-finite input scores at the floor.
    let score = if raw.is_finite() {
        raw.clamp(f64::from(APTITUDE_MIN), f64::from(APTITUDE_MAX))
            .round() as u8
    } else {
        APTITUDE_MIN
    };

    AptitudeBreakdown {
        base: BASE_APTITUDE,
        variation,
        penalty,
        score,
    }
}
