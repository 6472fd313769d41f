//! Rating tier and valuation label.
//!
//! First match wins:
//! - `inbreeding_pct > 5` -> C / Baixa, whatever the aptitude.
//! - Then aptitude bands, highest first (see `APTITUDE_BANDS`).
//! - Below the lowest band -> C / Baixa.

use std::fmt;

/// Inbreeding above this percentage forces the lowest tier.
pub const HIGH_RISK_INBREEDING_PCT: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingTier {
    AaaPlus,
    Aaa,
    AaPlus,
    Aa,
    A,
    Bbb,
    Bb,
    C,
}

impl RatingTier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AaaPlus => "AAA+",
            Self::Aaa => "AAA",
            Self::AaPlus => "AA+",
            Self::Aa => "AA",
            Self::A => "A",
            Self::Bbb => "BBB",
            Self::Bb => "BB",
            Self::C => "C",
        }
    }
}

impl fmt::Display for RatingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Valuation {
    Excepcional,
    MuitoAlta,
    Alta,
    MediaAlta,
    Media,
    MediaBaixa,
    Baixa,
}

impl Valuation {
    pub fn label(self) -> &'static str {
        match self {
            Self::Excepcional => "Excepcional",
            Self::MuitoAlta => "Muito Alta",
            Self::Alta => "Alta",
            Self::MediaAlta => "Média-Alta",
            Self::Media => "Média",
            Self::MediaBaixa => "Média-Baixa",
            Self::Baixa => "Baixa",
        }
    }
}

impl fmt::Display for Valuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossRating {
    pub tier: RatingTier,
    pub valuation: Valuation,
}

/// Minimum aptitude per band, evaluated top to bottom.
const APTITUDE_BANDS: [(u8, RatingTier, Valuation); 7] = [
    (95, RatingTier::AaaPlus, Valuation::Excepcional),
    (90, RatingTier::Aaa, Valuation::MuitoAlta),
    (85, RatingTier::AaPlus, Valuation::Alta),
    (80, RatingTier::Aa, Valuation::Alta),
    (75, RatingTier::A, Valuation::MediaAlta),
    (70, RatingTier::Bbb, Valuation::Media),
    (60, RatingTier::Bb, Valuation::MediaBaixa),
];

const LOWEST: CrossRating = CrossRating {
    tier: RatingTier::C,
    valuation: Valuation::Baixa,
};

/// Tier and valuation for an aptitude score and inbreeding percentage.
pub fn rate_cross(aptitude: u8, inbreeding_pct: f64) -> CrossRating {
    if inbreeding_pct > HIGH_RISK_INBREEDING_PCT {
        return LOWEST;
    }
    APTITUDE_BANDS
        .iter()
        .find(|(min, _, _)| aptitude >= *min)
        .map(|&(_, tier, valuation)| CrossRating { tier, valuation })
        .unwrap_or(LOWEST)
}
