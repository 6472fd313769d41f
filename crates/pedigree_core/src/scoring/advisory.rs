//! Advisory message selection.
//!
//! Priority order:
//! 1. `inbreeding_pct > 5` -> high risk, cross not recommended.
//! 2. `inbreeding_pct > 3` -> moderate risk, veterinary evaluation.
//! 3. Aptitude bands 95 / 90 / 85 / 75 / 65 -> graduated positive advice.
//! 4. Otherwise limited potential.

use std::fmt;

use super::rating::HIGH_RISK_INBREEDING_PCT;

pub const MODERATE_RISK_INBREEDING_PCT: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Advisory {
    HighInbreedingRisk,
    ModerateInbreedingRisk,
    Exceptional,
    Excellent,
    VeryGood,
    Good,
    Fair,
    LimitedPotential,
}

impl Advisory {
    pub fn message(self) -> &'static str {
        match self {
            Self::HighInbreedingRisk => {
                "Alto risco de consanguinidade. Cruzamento não recomendado."
            }
            Self::ModerateInbreedingRisk => {
                "Risco moderado de consanguinidade. Recomenda-se avaliação veterinária antes do cruzamento."
            }
            Self::Exceptional => {
                "Cruzamento excepcional! Potencial genético extraordinário para alta performance esportiva."
            }
            Self::Excellent => {
                "Excelente compatibilidade genética. Alto potencial para competições."
            }
            Self::VeryGood => "Muito boa compatibilidade. Potencial acima da média para o esporte.",
            Self::Good => "Boa compatibilidade genética. Potencial esportivo satisfatório.",
            Self::Fair => "Compatibilidade moderada. Potencial esportivo dentro da média.",
            Self::LimitedPotential => {
                "Compatibilidade limitada. Considere outras opções de cruzamento."
            }
        }
    }

    /// Whether the advice warns against (or conditions) the cross.
    pub fn is_risk_warning(self) -> bool {
        matches!(
            self,
            Self::HighInbreedingRisk | Self::ModerateInbreedingRisk
        )
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

const APTITUDE_BANDS: [(u8, Advisory); 5] = [
    (95, Advisory::Exceptional),
    (90, Advisory::Excellent),
    (85, Advisory::VeryGood),
    (75, Advisory::Good),
    (65, Advisory::Fair),
];

/// Advice for an aptitude score and inbreeding percentage.
pub fn select_advisory(aptitude: u8, inbreeding_pct: f64) -> Advisory {
    if inbreeding_pct > HIGH_RISK_INBREEDING_PCT {
        return Advisory::HighInbreedingRisk;
    }
    if inbreeding_pct > MODERATE_RISK_INBREEDING_PCT {
        return Advisory::ModerateInbreedingRisk;
    }
    APTITUDE_BANDS
        .iter()
        .find(|(min, _)| aptitude >= *min)
        .map(|&(_, advisory)| advisory)
        .unwrap_or(Advisory::LimitedPotential)
}
