use std::fmt;

/// Which side of the cross an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Sire,
    Dam,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sire => "sire",
            Self::Dam => "dam",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by [`super::CrossSimulator::simulate_cross`].
///
/// Both variants are raised before any traversal starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// The public identifier does not resolve to an individual.
    NotFound(Side),
    /// The lookup backend failed while resolving the public identifier.
    LookupUnavailable { side: Side, reason: String },
}

impl SimulationError {
    pub fn side(&self) -> Side {
        match self {
            Self::NotFound(side) => *side,
            Self::LookupUnavailable { side, .. } => *side,
        }
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(side) => write!(f, "{side} not found"),
            Self::LookupUnavailable { side, reason } => {
                write!(f, "{side} lookup unavailable: {reason}")
            }
        }
    }
}

impl std::error::Error for SimulationError {}
