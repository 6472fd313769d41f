//! Ancestry lookup seam and pedigree traversal.
//!
//! The core never owns pedigree storage. Callers supply an
//! [`AncestryLookup`] that resolves public identifiers and answers
//! parent-of queries; the walker consumes it one individual at a time.

use std::fmt;
use std::sync::Arc;

pub mod walker;

pub use walker::{AncestorMap, WalkMetrics, collect_ancestors};

// --- Identity -----------------------------------------------------------

/// Storage-assigned numeric identifier of an individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndividualId(pub u64);

impl IndividualId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for IndividualId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A resolved individual: numeric key plus the public handle it was
/// resolved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    pub id: IndividualId,
    pub public_id: String,
}

/// Recorded parents of an individual. Founders have neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parents {
    pub sire: Option<IndividualId>,
    pub dam: Option<IndividualId>,
}

impl Parents {
    pub fn founder() -> Self {
        Self::default()
    }

    pub fn is_founder(&self) -> bool {
        self.sire.is_none() && self.dam.is_none()
    }
}

// --- Lookup error -------------------------------------------------------

/// Failure reported by an ancestry lookup backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The numeric id is not known to the backend.
    UnknownIndividual(IndividualId),
    /// The backend could not answer (I/O, lock, remote failure).
    Unavailable { reason: String },
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownIndividual(id) => write!(f, "unknown individual id={id}"),
            Self::Unavailable { reason } => write!(f, "ancestry lookup unavailable: {reason}"),
        }
    }
}

impl std::error::Error for LookupError {}

// --- Lookup trait -------------------------------------------------------

/// Pedigree collaborator consumed by the simulator.
///
/// `parents` must terminate for every id it knows; founders answer
/// [`Parents::founder`].
pub trait AncestryLookup {
    /// Resolve a public identifier. `Ok(None)` means the individual does
    /// not exist.
    fn resolve_individual(&self, public_id: &str) -> Result<Option<Individual>, LookupError>;

    /// Recorded parents of an already-resolved individual.
    fn parents(&self, id: IndividualId) -> Result<Parents, LookupError>;
}

impl<T: AncestryLookup + ?Sized> AncestryLookup for &T {
    fn resolve_individual(&self, public_id: &str) -> Result<Option<Individual>, LookupError> {
        (**self).resolve_individual(public_id)
    }

    fn parents(&self, id: IndividualId) -> Result<Parents, LookupError> {
        (**self).parents(id)
    }
}

impl<T: AncestryLookup + ?Sized> AncestryLookup for Arc<T> {
    fn resolve_individual(&self, public_id: &str) -> Result<Option<Individual>, LookupError> {
        (**self).resolve_individual(public_id)
    }

    fn parents(&self, id: IndividualId) -> Result<Parents, LookupError> {
        (**self).parents(id)
    }
}
