#![allow(dead_code)]

use std::cell::Cell;
use std::collections::{HashMap, HashSet};

use pedigree_core::ancestry::{AncestryLookup, Individual, IndividualId, LookupError, Parents};

/// Public id used for a numeric id in test pedigrees.
pub fn public_id(id: u64) -> String {
    format!("H{id}")
}

/// Test helper: in-memory pedigree with call counters and failure injection.
///
/// Build with chained calls:
/// `MapLookup::new().horse(3, Some(1), Some(2)).horse(1, None, None)`
#[derive(Debug, Default)]
pub struct MapLookup {
    by_public_id: HashMap<String, IndividualId>,
    parents: HashMap<IndividualId, Parents>,
    failing: HashSet<IndividualId>,
    resolve_unavailable: bool,
    parent_lookups: Cell<u64>,
    resolve_calls: Cell<u64>,
}

impl MapLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn horse(mut self, id: u64, sire: Option<u64>, dam: Option<u64>) -> Self {
        let key = IndividualId(id);
        self.by_public_id.insert(public_id(id), key);
        self.parents.insert(
            key,
            Parents {
                sire: sire.map(IndividualId),
                dam: dam.map(IndividualId),
            },
        );
        self
    }

    /// Parent lookups for `id` fail with `Unavailable`.
    pub fn failing(mut self, id: u64) -> Self {
        self.failing.insert(IndividualId(id));
        self
    }

    /// Every `resolve_individual` call fails with `Unavailable`.
    pub fn resolve_unavailable(mut self) -> Self {
        self.resolve_unavailable = true;
        self
    }

    pub fn parent_lookups(&self) -> u64 {
        self.parent_lookups.get()
    }

    pub fn resolve_calls(&self) -> u64 {
        self.resolve_calls.get()
    }
}

impl AncestryLookup for MapLookup {
    fn resolve_individual(&self, public_id: &str) -> Result<Option<Individual>, LookupError> {
        self.resolve_calls.set(self.resolve_calls.get() + 1);
        if self.resolve_unavailable {
            return Err(LookupError::Unavailable {
                reason: "registry offline".to_string(),
            });
        }
        Ok(self.by_public_id.get(public_id).map(|&id| Individual {
            id,
            public_id: public_id.to_string(),
        }))
    }

    fn parents(&self, id: IndividualId) -> Result<Parents, LookupError> {
        self.parent_lookups.set(self.parent_lookups.get() + 1);
        if self.failing.contains(&id) {
            return Err(LookupError::Unavailable {
                reason: format!("injected failure for {id}"),
            });
        }
        self.parents
            .get(&id)
            .copied()
            .ok_or(LookupError::UnknownIndividual(id))
    }
}

/// Straight sire line: `ids[0]` is the start, each next id is the sire of
/// the previous one; the last one is a founder.
pub fn sire_line(ids: &[u64]) -> MapLookup {
    let mut lookup = MapLookup::new();
    for window in ids.windows(2) {
        lookup = lookup.horse(window[0], Some(window[1]), None);
    }
    if let Some(&last) = ids.last() {
        lookup = lookup.horse(last, None, None);
    }
    lookup
}
