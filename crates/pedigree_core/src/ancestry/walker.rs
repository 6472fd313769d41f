//! Ancestry walker.
//!
//! Depth-first traversal of the parent-of relation from a starting
//! individual, sire branch before dam branch.
//!
//! Rules:
//! - Generation 0 is the starting individual; it is never recorded, even
//!   when cyclic records lead back to it.
//! - Individuals at generation `1..=max_generations` are recorded and
//!   expanded. Anything deeper is neither recorded nor queried.
//! - An ancestor reachable by several paths keeps its smallest generation.
//!   Ties keep the first value recorded.
//! - A failed parents lookup ends that branch only.

use std::collections::HashMap;

use super::{AncestryLookup, IndividualId};

/// Ancestor id -> closest generation at which it was reached.
pub type AncestorMap = HashMap<IndividualId, u32>;

/// Default generation cap used by the simulator.
pub const DEFAULT_MAX_GENERATIONS: u32 = 5;

// --- Metrics -------------------------------------------------------------

/// Observability counters for ancestry traversal.
#[derive(Debug, Default)]
pub struct WalkMetrics {
    /// Parent lookups issued.
    lookups_total: u64,
    /// Branches cut short by a failed lookup.
    truncated_branches_total: u64,
}

impl WalkMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookups_total(&self) -> u64 {
        self.lookups_total
    }

    pub fn truncated_branches_total(&self) -> u64 {
        self.truncated_branches_total
    }

    fn record_lookup(&mut self) {
        self.lookups_total += 1;
    }

    fn record_truncated(&mut self) {
        self.truncated_branches_total += 1;
    }
}

// --- Walker --------------------------------------------------------------

/// Collect every ancestor of `start` within `max_generations`, keyed by id
/// with the minimum generation at which it was reached.
pub fn collect_ancestors<L: AncestryLookup + ?Sized>(
    lookup: &L,
    start: IndividualId,
    max_generations: u32,
    metrics: &mut WalkMetrics,
) -> AncestorMap {
    let mut ancestors = AncestorMap::new();
    visit(lookup, start, 0, max_generations, &mut ancestors, metrics);
    // Cyclic records can lead back to the start.
    ancestors.remove(&start);
    ancestors
}

fn visit<L: AncestryLookup + ?Sized>(
    lookup: &L,
    id: IndividualId,
    generation: u32,
    max_generations: u32,
    ancestors: &mut AncestorMap,
    metrics: &mut WalkMetrics,
) {
    if generation > max_generations {
        return;
    }
    if generation > 0 {
        record_min_generation(ancestors, id, generation);
    }

    metrics.record_lookup();
    let parents = match lookup.parents(id) {
        Ok(parents) => parents,
        Err(err) => {
            metrics.record_truncated();
            tracing::warn!(
                individual = %id,
                generation,
                error = %err,
                "ancestry branch truncated"
            );
            return;
        }
    };

    for parent in [parents.sire, parents.dam].into_iter().flatten() {
        visit(
            lookup,
            parent,
            generation + 1,
            max_generations,
            ancestors,
            metrics,
        );
    }
}

/// Insert `generation` for `id`, replacing an existing value only when the
/// new one is strictly smaller.
fn record_min_generation(ancestors: &mut AncestorMap, id: IndividualId, generation: u32) {
    ancestors
        .entry(id)
        .and_modify(|recorded| {
            if generation < *recorded {
                *recorded = generation;
            }
        })
        .or_insert(generation);
}
