//! Breeding service: request validation, caching and simulation.
//!
//! The simulator accepts any pair of ids. Requests that name the same
//! horse twice, or an empty id, are rejected here before it runs.
//!
//! Results are cached in memory per ordered (sire, dam) pair for
//! `simulation_cache_ttl_s`. Call [`BreedingService::invalidate_cache`] after
//! pedigree data changes.

use std::fmt;
use std::sync::{Mutex, MutexGuard};

use pedigree_core::ancestry::AncestryLookup;
use pedigree_core::simulation::{
    CrossSimulator, Side, SimulationCache, SimulationError, SimulationMetrics, SimulationResult,
    compute_cross_key, format_cross_key,
};

use crate::config::ResolvedConfig;

// --- Request validation ---------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrossRequestError {
    /// The id for this side is empty or whitespace.
    EmptyId(Side),
    /// Sire and dam are the same horse.
    SameIndividual,
}

impl fmt::Display for CrossRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId(side) => write!(f, "{side} id is empty"),
            Self::SameIndividual => write!(f, "sire and dam must be different horses"),
        }
    }
}

impl std::error::Error for CrossRequestError {}

pub fn validate_cross_request(
    sire_public_id: &str,
    dam_public_id: &str,
) -> Result<(), CrossRequestError> {
    if sire_public_id.trim().is_empty() {
        return Err(CrossRequestError::EmptyId(Side::Sire));
    }
    if dam_public_id.trim().is_empty() {
        return Err(CrossRequestError::EmptyId(Side::Dam));
    }
    if sire_public_id.trim() == dam_public_id.trim() {
        return Err(CrossRequestError::SameIndividual);
    }
    Ok(())
}

// --- Service error --------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    InvalidRequest(CrossRequestError),
    Simulation(SimulationError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRequest(e) => write!(f, "invalid cross request: {e}"),
            Self::Simulation(e) => write!(f, "simulation failed: {e}"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<CrossRequestError> for ServiceError {
    fn from(error: CrossRequestError) -> Self {
        Self::InvalidRequest(error)
    }
}

impl From<SimulationError> for ServiceError {
    fn from(error: SimulationError) -> Self {
        Self::Simulation(error)
    }
}

// --- Service --------------------------------------------------------------

#[derive(Debug)]
pub struct BreedingService<L> {
    simulator: CrossSimulator<L>,
    cache: Mutex<SimulationCache>,
}

impl<L: AncestryLookup> BreedingService<L> {
    pub fn new(lookup: L, config: &ResolvedConfig) -> Self {
        Self {
            simulator: CrossSimulator::with_config(lookup, config.simulator),
            cache: Mutex::new(SimulationCache::new(
                config.simulation_cache_ttl_s,
                config.simulation_cache_capacity,
            )),
        }
    }

    pub fn simulator(&self) -> &CrossSimulator<L> {
        &self.simulator
    }

    /// Validate the request, then serve from cache or simulate.
    ///
    /// Failed simulations are never cached.
    pub fn simulate(
        &self,
        sire_public_id: &str,
        dam_public_id: &str,
        metrics: &mut SimulationMetrics,
    ) -> Result<SimulationResult, ServiceError> {
        validate_cross_request(sire_public_id, dam_public_id)?;
        let sire_public_id = sire_public_id.trim();
        let dam_public_id = dam_public_id.trim();

        let key = compute_cross_key(sire_public_id, dam_public_id);
        if let Some(cached) = self.lock_cache().get(key) {
            tracing::debug!(cross_key = %format_cross_key(key), "simulation cache hit");
            return Ok(cached);
        }

        let result = self
            .simulator
            .simulate_cross(sire_public_id, dam_public_id, metrics)?;
        self.lock_cache().insert(key, result.clone());
        Ok(result)
    }

    pub fn invalidate_cache(&self) {
        self.lock_cache().invalidate_all();
    }

    pub fn cache_hits_total(&self) -> u64 {
        self.lock_cache().hits_total()
    }

    pub fn cached_results(&self) -> usize {
        self.lock_cache().len()
    }

    fn lock_cache(&self) -> MutexGuard<'_, SimulationCache> {
        self.cache.lock().expect("simulation cache mutex poisoned")
    }
}
