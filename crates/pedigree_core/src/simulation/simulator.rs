//! Cross simulator: the only entry point callers need.
//!
//! Sequence per call:
//! 1. Resolve sire, then dam. Either missing -> `NotFound(side)`, no traversal.
//! 2. Walk each side's ancestry up to `max_generations`.
//! 3. Estimate inbreeding from the two ancestor maps.
//! 4. Score aptitude, rating and advisory from the rounded coefficient.
//!
//! The simulator holds no per-call state; concurrent calls are independent.

use crate::ancestry::walker::DEFAULT_MAX_GENERATIONS;
use crate::ancestry::{AncestryLookup, Individual, WalkMetrics, collect_ancestors};
use crate::genetics::estimate_inbreeding;
use crate::scoring::{Advisory, score_cross};

use super::error::{Side, SimulationError};
use super::result::SimulationResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Deepest generation recorded on each side.
    pub max_generations: u32,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_generations: DEFAULT_MAX_GENERATIONS,
        }
    }
}

// --- Metrics -------------------------------------------------------------

/// Observability counters for the simulator.
#[derive(Debug, Default)]
pub struct SimulationMetrics {
    simulations_total: u64,
    not_found_total: u64,
    lookup_unavailable_total: u64,
    high_risk_total: u64,
    walk: WalkMetrics,
}

impl SimulationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed simulations.
    pub fn simulations_total(&self) -> u64 {
        self.simulations_total
    }

    /// Calls rejected because an input did not resolve.
    pub fn not_found_total(&self) -> u64 {
        self.not_found_total
    }

    pub fn lookup_unavailable_total(&self) -> u64 {
        self.lookup_unavailable_total
    }

    /// Completed simulations that got the high-inbreeding advisory.
    pub fn high_risk_total(&self) -> u64 {
        self.high_risk_total
    }

    /// Traversal counters accumulated across calls.
    pub fn walk(&self) -> &WalkMetrics {
        &self.walk
    }
}

// --- Simulator -----------------------------------------------------------

#[derive(Debug, Clone)]
pub struct CrossSimulator<L> {
    lookup: L,
    config: SimulatorConfig,
}

impl<L: AncestryLookup> CrossSimulator<L> {
    pub fn new(lookup: L) -> Self {
        Self::with_config(lookup, SimulatorConfig::default())
    }

    pub fn with_config(lookup: L, config: SimulatorConfig) -> Self {
        Self { lookup, config }
    }

    pub fn config(&self) -> SimulatorConfig {
        self.config
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Simulate the cross of `sire_public_id` x `dam_public_id`.
    ///
    /// Identical ids are not rejected here; callers validate requests.
    pub fn simulate_cross(
        &self,
        sire_public_id: &str,
        dam_public_id: &str,
        metrics: &mut SimulationMetrics,
    ) -> Result<SimulationResult, SimulationError> {
        let sire = self.resolve(sire_public_id, Side::Sire, metrics)?;
        let dam = self.resolve(dam_public_id, Side::Dam, metrics)?;

        let max_generations = self.config.max_generations;
        let sire_ancestors =
            collect_ancestors(&self.lookup, sire.id, max_generations, &mut metrics.walk);
        let dam_ancestors =
            collect_ancestors(&self.lookup, dam.id, max_generations, &mut metrics.walk);

        let inbreeding = estimate_inbreeding(&sire_ancestors, &dam_ancestors);
        let score = score_cross(sire.id, dam.id, inbreeding.coefficient_pct);

        metrics.simulations_total += 1;
        if score.advisory == Advisory::HighInbreedingRisk {
            metrics.high_risk_total += 1;
        }

        tracing::info!(
            sire = sire_public_id,
            dam = dam_public_id,
            inbreeding_pct = inbreeding.coefficient_pct,
            common_ancestors = inbreeding.common_ancestors.len(),
            aptitude = score.aptitude.score,
            rating = score.rating.tier.as_str(),
            "cross simulated"
        );

        Ok(SimulationResult {
            inbreeding_coefficient_pct: inbreeding.coefficient_pct,
            aptitude_score: score.aptitude.score,
            valuation: score.rating.valuation,
            rating: score.rating.tier,
            advisory: score.advisory,
            common_ancestors: inbreeding.common_ancestors,
        })
    }

    fn resolve(
        &self,
        public_id: &str,
        side: Side,
        metrics: &mut SimulationMetrics,
    ) -> Result<Individual, SimulationError> {
        match self.lookup.resolve_individual(public_id) {
            Ok(Some(individual)) => Ok(individual),
            Ok(None) => {
                metrics.not_found_total += 1;
                tracing::debug!(side = side.as_str(), public_id, "individual not found");
                Err(SimulationError::NotFound(side))
            }
            Err(err) => {
                metrics.lookup_unavailable_total += 1;
                tracing::warn!(
                    side = side.as_str(),
                    public_id,
                    error = %err,
                    "individual lookup failed"
                );
                Err(SimulationError::LookupUnavailable {
                    side,
                    reason: err.to_string(),
                })
            }
        }
    }
}
