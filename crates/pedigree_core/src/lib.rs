#![forbid(unsafe_code)]

pub mod ancestry;
pub mod genetics;
pub mod scoring;
pub mod simulation;

pub use ancestry::{AncestryLookup, Individual, IndividualId, LookupError, Parents};
pub use simulation::{CrossSimulator, Side, SimulationError, SimulationMetrics, SimulationResult};
