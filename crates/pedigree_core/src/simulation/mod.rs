//! Cross simulation: orchestration, results and in-process caching.

pub mod cache;
pub mod cross_key;
pub mod error;
pub mod result;
pub mod simulator;

pub use cache::SimulationCache;
pub use cross_key::{compute_cross_key, format_cross_key};
pub use error::{Side, SimulationError};
pub use result::SimulationResult;
pub use simulator::{CrossSimulator, SimulationMetrics, SimulatorConfig};
