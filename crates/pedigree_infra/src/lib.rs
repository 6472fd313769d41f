#![forbid(unsafe_code)]

pub mod config;
pub mod report;
pub mod service;
pub mod store;

pub use config::{PedigreeSettings, ResolvedConfig, load_settings};
pub use report::SimulationReport;
pub use service::{BreedingService, CrossRequestError, ServiceError, validate_cross_request};
pub use store::{HorseRecord, HorseRegistry};
