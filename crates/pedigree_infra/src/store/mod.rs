//! Pedigree storage: the horse registry.

pub mod horse_registry;

pub use horse_registry::{
    HorseRecord, HorseRegistry, InsertResult, RegistryError, RegistryMetrics,
};
