//! Configuration defaults and fail-closed resolution.
//!
//! Every parameter has a default. An explicit value always wins, but it
//! must be finite and non-negative; anything else is rejected rather than
//! silently replaced.
//!
//! Settings files are JSON objects whose keys are the `param_name` of each
//! parameter; missing keys take the default.

use std::fmt;
use std::fs;
use std::path::Path;

use pedigree_core::simulation::SimulatorConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigParam {
    /// Deepest generation walked on each side of a cross.
    MaxGenerations,
    /// Freshness bound for cached simulation results.
    SimulationCacheTtlS,
    /// Maximum cached simulation results.
    SimulationCacheCapacity,
    /// Maximum horses held by the registry.
    RegistryCapacity,
}

/// Upper bound accepted for `max_generations`.
pub const MAX_GENERATIONS_LIMIT: f64 = 16.0;

/// Upper bound accepted for cache and registry capacities.
pub const MAX_CAPACITY_LIMIT: f64 = 10_000_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct MissingConfigError {
    pub param_name: &'static str,
    pub reason: &'static str,
}

impl fmt::Display for MissingConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "config fail-closed: '{}' rejected ({})",
            self.param_name, self.reason
        )
    }
}

impl std::error::Error for MissingConfigError {}

pub fn default_value(param: ConfigParam) -> Option<f64> {
    match param {
        ConfigParam::MaxGenerations => Some(5.0),
        ConfigParam::SimulationCacheTtlS => Some(300.0),
        ConfigParam::SimulationCacheCapacity => Some(1024.0),
        ConfigParam::RegistryCapacity => Some(100_000.0),
    }
}

pub fn param_name(param: ConfigParam) -> &'static str {
    match param {
        ConfigParam::MaxGenerations => "max_generations",
        ConfigParam::SimulationCacheTtlS => "simulation_cache_ttl_s",
        ConfigParam::SimulationCacheCapacity => "simulation_cache_capacity",
        ConfigParam::RegistryCapacity => "registry_capacity",
    }
}

pub const ALL_PARAMS: &[ConfigParam] = &[
    ConfigParam::MaxGenerations,
    ConfigParam::SimulationCacheTtlS,
    ConfigParam::SimulationCacheCapacity,
    ConfigParam::RegistryCapacity,
];

/// Resolve a configuration value.
///
/// - `Some(v)` wins if finite and non-negative, otherwise `Err`.
/// - `None` takes the default, or `Err` if the parameter has none.
pub fn resolve_config_value(
    param: ConfigParam,
    value: Option<f64>,
) -> Result<f64, MissingConfigError> {
    if let Some(v) = value {
        if !v.is_finite() {
            return Err(MissingConfigError {
                param_name: param_name(param),
                reason: "value is non-finite (NaN or Infinity); fail-closed",
            });
        }
        if v < 0.0 {
            return Err(MissingConfigError {
                param_name: param_name(param),
                reason: "value is negative; all config params must be non-negative",
            });
        }
        return Ok(v);
    }
    default_value(param).ok_or_else(|| MissingConfigError {
        param_name: param_name(param),
        reason: "no default; fail-closed",
    })
}

// --- Settings file -------------------------------------------------------

/// Raw settings as read from disk. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PedigreeSettings {
    pub max_generations: Option<f64>,
    pub simulation_cache_ttl_s: Option<f64>,
    pub simulation_cache_capacity: Option<f64>,
    pub registry_capacity: Option<f64>,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedConfig {
    pub simulator: SimulatorConfig,
    pub simulation_cache_ttl_s: f64,
    pub simulation_cache_capacity: usize,
    pub registry_capacity: usize,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            simulator: SimulatorConfig::default(),
            simulation_cache_ttl_s: 300.0,
            simulation_cache_capacity: 1024,
            registry_capacity: 100_000,
        }
    }
}

impl PedigreeSettings {
    pub fn resolve(&self) -> Result<ResolvedConfig, MissingConfigError> {
        let max_generations =
            resolve_config_value(ConfigParam::MaxGenerations, self.max_generations)?;
        if max_generations.fract() != 0.0
            || !(1.0..=MAX_GENERATIONS_LIMIT).contains(&max_generations)
        {
            return Err(MissingConfigError {
                param_name: param_name(ConfigParam::MaxGenerations),
                reason: "must be a whole number between 1 and 16",
            });
        }

        let ttl_s =
            resolve_config_value(ConfigParam::SimulationCacheTtlS, self.simulation_cache_ttl_s)?;
        let cache_capacity = resolve_count(
            ConfigParam::SimulationCacheCapacity,
            self.simulation_cache_capacity,
        )?;
        let registry_capacity =
            resolve_count(ConfigParam::RegistryCapacity, self.registry_capacity)?;

        Ok(ResolvedConfig {
            simulator: SimulatorConfig {
                max_generations: max_generations as u32,
            },
            simulation_cache_ttl_s: ttl_s,
            simulation_cache_capacity: cache_capacity,
            registry_capacity,
        })
    }
}

fn resolve_count(param: ConfigParam, value: Option<f64>) -> Result<usize, MissingConfigError> {
    let v = resolve_config_value(param, value)?;
    if v.fract() != 0.0 {
        return Err(MissingConfigError {
            param_name: param_name(param),
            reason: "must be a whole number",
        });
    }
    if v > MAX_CAPACITY_LIMIT {
        return Err(MissingConfigError {
            param_name: param_name(param),
            reason: "exceeds the capacity limit of 10000000",
        });
    }
    Ok(v as usize)
}

/// Error loading a settings file.
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(MissingConfigError),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "settings read failed: {e}"),
            Self::Parse(e) => write!(f, "settings parse failed: {e}"),
            Self::Invalid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<MissingConfigError> for SettingsError {
    fn from(error: MissingConfigError) -> Self {
        Self::Invalid(error)
    }
}

/// Read and resolve a JSON settings file.
pub fn load_settings(path: impl AsRef<Path>) -> Result<ResolvedConfig, SettingsError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(SettingsError::Io)?;
    let settings: PedigreeSettings = serde_json::from_str(&raw).map_err(SettingsError::Parse)?;
    let resolved = settings.resolve()?;
    tracing::debug!(
        path = %path.display(),
        max_generations = resolved.simulator.max_generations,
        cache_ttl_s = resolved.simulation_cache_ttl_s,
        "settings loaded"
    );
    Ok(resolved)
}
