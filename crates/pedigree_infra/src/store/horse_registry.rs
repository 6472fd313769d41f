//! Horse registry: the pedigree store behind cross simulations.
//!
//! Holds `id -> {public_id, name, sire_id, dam_id}` and answers the two
//! queries the simulator needs. Optionally backed by a JSONL file: records
//! are appended durably before they become visible, and replayed on open.
//!
//! Parent ids may point at horses not (yet) registered; the simulator treats
//! such a parent as the end of its branch.

use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use pedigree_core::ancestry::{AncestryLookup, Individual, IndividualId, LookupError, Parents};
use serde::{Deserialize, Serialize};

use crate::config::ResolvedConfig;

// --- Horse record ---------------------------------------------------------

/// Persisted registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HorseRecord {
    /// Storage surrogate key.
    pub id: u64,
    /// External identifier used by callers.
    pub public_id: String,
    pub name: String,
    #[serde(default)]
    pub sire_id: Option<u64>,
    #[serde(default)]
    pub dam_id: Option<u64>,
}

impl HorseRecord {
    pub fn founder(id: u64, public_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            public_id: public_id.into(),
            name: name.into(),
            sire_id: None,
            dam_id: None,
        }
    }

    pub fn with_parents(mut self, sire_id: Option<u64>, dam_id: Option<u64>) -> Self {
        self.sire_id = sire_id;
        self.dam_id = dam_id;
        self
    }

    pub fn parents(&self) -> Parents {
        Parents {
            sire: self.sire_id.map(IndividualId),
            dam: self.dam_id.map(IndividualId),
        }
    }

    fn is_own_parent(&self) -> bool {
        self.sire_id == Some(self.id) || self.dam_id == Some(self.id)
    }
}

// --- Insert result --------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertResult {
    Inserted,
    /// Identical record already present. NOOP.
    Duplicate,
}

// --- Registry error -------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Registry is at capacity.
    CapacityFull,
    /// The numeric id is taken by a different record.
    IdConflict { id: u64 },
    /// The public id is taken by a different horse.
    PublicIdConflict { public_id: String },
    /// A horse cannot be its own sire or dam.
    SelfParent { id: u64 },
    /// Durable append failed.
    WriteFailed { reason: String },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CapacityFull => write!(f, "horse registry full"),
            Self::IdConflict { id } => write!(f, "horse id {id} already registered"),
            Self::PublicIdConflict { public_id } => {
                write!(f, "public id '{public_id}' already registered")
            }
            Self::SelfParent { id } => write!(f, "horse {id} listed as its own parent"),
            Self::WriteFailed { reason } => write!(f, "registry write failed: {reason}"),
        }
    }
}

impl std::error::Error for RegistryError {}

// --- Metrics --------------------------------------------------------------

#[derive(Debug)]
pub struct RegistryMetrics {
    inserts_total: AtomicU64,
    duplicates_total: AtomicU64,
}

impl RegistryMetrics {
    pub fn new() -> Self {
        Self {
            inserts_total: AtomicU64::new(0),
            duplicates_total: AtomicU64::new(0),
        }
    }

    /// Record a successful insert.
    pub fn record_insert(&self) {
        self.inserts_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a duplicate registration.
    pub fn record_duplicate(&self) {
        self.duplicates_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inserts_total(&self) -> u64 {
        self.inserts_total.load(Ordering::Relaxed)
    }

    pub fn duplicates_total(&self) -> u64 {
        self.duplicates_total.load(Ordering::Relaxed)
    }
}

impl Default for RegistryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

// --- Horse registry -------------------------------------------------------

#[derive(Debug, Default)]
struct RegistryState {
    records: HashMap<u64, HorseRecord>,
    by_public_id: HashMap<String, u64>,
    storage_file: Option<File>,
}

/// Thread-safe, bounded horse registry.
///
/// Invariants:
/// - `id` and `public_id` are each unique.
/// - A record is durable (when file-backed) before it is visible.
#[derive(Debug)]
pub struct HorseRegistry {
    state: Mutex<RegistryState>,
    capacity: usize,
}

impl HorseRegistry {
    /// In-memory registry holding at most `capacity` horses.
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Mutex::new(RegistryState::default()),
            capacity,
        }
    }

    /// Create/load a durable registry backed by a JSONL file.
    pub fn with_storage_path(capacity: usize, storage_path: impl AsRef<Path>) -> io::Result<Self> {
        let path = storage_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let (records, by_public_id) = load_records(path)?;
        if records.len() > capacity {
            let reason = format!(
                "horse registry contains {} records but capacity is {}",
                records.len(),
                capacity
            );
            return Err(io::Error::new(io::ErrorKind::InvalidInput, reason));
        }
        tracing::debug!(path = %path.display(), horses = records.len(), "horse registry loaded");

        let storage_file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            state: Mutex::new(RegistryState {
                records,
                by_public_id,
                storage_file: Some(storage_file),
            }),
            capacity,
        })
    }

    /// Registry sized by `config.registry_capacity`, file-backed when
    /// `storage_path` is given.
    pub fn from_config(config: &ResolvedConfig, storage_path: Option<&Path>) -> io::Result<Self> {
        match storage_path {
            Some(path) => Self::with_storage_path(config.registry_capacity, path),
            None => Ok(Self::new(config.registry_capacity)),
        }
    }

    /// Register a horse.
    ///
    /// Re-registering an identical record is a `Duplicate` NOOP; a
    /// different record under a taken id or public id is an error.
    pub fn register(
        &self,
        record: HorseRecord,
        metrics: &RegistryMetrics,
    ) -> Result<InsertResult, RegistryError> {
        if record.is_own_parent() {
            return Err(RegistryError::SelfParent { id: record.id });
        }

        let mut state = self.lock();

        if let Some(existing) = state.records.get(&record.id) {
            if *existing == record {
                metrics.record_duplicate();
                return Ok(InsertResult::Duplicate);
            }
            return Err(RegistryError::IdConflict { id: record.id });
        }
        if state.by_public_id.contains_key(&record.public_id) {
            return Err(RegistryError::PublicIdConflict {
                public_id: record.public_id,
            });
        }
        if state.records.len() >= self.capacity {
            return Err(RegistryError::CapacityFull);
        }

        if let Some(file) = state.storage_file.as_mut() {
            persist_record(file, &record).map_err(|e| RegistryError::WriteFailed {
                reason: e.to_string(),
            })?;
        }

        state.by_public_id.insert(record.public_id.clone(), record.id);
        state.records.insert(record.id, record);
        metrics.record_insert();
        Ok(InsertResult::Inserted)
    }

    /// Record stored under `id`.
    pub fn get(&self, id: u64) -> Option<HorseRecord> {
        self.lock().records.get(&id).cloned()
    }

    /// Record registered under `public_id`.
    pub fn get_by_public_id(&self, public_id: &str) -> Option<HorseRecord> {
        let state = self.lock();
        let id = state.by_public_id.get(public_id)?;
        state.records.get(id).cloned()
    }

    /// Number of registered horses.
    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of horses accepted.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().expect("horse registry mutex poisoned")
    }

    fn try_lock(&self) -> Result<MutexGuard<'_, RegistryState>, LookupError> {
        self.state.lock().map_err(|_| LookupError::Unavailable {
            reason: "horse registry mutex poisoned".to_string(),
        })
    }
}

impl AncestryLookup for HorseRegistry {
    fn resolve_individual(&self, public_id: &str) -> Result<Option<Individual>, LookupError> {
        let state = self.try_lock()?;
        Ok(state.by_public_id.get(public_id).map(|&id| Individual {
            id: IndividualId(id),
            public_id: public_id.to_string(),
        }))
    }

    fn parents(&self, id: IndividualId) -> Result<Parents, LookupError> {
        let state = self.try_lock()?;
        state
            .records
            .get(&id.get())
            .map(HorseRecord::parents)
            .ok_or(LookupError::UnknownIndividual(id))
    }
}

type LoadedRecords = (HashMap<u64, HorseRecord>, HashMap<String, u64>);

fn load_records(path: &Path) -> io::Result<LoadedRecords> {
    let file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(path)?;
    let reader = BufReader::new(file);
    let mut records = HashMap::new();
    let mut by_public_id = HashMap::new();
    for (index, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let record: HorseRecord = serde_json::from_str(trimmed).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "invalid horse record at line {} in {}: {e}",
                    index + 1,
                    path.display()
                ),
            )
        })?;
        if records.contains_key(&record.id) || by_public_id.contains_key(&record.public_id) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "duplicate horse id={} public_id='{}' in {}",
                    record.id,
                    record.public_id,
                    path.display()
                ),
            ));
        }
        if record.is_own_parent() {
            tracing::warn!(id = record.id, "horse record lists itself as a parent");
        }
        by_public_id.insert(record.public_id.clone(), record.id);
        records.insert(record.id, record);
    }

    Ok((records, by_public_id))
}

fn persist_record(file: &mut File, record: &HorseRecord) -> io::Result<()> {
    let line = serde_json::to_string(record).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("failed to encode horse record: {e}"),
        )
    })?;
    // Record and newline go out in one write.
    let mut buf = line.into_bytes();
    buf.push(b'\n');
    file.write_all(&buf)?;
    file.sync_all()
}
