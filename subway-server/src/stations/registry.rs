//! In-memory station registry.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::{Name, Station, StationId};

use super::error::StationError;

/// Resolves station ids to station records.
///
/// This abstraction allows line editing to be tested without a real
/// registry behind it.
pub trait StationDirectory {
    /// Look up a station by id.
    fn resolve(&self, id: StationId) -> Result<Station, StationError>;
}

#[derive(Debug, Default)]
struct Registry {
    last_id: u64,
    stations: BTreeMap<StationId, Name>,
}

/// Thread-safe station registry.
///
/// Ids are assigned sequentially starting at 1 and never reused.
/// Cloning shares the same underlying registry.
#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    inner: Arc<RwLock<Registry>>,
}

impl StationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new station.
    pub fn create(&self, name: Name) -> Station {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        guard.last_id += 1;
        let id = StationId(guard.last_id);
        guard.stations.insert(id, name.clone());
        tracing::info!(station = %id, name = %name, "station created");
        Station::new(id, name)
    }

    /// All stations, in id order.
    pub fn list(&self) -> Vec<Station> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        guard
            .stations
            .iter()
            .map(|(id, name)| Station::new(*id, name.clone()))
            .collect()
    }

    /// Remove a station from the registry.
    ///
    /// Lines that already hold this station keep their copy.
    pub fn delete(&self, id: StationId) -> Result<(), StationError> {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        guard
            .stations
            .remove(&id)
            .ok_or(StationError::NotFound(id))?;
        tracing::info!(station = %id, "station deleted");
        Ok(())
    }

    /// Get the number of registered stations.
    pub fn len(&self) -> usize {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        guard.stations.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StationDirectory for StationRegistry {
    fn resolve(&self, id: StationId) -> Result<Station, StationError> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        guard
            .stations
            .get(&id)
            .map(|name| Station::new(id, name.clone()))
            .ok_or(StationError::NotFound(id))
    }
}
