//! In-memory line store.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::{Line, LineId};

use super::error::LineError;

/// Loads and saves lines by id.
pub trait LineRepository {
    /// Reserve a fresh id for a line about to be created.
    fn next_id(&self) -> LineId;

    /// Load an owned copy of a line.
    fn load(&self, id: LineId) -> Result<Line, LineError>;

    /// Insert or replace a line.
    fn save(&self, line: &Line);

    /// Remove a line.
    fn delete(&self, id: LineId) -> Result<(), LineError>;

    /// All lines, in id order.
    fn list(&self) -> Vec<Line>;
}

#[derive(Debug, Default)]
struct Store {
    last_id: u64,
    lines: BTreeMap<LineId, Line>,
}

/// Thread-safe in-memory line store.
///
/// Cloning shares the same underlying store.
#[derive(Debug, Clone, Default)]
pub struct LineStore {
    inner: Arc<RwLock<Store>>,
}

impl LineStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored lines.
    pub fn len(&self) -> usize {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        guard.lines.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LineRepository for LineStore {
    fn next_id(&self) -> LineId {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        guard.last_id += 1;
        LineId(guard.last_id)
    }

    fn load(&self, id: LineId) -> Result<Line, LineError> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        guard.lines.get(&id).cloned().ok_or(LineError::NotFound(id))
    }

    fn save(&self, line: &Line) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        guard.lines.insert(line.id(), line.clone());
    }

    fn delete(&self, id: LineId) -> Result<(), LineError> {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        guard
            .lines
            .remove(&id)
            .map(|_| ())
            .ok_or(LineError::NotFound(id))
    }

    fn list(&self) -> Vec<Line> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        guard.lines.values().cloned().collect()
    }
}
