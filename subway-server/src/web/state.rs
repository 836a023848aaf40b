//! Application state for the web layer.

use std::sync::Arc;

use crate::lines::LineStore;
use crate::service::LineService;
use crate::stations::StationRegistry;

/// Line service wired to the in-memory collaborators.
pub type Lines = LineService<StationRegistry, LineStore>;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Station registry, shared with the line service
    pub stations: StationRegistry,

    /// Line editing service
    pub lines: Arc<Lines>,
}

impl AppState {
    /// Create a new app state over the given collaborators.
    pub fn new(stations: StationRegistry, lines: LineStore) -> Self {
        Self {
            lines: Arc::new(LineService::new(stations.clone(), lines)),
            stations,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(StationRegistry::new(), LineStore::new())
    }
}
