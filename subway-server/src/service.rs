//! Line editing service.
//!
//! Translates id-based commands into edits on a [`Line`]: resolve station
//! ids, load the line, apply the edit, save. A failed edit saves nothing.

use std::sync::Mutex;

use crate::domain::{Distance, Line, LineId, Name, SectionError, StationId};
use crate::lines::{LineError, LineRepository};
use crate::stations::{StationDirectory, StationError};

/// Errors from line commands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// A station id did not resolve
    #[error(transparent)]
    Station(#[from] StationError),

    /// A line id did not resolve
    #[error(transparent)]
    Line(#[from] LineError),

    /// The edit violates the line's topology
    #[error(transparent)]
    Section(#[from] SectionError),
}

impl ServiceError {
    /// True if an id failed to resolve.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Station(_) | ServiceError::Line(_))
    }
}

/// Application service for creating and editing lines.
///
/// Edits are load-modify-save, so they are serialized per service
/// instance to avoid lost updates between concurrent callers.
pub struct LineService<S, L> {
    stations: S,
    lines: L,
    edit_lock: Mutex<()>,
}

impl<S: StationDirectory, L: LineRepository> LineService<S, L> {
    /// Create a new service over the given collaborators.
    pub fn new(stations: S, lines: L) -> Self {
        Self {
            stations,
            lines,
            edit_lock: Mutex::new(()),
        }
    }

    /// Create a line whose path starts as the single section `up -> down`.
    pub fn create_line(
        &self,
        name: Name,
        color: String,
        up: StationId,
        down: StationId,
        distance: Distance,
    ) -> Result<Line, ServiceError> {
        let up = self.stations.resolve(up)?;
        let down = self.stations.resolve(down)?;
        let line = Line::with_section(self.lines.next_id(), name, color, up, down, distance)?;
        self.lines.save(&line);
        tracing::info!(line = %line.id(), name = %line.name(), "line created");
        Ok(line)
    }

    /// Create a line with no sections yet.
    pub fn create_empty_line(&self, name: Name, color: String) -> Line {
        let line = Line::new(self.lines.next_id(), name, color);
        self.lines.save(&line);
        tracing::info!(line = %line.id(), name = %line.name(), "empty line created");
        line
    }

    /// All lines, in id order.
    pub fn show_lines(&self) -> Vec<Line> {
        self.lines.list()
    }

    pub fn show_line(&self, id: LineId) -> Result<Line, ServiceError> {
        Ok(self.lines.load(id)?)
    }

    /// Replace a line's name and color.
    pub fn update_line(&self, id: LineId, name: Name, color: String) -> Result<Line, ServiceError> {
        self.edit(id, |line| {
            line.rename(name, color);
            Ok(())
        })
    }

    pub fn delete_line(&self, id: LineId) -> Result<(), ServiceError> {
        let _guard = self.edit_lock.lock().unwrap_or_else(|e| e.into_inner());
        self.lines.delete(id)?;
        tracing::info!(line = %id, "line deleted");
        Ok(())
    }

    /// Connect `up -> down` on a line. See [`crate::domain::LinePath::add_section`].
    pub fn add_section(
        &self,
        id: LineId,
        up: StationId,
        down: StationId,
        distance: Distance,
    ) -> Result<Line, ServiceError> {
        let up = self.stations.resolve(up)?;
        let down = self.stations.resolve(down)?;
        let line = self.edit(id, |line| line.add_section(up, down, distance))?;
        tracing::debug!(line = %id, stations = line.path().len() + 1, "section added");
        Ok(line)
    }

    /// Take a station off a line. See [`crate::domain::LinePath::remove_station`].
    pub fn remove_station(&self, id: LineId, station: StationId) -> Result<Line, ServiceError> {
        let station = self.stations.resolve(station)?;
        let line = self.edit(id, |line| line.remove_station(&station))?;
        tracing::debug!(line = %id, station = %station.id, "station removed");
        Ok(line)
    }

    fn edit<F>(&self, id: LineId, apply: F) -> Result<Line, ServiceError>
    where
        F: FnOnce(&mut Line) -> Result<(), SectionError>,
    {
        let _guard = self.edit_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut line = self.lines.load(id)?;
        apply(&mut line)?;
        self.lines.save(&line);
        Ok(line)
    }
}
