//! Station registry error types.

use crate::domain::StationId;

/// Errors that can occur when looking up stations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StationError {
    /// No station with this id
    #[error("station {0} not found")]
    NotFound(StationId),
}
