//! Line store error types.

use crate::domain::LineId;

/// Errors that can occur when loading or deleting lines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// No line with this id
    #[error("line {0} not found")]
    NotFound(LineId),
}
