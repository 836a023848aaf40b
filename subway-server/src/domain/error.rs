//! Domain error types.
//!
//! These errors represent topology violations when editing a line.
//! They are distinct from lookup/storage errors, which belong to the
//! collaborators that resolve ids.

use super::{InvalidSection, StationId};

/// The new section cannot be attached to the line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// Neither endpoint is on the line
    #[error("section does not connect to the existing line")]
    Disconnected,

    /// A split must leave a positive distance on both sides
    #[error(
        "new distance {new} must be strictly less than the section being split ({existing})"
    )]
    SplitTooLong { new: u32, existing: u32 },
}

/// Errors raised when adding a section to, or removing a station from, a line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionError {
    /// Malformed section (same endpoints, zero distance)
    #[error(transparent)]
    InvalidSection(#[from] InvalidSection),

    /// The exact same connection already exists
    #[error("section {up} -> {down} already exists on the line")]
    DuplicateSection { up: StationId, down: StationId },

    /// The change would put a station on the line twice
    #[error("station {0} is already on the line")]
    DuplicatedStation(StationId),

    /// The section does not fit the current topology
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    /// Removal would leave the line without a section
    #[error("a line must retain at least one section")]
    CannotRemoveLastSection,

    /// The station to remove is not on the line
    #[error("station {0} not found in line")]
    StationNotInLine(StationId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SectionError::DuplicateSection {
            up: StationId(1),
            down: StationId(2),
        };
        assert_eq!(err.to_string(), "section 1 -> 2 already exists on the line");

        let err = SectionError::DuplicatedStation(StationId(4));
        assert_eq!(err.to_string(), "station 4 is already on the line");

        let err = SectionError::from(RegistrationError::Disconnected);
        assert_eq!(
            err.to_string(),
            "section does not connect to the existing line"
        );

        let err = SectionError::from(RegistrationError::SplitTooLong {
            new: 10,
            existing: 10,
        });
        assert_eq!(
            err.to_string(),
            "new distance 10 must be strictly less than the section being split (10)"
        );

        let err = SectionError::CannotRemoveLastSection;
        assert_eq!(err.to_string(), "a line must retain at least one section");

        let err = SectionError::StationNotInLine(StationId(9));
        assert_eq!(err.to_string(), "station 9 not found in line");

        let err = SectionError::from(InvalidSection::NonPositiveDistance);
        assert_eq!(err.to_string(), "distance must be positive");
    }
}
