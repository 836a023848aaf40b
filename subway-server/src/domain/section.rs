//! Sections: the directed edges of a line.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Station;

/// Reasons a section cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSection {
    /// Up and down station are the same station
    #[error("section endpoints must differ (both are station {0})")]
    SameEndpoints(super::StationId),

    /// Distance is zero
    #[error("distance must be positive")]
    NonPositiveDistance,

    /// Merged distance does not fit
    #[error("distance overflow")]
    DistanceOverflow,
}

/// A strictly positive, unit-less distance.
///
/// # Examples
///
/// ```
/// use subway_server::domain::Distance;
///
/// let ten = Distance::new(10).unwrap();
/// let four = Distance::new(4).unwrap();
/// assert_eq!(ten.checked_sub(four).map(|d| d.get()), Some(6));
///
/// // A split must leave something on both sides
/// assert!(ten.checked_sub(ten).is_none());
/// assert!(Distance::new(0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Distance(u32);

impl Distance {
    pub fn new(value: u32) -> Result<Self, InvalidSection> {
        if value == 0 {
            return Err(InvalidSection::NonPositiveDistance);
        }
        Ok(Distance(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Remainder after cutting `other` off this distance.
    ///
    /// `None` unless `other` is strictly shorter.
    pub fn checked_sub(self, other: Distance) -> Option<Distance> {
        match self.0.checked_sub(other.0) {
            Some(0) | None => None,
            Some(rest) => Some(Distance(rest)),
        }
    }

    pub fn checked_add(self, other: Distance) -> Result<Distance, InvalidSection> {
        self.0
            .checked_add(other.0)
            .map(Distance)
            .ok_or(InvalidSection::DistanceOverflow)
    }
}

impl TryFrom<u32> for Distance {
    type Error = InvalidSection;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Distance::new(value)
    }
}

impl From<Distance> for u32 {
    fn from(d: Distance) -> Self {
        d.0
    }
}

impl fmt::Debug for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Distance({})", self.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed connection from `up` to `down` covering `distance`.
///
/// # Invariants
///
/// - `up != down`
/// - `distance > 0` (guaranteed by [`Distance`])
///
/// Two sections are equal when both endpoints and the distance match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Section {
    up: Station,
    down: Station,
    distance: Distance,
}

impl Section {
    /// Creates a section, rejecting a self-loop.
    pub fn new(up: Station, down: Station, distance: Distance) -> Result<Self, InvalidSection> {
        if up == down {
            return Err(InvalidSection::SameEndpoints(up.id));
        }
        Ok(Self { up, down, distance })
    }

    pub fn up(&self) -> &Station {
        &self.up
    }

    pub fn down(&self) -> &Station {
        &self.down
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// True if `station` is either endpoint.
    pub fn touches(&self, station: &Station) -> bool {
        &self.up == station || &self.down == station
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.up, self.down, self.distance)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Splitting then re-adding gives back the original distance
        #[test]
        fn sub_then_add_is_identity(
            (total, cut) in (2u32..100_000).prop_flat_map(|t| (Just(t), 1..t)),
        ) {
            let total = Distance::new(total).unwrap();
            let cut = Distance::new(cut).unwrap();
            let rest = total.checked_sub(cut).unwrap();
            prop_assert_eq!(cut.checked_add(rest).unwrap(), total);
        }

        /// Every positive value is a valid distance
        #[test]
        fn positive_always_valid(d in 1u32..) {
            prop_assert_eq!(Distance::new(d).unwrap().get(), d);
        }
    }
}
