//! Station identity types.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Error returned when a station or line name is invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid name: {reason}")]
pub struct InvalidName {
    reason: &'static str,
}

/// Opaque station identifier, assigned by the station registry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u64);

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-empty, trimmed display name.
///
/// Used for both stations and lines.
///
/// # Examples
///
/// ```
/// use subway_server::domain::Name;
///
/// let name = Name::parse("  Gangnam ").unwrap();
/// assert_eq!(name.as_str(), "Gangnam");
///
/// assert!(Name::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Parse a name, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidName> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidName {
                reason: "must not be empty",
            });
        }
        Ok(Name(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Name {
    type Error = InvalidName;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Name::parse(&s)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A station as seen by a line: its identity plus a display name.
///
/// Equality and hashing use the id only. Two `Station` values with the
/// same id are the same station, even if one copy carries a stale name.
#[derive(Debug, Clone)]
pub struct Station {
    pub id: StationId,
    pub name: Name,
}

impl Station {
    pub fn new(id: StationId, name: Name) -> Self {
        Self { id, name }
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_name() {
        assert!(Name::parse("Gangnam").is_ok());
        assert!(Name::parse("Line 2").is_ok());
        assert!(Name::parse("강남역").is_ok());
    }

    #[test]
    fn name_is_trimmed() {
        let name = Name::parse("\tYeoksam  ").unwrap();
        assert_eq!(name.as_str(), "Yeoksam");
    }

    #[test]
    fn reject_blank_name() {
        assert!(Name::parse("").is_err());
        assert!(Name::parse("   ").is_err());
        assert!(Name::parse("\n\t").is_err());
    }

    #[test]
    fn invalid_name_display() {
        let err = Name::parse("").unwrap_err();
        assert_eq!(err.to_string(), "invalid name: must not be empty");
    }

    #[test]
    fn station_equality_is_by_id() {
        let a = Station::new(StationId(1), Name::parse("Gangnam").unwrap());
        let renamed = Station::new(StationId(1), Name::parse("Gangnam (old)").unwrap());
        let other = Station::new(StationId(2), Name::parse("Gangnam").unwrap());
        assert_eq!(a, renamed);
        assert_ne!(a, other);
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Station::new(StationId(7), Name::parse("Yangjae").unwrap()));
        assert!(set.contains(&Station::new(StationId(7), Name::parse("other").unwrap())));
        assert!(!set.contains(&Station::new(StationId(8), Name::parse("Yangjae").unwrap())));
    }

    #[test]
    fn display() {
        let station = Station::new(StationId(3), Name::parse("Yeoksam").unwrap());
        assert_eq!(station.to_string(), "Yeoksam (#3)");
        assert_eq!(format!("{:?}", StationId(3)), "StationId(3)");
    }

    #[test]
    fn name_deserialize_rejects_blank() {
        let ok: Result<Name, _> = serde_json::from_str("\"Gangnam\"");
        assert!(ok.is_ok());
        let err: Result<Name, _> = serde_json::from_str("\"  \"");
        assert!(err.is_err());
    }
}
