//! Line aggregate.
//!
//! A `Line` wraps a [`LinePath`] with an identity and display attributes.
//! Topology edits go straight through to the path.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Distance, LinePath, Name, Section, SectionError, Station};

/// Opaque line identifier, assigned by the line store.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(pub u64);

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named transit line with exactly one path.
///
/// # Examples
///
/// ```
/// use subway_server::domain::{Distance, Line, LineId, Name, Station, StationId};
///
/// let a = Station::new(StationId(1), Name::parse("Gangnam").unwrap());
/// let b = Station::new(StationId(2), Name::parse("Yeoksam").unwrap());
/// let c = Station::new(StationId(3), Name::parse("Seolleung").unwrap());
///
/// let mut line = Line::with_section(
///     LineId(1),
///     Name::parse("Line 2").unwrap(),
///     "bg-green-600".into(),
///     a.clone(),
///     b.clone(),
///     Distance::new(10).unwrap(),
/// )
/// .unwrap();
///
/// line.add_section(b.clone(), c.clone(), Distance::new(5).unwrap()).unwrap();
/// let names: Vec<_> = line.stations().map(|s| s.name.as_str()).collect();
/// assert_eq!(names, ["Gangnam", "Yeoksam", "Seolleung"]);
///
/// line.remove_station(&b).unwrap();
/// assert_eq!(line.path().total_distance(), 15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    id: LineId,
    name: Name,
    color: String,
    path: LinePath,
}

impl Line {
    /// Creates a line with an empty path.
    pub fn new(id: LineId, name: Name, color: String) -> Self {
        Self {
            id,
            name,
            color,
            path: LinePath::new(),
        }
    }

    /// Creates a line whose path starts as the single section `up -> down`.
    pub fn with_section(
        id: LineId,
        name: Name,
        color: String,
        up: Station,
        down: Station,
        distance: Distance,
    ) -> Result<Self, SectionError> {
        let section = Section::new(up, down, distance)?;
        Ok(Self {
            id,
            name,
            color,
            path: LinePath::with_section(section),
        })
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn path(&self) -> &LinePath {
        &self.path
    }

    /// Stations in travel order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.path.stations()
    }

    /// Replaces name and color. Topology is untouched.
    pub fn rename(&mut self, name: Name, color: String) {
        self.name = name;
        self.color = color;
    }

    /// See [`LinePath::add_section`].
    pub fn add_section(
        &mut self,
        up: Station,
        down: Station,
        distance: Distance,
    ) -> Result<(), SectionError> {
        let section = Section::new(up, down, distance)?;
        self.path.add_section(section)
    }

    /// See [`LinePath::remove_station`].
    pub fn remove_station(&mut self, station: &Station) -> Result<(), SectionError> {
        self.path.remove_station(station)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{InvalidSection, StationId};

    fn station(id: u64, name: &str) -> Station {
        Station::new(StationId(id), Name::parse(name).unwrap())
    }

    fn distance(d: u32) -> Distance {
        Distance::new(d).unwrap()
    }

    fn line_2() -> Line {
        Line::new(LineId(2), Name::parse("Line 2").unwrap(), "bg-green-600".into())
    }

    fn names(line: &Line) -> Vec<&str> {
        line.stations().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn rename_replaces_name_and_color() {
        let mut line = Line::with_section(
            LineId(1),
            Name::parse("Bundang").unwrap(),
            "bg-yellow-600".into(),
            station(1, "Gangnam"),
            station(2, "Yeoksam"),
            distance(10),
        )
        .unwrap();

        line.rename(Name::parse("Sinbundang").unwrap(), "bg-red-600".into());

        assert_eq!(line.name().as_str(), "Sinbundang");
        assert_eq!(line.color(), "bg-red-600");
        assert_eq!(names(&line), vec!["Gangnam", "Yeoksam"]);
    }

    #[test]
    fn new_line_is_empty() {
        let line = line_2();
        assert_eq!(line.id(), LineId(2));
        assert!(line.path().is_empty());
        assert_eq!(line.stations().count(), 0);
    }

    #[test]
    fn add_section_to_empty_line() {
        let mut line = line_2();
        line.add_section(station(1, "Gangnam"), station(2, "Yeoksam"), distance(10))
            .unwrap();
        assert_eq!(names(&line), vec!["Gangnam", "Yeoksam"]);
    }

    #[test]
    fn add_section_split_too_long() {
        let mut line = line_2();
        line.add_section(station(1, "Gangnam"), station(2, "Yeoksam"), distance(5))
            .unwrap();

        let err = line
            .add_section(station(1, "Gangnam"), station(3, "Yangjae"), distance(5))
            .unwrap_err();

        assert!(matches!(err, SectionError::Registration(_)));
        assert_eq!(names(&line), vec!["Gangnam", "Yeoksam"]);
    }

    #[test]
    fn add_section_reversed_is_duplicated_station() {
        let mut line = line_2();
        line.add_section(station(1, "Gangnam"), station(2, "Yeoksam"), distance(5))
            .unwrap();

        let err = line
            .add_section(station(2, "Yeoksam"), station(1, "Gangnam"), distance(5))
            .unwrap_err();

        assert!(matches!(err, SectionError::DuplicatedStation(_)));
    }

    #[test]
    fn add_section_rejects_self_loop() {
        let mut line = line_2();
        let err = line
            .add_section(station(1, "Gangnam"), station(1, "Gangnam"), distance(5))
            .unwrap_err();
        assert_eq!(
            err,
            SectionError::InvalidSection(InvalidSection::SameEndpoints(StationId(1)))
        );
    }

    #[test]
    fn with_section_rejects_self_loop() {
        let result = Line::with_section(
            LineId(1),
            Name::parse("Line 9").unwrap(),
            "#BDB092".into(),
            station(1, "Gangnam"),
            station(1, "Gangnam"),
            distance(3),
        );
        assert!(result.is_err());
    }

    #[test]
    fn remove_station_delegates() {
        let mut line = line_2();
        line.add_section(station(1, "Gangnam"), station(2, "Yeoksam"), distance(10))
            .unwrap();
        line.add_section(station(2, "Yeoksam"), station(3, "Seolleung"), distance(5))
            .unwrap();

        line.remove_station(&station(2, "Yeoksam")).unwrap();
        assert_eq!(names(&line), vec!["Gangnam", "Seolleung"]);
        assert_eq!(line.path().sections()[0].distance(), distance(15));

        assert_eq!(
            line.remove_station(&station(1, "Gangnam")),
            Err(SectionError::CannotRemoveLastSection)
        );
    }

    #[test]
    fn line_id_display() {
        assert_eq!(LineId(5).to_string(), "5");
        assert_eq!(format!("{:?}", LineId(5)), "LineId(5)");
    }
}
