//! The ordered chain of sections that makes up a line.
//!
//! A `LinePath` is a plain `Vec<Section>` kept in travel order. Station
//! order is derived from it rather than stored. Every edit is computed on
//! a copy of the section list and only swapped in once it is known to be
//! valid, so a failed edit leaves the path untouched.

use super::{Distance, RegistrationError, Section, SectionError, Station};

/// The topology of a single line.
///
/// # Invariants
///
/// - `sections[i].down() == sections[i + 1].up()` for every adjacent pair
/// - no station appears more than once along the chain
///
/// The path may be empty (a freshly created line).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinePath {
    sections: Vec<Section>,
}

impl LinePath {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path holding a single section.
    pub fn with_section(section: Section) -> Self {
        Self {
            sections: vec![section],
        }
    }

    /// Returns the sections in travel order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns the number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns true if the path has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns the stations in travel order.
    ///
    /// The up station of the first section, then the down station of
    /// every section. Empty for an empty path.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.sections
            .first()
            .map(Section::up)
            .into_iter()
            .chain(self.sections.iter().map(Section::down))
    }

    /// Returns the up-most terminal station.
    pub fn first_station(&self) -> Option<&Station> {
        self.sections.first().map(Section::up)
    }

    /// Returns the down-most terminal station.
    pub fn last_station(&self) -> Option<&Station> {
        self.sections.last().map(Section::down)
    }

    /// Returns true if `station` is anywhere on the path.
    pub fn contains(&self, station: &Station) -> bool {
        self.sections.iter().any(|s| s.touches(station))
    }

    /// Sum of all section distances.
    pub fn total_distance(&self) -> u64 {
        self.sections
            .iter()
            .map(|s| u64::from(s.distance().get()))
            .sum()
    }

    /// Attaches a section to the path.
    ///
    /// Checks, in order:
    /// 1. identical up/down already connected: `DuplicateSection`
    /// 2. both endpoints already on the line: `DuplicatedStation`
    /// 3. neither endpoint on the line: `Disconnected`
    /// 4. up is the last station: append
    /// 5. down is the first station: prepend
    /// 6. up is the up side of a section: split it after `up`
    /// 7. down is the down side of a section: split it before `down`
    ///
    /// A split requires the new distance to be strictly shorter than the
    /// section it divides. An empty path accepts any section.
    pub fn add_section(&mut self, section: Section) -> Result<(), SectionError> {
        let next = self.with_added(section)?;
        self.sections = next;
        debug_assert!(is_simple_chain(&self.sections));
        Ok(())
    }

    /// Detaches a station from the path.
    ///
    /// A terminal station takes its one section with it. An interior
    /// station is dropped by merging its two sections into one whose
    /// distance is their sum. A path with a single section cannot shrink.
    pub fn remove_station(&mut self, station: &Station) -> Result<(), SectionError> {
        let next = self.with_removed(station)?;
        self.sections = next;
        debug_assert!(is_simple_chain(&self.sections));
        Ok(())
    }

    fn with_added(&self, new: Section) -> Result<Vec<Section>, SectionError> {
        let (Some(first), Some(last)) = (self.first_station(), self.last_station()) else {
            return Ok(vec![new]);
        };

        if self
            .sections
            .iter()
            .any(|s| s.up() == new.up() && s.down() == new.down())
        {
            return Err(SectionError::DuplicateSection {
                up: new.up().id,
                down: new.down().id,
            });
        }

        let up_known = self.contains(new.up());
        let down_known = self.contains(new.down());
        match (up_known, down_known) {
            (true, true) => return Err(SectionError::DuplicatedStation(new.down().id)),
            (false, false) => return Err(RegistrationError::Disconnected.into()),
            _ => {}
        }

        let mut next = self.sections.clone();

        if new.up() == last {
            next.push(new);
        } else if new.down() == first {
            next.insert(0, new);
        } else if up_known {
            let idx = self
                .sections
                .iter()
                .position(|s| s.up() == new.up())
                .ok_or(RegistrationError::Disconnected)?;
            let old = &self.sections[idx];
            let rest = split_remainder(old.distance(), new.distance())?;
            let tail = Section::new(new.down().clone(), old.down().clone(), rest)?;
            next[idx] = new;
            next.insert(idx + 1, tail);
        } else {
            let idx = self
                .sections
                .iter()
                .position(|s| s.down() == new.down())
                .ok_or(RegistrationError::Disconnected)?;
            let old = &self.sections[idx];
            let rest = split_remainder(old.distance(), new.distance())?;
            let head = Section::new(old.up().clone(), new.up().clone(), rest)?;
            next[idx] = head;
            next.insert(idx + 1, new);
        }

        Ok(next)
    }

    fn with_removed(&self, station: &Station) -> Result<Vec<Section>, SectionError> {
        if self.sections.len() == 1 {
            return Err(SectionError::CannotRemoveLastSection);
        }

        let as_down = self.sections.iter().position(|s| s.down() == station);
        let as_up = self.sections.iter().position(|s| s.up() == station);

        let mut next = self.sections.clone();
        match (as_down, as_up) {
            // terminal: first up station or last down station
            (None, Some(idx)) | (Some(idx), None) => {
                next.remove(idx);
            }
            (Some(before), Some(after)) => {
                let prev = &self.sections[before];
                let following = &self.sections[after];
                let distance = prev.distance().checked_add(following.distance())?;
                let merged = Section::new(prev.up().clone(), following.down().clone(), distance)?;
                next[before] = merged;
                next.remove(after);
            }
            (None, None) => return Err(SectionError::StationNotInLine(station.id)),
        }

        Ok(next)
    }
}

fn split_remainder(existing: Distance, new: Distance) -> Result<Distance, RegistrationError> {
    existing
        .checked_sub(new)
        .ok_or(RegistrationError::SplitTooLong {
            new: new.get(),
            existing: existing.get(),
        })
}

fn is_simple_chain(sections: &[Section]) -> bool {
    let connected = sections.windows(2).all(|w| w[0].down() == w[1].up());
    let mut seen = std::collections::HashSet::new();
    let unique = sections
        .first()
        .map(Section::up)
        .into_iter()
        .chain(sections.iter().map(Section::down))
        .all(|s| seen.insert(s.id));
    connected && unique
}
