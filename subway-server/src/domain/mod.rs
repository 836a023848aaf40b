//! Domain types for the subway line manager.
//!
//! This module contains the core model: stations, sections, the ordered
//! path a line follows, and the line aggregate itself. All types enforce
//! their invariants at construction or on every edit, so code that
//! receives these types can trust their validity.

mod error;
mod line;
mod path;
mod section;
mod station;

pub use error::{RegistrationError, SectionError};
pub use line::{Line, LineId};
pub use path::LinePath;
pub use section::{Distance, InvalidSection, Section};
pub use station::{InvalidName, Name, Station, StationId};
