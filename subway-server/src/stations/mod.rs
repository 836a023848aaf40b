//! Station registry.
//!
//! Owns station identity (id and name). Lines never create or delete
//! stations; they only resolve ids through [`StationDirectory`].

mod error;
mod registry;

pub use error::StationError;
pub use registry::{StationDirectory, StationRegistry};
