//! Line persistence.
//!
//! Lines are loaded as owned copies, edited in memory, and written back
//! with [`LineRepository::save`]. Nothing a caller does to a loaded line
//! is visible to other callers until it is saved.

mod error;
mod store;

pub use error::LineError;
pub use store::{LineRepository, LineStore};
