//! Domain logic - pure version rules independent of file I/O

pub mod version;

pub use version::{Direction, SemanticVersion, VersionPart};
