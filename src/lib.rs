pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod fs;
pub mod logging;
pub mod manifest;
pub mod scaffold;
pub mod substitute;
pub mod ui;
pub mod warning;

pub use domain::{Direction, SemanticVersion, VersionPart};
pub use error::{PkgVersionError, Result};
