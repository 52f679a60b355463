use crate::error::{PkgVersionError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// `MAJOR.MINOR.PATCH` with an optional `-BUILD` suffix. Numeric groups carry no
/// leading zeros so that formatting a parsed version reproduces the input.
const VERSION_PATTERN: &str = r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)(?:-((?s:.+)))?$";

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VERSION_PATTERN).expect("version pattern is valid"))
}

/// Semantic version with an opaque build tag.
///
/// The build tag is carried through parsing, formatting and adjustment
/// untouched. When present it is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    build: Option<String>,
}

/// Which numeric part of a version to adjust
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionPart {
    Major,
    Minor,
    Patch,
}

/// Direction of an adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl SemanticVersion {
    /// Create a new version without a build tag
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            build: None,
        }
    }

    /// Attach a build tag. Fails when the tag is empty.
    pub fn with_build(self, build: impl Into<String>) -> Result<Self> {
        let build = build.into();
        if build.is_empty() {
            return Err(PkgVersionError::format("build tag must not be empty"));
        }
        Ok(SemanticVersion {
            build: Some(build),
            ..self
        })
    }

    /// The build tag, if any
    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    /// Parse a version string (e.g., "1.2.3" or "1.2.3-beta.1")
    ///
    /// The whole string must match; there is no partial parse.
    pub fn parse(text: &str) -> Result<Self> {
        let caps = version_regex().captures(text).ok_or_else(|| {
            PkgVersionError::format(format!(
                "'{}' - expected MAJOR.MINOR.PATCH or MAJOR.MINOR.PATCH-BUILD",
                text
            ))
        })?;

        let number = |index: usize, name: &str| -> Result<u64> {
            caps[index].parse::<u64>().map_err(|_| {
                PkgVersionError::format(format!("{} version out of range: {}", name, &caps[index]))
            })
        };

        Ok(SemanticVersion {
            major: number(1, "major")?,
            minor: number(2, "minor")?,
            patch: number(3, "patch")?,
            build: caps.get(4).map(|m| m.as_str().to_string()),
        })
    }

    /// Adjust one part of the version.
    ///
    /// - **Up**: part += 1, lower parts reset to 0
    /// - **Down**: part -= 1 when it is above 0, otherwise the version is returned as is
    ///
    /// The build tag is kept in both directions.
    pub fn adjust(&self, part: VersionPart, direction: Direction) -> Self {
        let mut next = self.clone();
        match (direction, part) {
            (Direction::Up, VersionPart::Major) => {
                next.major = self.major.saturating_add(1);
                next.minor = 0;
                next.patch = 0;
            }
            (Direction::Up, VersionPart::Minor) => {
                next.minor = self.minor.saturating_add(1);
                next.patch = 0;
            }
            (Direction::Up, VersionPart::Patch) => {
                next.patch = self.patch.saturating_add(1);
            }
            (Direction::Down, VersionPart::Major) => {
                next.major = self.major.saturating_sub(1);
            }
            (Direction::Down, VersionPart::Minor) => {
                next.minor = self.minor.saturating_sub(1);
            }
            (Direction::Down, VersionPart::Patch) => {
                next.patch = self.patch.saturating_sub(1);
            }
        }
        next
    }
}

impl FromStr for SemanticVersion {
    type Err = PkgVersionError;

    fn from_str(s: &str) -> Result<Self> {
        SemanticVersion::parse(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(build) = &self.build {
            write!(f, "-{}", build)?;
        }
        Ok(())
    }
}

impl VersionPart {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionPart::Major => "major",
            VersionPart::Minor => "minor",
            VersionPart::Patch => "patch",
        }
    }
}

impl fmt::Display for VersionPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
