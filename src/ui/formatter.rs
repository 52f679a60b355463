//! Pure message builders for user-facing output.
//!
//! Every string the notifier shows is built here so the wording can be
//! tested without capturing terminal output.

use crate::domain::{Direction, SemanticVersion, VersionPart};
use std::path::Path;

/// Spinner text while looking for candidate files.
pub fn searching(subject: &str, target: &Path) -> String {
    format!("Searching {} for '{}'", target.display(), subject)
}

/// Reported when no file under the target contains the subject.
pub fn no_files_found(subject: &str) -> String {
    format!("no files found containing '{}'", subject)
}

/// Spinner text while rewriting candidates.
pub fn rewriting(candidates: usize, version: &str) -> String {
    format!("Writing version {} into {} file(s)", version, candidates)
}

/// Final summary of a copy run.
///
/// # Example
/// ```ignore
/// assert_eq!(copy_summary(1, 2, "1.2.3"), "1 of 2 files updated with version 1.2.3");
/// ```
pub fn copy_summary(updated: usize, candidates: usize, version: &str) -> String {
    format!(
        "{} of {} files updated with version {}",
        updated, candidates, version
    )
}

/// Success line after the manifest version changed.
pub fn version_changed(from: &SemanticVersion, to: &SemanticVersion, manifest: &Path) -> String {
    format!("Version changed from {} to {} in {}", from, to, manifest.display())
}

/// Info line when `--down` hit the zero floor.
pub fn version_unchanged(version: &SemanticVersion, part: VersionPart, direction: Direction) -> String {
    match direction {
        Direction::Down => format!(
            "{} version is already 0, {} left unchanged",
            part, version
        ),
        Direction::Up => format!("{} left unchanged", version),
    }
}

/// Success line after writing a TypeScript version module.
pub fn module_written(path: &Path, version: &SemanticVersion) -> String {
    format!("Wrote version {} to {}", version, path.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_summary() {
        assert_eq!(
            copy_summary(1, 1, "1.2.3"),
            "1 of 1 files updated with version 1.2.3"
        );
    }

    #[test]
    fn test_no_files_found() {
        assert_eq!(
            no_files_found("__VERSION__"),
            "no files found containing '__VERSION__'"
        );
    }

    #[test]
    fn test_version_unchanged_down() {
        let v = SemanticVersion::new(0, 4, 1);
        assert_eq!(
            version_unchanged(&v, VersionPart::Major, Direction::Down),
            "major version is already 0, 0.4.1 left unchanged"
        );
    }

    #[test]
    fn test_version_changed() {
        let msg = version_changed(
            &SemanticVersion::new(1, 2, 3),
            &SemanticVersion::new(2, 0, 0),
            Path::new("package.json"),
        );
        assert_eq!(msg, "Version changed from 1.2.3 to 2.0.0 in package.json");
    }
}
