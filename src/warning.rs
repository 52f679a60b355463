use std::fmt;
use std::path::PathBuf;

/// Per-file problems hit while rewriting candidates.
/// These are non-fatal: the file is skipped and the run continues.
#[derive(Debug, Clone, PartialEq)]
pub enum RewriteWarning {
    /// Candidate could not be re-read before rewriting
    Unreadable { path: PathBuf, reason: String },
    /// Rewritten content could not be written back
    Unwritable { path: PathBuf, reason: String },
}

impl RewriteWarning {
    pub fn path(&self) -> &PathBuf {
        match self {
            RewriteWarning::Unreadable { path, .. } | RewriteWarning::Unwritable { path, .. } => {
                path
            }
        }
    }
}

impl fmt::Display for RewriteWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewriteWarning::Unreadable { path, reason } => {
                write!(f, "Skipped {}: could not read file ({})", path.display(), reason)
            }
            RewriteWarning::Unwritable { path, reason } => {
                write!(f, "Skipped {}: could not write file ({})", path.display(), reason)
            }
        }
    }
}
