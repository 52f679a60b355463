//! File access abstraction layer
//!
//! Everything that touches the file system goes through the [FileStore]
//! trait so the version and substitution logic can run against either the
//! real disk or an in-memory tree.
//!
//! - [os::OsFileStore]: std::fs plus `walkdir` for recursive listing
//! - [mock::MemoryFileStore]: in-memory tree with failure injection for tests
//!
//! ```rust
//! # use pkg_version::fs::{FileStore, PathKind};
//! # use std::path::Path;
//! # fn example(store: &dyn FileStore) -> std::io::Result<()> {
//! if store.kind(Path::new("src")) == Some(PathKind::Directory) {
//!     let files = store.list_files(Path::new("src"))?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod os;

pub use mock::MemoryFileStore;
pub use os::OsFileStore;

use crate::error::{PkgVersionError, Result};
use std::io;
use std::path::{Path, PathBuf};

/// What a path points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
    /// Exists but is neither a regular file nor a directory (socket, fifo, ...)
    Other,
}

impl PathKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PathKind::File => "file",
            PathKind::Directory => "directory",
            PathKind::Other => "special file",
        }
    }
}

/// File system operations needed by pkg-version
///
/// ## Traversal policy
///
/// [FileStore::list_files] returns regular files only, at any depth, including
/// hidden entries. Symbolic links are neither followed nor listed.
pub trait FileStore: Send + Sync {
    /// Kind of the entry at `path`, following a symlink at `path` itself.
    ///
    /// Returns `None` when nothing exists there.
    fn kind(&self, path: &Path) -> Option<PathKind>;

    /// Read the whole file as UTF-8 text
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Replace the file's contents
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Recursively list regular files below `dir`, sorted by path
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
}

/// Confirm that `path` exists and is of the `expected` kind.
///
/// # Returns
/// * `Ok(())` - path exists with the expected kind
/// * `Err(NotFound)` - nothing at `path`
/// * `Err(Validation)` - something else is at `path`
pub fn expect_kind(store: &dyn FileStore, path: &Path, expected: PathKind) -> Result<()> {
    match store.kind(path) {
        None => Err(PkgVersionError::not_found(path)),
        Some(kind) if kind == expected => Ok(()),
        Some(kind) => Err(PkgVersionError::validation(format!(
            "{} is a {}, expected a {}",
            path.display(),
            kind.as_str(),
            expected.as_str()
        ))),
    }
}
