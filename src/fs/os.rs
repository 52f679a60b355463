use crate::fs::{FileStore, PathKind};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// [FileStore] backed by the real file system
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileStore;

impl OsFileStore {
    pub fn new() -> Self {
        OsFileStore
    }
}

impl FileStore for OsFileStore {
    fn kind(&self, path: &Path) -> Option<PathKind> {
        let metadata = fs::metadata(path).ok()?;
        let kind = if metadata.is_file() {
            PathKind::File
        } else if metadata.is_dir() {
            PathKind::Directory
        } else {
            PathKind::Other
        };
        Some(kind)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        // follow_links(false) reports symlinks as symlinks, so is_file() skips them.
        for entry in WalkDir::new(dir).follow_links(false).sort_by_file_name() {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() {
                        files.push(entry.into_path());
                    }
                }
                Err(err) if err.depth() == 0 => return Err(err.into()),
                Err(err) => {
                    tracing::debug!(error = %err, "skipping unreadable entry");
                }
            }
        }

        files.sort();
        Ok(files)
    }
}
