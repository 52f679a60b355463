use crate::fs::{FileStore, PathKind};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// In-memory file tree for testing without touching the disk
///
/// Directories are implied by the files below them; empty ones can be added
/// with [MemoryFileStore::add_dir]. Reads and writes of individual paths can
/// be made to fail.
pub struct MemoryFileStore {
    files: Mutex<BTreeMap<PathBuf, String>>,
    dirs: BTreeSet<PathBuf>,
    /// Remaining successful reads before a path starts failing
    read_budget: Mutex<HashMap<PathBuf, usize>>,
    failing_writes: HashSet<PathBuf>,
    writes: Mutex<Vec<PathBuf>>,
}

impl MemoryFileStore {
    /// Create a new empty store
    pub fn new() -> Self {
        MemoryFileStore {
            files: Mutex::new(BTreeMap::new()),
            dirs: BTreeSet::new(),
            read_budget: Mutex::new(HashMap::new()),
            failing_writes: HashSet::new(),
            writes: Mutex::new(Vec::new()),
        }
    }

    /// Add (or replace) a file
    pub fn add_file(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files
            .get_mut()
            .unwrap_or_else(|e| e.into_inner())
            .insert(path.into(), contents.into());
    }

    /// Add an empty directory
    pub fn add_dir(&mut self, path: impl Into<PathBuf>) {
        self.dirs.insert(path.into());
    }

    /// Let `path` be read `successes` times, then fail every later read
    pub fn fail_reads_after(&mut self, path: impl Into<PathBuf>, successes: usize) {
        self.read_budget
            .get_mut()
            .unwrap_or_else(|e| e.into_inner())
            .insert(path.into(), successes);
    }

    /// Make every write to `path` fail
    pub fn fail_writes(&mut self, path: impl Into<PathBuf>) {
        self.failing_writes.insert(path.into());
    }

    /// Current contents of a file
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files_guard().get(path.as_ref()).cloned()
    }

    /// Paths written so far, in order
    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn files_guard(&self) -> std::sync::MutexGuard<'_, BTreeMap<PathBuf, String>> {
        self.files.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.iter().any(|d| d.starts_with(path))
            || self
                .files_guard()
                .keys()
                .any(|f| f != path && f.starts_with(path))
    }
}

impl Default for MemoryFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStore for MemoryFileStore {
    fn kind(&self, path: &Path) -> Option<PathKind> {
        if self.files_guard().contains_key(path) {
            Some(PathKind::File)
        } else if self.is_dir(path) {
            Some(PathKind::Directory)
        } else {
            None
        }
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let mut budget = self.read_budget.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(remaining) = budget.get_mut(path) {
            if *remaining == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    format!("read of {} refused", path.display()),
                ));
            }
            *remaining -= 1;
        }
        drop(budget);

        self.contents(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        if self.failing_writes.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("write to {} refused", path.display()),
            ));
        }
        if self.is_dir(path) {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("{} is a directory", path.display()),
            ));
        }
        self.files_guard()
            .insert(path.to_path_buf(), contents.to_string());
        self.writes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(path.to_path_buf());
        Ok(())
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        if !self.is_dir(dir) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not a directory", dir.display()),
            ));
        }
        Ok(self
            .files_guard()
            .keys()
            .filter(|f| f.starts_with(dir))
            .cloned()
            .collect())
    }
}
