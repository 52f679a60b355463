//! Copy a resolved version into every file that contains a placeholder.
//!
//! A run goes through validation, discovery, filtering, rewriting and a
//! final report. Only validation failures and a missing target abort the
//! run. A file that cannot be read or written during rewriting is skipped
//! with a warning and the remaining files are still processed. Files that
//! were already rewritten stay rewritten.

use std::path::{Path, PathBuf};

use crate::domain::SemanticVersion;
use crate::error::{PkgVersionError, Result};
use crate::fs::{FileStore, PathKind};
use crate::ui::{formatter, Notifier};
use crate::warning::RewriteWarning;

/// Placeholder replaced when no subject is configured
pub const DEFAULT_SUBJECT: &str = "__VERSION__";

/// What to rewrite and which token to look for
#[derive(Debug, Clone, PartialEq)]
pub struct CopyOptions {
    /// File or directory to scan
    pub target: PathBuf,
    /// Literal token to replace
    pub subject: String,
}

impl CopyOptions {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        CopyOptions {
            target: target.into(),
            subject: DEFAULT_SUBJECT.to_string(),
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Check the options before any I/O happens
    pub fn validate(&self) -> Result<()> {
        if self.target.as_os_str().is_empty() {
            return Err(PkgVersionError::validation("target path must not be empty"));
        }
        if self.subject.is_empty() {
            return Err(PkgVersionError::validation("subject must not be empty"));
        }
        Ok(())
    }
}

/// Outcome of a copy run
#[derive(Debug, Clone, PartialEq)]
pub struct CopyReport {
    pub version: String,
    pub subject: String,
    /// Files that contained the subject
    pub candidates: usize,
    /// Files actually written
    pub updated: usize,
    pub warnings: Vec<RewriteWarning>,
}

/// Replace every occurrence of `options.subject` with `version` under `options.target`.
///
/// # Returns
/// * `Ok(CopyReport)` - run completed, possibly with per-file warnings or zero candidates
/// * `Err(Validation)` - options rejected
/// * `Err(NotFound)` - target does not exist
/// * `Err(Io)` - the target directory could not be listed
pub fn copy_version(
    store: &dyn FileStore,
    notifier: &dyn Notifier,
    version: &SemanticVersion,
    options: &CopyOptions,
) -> Result<CopyReport> {
    options.validate()?;

    let version_text = version.to_string();
    let subject = options.subject.as_str();

    let mut spinner = notifier.spinner(&formatter::searching(subject, &options.target));

    // An abort drops the spinner unfinished; the caller reports the error.
    let discovered = discover(store, &options.target)?;
    tracing::debug!(count = discovered.len(), target = %options.target.display(), "discovered files");

    let candidates = filter_candidates(store, discovered, subject);

    let mut report = CopyReport {
        version: version_text.clone(),
        subject: subject.to_string(),
        candidates: candidates.len(),
        updated: 0,
        warnings: Vec::new(),
    };

    if candidates.is_empty() {
        spinner.info(&formatter::no_files_found(subject));
        return Ok(report);
    }

    spinner.set_text(&formatter::rewriting(candidates.len(), &version_text));

    for path in &candidates {
        match rewrite(store, path, subject, &version_text) {
            Ok(true) => {
                tracing::info!(file = %path.display(), version = %version_text, "updated file");
                report.updated += 1;
            }
            Ok(false) => {
                tracing::debug!(file = %path.display(), "subject vanished before rewrite");
            }
            Err(warning) => {
                tracing::warn!(file = %path.display(), "{}", warning);
                notifier.warning(&warning.to_string());
                report.warnings.push(warning);
            }
        }
    }

    spinner.succeed(&formatter::copy_summary(
        report.updated,
        report.candidates,
        &version_text,
    ));
    Ok(report)
}

/// Regular files the run should look at.
fn discover(store: &dyn FileStore, target: &Path) -> Result<Vec<PathBuf>> {
    match store.kind(target) {
        None => Err(PkgVersionError::not_found(target)),
        Some(PathKind::File) => Ok(vec![target.to_path_buf()]),
        Some(PathKind::Directory) => Ok(store.list_files(target)?),
        Some(PathKind::Other) => Ok(Vec::new()),
    }
}

/// Keep files containing `subject`. Unreadable files are dropped silently.
fn filter_candidates(store: &dyn FileStore, files: Vec<PathBuf>, subject: &str) -> Vec<PathBuf> {
    files
        .into_iter()
        .filter(|path| match store.read_to_string(path) {
            Ok(content) => content.contains(subject),
            Err(e) => {
                tracing::debug!(file = %path.display(), error = %e, "skipping unreadable file");
                false
            }
        })
        .collect()
}

/// Rewrite one file. `Ok(false)` means the content did not change.
fn rewrite(
    store: &dyn FileStore,
    path: &Path,
    subject: &str,
    version: &str,
) -> std::result::Result<bool, RewriteWarning> {
    let content = store
        .read_to_string(path)
        .map_err(|e| RewriteWarning::Unreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let replaced = content.replace(subject, version);
    if replaced == content {
        return Ok(false);
    }

    store
        .write(path, &replaced)
        .map_err(|e| RewriteWarning::Unwritable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    Ok(true)
}
