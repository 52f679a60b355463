//! Command workflows
//!
//! Each `run_*` function is one subcommand with clap parsing kept out of it.
//! Failures are reported through the notifier once and also returned, so
//! the binary can exit normally while library callers still see the cause.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::{Direction, SemanticVersion, VersionPart};
use crate::error::{PkgVersionError, Result};
use crate::fs::{self, FileStore, PathKind};
use crate::manifest::{self, ManifestKind};
use crate::scaffold::{self, TsStyle};
use crate::substitute::{self, CopyOptions, CopyReport};
use crate::ui::{formatter, Notifier};

/// Everything a workflow needs from its environment
pub struct Session<'a> {
    /// Directory relative paths and manifest discovery start from
    pub working_dir: &'a Path,
    pub config: &'a Config,
    pub store: &'a dyn FileStore,
    pub notifier: &'a dyn Notifier,
}

/// Options shared by every command that reads the manifest
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ManifestArgs {
    /// Explicit manifest path (`--package`)
    pub package: Option<PathBuf>,
    /// Manifest type override (`--type`)
    pub kind: Option<ManifestKind>,
}

/// Arguments for `copyto`
#[derive(Debug, Clone, PartialEq)]
pub struct CopyArgs {
    pub target: String,
    pub subject: Option<String>,
    pub manifest: ManifestArgs,
}

/// Arguments for `major`, `minor` and `patch`
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustArgs {
    pub part: VersionPart,
    pub direction: Direction,
    pub manifest: ManifestArgs,
}

/// Arguments for `create-ts`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTsArgs {
    pub target: String,
    pub single_quotes: bool,
    pub semi: bool,
    pub manifest: ManifestArgs,
}

/// Result of an adjust command
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustOutcome {
    pub manifest: PathBuf,
    pub previous: SemanticVersion,
    pub current: SemanticVersion,
    /// False when the version did not change and the manifest was left alone
    pub written: bool,
}

impl Session<'_> {
    fn resolve(&self, path: &Path) -> PathBuf {
        self.working_dir.join(path)
    }

    /// Report a failure once and hand it back
    fn report<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            self.notifier.error(&e.to_string());
        }
        result
    }

    /// Manifest path from `--package` or from the working directory
    fn manifest_path(&self, args: &ManifestArgs) -> Result<PathBuf> {
        match &args.package {
            Some(package) => {
                let path = self.resolve(package);
                fs::expect_kind(self.store, &path, PathKind::File)?;
                Ok(path)
            }
            None => {
                let kind = args.kind.unwrap_or(self.config.manifest.kind);
                manifest::locate(self.store, self.working_dir, kind)
            }
        }
    }

    fn manifest_version(&self, args: &ManifestArgs) -> Result<(PathBuf, SemanticVersion)> {
        let path = self.manifest_path(args)?;
        let version = manifest::read_version(self.store, &path)?;
        Ok((path, version))
    }
}

/// `copyto`: write the manifest version into every file containing the subject
pub fn run_copy(session: &Session<'_>, args: &CopyArgs) -> Result<CopyReport> {
    session.report(copy(session, args))
}

fn copy(session: &Session<'_>, args: &CopyArgs) -> Result<CopyReport> {
    let subject = args
        .subject
        .clone()
        .unwrap_or_else(|| session.config.copy.subject.clone());
    let options = CopyOptions::new(&args.target).with_subject(subject);
    options.validate()?;

    let (_, version) = session.manifest_version(&args.manifest)?;

    let options = CopyOptions {
        target: session.resolve(&options.target),
        ..options
    };
    substitute::copy_version(session.store, session.notifier, &version, &options)
}

/// `major`, `minor`, `patch`: move one part of the manifest version
pub fn run_adjust(session: &Session<'_>, args: &AdjustArgs) -> Result<AdjustOutcome> {
    session.report(adjust(session, args))
}

fn adjust(session: &Session<'_>, args: &AdjustArgs) -> Result<AdjustOutcome> {
    let (path, previous) = session.manifest_version(&args.manifest)?;
    let current = previous.adjust(args.part, args.direction);

    if current == previous {
        session
            .notifier
            .info(&formatter::version_unchanged(&previous, args.part, args.direction));
        return Ok(AdjustOutcome {
            manifest: path,
            previous,
            current,
            written: false,
        });
    }

    manifest::write_version(session.store, &path, &current)?;
    session
        .notifier
        .success(&formatter::version_changed(&previous, &current, &path));

    Ok(AdjustOutcome {
        manifest: path,
        previous,
        current,
        written: true,
    })
}

/// `create-ts`: write a TypeScript module exporting the manifest version
pub fn run_create_ts(session: &Session<'_>, args: &CreateTsArgs) -> Result<PathBuf> {
    session.report(create_ts(session, args))
}

fn create_ts(session: &Session<'_>, args: &CreateTsArgs) -> Result<PathBuf> {
    if args.target.is_empty() {
        return Err(PkgVersionError::validation("target path must not be empty"));
    }

    let (_, version) = session.manifest_version(&args.manifest)?;
    let ts = &session.config.typescript;
    let style = TsStyle {
        single_quotes: args.single_quotes || ts.single_quotes,
        semi: args.semi || ts.semi,
    };

    let path = scaffold::write_module(
        session.store,
        &session.resolve(Path::new(&args.target)),
        &ts.file_name,
        &version,
        style,
    )?;
    session
        .notifier
        .success(&formatter::module_written(&path, &version));
    Ok(path)
}
