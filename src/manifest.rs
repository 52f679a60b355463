//! Reading and writing the `version` field of a JSON manifest.

use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::SemanticVersion;
use crate::error::{PkgVersionError, Result};
use crate::fs::{FileStore, PathKind};

/// Field holding the version in every supported manifest
pub const VERSION_FIELD: &str = "version";

/// Which manifest file to look for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestKind {
    /// `package.json`
    #[default]
    #[serde(alias = "package")]
    Npm,
    /// `composer.json`
    Composer,
    /// `deno.json`
    Deno,
}

impl ManifestKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            ManifestKind::Npm => "package.json",
            ManifestKind::Composer => "composer.json",
            ManifestKind::Deno => "deno.json",
        }
    }
}

/// Parses the `--type` argument; `package` is accepted as an alias of `npm`.
impl FromStr for ManifestKind {
    type Err = PkgVersionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "npm" | "package" => Ok(ManifestKind::Npm),
            "composer" => Ok(ManifestKind::Composer),
            "deno" => Ok(ManifestKind::Deno),
            other => Err(PkgVersionError::config(format!(
                "unknown manifest type '{}' (expected npm, composer or deno)",
                other
            ))),
        }
    }
}

/// Find the manifest directly inside `start_dir`.
///
/// No upward or recursive search is done.
///
/// # Returns
/// * `Ok(PathBuf)` - `start_dir/<manifest file name>`
/// * `Err(NotFound)` - no such regular file
pub fn locate(store: &dyn FileStore, start_dir: &Path, kind: ManifestKind) -> Result<PathBuf> {
    let candidate = start_dir.join(kind.file_name());
    match store.kind(&candidate) {
        Some(PathKind::File) => Ok(candidate),
        _ => Err(PkgVersionError::not_found(candidate)),
    }
}

/// Read and parse the version recorded in a manifest.
///
/// Each cause keeps its own error: missing file (`NotFound`), unreadable
/// file (`Io`), malformed JSON (`Json`), missing or non-string field
/// (`Manifest`), unparsable version (`Format`).
pub fn read_version(store: &dyn FileStore, path: &Path) -> Result<SemanticVersion> {
    let document = load(store, path)?;

    let field = document
        .as_object()
        .ok_or_else(|| {
            PkgVersionError::manifest(format!("{} is not a JSON object", path.display()))
        })?
        .get(VERSION_FIELD)
        .ok_or_else(|| {
            PkgVersionError::manifest(format!(
                "{} has no \"{}\" field",
                path.display(),
                VERSION_FIELD
            ))
        })?;

    let text = field.as_str().ok_or_else(|| {
        PkgVersionError::manifest(format!(
            "\"{}\" in {} must be a string, found {}",
            VERSION_FIELD,
            path.display(),
            json_type_name(field)
        ))
    })?;

    let version = SemanticVersion::parse(text)?;
    tracing::debug!(manifest = %path.display(), %version, "read manifest version");
    Ok(version)
}

/// Set the manifest's version and rewrite the whole document.
///
/// Other fields keep their order and values. The output is pretty-printed
/// with two-space indentation and ends with a newline. Nothing is written
/// unless reading and parsing succeeded.
pub fn write_version(store: &dyn FileStore, path: &Path, version: &SemanticVersion) -> Result<()> {
    let mut document = load(store, path)?;

    let object = document.as_object_mut().ok_or_else(|| {
        PkgVersionError::manifest(format!("{} is not a JSON object", path.display()))
    })?;
    object.insert(
        VERSION_FIELD.to_string(),
        Value::String(version.to_string()),
    );

    let mut rendered = serde_json::to_string_pretty(&document)?;
    rendered.push('\n');
    store.write(path, &rendered)?;

    tracing::info!(manifest = %path.display(), %version, "wrote manifest version");
    Ok(())
}

fn load(store: &dyn FileStore, path: &Path) -> Result<Value> {
    let text = store.read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => PkgVersionError::not_found(path),
        _ => PkgVersionError::Io(e),
    })?;
    Ok(serde_json::from_str(&text)?)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
