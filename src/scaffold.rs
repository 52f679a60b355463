//! Generate a TypeScript module that exports the manifest version.

use std::path::{Path, PathBuf};

use crate::domain::SemanticVersion;
use crate::error::Result;
use crate::fs::{self, FileStore, PathKind};

/// File name used when the target is a directory
pub const DEFAULT_MODULE_NAME: &str = "version.ts";

/// Code style of the generated module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TsStyle {
    pub single_quotes: bool,
    pub semi: bool,
}

/// Render the module source, e.g. `export const version = "1.2.3"`.
pub fn render_module(version: &SemanticVersion, style: TsStyle) -> String {
    let quote = if style.single_quotes { '\'' } else { '"' };
    let mut literal = String::new();
    for c in version.to_string().chars() {
        if c == quote || c == '\\' {
            literal.push('\\');
        }
        literal.push(c);
    }

    format!(
        "export const version = {q}{literal}{q}{semi}\n",
        q = quote,
        literal = literal,
        semi = if style.semi { ";" } else { "" }
    )
}

/// Where the module ends up for a given target.
///
/// An existing directory gets `module_name` inside it. Anything else is taken
/// as the file path, and its parent directory has to exist.
pub fn resolve_module_path(
    store: &dyn FileStore,
    target: &Path,
    module_name: &str,
) -> Result<PathBuf> {
    if store.kind(target) == Some(PathKind::Directory) {
        return Ok(target.join(module_name));
    }

    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::expect_kind(store, parent, PathKind::Directory)?;
        }
        _ => {}
    }
    Ok(target.to_path_buf())
}

/// Write the version module and return the path written.
pub fn write_module(
    store: &dyn FileStore,
    target: &Path,
    module_name: &str,
    version: &SemanticVersion,
    style: TsStyle,
) -> Result<PathBuf> {
    let path = resolve_module_path(store, target, module_name)?;
    store.write(&path, &render_module(version, style))?;
    tracing::info!(file = %path.display(), %version, "wrote version module");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PkgVersionError;
    use crate::fs::MemoryFileStore;

    #[test]
    fn test_render_default_style() {
        let v = SemanticVersion::new(1, 2, 3);
        assert_eq!(
            render_module(&v, TsStyle::default()),
            "export const version = \"1.2.3\"\n"
        );
    }

    #[test]
    fn test_render_single_quotes_and_semi() {
        let v = SemanticVersion::new(0, 1, 0);
        let style = TsStyle {
            single_quotes: true,
            semi: true,
        };
        assert_eq!(render_module(&v, style), "export const version = '0.1.0';\n");
    }

    #[test]
    fn test_render_escapes_build_tag() {
        let v = SemanticVersion::new(1, 0, 0).with_build("it's\\x").unwrap();
        let style = TsStyle {
            single_quotes: true,
            semi: false,
        };
        assert_eq!(
            render_module(&v, style),
            "export const version = '1.0.0-it\\'s\\\\x'\n"
        );
    }

    #[test]
    fn test_write_module_into_directory() {
        let mut store = MemoryFileStore::new();
        store.add_dir("/proj/src");

        let path = write_module(
            &store,
            Path::new("/proj/src"),
            DEFAULT_MODULE_NAME,
            &SemanticVersion::new(3, 0, 1),
            TsStyle::default(),
        )
        .unwrap();

        assert_eq!(path, PathBuf::from("/proj/src/version.ts"));
        assert_eq!(
            store.contents("/proj/src/version.ts").unwrap(),
            "export const version = \"3.0.1\"\n"
        );
    }

    #[test]
    fn test_write_module_to_file_path() {
        let mut store = MemoryFileStore::new();
        store.add_dir("/proj/src");

        let path = write_module(
            &store,
            Path::new("/proj/src/meta.ts"),
            DEFAULT_MODULE_NAME,
            &SemanticVersion::new(1, 0, 0),
            TsStyle::default(),
        )
        .unwrap();

        assert_eq!(path, PathBuf::from("/proj/src/meta.ts"));
    }

    #[test]
    fn test_write_module_missing_parent() {
        let store = MemoryFileStore::new();

        let err = write_module(
            &store,
            Path::new("/proj/missing/meta.ts"),
            DEFAULT_MODULE_NAME,
            &SemanticVersion::new(1, 0, 0),
            TsStyle::default(),
        )
        .unwrap_err();

        assert!(matches!(err, PkgVersionError::NotFound(_)));
        assert!(store.writes().is_empty());
    }
}
