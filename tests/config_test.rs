// tests/config_test.rs
use pkg_version::config::{load_config, Config, CONFIG_ENV_VAR, CONFIG_FILE_NAME};
use pkg_version::manifest::ManifestKind;
use serial_test::serial;
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};

fn fixture() -> &'static Path {
    Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/pkgversion.toml"
    ))
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.copy.subject, "__VERSION__");
    assert_eq!(config.manifest.kind, ManifestKind::Npm);
    assert_eq!(config.typescript.file_name, "version.ts");
    assert!(!config.typescript.single_quotes);
    assert!(!config.typescript.semi);
}

#[test]
#[serial]
fn test_load_from_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let config = load_config(Some(fixture()), temp_dir.path()).unwrap();

    assert_eq!(config.copy.subject, "%%VERSION%%");
    assert_eq!(config.manifest.kind, ManifestKind::Composer);
    assert_eq!(config.typescript.file_name, "meta.ts");
    assert!(config.typescript.semi);
    assert!(!config.typescript.single_quotes);
}

#[test]
#[serial]
fn test_partial_file_keeps_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[typescript]\nsingle_quotes = true\n")
        .unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path()), Path::new("/")).unwrap();
    assert!(config.typescript.single_quotes);
    assert_eq!(config.typescript.file_name, "version.ts");
    assert_eq!(config.copy.subject, "__VERSION__");
}

#[test]
#[serial]
fn test_load_from_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        "[manifest]\ntype = \"deno\"\n",
    )
    .unwrap();

    let config = load_config(None, temp_dir.path()).unwrap();
    assert_eq!(config.manifest.kind, ManifestKind::Deno);
}

#[test]
#[serial]
fn test_load_from_env_var() {
    let temp_dir = TempDir::new().unwrap();
    std::env::set_var(CONFIG_ENV_VAR, fixture());

    let result = load_config(None, temp_dir.path());
    std::env::remove_var(CONFIG_ENV_VAR);

    assert_eq!(result.unwrap().copy.subject, "%%VERSION%%");
}

#[test]
#[serial]
fn test_explicit_path_wins_over_env_var() {
    let temp_dir = TempDir::new().unwrap();
    let explicit = temp_dir.path().join("explicit.toml");
    std::fs::write(&explicit, "[copy]\nsubject = \"@v@\"\n").unwrap();
    std::env::set_var(CONFIG_ENV_VAR, fixture());

    let result = load_config(Some(&explicit), temp_dir.path());
    std::env::remove_var(CONFIG_ENV_VAR);

    assert_eq!(result.unwrap().copy.subject, "@v@");
}

#[test]
#[serial]
fn test_invalid_toml_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let bad = temp_dir.path().join("bad.toml");
    std::fs::write(&bad, "[copy\nsubject = ").unwrap();

    assert!(load_config(Some(&bad), temp_dir.path()).is_err());
}

#[test]
#[serial]
fn test_unknown_manifest_type_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let bad = temp_dir.path().join("bad.toml");
    std::fs::write(&bad, "[manifest]\ntype = \"cargo\"\n").unwrap();

    assert!(load_config(Some(&bad), temp_dir.path()).is_err());
}

#[test]
#[serial]
fn test_missing_explicit_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    assert!(load_config(Some(Path::new("nope.toml")), temp_dir.path()).is_err());
}
