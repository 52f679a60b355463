use pkg_version::fs::OsFileStore;
use pkg_version::substitute::{copy_version, CopyOptions};
use pkg_version::ui::RecordingNotifier;
use pkg_version::{PkgVersionError, SemanticVersion};
use std::fs;
use tempfile::TempDir;

// ============================================================================
// Discovery
// ============================================================================

#[test]
fn test_hidden_and_nested_files_are_updated() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join(".config/deep/er")).unwrap();
    fs::write(root.join(".version"), "__VERSION__").unwrap();
    fs::write(root.join(".config/deep/er/app.yaml"), "version: __VERSION__\n").unwrap();

    let notifier = RecordingNotifier::new();
    let version = SemanticVersion::parse("1.0.0-alpha").unwrap();
    let report = copy_version(&OsFileStore::new(), &notifier, &version, &CopyOptions::new(root))
        .unwrap();

    assert_eq!(report.updated, 2);
    assert_eq!(fs::read_to_string(root.join(".version")).unwrap(), "1.0.0-alpha");
    assert_eq!(
        fs::read_to_string(root.join(".config/deep/er/app.yaml")).unwrap(),
        "version: 1.0.0-alpha\n"
    );
}

#[cfg(unix)]
#[test]
fn test_symlinked_files_are_not_touched() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    let outside = temp_dir.path().join("outside");
    fs::create_dir_all(&root).unwrap();
    fs::create_dir_all(&outside).unwrap();
    fs::write(outside.join("target.txt"), "__VERSION__").unwrap();
    std::os::unix::fs::symlink(&outside, root.join("dir_link")).unwrap();
    std::os::unix::fs::symlink(outside.join("target.txt"), root.join("file_link.txt")).unwrap();

    let notifier = RecordingNotifier::new();
    let report = copy_version(
        &OsFileStore::new(),
        &notifier,
        &SemanticVersion::new(1, 0, 0),
        &CopyOptions::new(&root),
    )
    .unwrap();

    assert_eq!(report.candidates, 0);
    assert_eq!(
        fs::read_to_string(outside.join("target.txt")).unwrap(),
        "__VERSION__"
    );
}

#[test]
fn test_binary_files_are_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("logo.png"), [0x89, 0x50, 0xff, 0xfe, 0x00]).unwrap();
    fs::write(root.join("a.txt"), "__VERSION__").unwrap();

    let notifier = RecordingNotifier::new();
    let report = copy_version(
        &OsFileStore::new(),
        &notifier,
        &SemanticVersion::new(1, 0, 0),
        &CopyOptions::new(root),
    )
    .unwrap();

    assert_eq!((report.candidates, report.updated), (1, 1));
    assert!(report.warnings.is_empty());
}

#[test]
fn test_missing_target() {
    let temp_dir = TempDir::new().unwrap();
    let notifier = RecordingNotifier::new();

    let err = copy_version(
        &OsFileStore::new(),
        &notifier,
        &SemanticVersion::new(1, 0, 0),
        &CopyOptions::new(temp_dir.path().join("missing")),
    )
    .unwrap_err();

    assert!(matches!(err, PkgVersionError::NotFound(_)));
    assert!(err.to_string().ends_with("does not exist"));
}

// ============================================================================
// Rewriting
// ============================================================================

#[test]
fn test_unmatched_files_keep_their_bytes() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("keep.txt"), "untouched\r\n").unwrap();
    fs::write(root.join("change.txt"), "__VERSION__\r\n__VERSION__").unwrap();

    let notifier = RecordingNotifier::new();
    copy_version(
        &OsFileStore::new(),
        &notifier,
        &SemanticVersion::new(7, 0, 0),
        &CopyOptions::new(root),
    )
    .unwrap();

    assert_eq!(fs::read_to_string(root.join("keep.txt")).unwrap(), "untouched\r\n");
    assert_eq!(
        fs::read_to_string(root.join("change.txt")).unwrap(),
        "7.0.0\r\n7.0.0"
    );
}

#[test]
fn test_no_placeholder_left_after_run() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    for i in 0..5 {
        fs::write(
            root.join(format!("f{}.txt", i)),
            "__VERSION__".repeat(i + 1),
        )
        .unwrap();
    }

    let notifier = RecordingNotifier::new();
    let report = copy_version(
        &OsFileStore::new(),
        &notifier,
        &SemanticVersion::new(1, 1, 1),
        &CopyOptions::new(root),
    )
    .unwrap();

    assert_eq!(report.updated, 5);
    for i in 0..5 {
        let content = fs::read_to_string(root.join(format!("f{}.txt", i))).unwrap();
        assert!(!content.contains("__VERSION__"));
        assert_eq!(content, "1.1.1".repeat(i + 1));
    }
}
