//! End-to-end behaviour of the sync engine over real directory trees

use filetime::{FileTime, set_file_mtime};
use fork_fs::compute_file_checksum;
use fork_git::GitCli;
use fork_sync::{
    Error, RecursiveDiscovery, StatusDiscovery, SyncAction, UntrackedFilesMode, sync_dirs,
};
use fork_test_utils::git::{git, real_git_repo_with_commit};
use fork_test_utils::tree::TreePair;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

fn mtime(path: &Path) -> FileTime {
    FileTime::from_last_modification_time(&fs::metadata(path).unwrap())
}

/// Every file below `root` with its bytes, sorted by path.
fn snapshot(root: &Path) -> Vec<(String, Vec<u8>)> {
    let mut files: Vec<_> = fork_sync::walk_files(root)
        .unwrap()
        .into_iter()
        .map(|p| {
            let rel = p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/");
            (rel, fs::read(&p).unwrap())
        })
        .collect();
    files.sort();
    files
}

fn dirs(root: &Path) -> Vec<String> {
    let mut out: Vec<_> = WalkDir::new(root)
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_dir())
        .map(|e| e.path().strip_prefix(root).unwrap().to_string_lossy().to_string())
        .collect();
    out.sort();
    out
}

// ============================================================================
// Recursive discovery: modifications -> chromium
// ============================================================================

#[test]
fn test_copies_new_files_and_creates_directories() {
    let pair = TreePair::new();
    pair.write_modification("media/capture/video/segmentor.cc", "int seg;");
    pair.write_modification("BUILD.gn", "group(\"all\") {}");

    let report = sync_dirs(pair.modifications(), pair.chromium(), &RecursiveDiscovery, false).unwrap();

    assert_eq!(report.copied(), 2);
    assert_eq!(report.dirs_created(), 1);
    assert_eq!(pair.read_chromium("media/capture/video/segmentor.cc"), "int seg;");
    assert_eq!(pair.read_chromium("BUILD.gn"), "group(\"all\") {}");
}

#[test]
fn test_identical_files_are_not_rewritten() {
    let pair = TreePair::new();
    let src = pair.write_modification("a/b.cc", "same bytes");
    let dst = pair.write_chromium("a/b.cc", "same bytes");
    let past = FileTime::from_unix_time(1_500_000_000, 0);
    set_file_mtime(&dst, past).unwrap();
    set_file_mtime(&src, FileTime::from_unix_time(1_700_000_000, 0)).unwrap();

    let report = sync_dirs(pair.modifications(), pair.chromium(), &RecursiveDiscovery, false).unwrap();

    assert_eq!(report.copied(), 0);
    assert_eq!(report.unchanged(), 1);
    assert_eq!(mtime(&dst), past);
}

#[test]
fn test_single_byte_difference_is_copied() {
    let pair = TreePair::new();
    let src = pair.write_modification("a/b.cc", "int value = 1;");
    let dst = pair.write_chromium("a/b.cc", "int value = 2;");

    let report = sync_dirs(pair.modifications(), pair.chromium(), &RecursiveDiscovery, false).unwrap();

    assert_eq!(report.copied(), 1);
    assert_eq!(
        compute_file_checksum(&dst).unwrap(),
        compute_file_checksum(&src).unwrap()
    );
}

#[test]
fn test_copy_preserves_source_mtime() {
    let pair = TreePair::new();
    let src = pair.write_modification("chrome/app.cc", "new");
    pair.write_chromium("chrome/app.cc", "old");
    let stamp = FileTime::from_unix_time(1_650_000_000, 0);
    set_file_mtime(&src, stamp).unwrap();

    sync_dirs(pair.modifications(), pair.chromium(), &RecursiveDiscovery, false).unwrap();

    assert_eq!(mtime(&pair.chromium().join("chrome/app.cc")), stamp);
}

#[test]
fn test_second_run_writes_nothing() {
    let pair = TreePair::new();
    pair.write_modification("a/one.cc", "1");
    pair.write_modification("b/c/two.cc", "2");
    pair.write_chromium("a/one.cc", "stale");

    let first = sync_dirs(pair.modifications(), pair.chromium(), &RecursiveDiscovery, false).unwrap();
    let second = sync_dirs(pair.modifications(), pair.chromium(), &RecursiveDiscovery, false).unwrap();

    assert_eq!(first.copied(), 2);
    assert!(second.is_noop());
    assert_eq!(second.unchanged(), 2);
}

#[test]
fn test_dry_run_leaves_target_untouched() {
    let pair = TreePair::new();
    pair.write_modification("a/changed.cc", "new");
    pair.write_modification("fresh/dir/added.cc", "added");
    pair.write_modification("same.cc", "same");
    pair.write_chromium("a/changed.cc", "old");
    pair.write_chromium("same.cc", "same");
    let files_before = snapshot(pair.chromium());
    let dirs_before = dirs(pair.chromium());

    let report = sync_dirs(pair.modifications(), pair.chromium(), &RecursiveDiscovery, true).unwrap();

    assert_eq!(snapshot(pair.chromium()), files_before);
    assert_eq!(dirs(pair.chromium()), dirs_before);
    assert!(report.dry_run);
    assert_eq!(report.copied(), 2);
    assert_eq!(report.unchanged(), 1);
    assert!(report.actions.contains(&SyncAction::CreateDir {
        path: pair.chromium().join("fresh/dir"),
    }));
}

#[test]
fn test_dry_run_plans_the_same_directories_as_a_real_run() {
    let pair = TreePair::new();
    pair.write_modification("media/capture/x.cc", "x");
    pair.write_modification("media/y.cc", "y");
    pair.write_modification("media/capture/video/z.cc", "z");

    let dry = sync_dirs(pair.modifications(), pair.chromium(), &RecursiveDiscovery, true).unwrap();
    let real = sync_dirs(pair.modifications(), pair.chromium(), &RecursiveDiscovery, false).unwrap();

    assert_eq!(dry.dirs_created(), real.dirs_created());
    assert_eq!(dry.actions, real.actions);
    assert_eq!(real.copied(), 3);
}

#[test]
fn test_identical_roots_rejected_before_io() {
    let pair = TreePair::new();
    pair.write_modification("a.cc", "a");

    let result = sync_dirs(pair.modifications(), pair.modifications(), &RecursiveDiscovery, false);

    assert!(matches!(result, Err(Error::IdenticalRoots { .. })));
}

#[test]
fn test_unrecognized_roots_rejected() {
    let temp = tempfile::tempdir().unwrap();
    let a = temp.path().join("music");
    let b = temp.path().join("backup");
    fs::create_dir_all(&a).unwrap();
    fs::create_dir_all(&b).unwrap();
    fs::write(a.join("song.mp3"), "la").unwrap();

    let result = sync_dirs(&a, &b, &RecursiveDiscovery, false);

    assert!(matches!(result, Err(Error::InvalidRootShape { .. })));
    assert!(!b.join("song.mp3").exists());
}

// ============================================================================
// Status discovery: chromium -> modifications
// ============================================================================

fn setup_chromium_repo(pair: &TreePair) {
    pair.write_chromium("a/b.cc", "int b;");
    pair.write_chromium("untouched.cc", "int u;");
    real_git_repo_with_commit(pair.chromium());
}

#[test]
fn test_status_sync_copies_only_changed_files() {
    let pair = TreePair::new();
    setup_chromium_repo(&pair);
    pair.write_chromium("a/b.cc", "int b = 42;");
    pair.write_chromium("e/f.cc", "int f;");
    git(pair.chromium(), &["add", "e/f.cc"]);

    let discovery = StatusDiscovery::new(GitCli::default(), UntrackedFilesMode::NotAllowed);
    let report = sync_dirs(pair.chromium(), pair.modifications(), &discovery, false).unwrap();

    assert_eq!(report.copied(), 2);
    assert_eq!(pair.read_modification("a/b.cc"), "int b = 42;");
    assert_eq!(pair.read_modification("e/f.cc"), "int f;");
    pair.assert_modification_missing("untouched.cc");
    pair.assert_modification_missing("README.md");
}

#[test]
fn test_status_sync_untracked_not_allowed_aborts() {
    let pair = TreePair::new();
    setup_chromium_repo(&pair);
    pair.write_chromium("c/d.cc", "int d;");

    let discovery = StatusDiscovery::new(GitCli::default(), UntrackedFilesMode::NotAllowed);
    let result = sync_dirs(pair.chromium(), pair.modifications(), &discovery, false);

    match result {
        Err(Error::UntrackedFileFound { path }) => assert!(path.ends_with("c")),
        other => panic!("Expected UntrackedFileFound, got {:?}", other),
    }
    pair.assert_modification_missing("c/d.cc");
}

#[test]
fn test_status_sync_untracked_directory_allowed() {
    let pair = TreePair::new();
    setup_chromium_repo(&pair);
    pair.write_chromium("third_party/seg/x.h", "x");
    pair.write_chromium("third_party/seg/y.h", "y");

    let discovery = StatusDiscovery::new(GitCli::default(), UntrackedFilesMode::Allowed);
    let report = sync_dirs(pair.chromium(), pair.modifications(), &discovery, false).unwrap();

    assert_eq!(report.copied(), 2);
    assert_eq!(pair.read_modification("third_party/seg/x.h"), "x");
    assert_eq!(pair.read_modification("third_party/seg/y.h"), "y");
}

#[test]
fn test_status_sync_untracked_ignored() {
    let pair = TreePair::new();
    setup_chromium_repo(&pair);
    pair.write_chromium("a/b.cc", "edited");
    pair.write_chromium("scratch.txt", "notes");

    let discovery = StatusDiscovery::new(GitCli::default(), UntrackedFilesMode::Ignored);
    let report = sync_dirs(pair.chromium(), pair.modifications(), &discovery, false).unwrap();

    assert_eq!(report.copied(), 1);
    pair.assert_modification_missing("scratch.txt");
}

#[test]
fn test_status_sync_deleted_file_is_unsupported() {
    let pair = TreePair::new();
    setup_chromium_repo(&pair);
    fs::remove_file(pair.chromium().join("untouched.cc")).unwrap();

    let discovery = StatusDiscovery::new(GitCli::default(), UntrackedFilesMode::NotAllowed);
    let result = sync_dirs(pair.chromium(), pair.modifications(), &discovery, false);

    assert!(matches!(result, Err(Error::DeletedUnsupported { .. })));
}
