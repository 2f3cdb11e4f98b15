//! Cross-crate scenarios: the curated tree is pushed into a checkout, the
//! checkout is edited under git, and the edits are pulled back.

use std::fs;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use fork_assets::{AssetBundle, AssetPlan, ReleaseFetcher, setup_plan};
use fork_git::{GitCli, LibGit2, StatusBackend};
use fork_sync::{
    RecursiveDiscovery, StatusDiscovery, SyncAction, SyncEngine, SyncOptions, UntrackedFilesMode,
};
use fork_test_utils::git::{git, real_git_repo_with_commit};
use fork_test_utils::tree::TreePair;
use pretty_assertions::assert_eq;

fn engine(dry_run: bool) -> SyncEngine {
    SyncEngine::new(SyncOptions { dry_run })
}

/// A checkout that already tracks the curated files, then diverges.
fn pushed_and_committed(tree: &TreePair) {
    tree.write_modification("chrome/browser/ui/view.cc", "view v1");
    tree.write_modification("media/capture/camera.cc", "camera v1");
    real_git_repo_with_commit(tree.chromium());

    let report = engine(false)
        .sync(tree.modifications(), tree.chromium(), &RecursiveDiscovery::new())
        .unwrap();
    assert_eq!(report.copied(), 2);

    git(tree.chromium(), &["add", "."]);
    git(tree.chromium(), &["commit", "-m", "Apply modifications"]);
}

#[test]
fn round_trip_pulls_back_only_developer_edits() {
    let tree = TreePair::new();
    pushed_and_committed(&tree);

    tree.write_chromium("media/capture/camera.cc", "camera v2");
    tree.write_chromium("media/capture/new_sink.cc", "sink");
    git(tree.chromium(), &["add", "media/capture/new_sink.cc"]);

    let discovery = StatusDiscovery::new(GitCli::default(), UntrackedFilesMode::NotAllowed);
    let report = engine(false)
        .sync(tree.chromium(), tree.modifications(), &discovery)
        .unwrap();

    assert_eq!(report.copied(), 2);
    assert_eq!(tree.read_modification("media/capture/camera.cc"), "camera v2");
    assert_eq!(tree.read_modification("media/capture/new_sink.cc"), "sink");
    assert_eq!(tree.read_modification("chrome/browser/ui/view.cc"), "view v1");
    // The fixture's README was never part of the curated tree.
    tree.assert_modification_missing("README.md");
}

#[test]
fn round_trip_backends_agree() {
    let tree = TreePair::new();
    pushed_and_committed(&tree);
    tree.write_chromium("chrome/browser/ui/view.cc", "view v2");
    tree.write_chromium("third_party/extra/x.h", "x");

    let cli = StatusDiscovery::new(GitCli::default(), UntrackedFilesMode::Allowed);
    let lib = StatusDiscovery::new(LibGit2::new(), UntrackedFilesMode::Allowed);

    let a = engine(true).sync(tree.chromium(), tree.modifications(), &cli).unwrap();
    let b = engine(true).sync(tree.chromium(), tree.modifications(), &lib).unwrap();

    assert_eq!(a, b);
    assert!(a.actions.contains(&SyncAction::Copy {
        from: tree.chromium().join("third_party/extra/x.h"),
        to: tree.modifications().join("third_party/extra/x.h"),
    }));
    tree.assert_modification_missing("third_party/extra/x.h");
}

#[test]
fn push_after_pull_is_noop() {
    let tree = TreePair::new();
    pushed_and_committed(&tree);
    tree.write_chromium("media/capture/camera.cc", "camera v3");

    let discovery = StatusDiscovery::new(
        StatusBackend::Libgit2.provider("git"),
        UntrackedFilesMode::NotAllowed,
    );
    engine(false)
        .sync(tree.chromium(), tree.modifications(), &discovery)
        .unwrap();

    let report = engine(false)
        .sync(tree.modifications(), tree.chromium(), &RecursiveDiscovery::new())
        .unwrap();
    assert!(report.is_noop());
    assert_eq!(report.unchanged(), 2);
}

/// Serves archives from a local directory instead of a release host.
struct LocalReleases(PathBuf);

impl ReleaseFetcher for LocalReleases {
    fn fetch(&self, dir: &Path, bundle: &AssetBundle) -> fork_assets::Result<PathBuf> {
        let dest = dir.join(&bundle.asset);
        fs::copy(self.0.join(&bundle.asset), &dest).map_err(|e| fork_assets::Error::io(&dest, e))?;
        Ok(dest)
    }
}

fn write_archive(path: &Path, top: &str, files: &[(&str, &str)]) {
    let file = fs::File::create(path).unwrap();
    let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));
    for (name, content) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, format!("{top}/{name}"), content.as_bytes())
            .unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap();
}

#[test]
fn push_then_install_assets() {
    let tree = TreePair::new();
    tree.write_modification("BUILD.gn", "gn");
    let releases = tree.base().join("releases");
    fs::create_dir_all(&releases).unwrap();
    write_archive(&releases.join("lib.tar.gz"), "seglib-0.1.2", &[("lib/libseg.so", "so")]);
    write_archive(&releases.join("cfg.tar.gz"), "config", &[("model.json", "{}")]);

    engine(false)
        .sync(tree.modifications(), tree.chromium(), &RecursiveDiscovery::new())
        .unwrap();

    let plan = AssetPlan {
        bundles: vec![
            AssetBundle::new("t", "lib.tar.gz", "third_party/seglib"),
            AssetBundle::new("t", "cfg.tar.gz", "seglib"),
        ],
    };
    setup_plan(&LocalReleases(releases), tree.chromium(), &plan, false, false).unwrap();

    assert_eq!(tree.read_chromium("BUILD.gn"), "gn");
    assert_eq!(tree.read_chromium("third_party/seglib/lib/libseg.so"), "so");
    assert_eq!(tree.read_chromium("seglib/model.json"), "{}");
}
