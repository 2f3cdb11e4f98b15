//! [`TreePair`] builder for sync scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding `chromium/src` and
/// `chromium-modifications/src`, the two roots the sync engine accepts by
/// default.
///
/// # Example
///
/// ```rust,no_run
/// use fork_test_utils::tree::TreePair;
///
/// let pair = TreePair::new();
/// pair.write_modification("media/capture/a.cc", "int a;");
/// pair.assert_chromium_missing("media/capture/a.cc");
/// ```
pub struct TreePair {
    temp_dir: TempDir,
    chromium: PathBuf,
    modifications: PathBuf,
}

impl Default for TreePair {
    fn default() -> Self {
        Self::new()
    }
}

impl TreePair {
    /// Create both (empty) roots.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let chromium = temp_dir.path().join("chromium").join("src");
        let modifications = temp_dir.path().join("chromium-modifications").join("src");
        fs::create_dir_all(&chromium).unwrap();
        fs::create_dir_all(&modifications).unwrap();
        Self {
            temp_dir,
            chromium,
            modifications,
        }
    }

    /// Directory containing both trees.
    pub fn base(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The full checkout root (`chromium/src`).
    pub fn chromium(&self) -> &Path {
        &self.chromium
    }

    /// The curated tree root (`chromium-modifications/src`).
    pub fn modifications(&self) -> &Path {
        &self.modifications
    }

    /// Write `content` to `rel` under the full checkout, creating parents.
    pub fn write_chromium(&self, rel: &str, content: &str) -> PathBuf {
        write(&self.chromium, rel, content)
    }

    /// Write `content` to `rel` under the curated tree, creating parents.
    pub fn write_modification(&self, rel: &str, content: &str) -> PathBuf {
        write(&self.modifications, rel, content)
    }

    /// Read `rel` from the full checkout.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_chromium(&self, rel: &str) -> String {
        read(&self.chromium, rel)
    }

    /// Read `rel` from the curated tree.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_modification(&self, rel: &str) -> String {
        read(&self.modifications, rel)
    }

    /// Assert that `rel` does not exist under the full checkout.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_chromium_missing(&self, rel: &str) {
        let full_path = self.chromium.join(rel);
        assert!(
            !full_path.exists(),
            "Expected path NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `rel` does not exist under the curated tree.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_modification_missing(&self, rel: &str) {
        let full_path = self.modifications.join(rel);
        assert!(
            !full_path.exists(),
            "Expected path NOT to exist: {}",
            full_path.display()
        );
    }
}

fn write(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn read(root: &Path, rel: &str) -> String {
    let path = root.join(rel);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
}
