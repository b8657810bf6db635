//! Temporary directories pre-populated with fragment files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rstest::fixture;
use tempfile::TempDir;

/// A temporary directory that is removed when dropped.
///
/// Helpers panic on I/O failure since they only run inside tests.
pub struct FragmentDir {
    dir: TempDir,
}

impl FragmentDir {
    /// Create an empty temporary directory.
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Path of the directory.
    #[must_use]
    pub fn path(&self) -> &Path { self.dir.path() }

    /// Path of `name` inside the directory.
    #[must_use]
    pub fn join(&self, name: &str) -> PathBuf { self.dir.path().join(name) }

    /// Write `<base>.part<index>` with `contents`.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_part(&self, base: &str, index: u64, contents: &[u8]) -> PathBuf {
        self.write_file(&format!("{base}.part{index}"), contents)
    }

    /// Write an arbitrary file named `name` with `contents`.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.join(name);
        fs::write(&path, contents).expect("write fixture file");
        path
    }

    /// Read the file named `name`.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be read.
    #[must_use]
    pub fn read(&self, name: &str) -> Vec<u8> { fs::read(self.join(name)).expect("read file") }

    /// Return `true` if `name` exists in the directory.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool { self.join(name).exists() }
}

impl Default for FragmentDir {
    fn default() -> Self { Self::new() }
}

#[allow(
    unused_braces,
    reason = "rustc false positive for single line rstest fixtures"
)]
#[fixture]
pub fn fragment_dir() -> FragmentDir { FragmentDir::new() }
