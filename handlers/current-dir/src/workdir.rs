//! Working directory lookup

use std::io;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR_STR};

/// Source of the process's current working directory.
///
/// Swapped out in tests to simulate a directory that cannot be resolved.
pub trait WorkingDirectory: Send + Sync {
    fn current_dir(&self) -> io::Result<PathBuf>;
}

/// Reads the working directory of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessWorkingDirectory;

impl WorkingDirectory for ProcessWorkingDirectory {
    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// Final segment of `path`.
///
/// Trailing separators are ignored. An empty path yields `.`, and a path made
/// only of separators yields the separator itself.
pub fn base_name(path: &Path) -> String {
    match path.components().next_back() {
        None => ".".to_string(),
        Some(Component::RootDir) => MAIN_SEPARATOR_STR.to_string(),
        Some(last) => last.as_os_str().to_string_lossy().into_owned(),
    }
}
