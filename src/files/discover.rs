//! Expands command-line paths into the list of files to clean.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Result of expanding the command-line paths.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Regular files to clean, in deterministic order.
    pub files: Vec<PathBuf>,
    /// Paths that named nothing on disk.
    pub missing: Vec<PathBuf>,
}

/// Expands each path: a file stands for itself, a directory for every file
/// under it (recursively), and anything else is reported as missing.
pub fn discover(paths: &[PathBuf]) -> Discovery {
    let mut discovery = Discovery::default();

    for path in paths {
        if path.is_dir() {
            collect_dir(path, &mut discovery.files);
        } else if path.is_file() {
            discovery.files.push(path.clone());
        } else {
            discovery.missing.push(path.clone());
        }
    }

    discovery
}

/// Collects every regular file under `dir`, sorted by name at each level.
fn collect_dir(dir: &Path, files: &mut Vec<PathBuf>) {
    for entry in WalkDir::new(dir).sort_by_file_name() {
        match entry {
            Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(dir = %dir.display(), "skipping unreadable entry: {}", e);
            }
        }
    }
}
