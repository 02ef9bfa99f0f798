//! Output path naming for cleaned files.
//!
//! A cleaned file lands next to its input with the suffix spliced between
//! the file stem and the extension: `session.log` becomes
//! `session_cleaned.log`. The same suffix marks files that must not be
//! cleaned a second time.

use std::path::{Path, PathBuf};

use super::CleanFileError;

/// Default suffix appended to the stem of cleaned files.
pub const DEFAULT_SUFFIX: &str = "_cleaned";

/// Returns the suffix to use, substituting the default for an empty one.
///
/// An empty suffix would mark every file as already cleaned, so it is
/// never honored.
fn effective_suffix(suffix: &str) -> &str {
    if suffix.is_empty() {
        DEFAULT_SUFFIX
    } else {
        suffix
    }
}

/// Whether a file's stem already carries the cleaned suffix.
pub fn is_already_cleaned(path: &Path, suffix: &str) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|stem| stem.ends_with(effective_suffix(suffix)))
        .unwrap_or(false)
}

/// Builds the output path for a cleaned file.
pub fn output_path(input: &Path, suffix: &str) -> Result<PathBuf, CleanFileError> {
    let suffix = effective_suffix(suffix);

    let invalid = || CleanFileError::InvalidName {
        path: input.to_path_buf(),
    };

    let stem = input.file_stem().and_then(|s| s.to_str()).ok_or_else(invalid)?;

    let name = match input.extension() {
        Some(ext) => {
            let ext = ext.to_str().ok_or_else(invalid)?;
            format!("{}{}.{}", stem, suffix, ext)
        }
        None => format!("{}{}", stem, suffix),
    };

    Ok(input.with_file_name(name))
}
