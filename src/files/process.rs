//! Per-file cleaning: lenient read, line-by-line scrub, UTF-8 write.

use std::borrow::Cow;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::scrub::{self, CleanOptions};

use super::{output, CleanFileError};

/// Outcome of cleaning a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedFile {
    /// Where the cleaned text was written.
    pub output: PathBuf,
    /// Size of the raw input in bytes.
    pub bytes_in: u64,
    /// Size of the cleaned output in bytes.
    pub bytes_out: u64,
}

/// Cleans one typescript file, writing the result next to it.
///
/// Returns `Ok(None)` when the file's name marks it as already cleaned.
/// The input is decoded leniently - bytes that are not valid UTF-8 become
/// the replacement character - and the output is always UTF-8. Lines are
/// scrubbed one at a time with their terminators attached, so a backspace
/// never reaches back across a line boundary.
pub fn clean_file(
    input: &Path,
    opts: &CleanOptions,
    suffix: &str,
) -> Result<Option<CleanedFile>, CleanFileError> {
    if output::is_already_cleaned(input, suffix) {
        return Ok(None);
    }
    let output_path = output::output_path(input, suffix)?;

    tracing::info!(path = %input.display(), "cleaning");

    let raw = fs::read(input)?;
    let text = String::from_utf8_lossy(&raw);
    if matches!(text, Cow::Owned(_)) {
        tracing::debug!(
            path = %input.display(),
            "input contained invalid UTF-8; offending bytes replaced"
        );
    }

    let file = fs::File::create(&output_path)?;
    let mut writer = BufWriter::new(file);
    let mut bytes_out = 0u64;

    for line in text.split_inclusive('\n') {
        let cleaned = scrub::clean(line, opts);
        writer.write_all(cleaned.as_bytes())?;
        bytes_out += cleaned.len() as u64;
    }
    writer.flush()?;

    Ok(Some(CleanedFile {
        output: output_path,
        bytes_in: raw.len() as u64,
        bytes_out,
    }))
}
