//! Clean command handler.
//!
//! Expands the command-line paths, scrubs each discovered file in
//! parallel, and reports what happened. Files are independent of each
//! other, so the fan-out carries no shared state.

use std::path::PathBuf;

use anyhow::{bail, Result};
use humansize::{format_size, DECIMAL};
use rayon::prelude::*;

use tscrub::files::{self, CleanFileError, CleanedFile};
use tscrub::scrub::CleanOptions;

/// Runs the clean operation over every given path.
///
/// Missing paths and per-file failures are reported as they are found;
/// the run keeps going and fails at the end if anything went wrong.
#[cfg(not(tarpaulin_include))]
pub fn run(paths: &[PathBuf], options: &CleanOptions, suffix: &str) -> Result<()> {
    let discovery = files::discover(paths);

    for path in &discovery.missing {
        eprintln!("ERROR: \"{}\" does not exist", path.display());
    }

    let results: Vec<(&PathBuf, Result<Option<CleanedFile>, CleanFileError>)> = discovery
        .files
        .par_iter()
        .map(|path| (path, files::clean_file(path, options, suffix)))
        .collect();

    let mut cleaned = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;
    let mut bytes_in = 0u64;
    let mut bytes_out = 0u64;

    for (path, result) in results {
        match result {
            Ok(Some(file)) => {
                println!(
                    "Cleaned: {} -> {} ({} -> {})",
                    path.display(),
                    file.output.display(),
                    format_size(file.bytes_in, DECIMAL),
                    format_size(file.bytes_out, DECIMAL),
                );
                cleaned += 1;
                bytes_in += file.bytes_in;
                bytes_out += file.bytes_out;
            }
            Ok(None) => {
                tracing::debug!(path = %path.display(), "already cleaned, skipping");
                skipped += 1;
            }
            Err(e) => {
                eprintln!("ERROR: failed to clean \"{}\": {}", path.display(), e);
                failed += 1;
            }
        }
    }

    if cleaned > 0 {
        println!(
            "Done: {} file(s) cleaned, {} skipped ({} in, {} out)",
            cleaned,
            skipped,
            format_size(bytes_in, DECIMAL),
            format_size(bytes_out, DECIMAL),
        );
    } else if skipped > 0 {
        println!("Done: nothing to clean ({} file(s) already cleaned)", skipped);
    }

    let problems = failed + discovery.missing.len();
    if problems > 0 {
        bail!("{} path(s) could not be cleaned", problems);
    }

    Ok(())
}
