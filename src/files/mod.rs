//! File discovery, output naming, and per-file cleaning.

mod discover;
mod output;
mod process;

pub use discover::{discover, Discovery};
pub use output::{is_already_cleaned, output_path, DEFAULT_SUFFIX};
pub use process::{clean_file, CleanedFile};

use std::path::PathBuf;

/// Errors that can occur while cleaning a single file.
#[derive(Debug, thiserror::Error)]
pub enum CleanFileError {
    #[error("Path has no usable file name: {path}")]
    InvalidName { path: PathBuf },

    #[error("Failed to read or write file: {0}")]
    Io(#[from] std::io::Error),
}
