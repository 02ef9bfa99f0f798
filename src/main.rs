//! tscrub binary entry point.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use tscrub::scrub::CleanOptions;
use tscrub::Config;

#[cfg(not(feature = "release"))]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("TSCRUB_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Cleans shell typescript files by removing terminal escape sequences and
/// (optionally) applying backspace characters
#[derive(Parser, Debug)]
#[command(name = "tscrub", version = VERSION, about)]
struct Cli {
    /// Keep BACKSPACE characters; useful for identifying things typed
    /// accidentally (like passwords)
    #[arg(long)]
    keep_backspace: bool,

    /// Keep BELL characters; useful for identifying tab completion
    #[arg(long)]
    keep_bell: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,

    /// Paths to typescript files (i.e., logs created using the "script"
    /// command); directories are cleaned recursively
    paths: Vec<PathBuf>,
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    tscrub::logging::init();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    if cli.paths.is_empty() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let config = Config::load()?;

    // Flags switch a behavior on; the config file only supplies defaults
    let options = CleanOptions {
        keep_backspace: cli.keep_backspace || config.clean.keep_backspace,
        keep_bell: cli.keep_bell || config.clean.keep_bell,
    };

    commands::clean::run(&cli.paths, &options, &config.output.suffix)
}
