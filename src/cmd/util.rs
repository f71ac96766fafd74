//! Housekeeping commands: version, man page and shell completions.

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::path::{Path, PathBuf};

use super::ui::Output;
use crate::cli::Cli;

const BIN_NAME: &str = "regform";
const VERSION: &str = env!("CARGO_PKG_VERSION");
const GIT_SHA: &str = env!("REGFORM_GIT_SHA");
const BUILD_DATE: &str = env!("REGFORM_BUILD_DATE");

pub fn cmd_version(verbose: bool, output: &Output) -> Result<()> {
    output.info(&format!("{} {}", BIN_NAME, VERSION));
    if verbose {
        output.info(&format!("commit: {}", GIT_SHA));
        output.info(&format!("built: {}", BUILD_DATE));
    }
    Ok(())
}

/// Render the man page into `out_dir` (default: the current directory).
pub fn cmd_man(out_dir: Option<&Path>, output: &Output) -> Result<PathBuf> {
    let mut page = Vec::new();
    clap_mangen::Man::new(Cli::command())
        .render(&mut page)
        .context("Failed to render man page")?;

    let dir = out_dir.unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let man_path = dir.join(format!("{}.1", BIN_NAME));
    std::fs::write(&man_path, page)
        .with_context(|| format!("Failed to write {}", man_path.display()))?;

    output.success(&format!("Man page written to {}", man_path.display()));
    Ok(man_path)
}

/// Completion scripts are the command's payload, so they print in every mode.
pub fn cmd_completion(shell: Shell, output: &Output) -> Result<()> {
    let mut script = Vec::new();
    generate(shell, &mut Cli::command(), BIN_NAME, &mut script);
    output.raw(&String::from_utf8_lossy(&script));
    Ok(())
}
