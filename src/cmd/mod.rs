//! Command module structure for regform CLI

use anyhow::Result;
use std::path::Path;

use regform::config::Config;

use crate::cli::Format;
use ui::OutputMode;

pub mod check;
pub mod config;
pub mod fill;
pub mod strength;
pub mod ui;
pub mod util;

/// Load the effective configuration.
///
/// An explicit `--config` path must exist; otherwise the global and project
/// files are merged when present.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_with(path),
        None => Config::load(),
    }
}

/// Pick the output mode from `--format` and `--quiet`. JSON wins over quiet
/// so scripted callers always get a parseable result.
pub fn output_mode(format: Format, quiet: bool) -> OutputMode {
    match (format, quiet) {
        (Format::Json, _) => OutputMode::Json,
        (Format::Text, true) => OutputMode::Quiet,
        (Format::Text, false) => OutputMode::Human,
    }
}
