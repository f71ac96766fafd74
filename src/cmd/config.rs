//! Show the effective configuration.

use anyhow::Result;

use regform::config::{global_config_path, Config};
use regform::paths::PROJECT_CONFIG;

use super::ui::Output;

pub fn cmd_config(config: &Config, output: &Output) -> Result<()> {
    let global = global_config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none)".to_string());
    output.info(&format!("# global:  {}", global));
    output.info(&format!("# project: {}", PROJECT_CONFIG));
    output.info(config.to_yaml()?.trim_end());
    Ok(())
}
