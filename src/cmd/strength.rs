//! Password strength command.

use anyhow::Result;

use regform::config::Config;
use regform::strength::StrengthMeter;

use super::ui::render;
use super::ui::Output;

pub fn cmd_strength(config: &Config, password: &str, output: &Output) -> Result<StrengthMeter> {
    config.password.validate()?;
    let meter = StrengthMeter::evaluate(password, &config.password);
    render::show_strength(output, &meter);
    Ok(meter)
}
