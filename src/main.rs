//! CLI entry point for regform.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;
use log::debug;

use cli::{Cli, Commands, Format};
use cmd::ui::{Output, OutputMode};

fn main() -> Result<()> {
    // Picks up RUST_LOG; user-facing output never goes through the logger
    env_logger::init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let quiet = cli.quiet || regform::ui::is_quiet();
    let config_path = cli.config;

    match cli.command {
        Commands::Fill => {
            let config = cmd::load_config(config_path.as_deref())?;
            let output = Output::new(cmd::output_mode(Format::Text, quiet));
            cmd::fill::cmd_fill(&config, &output)
        }
        Commands::Check {
            file,
            fields,
            format,
        } => {
            let config = cmd::load_config(config_path.as_deref())?;
            let output = Output::new(cmd::output_mode(format, quiet));
            let accepted = cmd::check::cmd_check(&config, file.as_deref(), &fields, &output)?;
            if !accepted {
                debug!("form rejected, exiting with status 1");
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Strength { password, format } => {
            let config = cmd::load_config(config_path.as_deref())?;
            let output = Output::new(cmd::output_mode(format, quiet));
            cmd::strength::cmd_strength(&config, &password, &output).map(|_| ())
        }
        Commands::Config => {
            let config = cmd::load_config(config_path.as_deref())?;
            cmd::config::cmd_config(&config, &Output::new(OutputMode::Human))
        }
        Commands::Completion { shell } => {
            cmd::util::cmd_completion(shell, &Output::new(OutputMode::Human))
        }
        Commands::Man { out_dir } => {
            let output = Output::new(cmd::output_mode(Format::Text, quiet));
            cmd::util::cmd_man(out_dir.as_deref(), &output).map(|_| ())
        }
        Commands::Version { verbose } => {
            let output = Output::new(cmd::output_mode(Format::Text, quiet));
            cmd::util::cmd_version(verbose, &output)
        }
    }
}
