//! CLI argument definitions for regform.

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "regform")]
#[command(version)]
#[command(about = "Registration form validation", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    regform fill                Fill in the form interactively\n    regform check form.yaml     Validate a form from a file\n    regform strength <PASS>     Show the strength of a password"
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file to use instead of .regform/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fill in the registration form interactively
    ///
    /// After each submit the failing fields are shown with their error
    /// text and only those fields are asked again.
    Fill,
    /// Validate a form read from a file, stdin, or flags
    ///
    /// Exits with status 1 when the form is invalid.
    Check {
        /// JSON or YAML file with the form values ('-' for stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
        #[command(flatten)]
        fields: FieldArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Show the strength score of a password
    Strength {
        /// Password to score
        #[arg(allow_hyphen_values = true)]
        password: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print the effective validation rules as YAML
    Config,
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Generate a man page
    Man {
        /// Directory to write regform.1 into
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
    /// Show version information
    Version {
        /// Include commit and build date
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Field values given on the command line. They override values from FILE.
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    #[arg(long)]
    pub full_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub confirm_password: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    /// male, female or other
    #[arg(long)]
    pub gender: Option<String>,
    /// Accept the terms (`--terms=false` to withdraw)
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub terms: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}
