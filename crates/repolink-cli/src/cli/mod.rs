//! CLI for repolink.

mod commands;
mod output;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use repolink_core::config::{self, OutputFormat};
use std::path::PathBuf;

use commands::{run_list, run_manifest, run_parse};
use output::OutputSettings;

/// Top-level CLI for repolink.
#[derive(Debug, Parser)]
#[command(name = "repolink")]
#[command(about = "repolink: decompose repository references into owner, project and host", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Output format accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

/// Options shared by every command that prints descriptors.
#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    /// Output template, e.g. "{{owner}}/{{repo}}". Overrides `default_template`.
    #[arg(long, short = 't')]
    pub template: Option<String>,

    /// Output format. Overrides `output` from the config file.
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Parse one or more repository references.
    Parse {
        /// References: `user/project`, `git@host:user/project.git`, URLs, archive endpoints.
        #[arg(required = true)]
        references: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Parse the `repository` field of a package.json-style manifest.
    Manifest {
        /// Path to the manifest.
        path: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Parse every reference in a text file (one per line, `#` comments).
    List {
        /// Path to the reference list.
        path: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Parse { references, output } => {
                run_parse(&references, &OutputSettings::resolve(&cfg, &output))?
            }
            CliCommand::Manifest { path, output } => {
                run_manifest(&path, &OutputSettings::resolve(&cfg, &output))?
            }
            CliCommand::List { path, output } => {
                run_list(&path, &OutputSettings::resolve(&cfg, &output))?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
