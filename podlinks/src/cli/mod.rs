//! The `podlinks` command line interface.
//!
//! Resolves the operator links (cluster console, log search, monitoring
//! dashboards) for the pod and node that currently back a workspace.
//!
//! # Examples
//!
//! ```bash
//! # Resolve links from the built-in topology table
//! podlinks resolve --url https://ws-123.ws-eu03.gitpod.io --region eu03 --pod-name ws-123
//!
//! # Resolve links from templates attached to cluster records
//! podlinks resolve --workspace workspace.json --clusters clusters.yaml
//!
//! # Show the built-in topology table
//! podlinks topology
//! ```

mod clusters;
pub mod error;
mod internal;
mod resolve;
mod topology;

use std::{io::Write, path::PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use podlinks_base::CLI_PROGRAM_NAME;
use snafu::ResultExt;
use tokio::runtime::Runtime;

pub use self::error::Error;
use self::{clusters::ClustersCommand, resolve::ResolveCommand, topology::TopologyCommand};
use crate::{config::Config, shadow};

#[derive(Parser)]
#[command(
    name = CLI_PROGRAM_NAME,
    author,
    version,
    long_version = shadow::CLAP_LONG_VERSION,
    about = "Podlinks: operator deep-links for the pod and node backing a workspace.",
    long_about = "Podlinks works out which cluster and namespace run a workspace, either from \
                  a built-in domain and region table or from link templates attached to \
                  cluster records, and prints links into the cluster console, the log search \
                  and the monitoring dashboards.",
    color = clap::ColorChoice::Always
)]
pub struct Cli {
    #[clap(subcommand)]
    commands: Option<Commands>,

    #[clap(
        long = "config",
        short = 'c',
        env = "PODLINKS_CONFIG_FILE_PATH",
        help = "Specify a configuration file. Defaults to ~/.config/podlinks/config.yaml or \
                PODLINKS_CONFIG_FILE_PATH env var."
    )]
    config_file: Option<PathBuf>,

    #[clap(
        long = "log-level",
        env = "PODLINKS_LOG_LEVEL",
        help = "Set the logging level (e.g., warn, info, debug, trace)."
    )]
    log_level: Option<tracing::Level>,
}

#[derive(Clone, Subcommand)]
pub enum Commands {
    #[command(about = "Display version information")]
    Version,

    #[command(about = "Generate shell completion script for the specified shell (bash, zsh, fish)")]
    Completions { shell: clap_complete::Shell },

    #[command(about = "Output the default configuration in YAML format")]
    DefaultConfig,

    #[command(alias = "r", about = "Resolve the operator links of a workspace")]
    Resolve(ResolveCommand),

    #[command(alias = "t", about = "Show the built-in domain and region topology table")]
    Topology(TopologyCommand),

    #[command(alias = "c", about = "Show cluster records and the link templates they carry")]
    Clusters(ClustersCommand),
}

impl Default for Cli {
    fn default() -> Self { Self::parse() }
}

impl Cli {
    /// Loads the configuration file, applying overrides from the command
    /// line.
    ///
    /// An explicitly given file must exist. Without one, the first file found
    /// in the default locations is used, and built-in defaults otherwise.
    fn load_config(&self) -> Result<Config, Error> {
        let mut config = match self.config_file.clone().or_else(Config::search_config_file_path) {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(log_level) = self.log_level {
            config.log.level = log_level;
        }

        Ok(config)
    }

    /// Runs the selected command and returns the process exit code.
    ///
    /// # Errors
    ///
    /// Returns an `Error` if the configuration cannot be loaded, an input
    /// document cannot be read or parsed, or output cannot be written.
    ///
    /// # Panics
    ///
    /// Panics if writing the version or help text to the terminal fails.
    pub fn run(self) -> Result<i32, Error> {
        match self.commands {
            Some(Commands::Version) => {
                std::io::stdout()
                    .write_all(Self::command().render_long_version().as_bytes())
                    .expect("Failed to write to stdout");
                return Ok(0);
            }
            Some(Commands::Completions { shell }) => {
                let mut app = Self::command();
                let bin_name = app.get_name().to_string();
                clap_complete::generate(shell, &mut app, bin_name, &mut std::io::stdout());
                return Ok(0);
            }
            Some(Commands::DefaultConfig) => {
                std::io::stdout()
                    .write_all(Config::template_basic()?.as_bytes())
                    .context(error::WriteStdoutSnafu)?;
                return Ok(0);
            }
            _ => {}
        }

        let config = self.load_config()?;
        config.log.registry();

        let fut = async move {
            match self.commands {
                Some(Commands::Resolve(cmd)) => cmd.run(config).await?,
                Some(Commands::Topology(cmd)) => cmd.run().await?,
                Some(Commands::Clusters(cmd)) => cmd.run(config).await?,
                _ => {
                    let help = Self::command().render_long_help().ansi().to_string();
                    std::io::stderr()
                        .write_all(help.as_bytes())
                        .expect("Failed to write to stderr");
                    return Ok(-1);
                }
            }

            Ok(0)
        };

        Runtime::new().context(error::InitializeTokioRuntimeSnafu)?.block_on(fut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() { Cli::command().debug_assert(); }

    #[test]
    fn test_parse_resolve_flags() {
        let cli = Cli::try_parse_from([
            "podlinks",
            "resolve",
            "--url",
            "https://ws-1.ws-eu03.gitpod.io",
            "--region",
            "eu03",
            "--pod-name",
            "ws-1",
            "--strategy",
            "topology",
            "-o",
            "json",
        ])
        .unwrap();

        let Some(Commands::Resolve(cmd)) = cli.commands else {
            panic!("expected the resolve command");
        };
        assert_eq!(cmd.region.as_deref(), Some("eu03"));
        assert_eq!(cmd.pod_name.as_deref(), Some("ws-1"));
        assert_eq!(cmd.strategy, Some(podlinks_core::Strategy::Topology));
        assert_eq!(cmd.output, Some(crate::config::OutputFormat::Json));
    }

    #[test]
    fn test_resolve_requires_workspace() {
        assert!(Cli::try_parse_from(["podlinks", "resolve", "--region", "eu03"]).is_err());
        assert!(
            Cli::try_parse_from(["podlinks", "resolve", "--workspace", "-", "--region", "eu03"])
                .is_err()
        );
        assert!(Cli::try_parse_from(["podlinks", "resolve", "--workspace", "-"]).is_ok());
    }

    #[test]
    fn test_parse_unknown_strategy() {
        let result = Cli::try_parse_from([
            "podlinks",
            "resolve",
            "--workspace",
            "ws.json",
            "--strategy",
            "legacy",
        ]);
        assert!(result.is_err());
    }
}
