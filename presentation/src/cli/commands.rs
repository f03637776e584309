//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command summaries
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for provision_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => provision_domain::OutputFormat::Text,
            OutputFormat::Json => provision_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for ha-provision
#[derive(Parser, Debug)]
#[command(name = "ha-provision")]
#[command(author, version, about = "Render the config of a two-node HA reverse-proxy stack")]
#[command(long_about = r#"
ha-provision renders the configuration of one node of a two-node
high-availability reverse-proxy stack: a MariaDB Galera node, Keepalived
holding a floating IP, Syncthing replicating the proxy data, and a Docker
Compose manifest running Nginx Proxy Manager.

Inputs are resolved per key (see `ha-provision keys`), in order:
1. Environment variable     HOST_IP=10.0.0.2 ...
2. [values] table of the config file
3. Built-in default         (DB_PORT, KEEPALIVED_INTERFACE, ...)
4. Interactive prompt       (only on a terminal, unless --non-interactive)

Configuration files are loaded from (in priority order):
1. --config <path>        Explicit config file
2. ./ha-provision.toml    Project-level config
3. ~/.config/ha-provision/config.toml   Global config

Example:
  ha-provision render
  ha-provision --stack-dir /srv/proxy render --stdout
  ha-provision apply --dry-run
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Fail instead of prompting for missing values
    #[arg(long, global = true)]
    pub non_interactive: bool,

    /// Directory holding the compose manifest and MariaDB mounts
    #[arg(long, value_name = "DIR", global = true)]
    pub stack_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Resolve inputs and write every artifact (default)
    Render {
        /// Print the artifacts instead of writing them
        #[arg(long)]
        stdout: bool,
    },
    /// Install packages, write artifacts and start services
    Apply {
        /// Print the plan without touching the host
        #[arg(long)]
        dry_run: bool,

        /// Skip the apt-get steps
        #[arg(long)]
        skip_install: bool,
    },
    /// List the configuration keys and exit
    Keys,
}

impl Cli {
    /// The subcommand to run; `render` when none is given.
    pub fn subcommand(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Render { stdout: false })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_render() {
        let cli = Cli::parse_from(["ha-provision"]);
        assert_eq!(cli.subcommand(), Command::Render { stdout: false });
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_apply_flags() {
        let cli = Cli::parse_from([
            "ha-provision",
            "apply",
            "--dry-run",
            "--skip-install",
            "--non-interactive",
            "-vv",
        ]);
        assert_eq!(
            cli.subcommand(),
            Command::Apply {
                dry_run: true,
                skip_install: true
            }
        );
        assert!(cli.non_interactive);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_global_flags_before_subcommand() {
        let cli = Cli::parse_from([
            "ha-provision",
            "--stack-dir",
            "/srv/proxy",
            "--output",
            "json",
            "render",
            "--stdout",
        ]);
        assert_eq!(cli.stack_dir, Some(PathBuf::from("/srv/proxy")));
        assert!(matches!(cli.output, Some(OutputFormat::Json)));
        assert_eq!(cli.subcommand(), Command::Render { stdout: true });
    }

    #[test]
    fn test_output_format_into_domain() {
        let format: provision_domain::OutputFormat = OutputFormat::Json.into();
        assert_eq!(format, provision_domain::OutputFormat::Json);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        <Cli as CommandFactory>::command().debug_assert();
    }
}
