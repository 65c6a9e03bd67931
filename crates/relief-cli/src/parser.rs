//! Top-level argument parsing and global options.

use clap::Parser;
use relief_api::{ApiClientConfig, DEFAULT_BASE_URL};

use crate::commands::Commands;

/// Client for the disaster relief management system.
#[derive(Parser)]
#[command(name = "relief")]
#[command(about = "Manage relief camps, victims, missing persons, inventory and volunteers")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Base URL of the relief API
    #[arg(
        long = "base-url",
        env = "RELIEF_API_URL",
        global = true,
        default_value = DEFAULT_BASE_URL
    )]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// API client configuration for this invocation.
    pub fn api_config(&self) -> ApiClientConfig {
        ApiClientConfig::new().with_base_url(self.base_url.clone())
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub const fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use relief_core::Resource;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "relief",
            "--verbose",
            "--base-url",
            "http://relief.test/api",
            "list",
            "victims",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.log_level(), "debug");
        assert_eq!(cli.api_config().base_url(), "http://relief.test/api");
        assert!(matches!(
            cli.command,
            Commands::List {
                resource: Resource::Victims
            }
        ));
    }

    #[test]
    fn test_resource_names_accept_dashes() {
        let cli = Cli::parse_from(["relief", "get", "missing-persons", "12"]);
        match cli.command {
            Commands::Get { resource, id } => {
                assert_eq!(resource, Resource::MissingPersons);
                assert_eq!(id, "12");
            }
            _ => panic!("expected get"),
        }
    }

    #[test]
    fn test_unknown_resource_is_rejected() {
        assert!(Cli::try_parse_from(["relief", "list", "shelters"]).is_err());
    }

    #[test]
    fn test_update_requires_form() {
        assert!(Cli::try_parse_from(["relief", "update", "victims", "42"]).is_err());

        let cli = Cli::parse_from(["relief", "update", "victims", "42", "--form", "name=Jane"]);
        assert!(matches!(cli.command, Commands::Update { ref form, .. } if form == "name=Jane"));
    }

    #[test]
    fn test_start_flags() {
        let cli = Cli::parse_from([
            "relief",
            "start",
            "--root",
            "/opt/relief",
            "--interpreter",
            "python3.12",
            "--wait-ready",
            "--propagate-exit-code",
        ]);
        let Commands::Start(args) = cli.command else {
            panic!("expected start");
        };
        assert_eq!(args.root.as_deref(), Some(std::path::Path::new("/opt/relief")));
        assert_eq!(args.interpreter.as_deref(), Some("python3.12"));
        assert!(args.wait_ready);
        assert!(args.propagate_exit_code);
        assert_eq!(args.ready_timeout, 30);
    }
}
