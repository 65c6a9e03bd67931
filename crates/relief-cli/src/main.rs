//! `relief` binary entry point.

use clap::Parser;
use relief_api::DefaultApiClient;
use relief_cli::{Cli, CliError, Commands, handlers, presentation};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match &cli.command {
        Commands::Start(args) => handlers::start::execute(args).await,
        command => {
            let client = DefaultApiClient::new(&cli.api_config())?;
            let response = handlers::api_command(&client, command).await?;
            presentation::print_json(&response)
        }
    }
}
