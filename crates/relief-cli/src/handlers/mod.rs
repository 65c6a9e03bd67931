//! Command handlers.
//!
//! Record and contact handlers return the decoded response so `main` decides
//! how to print it. `start` owns the terminal until the backend stops.

pub mod contact;
pub mod records;
pub mod start;

use relief_api::{ApiClient, HttpBackend};
use relief_core::Payload;
use relief_ui::Form;
use serde_json::Value;

use crate::commands::Commands;
use crate::error::CliError;

/// Run a command that talks to the API and return the decoded response.
pub async fn api_command<B: HttpBackend>(
    client: &ApiClient<B>,
    command: &Commands,
) -> Result<Value, CliError> {
    match command {
        Commands::List { resource } => records::list(client, *resource).await,
        Commands::Get { resource, id } => records::get(client, *resource, id).await,
        Commands::Create { resource, form } => records::create(client, *resource, form).await,
        Commands::Update { resource, id, form } => {
            records::update(client, *resource, id, form).await
        }
        Commands::Delete { resource, id } => records::delete(client, *resource, id).await,
        Commands::Contact { form } => contact::submit(client, form).await,
        Commands::Start(_) => Err(CliError::Arguments(
            "start does not call the API".to_string(),
        )),
    }
}

/// Decode `--form` input into a request payload. Empty values become `null`.
pub(crate) fn form_payload(input: &str) -> Result<Payload, CliError> {
    let form = Form::from_urlencoded(input);
    if form.is_empty() {
        return Err(CliError::Arguments("--form has no fields".to_string()));
    }
    Ok(form.to_payload())
}
