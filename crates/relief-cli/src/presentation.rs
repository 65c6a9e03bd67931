//! Terminal output.

use serde_json::Value;

use crate::error::CliError;

/// Print an API response as indented JSON.
pub fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Lines printed once the backend process is running.
pub fn start_banner(server_url: &str) -> Vec<String> {
    let rule = "-".repeat(45);
    vec![
        format!("Backend server started at {server_url}"),
        rule.clone(),
        "To access the application:".to_string(),
        format!("1. Open {server_url} in your browser for the API"),
        "2. Open the frontend/index.html file in your browser for the frontend".to_string(),
        "3. Press Ctrl+C to stop the server".to_string(),
        rule,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_mentions_url_and_ctrl_c() {
        let banner = start_banner("http://localhost:5000");
        assert_eq!(banner[0], "Backend server started at http://localhost:5000");
        assert!(banner.iter().any(|line| line.contains("Ctrl+C")));
        assert_eq!(banner[1].len(), 45);
    }
}
