//! URL construction helpers.
//!
//! Endpoints are appended to the base URL as text so that nested paths such
//! as `victims/42` keep their slashes.

use url::Url;

/// Parse and normalise a base URL. A trailing slash is removed.
pub fn parse_base_url(base_url: &str) -> Result<Url, url::ParseError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    Url::parse(trimmed)
}

/// Build the URL for an endpoint below `base`.
///
/// `base` + `/` + `endpoint`, with a leading slash on the endpoint collapsed.
/// Identifiers inside the endpoint are not validated; characters that are
/// not valid in a path are percent-encoded by the URL parser.
pub fn build_endpoint_url(base: &Url, endpoint: &str) -> Result<Url, url::ParseError> {
    let base_str = base.as_str().trim_end_matches('/');
    let endpoint = endpoint.trim_start_matches('/');
    Url::parse(&format!("{base_str}/{endpoint}"))
}
