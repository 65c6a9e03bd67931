//! REST client for the relief management backend.
//!
//! [`ApiClient::request`] performs one JSON round trip against the configured
//! base URL. Resource clients ([`ResourceClient`], [`ContactClient`]) map
//! named operations onto it with the right verb and path.
//!
//! ```no_run
//! use relief_api::{ApiClientConfig, DefaultApiClient};
//! use relief_core::payload_from_pairs;
//!
//! # async fn run() -> Result<(), relief_api::ApiError> {
//! let client = DefaultApiClient::new(&ApiClientConfig::new())?;
//! let victims = client.victims().get_all().await?;
//! let updated = client
//!     .victims()
//!     .update(42, &payload_from_pairs([("name", "Jane")]))
//!     .await?;
//! # let _ = (victims, updated);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{ApiClient, ContactClient, DefaultApiClient, ResourceClient};

// Configuration
pub use config::{ApiClientConfig, DEFAULT_BASE_URL};

// Errors
pub use error::{ApiError, ApiResult, ErrorKind, FALLBACK_ERROR_MESSAGE};

// Transport
pub use http::{HttpBackend, ReqwestBackend};
pub use models::{HttpRequest, HttpResponse, Method};

