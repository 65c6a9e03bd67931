//! Relief API client.
//!
//! [`ApiClient::request`] is the single place where requests are built,
//! sent and interpreted. The resource clients in the submodules only choose
//! the verb, the endpoint and whether a payload goes along.

mod contact;
mod resource;

pub use contact::ContactClient;
pub use resource::ResourceClient;

use crate::config::ApiClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{HttpRequest, Method};
use crate::url::{build_endpoint_url, parse_base_url};
use relief_core::{Payload, Resource};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default API client using the reqwest HTTP backend.
pub type DefaultApiClient = ApiClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the relief management REST API.
///
/// Generic over the HTTP backend so tests can substitute a fake transport.
/// Use [`DefaultApiClient`] in production code.
pub struct ApiClient<B: HttpBackend> {
    backend: B,
    base_url: Url,
}

impl DefaultApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &ApiClientConfig) -> ApiResult<Self> {
        let backend = ReqwestBackend::new(config)?;
        Self::with_backend(config, backend)
    }

    /// Create a new client pointing at the default local backend.
    pub fn default_client() -> ApiResult<Self> {
        Self::new(&ApiClientConfig::default())
    }
}

impl<B: HttpBackend> ApiClient<B> {
    /// Create a client with a custom backend.
    ///
    /// Only the base URL is taken from `config`; transport settings belong to
    /// the backend.
    pub fn with_backend(config: &ApiClientConfig, backend: B) -> ApiResult<Self> {
        Ok(Self {
            backend,
            base_url: parse_base_url(config.base_url())?,
        })
    }

    /// Base URL every endpoint is appended to.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Perform one request against `endpoint` and decode the JSON response.
    ///
    /// `data` is sent as the JSON body only for `POST` and `PUT`. The body of
    /// the response is parsed as JSON whatever the status; a non-2xx status
    /// becomes [`ApiError::Request`] carrying the body's `message`.
    ///
    /// Failures are logged here once and returned unchanged. Nothing is
    /// retried.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        method: Method,
        data: Option<&Payload>,
    ) -> ApiResult<T> {
        let result = self.round_trip(endpoint, method, data).await;
        if let Err(ref err) = result {
            error!(endpoint, %method, error = %err, "API error");
        }
        result
    }

    /// [`request`](Self::request) returning the untyped response envelope.
    pub async fn request_value(
        &self,
        endpoint: &str,
        method: Method,
        data: Option<&Payload>,
    ) -> ApiResult<Value> {
        self.request(endpoint, method, data).await
    }

    async fn round_trip<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        method: Method,
        data: Option<&Payload>,
    ) -> ApiResult<T> {
        let url = build_endpoint_url(&self.base_url, endpoint)?;
        let body = match data {
            Some(payload) if method.carries_body() => {
                Some(serde_json::to_vec(payload).map_err(ApiError::Encode)?)
            }
            Some(_) => {
                debug!(%method, endpoint, "dropping payload for verb without body");
                None
            }
            None => None,
        };

        debug!(%method, %url, "sending request");
        let response = self.backend.execute(HttpRequest { method, url, body }).await?;
        let status = response.status;

        let parsed: Value = serde_json::from_slice(&response.body)
            .map_err(|source| ApiError::Decode { status, source })?;

        if !response.is_success() {
            return Err(ApiError::from_error_body(status, &parsed));
        }

        serde_json::from_value(parsed).map_err(|source| ApiError::Decode { status, source })
    }

    // ------------------------------------------------------------------------
    // Resource clients
    // ------------------------------------------------------------------------

    /// CRUD client for any resource.
    pub const fn resource(&self, resource: Resource) -> ResourceClient<'_, B> {
        ResourceClient::new(self, resource)
    }

    pub const fn relief_camps(&self) -> ResourceClient<'_, B> {
        self.resource(Resource::ReliefCamps)
    }

    pub const fn victims(&self) -> ResourceClient<'_, B> {
        self.resource(Resource::Victims)
    }

    pub const fn missing_persons(&self) -> ResourceClient<'_, B> {
        self.resource(Resource::MissingPersons)
    }

    pub const fn inventory(&self) -> ResourceClient<'_, B> {
        self.resource(Resource::Inventory)
    }

    pub const fn volunteers(&self) -> ResourceClient<'_, B> {
        self.resource(Resource::Volunteers)
    }

    /// Client for the contact form endpoint.
    pub const fn contact(&self) -> ContactClient<'_, B> {
        ContactClient::new(self)
    }
}
