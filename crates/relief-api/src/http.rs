//! HTTP backend abstraction for the relief API.
//!
//! The client prepares requests and interprets responses; the backend only
//! moves bytes. This keeps the request logic testable without a network.
//! The production implementation uses reqwest and never retries.

use crate::config::ApiClientConfig;
use crate::error::ApiResult;
use crate::models::{HttpRequest, HttpResponse, Method};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for transports that can execute a prepared request.
///
/// Implementations return the status and raw body for every response they
/// receive, including error statuses. Only failures to obtain a response at
/// all are reported as errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Send one request and collect the response.
    async fn execute(&self, request: HttpRequest) -> ApiResult<HttpResponse>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// Every request carries `Content-Type: application/json`, whether or not it
/// has a body.
#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ApiClientConfig) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    fn reqwest_method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn execute(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let mut builder = self
            .client
            .request(Self::reqwest_method(request.method), request.url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(HttpResponse { status, body })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
