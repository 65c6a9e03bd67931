//! Contact form submission.

use super::ApiClient;
use crate::error::ApiResult;
use crate::http::HttpBackend;
use crate::models::Method;
use relief_core::Payload;
use serde_json::Value;

/// Endpoint the contact form posts to.
pub(crate) const CONTACT_ENDPOINT: &str = "contact";

/// Client for the contact form. Submission is the only operation.
pub struct ContactClient<'a, B: HttpBackend> {
    client: &'a ApiClient<B>,
}

impl<'a, B: HttpBackend> ContactClient<'a, B> {
    pub(crate) const fn new(client: &'a ApiClient<B>) -> Self {
        Self { client }
    }

    /// `POST contact` with the form payload.
    pub async fn submit(&self, form: &Payload) -> ApiResult<Value> {
        self.client
            .request_value(CONTACT_ENDPOINT, Method::Post, Some(form))
            .await
    }
}
