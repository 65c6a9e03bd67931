//! Generic CRUD client for a backend resource.

use std::fmt::Display;

use super::ApiClient;
use crate::error::ApiResult;
use crate::http::HttpBackend;
use crate::models::Method;
use relief_core::{Payload, Resource};
use serde_json::Value;

/// CRUD operations on one [`Resource`].
///
/// Identifiers are forwarded as given; a malformed id is only ever rejected
/// by the backend.
pub struct ResourceClient<'a, B: HttpBackend> {
    client: &'a ApiClient<B>,
    resource: Resource,
}

impl<'a, B: HttpBackend> ResourceClient<'a, B> {
    pub(crate) const fn new(client: &'a ApiClient<B>, resource: Resource) -> Self {
        Self { client, resource }
    }

    /// The resource this client operates on.
    pub const fn resource(&self) -> Resource {
        self.resource
    }

    /// `GET {resource}`
    pub async fn get_all(&self) -> ApiResult<Value> {
        self.client
            .request_value(&self.resource.collection_endpoint(), Method::Get, None)
            .await
    }

    /// `GET {resource}/{id}`
    pub async fn get_by_id(&self, id: impl Display) -> ApiResult<Value> {
        self.client
            .request_value(&self.resource.item_endpoint(id), Method::Get, None)
            .await
    }

    /// `POST {resource}` with the full payload.
    pub async fn create(&self, payload: &Payload) -> ApiResult<Value> {
        self.client
            .request_value(
                &self.resource.collection_endpoint(),
                Method::Post,
                Some(payload),
            )
            .await
    }

    /// `PUT {resource}/{id}` with the full payload.
    pub async fn update(&self, id: impl Display, payload: &Payload) -> ApiResult<Value> {
        self.client
            .request_value(&self.resource.item_endpoint(id), Method::Put, Some(payload))
            .await
    }

    /// `DELETE {resource}/{id}`
    pub async fn delete(&self, id: impl Display) -> ApiResult<Value> {
        self.client
            .request_value(&self.resource.item_endpoint(id), Method::Delete, None)
            .await
    }
}
