//! Typed view of the backend's response envelope.
//!
//! The backend wraps every response as
//! `{"success": bool, "data": ..., "message": "..."}`, sometimes with extra
//! keys such as the id of a newly created record. The API client returns the
//! raw JSON unchanged; callers that want typed access deserialize it into
//! [`Envelope`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parsed response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Keys outside the conventional three, e.g. `camp_id` after a create.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T> Envelope<T> {
    /// Consume the envelope and return its `data` member.
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Look up an extra key by name.
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

impl<T: serde::de::DeserializeOwned> Envelope<T> {
    /// Deserialize an envelope from an already parsed response body.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}
