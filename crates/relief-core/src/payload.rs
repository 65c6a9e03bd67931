//! Request payloads.

use serde_json::{Map, Value};

/// JSON object sent as the body of create, update and submit requests.
///
/// Keys keep their insertion order. Values are expected to be primitives or
/// null; the backend owns the real schema.
pub type Payload = Map<String, Value>;

/// Build a payload from key/value pairs. Later keys overwrite earlier ones.
pub fn payload_from_pairs<K, V, I>(pairs: I) -> Payload
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}
