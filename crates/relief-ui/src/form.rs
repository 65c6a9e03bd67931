//! Form-to-payload conversion.

use relief_core::Payload;
use serde_json::Value;

/// Convert form entries into a payload.
///
/// Entries are visited in order. Values are copied verbatim, except that an
/// empty string becomes `null`. A repeated name overwrites the earlier value
/// but keeps its first position. No type inference is done: every value is a
/// string or `null`.
pub fn serialize_form<I, K, V>(entries: I) -> Payload
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut payload = Payload::new();
    for (name, value) in entries {
        let value: String = value.into();
        let value = if value.is_empty() {
            Value::Null
        } else {
            Value::String(value)
        };
        payload.insert(name.into(), value);
    }
    payload
}

/// Ordered name/value pairs of a form, as a browser would submit them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    fields: Vec<(String, String)>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `application/x-www-form-urlencoded` text, e.g. `name=Jane&age=`.
    pub fn from_urlencoded(input: &str) -> Self {
        url::form_urlencoded::parse(input.as_bytes())
            .into_owned()
            .collect()
    }

    /// Append a field. Duplicate names are kept; the last one wins on
    /// serialization.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(name, value);
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serialize the current field values with [`serialize_form`].
    pub fn to_payload(&self) -> Payload {
        serialize_form(self.fields.iter().cloned())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Form {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
