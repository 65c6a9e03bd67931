//! Backend resource collections.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A backend-managed entity collection with full CRUD support.
///
/// The contact form is not a resource: it only accepts submissions and is
/// handled by its own client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    ReliefCamps,
    Victims,
    MissingPersons,
    Inventory,
    Volunteers,
}

impl Resource {
    /// Every CRUD resource, in the order the backend documents them.
    pub const ALL: [Self; 5] = [
        Self::ReliefCamps,
        Self::Victims,
        Self::MissingPersons,
        Self::Inventory,
        Self::Volunteers,
    ];

    /// Path segment below the API base URL.
    pub const fn path(self) -> &'static str {
        match self {
            Self::ReliefCamps => "relief_camps",
            Self::Victims => "victims",
            Self::MissingPersons => "missing_persons",
            Self::Inventory => "inventory",
            Self::Volunteers => "volunteers",
        }
    }

    /// Endpoint for the whole collection.
    pub fn collection_endpoint(self) -> String {
        self.path().to_string()
    }

    /// Endpoint for a single record. The identifier is not validated.
    pub fn item_endpoint(self, id: impl fmt::Display) -> String {
        format!("{}/{id}", self.path())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Returned when a name does not match any [`Resource`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resource '{name}' (expected one of: relief_camps, victims, missing_persons, inventory, volunteers)")]
pub struct UnknownResource {
    pub name: String,
}

impl FromStr for Resource {
    type Err = UnknownResource;

    /// Accepts the path segment, with `-` allowed in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|resource| resource.path() == normalized)
            .ok_or_else(|| UnknownResource {
                name: s.to_string(),
            })
    }
}
