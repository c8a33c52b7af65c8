//! Location records

use serde::{Deserialize, Serialize};

/// A single location in the multiverse.
///
/// Field declaration order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Positive, unique and stable identifier
    pub id: u32,
    pub name: String,
    /// Kind of place (Planet, Space station, ...)
    #[serde(rename = "type")]
    pub location_type: String,
    pub dimension: String,
    /// Character URLs of the known residents, in dataset order
    #[serde(default)]
    pub residents: Vec<String>,
    /// Canonical URL of this record
    pub url: String,
    /// Creation timestamp (RFC 3339), kept verbatim
    pub created: String,
}
