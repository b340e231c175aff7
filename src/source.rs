//! Helpers for hosts that fetch schema text from a schema service over HTTP.
//!
//! The transport itself belongs to the host; this module only pins down the
//! request URL and the response body.

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Default path of the read-schema endpoint.
pub const DEFAULT_READ_SCHEMA_PATH: &str = "/v1/schema/read";

/// Body of a read-schema response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaResponse {
    pub schema_text: String,
}

impl SchemaResponse {
    pub fn from_json(body: &[u8]) -> Result<Self, SchemaError> {
        serde_json::from_slice(body).map_err(|e| SchemaError::InvalidFormat(e.to_string()))
    }
}

/// Where to `POST` a read-schema request. The path differs between service
/// releases, so it is configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReadSchemaEndpoint {
    pub path: String,
}

impl Default for ReadSchemaEndpoint {
    fn default() -> Self {
        ReadSchemaEndpoint {
            path: DEFAULT_READ_SCHEMA_PATH.to_string(),
        }
    }
}

impl ReadSchemaEndpoint {
    pub fn new(path: impl Into<String>) -> Self {
        ReadSchemaEndpoint { path: path.into() }
    }

    /// Full request URL for `base`, unless `base` already points at the endpoint.
    pub fn url_for(&self, base: &str) -> String {
        if base.ends_with(&self.path) {
            return base.to_string();
        }
        format!("{}{}", base.trim_end_matches('/'), self.path)
    }
}
