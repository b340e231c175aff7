use serde::{Deserialize, Serialize};

use super::metadata::{Metadata, MetadataEntry};

/// A compiled caveat: a named condition over typed parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaveatDefinition {
    pub name: String,
    /// Parameter type names in declaration order, e.g. `["ipaddress", "int"]`.
    #[serde(default)]
    pub parameter_types: Vec<String>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl CaveatDefinition {
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        parameter_types: impl IntoIterator<Item = S>,
    ) -> Self {
        CaveatDefinition {
            name: name.into(),
            parameter_types: parameter_types.into_iter().map(Into::into).collect(),
            metadata: Metadata::default(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.metadata.push(MetadataEntry::doc_comment(comment));
        self
    }
}
