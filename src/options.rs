//! Exporter configuration.

use serde::{Deserialize, Serialize};

use crate::ir::{DOC_COMMENT_TYPE_URL, RELATION_METADATA_TYPE_URL};

/// Settings for a [`crate::SchemaExporter`].
///
/// Type URLs differ between compiler releases, so both metadata tags are
/// configurable. Deserializes with defaults for any missing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportOptions {
    /// Type URL identifying doc comment metadata.
    pub doc_comment_type_url: String,
    /// Type URL identifying relation classification metadata.
    pub relation_metadata_type_url: String,
    /// Fail on userset children the exporter cannot represent instead of
    /// dropping them.
    pub strict_children: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            doc_comment_type_url: DOC_COMMENT_TYPE_URL.to_string(),
            relation_metadata_type_url: RELATION_METADATA_TYPE_URL.to_string(),
            strict_children: false,
        }
    }
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_doc_comment_type_url(mut self, type_url: impl Into<String>) -> Self {
        self.doc_comment_type_url = type_url.into();
        self
    }

    pub fn with_relation_metadata_type_url(mut self, type_url: impl Into<String>) -> Self {
        self.relation_metadata_type_url = type_url.into();
        self
    }

    pub fn with_strict_children(mut self, strict: bool) -> Self {
        self.strict_children = strict;
        self
    }
}
