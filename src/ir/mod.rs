//! The compiled schema IR consumed by the exporter.
//!
//! This mirrors what the schema DSL compiler produces: object definitions
//! with relations (stored or computed), caveat definitions, and opaque
//! metadata entries on every node. The exporter only reads it.

mod caveat;
mod definition;
mod metadata;
mod rewrite;

use serde::{Deserialize, Serialize};

pub use caveat::CaveatDefinition;
pub use definition::{AllowedRelation, ELLIPSIS, NamespaceDefinition, RelationDecl, RelationOrWildcard};
pub use metadata::{
    DOC_COMMENT_TYPE_URL, DocComment, Metadata, MetadataEntry, RELATION_METADATA_TYPE_URL,
    RelationKind, RelationMetadata,
};
pub use rewrite::{ComputedUserset, SetOperationChild, TupleToUserset, UsersetRewrite};

/// Output of the schema compiler.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledSchema {
    #[serde(default)]
    pub object_definitions: Vec<NamespaceDefinition>,
    #[serde(default)]
    pub caveat_definitions: Vec<CaveatDefinition>,
}

impl CompiledSchema {
    pub fn new(
        object_definitions: Vec<NamespaceDefinition>,
        caveat_definitions: Vec<CaveatDefinition>,
    ) -> Self {
        CompiledSchema {
            object_definitions,
            caveat_definitions,
        }
    }
}
