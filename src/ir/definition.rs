//! Object type definitions and their relations.

use serde::{Deserialize, Serialize};

use super::metadata::{Metadata, MetadataEntry, RelationKind};
use super::rewrite::UsersetRewrite;

/// Sub-relation sentinel meaning "the subject type itself".
pub const ELLIPSIS: &str = "...";

/// A compiled object type, e.g. `acme/document`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceDefinition {
    /// Qualified name: `namespace/name` or a bare `name`.
    pub name: String,
    #[serde(default)]
    pub relations: Vec<RelationDecl>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl NamespaceDefinition {
    pub fn new(name: impl Into<String>, relations: Vec<RelationDecl>) -> Self {
        NamespaceDefinition {
            name: name.into(),
            relations,
            metadata: Metadata::default(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.metadata.push(MetadataEntry::doc_comment(comment));
        self
    }
}

/// A relation or permission declared inside a definition.
///
/// Which one it is lives in `metadata`; see [`RelationKind`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationDecl {
    pub name: String,
    #[serde(default)]
    pub userset_rewrite: Option<UsersetRewrite>,
    #[serde(default)]
    pub allowed_direct_relations: Vec<AllowedRelation>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl RelationDecl {
    /// A stored relation with its allowed subject types.
    pub fn relation(name: impl Into<String>, types: Vec<AllowedRelation>) -> Self {
        RelationDecl {
            name: name.into(),
            userset_rewrite: None,
            allowed_direct_relations: types,
            metadata: Metadata::new(vec![MetadataEntry::relation_kind(RelationKind::Relation)]),
        }
    }

    /// A computed permission.
    pub fn permission(name: impl Into<String>, rewrite: UsersetRewrite) -> Self {
        RelationDecl {
            name: name.into(),
            userset_rewrite: Some(rewrite),
            allowed_direct_relations: Vec::new(),
            metadata: Metadata::new(vec![MetadataEntry::relation_kind(RelationKind::Permission)]),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.metadata.push(MetadataEntry::doc_comment(comment));
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// One allowed subject type of a stored relation, e.g. `user`, `group#member`,
/// `user:*` or `user with ip_allowlist`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowedRelation {
    /// Target type name.
    pub namespace: String,
    pub relation_or_wildcard: RelationOrWildcard,
    #[serde(default)]
    pub required_caveat: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationOrWildcard {
    Relation(String),
    PublicWildcard,
}

impl AllowedRelation {
    /// `type`, i.e. the subject type itself.
    pub fn direct(namespace: impl Into<String>) -> Self {
        Self::with_relation(namespace, ELLIPSIS)
    }

    /// `type#relation`.
    pub fn with_relation(namespace: impl Into<String>, relation: impl Into<String>) -> Self {
        AllowedRelation {
            namespace: namespace.into(),
            relation_or_wildcard: RelationOrWildcard::Relation(relation.into()),
            required_caveat: None,
        }
    }

    /// `type:*`.
    pub fn wildcard(namespace: impl Into<String>) -> Self {
        AllowedRelation {
            namespace: namespace.into(),
            relation_or_wildcard: RelationOrWildcard::PublicWildcard,
            required_caveat: None,
        }
    }

    pub fn with_caveat(mut self, caveat: impl Into<String>) -> Self {
        self.required_caveat = Some(caveat.into());
        self
    }
}
