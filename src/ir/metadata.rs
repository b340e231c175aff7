//! Typed, self-describing metadata payloads attached to IR nodes.
//!
//! The compiler attaches an unordered list of `(type_url, bytes)` entries to
//! definitions, relations and caveats. Two kinds matter to the exporter:
//!
//! - doc comments (`impl.v1.DocComment`), carrying the raw comment text
//! - relation metadata (`impl.v1.RelationMetadata`), carrying the
//!   relation/permission classification

use prost::Message;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Type URL of doc comment entries.
pub const DOC_COMMENT_TYPE_URL: &str = "type.googleapis.com/impl.v1.DocComment";

/// Type URL of relation classification entries.
pub const RELATION_METADATA_TYPE_URL: &str = "type.googleapis.com/impl.v1.RelationMetadata";

/// One opaque metadata payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataEntry {
    pub type_url: String,
    #[serde(default)]
    pub value: Vec<u8>,
}

impl MetadataEntry {
    pub fn new(type_url: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        MetadataEntry {
            type_url: type_url.into(),
            value: value.into(),
        }
    }

    /// Encode a doc comment entry the way the compiler does.
    pub fn doc_comment(comment: impl Into<String>) -> Self {
        let payload = DocComment {
            comment: comment.into(),
        };
        Self::new(DOC_COMMENT_TYPE_URL, payload.encode_to_vec())
    }

    /// Encode a relation classification entry.
    pub fn relation_kind(kind: RelationKind) -> Self {
        let payload = RelationMetadata { kind: kind as i32 };
        Self::new(RELATION_METADATA_TYPE_URL, payload.encode_to_vec())
    }

    pub fn is_type(&self, type_url: &str) -> bool {
        self.type_url == type_url
    }
}

/// The metadata list of a single IR node, in compiler order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(pub Vec<MetadataEntry>);

impl Metadata {
    pub fn new(entries: Vec<MetadataEntry>) -> Self {
        Metadata(entries)
    }

    pub fn push(&mut self, entry: MetadataEntry) {
        self.0.push(entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetadataEntry> {
        self.0.iter()
    }

    /// All entries carrying the given type URL.
    pub fn of_type<'a>(&'a self, type_url: &'a str) -> impl Iterator<Item = &'a MetadataEntry> {
        self.0.iter().filter(move |entry| entry.is_type(type_url))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<MetadataEntry>> for Metadata {
    fn from(entries: Vec<MetadataEntry>) -> Self {
        Metadata(entries)
    }
}

/// Wire form of a doc comment payload.
#[derive(Clone, PartialEq, Message)]
pub struct DocComment {
    #[prost(string, tag = "1")]
    pub comment: String,
}

/// Wire form of a relation classification payload.
#[derive(Clone, PartialEq, Message)]
pub struct RelationMetadata {
    #[prost(enumeration = "RelationKind", tag = "1")]
    pub kind: i32,
}

/// Whether a relation is stored or computed.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration, Display, EnumString,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum RelationKind {
    UnknownKind = 0,
    Relation = 1,
    Permission = 2,
}
