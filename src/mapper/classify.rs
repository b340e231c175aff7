use prost::Message;
use tracing::warn;

use crate::comments::extract_comment;
use crate::error::SchemaError;
use crate::ir::{Metadata, NamespaceDefinition, RelationDecl, RelationKind, RelationMetadata};
use crate::options::ExportOptions;
use crate::types::{Permission, Relation};

use super::relation_type::map_relation_type;
use super::userset::map_userset;
use super::RelationScope;

/// A relation declaration after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    Relation(Relation),
    Permission(Permission),
}

/// Read the relation classification from `metadata`.
///
/// The first entry tagged `type_url` wins. A missing entry or a payload that
/// does not decode reads as [`RelationKind::UnknownKind`].
pub fn relation_kind(metadata: &Metadata, type_url: &str) -> RelationKind {
    metadata
        .of_type(type_url)
        .next()
        .and_then(|entry| RelationMetadata::decode(entry.value.as_slice()).ok())
        .and_then(|decoded| RelationKind::try_from(decoded.kind).ok())
        .unwrap_or(RelationKind::UnknownKind)
}

/// Classify one relation of `definition` and map it to its exported form.
///
/// Anything other than a relation or a permission is a
/// [`SchemaError::ClassificationError`].
pub fn classify(
    definition: &NamespaceDefinition,
    decl: &RelationDecl,
    options: &ExportOptions,
) -> Result<Classified, SchemaError> {
    match relation_kind(&decl.metadata, &options.relation_metadata_type_url) {
        RelationKind::Relation => Ok(Classified::Relation(map_relation(decl, options))),
        RelationKind::Permission => {
            let scope = RelationScope {
                definition: &definition.name,
                relation: &decl.name,
                options,
            };
            Ok(Classified::Permission(map_permission(decl, &scope)?))
        }
        RelationKind::UnknownKind => Err(SchemaError::ClassificationError {
            definition: definition.name.clone(),
            relation: decl.name.clone(),
        }),
    }
}

fn map_relation(decl: &RelationDecl, options: &ExportOptions) -> Relation {
    Relation {
        name: decl.name.clone(),
        types: decl
            .allowed_direct_relations
            .iter()
            .map(map_relation_type)
            .collect(),
        comment: extract_comment(&decl.metadata, &options.doc_comment_type_url),
    }
}

fn map_permission(decl: &RelationDecl, scope: &RelationScope<'_>) -> Result<Permission, SchemaError> {
    let user_set = decl
        .userset_rewrite
        .as_ref()
        .map(|rewrite| map_userset(rewrite, scope))
        .transpose()?;

    if user_set.is_none() {
        warn!(
            event = "Export",
            phase = "Permission",
            definition = scope.definition,
            permission = scope.relation,
            "permission has no userset rewrite"
        );
    }

    Ok(Permission {
        name: decl.name.clone(),
        user_set,
        comment: extract_comment(&decl.metadata, &scope.options.doc_comment_type_url),
    })
}
