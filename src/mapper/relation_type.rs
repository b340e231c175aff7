use crate::ir::{AllowedRelation, ELLIPSIS, RelationOrWildcard};
use crate::types::{RelationType, WILDCARD};

/// Flatten one allowed subject type into `(type, relation, caveat)`.
///
/// A wildcard becomes `"*"` and the `...` sentinel becomes `""`, so `user`,
/// `user:*` and `user#member` stay distinguishable in the output.
pub fn map_relation_type(allowed: &AllowedRelation) -> RelationType {
    let relation = match &allowed.relation_or_wildcard {
        RelationOrWildcard::PublicWildcard => WILDCARD.to_string(),
        RelationOrWildcard::Relation(name) if name == ELLIPSIS => String::new(),
        RelationOrWildcard::Relation(name) => name.clone(),
    };

    RelationType {
        type_name: allowed.namespace.clone(),
        relation,
        caveat: allowed.required_caveat.clone().unwrap_or_default(),
    }
}
