//! Stored relations and computed permissions of an exported definition.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::userset::UserSet;

/// Exported `relation` value meaning "any subject of this type".
pub const WILDCARD: &str = "*";

/// A stored relation with the subject types it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Relation {
    pub name: String,
    pub types: Vec<RelationType>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// One accepted subject type.
///
/// `relation` is empty for the subject type itself and `"*"` for a wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct RelationType {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub relation: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub caveat: String,
}

impl RelationType {
    pub fn is_wildcard(&self) -> bool {
        self.relation == WILDCARD
    }

    pub fn is_self(&self) -> bool {
        self.relation.is_empty()
    }
}

/// A computed permission. `user_set` is `None` only when the compiler gave
/// the permission no rewrite, and then serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub name: String,
    pub user_set: Option<UserSet>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}
