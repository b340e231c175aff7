//! The exported form of a permission's rewrite expression.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

/// Set operator of an algebra node.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, Display, AsRefStr, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Union,
    Intersection,
    Exclusion,
}

/// A node of the exported userset tree.
///
/// Serialized untagged, so a node is one of:
/// - `{"operation": "union", "children": [...]}`
/// - `{"relation": "parent", "permission": "viewer"}`
/// - `{"relation": "viewer"}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum UserSet {
    #[schema(no_recursion)]
    Operation {
        operation: Operation,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<UserSet>,
    },
    TupleToUserset {
        relation: String,
        permission: String,
    },
    Relation {
        relation: String,
    },
}

impl UserSet {
    pub fn operation(operation: Operation, children: Vec<UserSet>) -> Self {
        UserSet::Operation {
            operation,
            children,
        }
    }

    pub fn relation(relation: impl Into<String>) -> Self {
        UserSet::Relation {
            relation: relation.into(),
        }
    }

    pub fn tuple_to_userset(relation: impl Into<String>, permission: impl Into<String>) -> Self {
        UserSet::TupleToUserset {
            relation: relation.into(),
            permission: permission.into(),
        }
    }

    /// Children of an algebra node; leaves have none.
    pub fn children(&self) -> &[UserSet] {
        match self {
            UserSet::Operation { children, .. } => children,
            _ => &[],
        }
    }
}
