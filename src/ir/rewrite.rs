//! Userset rewrite expressions: the boolean algebra behind a permission.

use serde::{Deserialize, Serialize};

/// A set operation over children. Exactly one operator per node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UsersetRewrite {
    Union(Vec<SetOperationChild>),
    Intersection(Vec<SetOperationChild>),
    Exclusion(Vec<SetOperationChild>),
}

impl UsersetRewrite {
    pub fn union(children: impl IntoIterator<Item = SetOperationChild>) -> Self {
        UsersetRewrite::Union(children.into_iter().collect())
    }

    pub fn intersection(children: impl IntoIterator<Item = SetOperationChild>) -> Self {
        UsersetRewrite::Intersection(children.into_iter().collect())
    }

    pub fn exclusion(children: impl IntoIterator<Item = SetOperationChild>) -> Self {
        UsersetRewrite::Exclusion(children.into_iter().collect())
    }

    pub fn children(&self) -> &[SetOperationChild] {
        match self {
            UsersetRewrite::Union(children)
            | UsersetRewrite::Intersection(children)
            | UsersetRewrite::Exclusion(children) => children,
        }
    }
}

/// One operand of a set operation.
///
/// `This` and `Nil` are structural placeholders emitted by the compiler; they
/// have no counterpart in the exported document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SetOperationChild {
    #[serde(rename = "_this")]
    This,
    ComputedUserset(ComputedUserset),
    TupleToUserset(TupleToUserset),
    UsersetRewrite(Box<UsersetRewrite>),
    #[serde(rename = "_nil")]
    Nil,
}

impl SetOperationChild {
    /// A reference to another relation on the same object.
    pub fn computed(relation: impl Into<String>) -> Self {
        SetOperationChild::ComputedUserset(ComputedUserset {
            relation: relation.into(),
        })
    }

    /// `tupleset->computed`: `computed` on every object reached via `tupleset`.
    pub fn tuple_to_userset(tupleset: impl Into<String>, computed: impl Into<String>) -> Self {
        SetOperationChild::TupleToUserset(TupleToUserset {
            tupleset: tupleset.into(),
            computed_userset: computed.into(),
        })
    }

    pub fn rewrite(rewrite: UsersetRewrite) -> Self {
        SetOperationChild::UsersetRewrite(Box::new(rewrite))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            SetOperationChild::This => "_this",
            SetOperationChild::ComputedUserset(_) => "computedUserset",
            SetOperationChild::TupleToUserset(_) => "tupleToUserset",
            SetOperationChild::UsersetRewrite(_) => "usersetRewrite",
            SetOperationChild::Nil => "_nil",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedUserset {
    pub relation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TupleToUserset {
    pub tupleset: String,
    pub computed_userset: String,
}
