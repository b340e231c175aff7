use tracing::debug;

use crate::error::SchemaError;
use crate::ir::{SetOperationChild, UsersetRewrite};
use crate::types::{Operation, UserSet};

use super::RelationScope;

/// Map a rewrite expression into an exported userset tree.
///
/// Children keep their order. `_this` and `_nil` children have no exported
/// form; they are dropped unless the scope is strict, in which case they fail
/// with [`SchemaError::UnsupportedChild`].
pub fn map_userset(rewrite: &UsersetRewrite, scope: &RelationScope<'_>) -> Result<UserSet, SchemaError> {
    let operation = match rewrite {
        UsersetRewrite::Union(_) => Operation::Union,
        UsersetRewrite::Intersection(_) => Operation::Intersection,
        UsersetRewrite::Exclusion(_) => Operation::Exclusion,
    };
    let children = map_children(rewrite.children(), scope)?;
    Ok(UserSet::operation(operation, children))
}

fn map_children(
    children: &[SetOperationChild],
    scope: &RelationScope<'_>,
) -> Result<Vec<UserSet>, SchemaError> {
    let mut sets = Vec::with_capacity(children.len());
    for child in children {
        match child {
            SetOperationChild::ComputedUserset(computed) => {
                sets.push(UserSet::relation(computed.relation.clone()));
            }
            SetOperationChild::TupleToUserset(ttu) => {
                sets.push(UserSet::tuple_to_userset(
                    ttu.tupleset.clone(),
                    ttu.computed_userset.clone(),
                ));
            }
            SetOperationChild::UsersetRewrite(nested) => {
                sets.push(map_userset(nested, scope)?);
            }
            SetOperationChild::This | SetOperationChild::Nil => {
                if scope.options.strict_children {
                    return Err(SchemaError::UnsupportedChild {
                        definition: scope.definition.to_string(),
                        relation: scope.relation.to_string(),
                        kind: child.kind_name().to_string(),
                    });
                }
                debug!(
                    event = "Export",
                    phase = "Userset",
                    definition = scope.definition,
                    relation = scope.relation,
                    dropped = child.kind_name()
                );
            }
        }
    }
    Ok(sets)
}
