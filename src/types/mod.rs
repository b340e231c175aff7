//! The exported JSON document.
//!
//! Key order inside every object is the field declaration order, and empty
//! optional fields are omitted:
//! - Schema: `definitions`, `caveats` (omitted when empty)
//! - Definition: `name`, `namespace`, `relations`, `permissions`, `comment`
//! - Relation: `name`, `types`, `comment`
//! - RelationType: `type`, `relation`, `caveat`
//! - Permission: `name`, `userSet`, `comment`
//! - Caveat: `name`, `parameters`, `comment`

mod relation;
mod schema;
mod userset;

pub use relation::{Permission, Relation, RelationType, WILDCARD};
pub use schema::{Caveat, Definition, Schema};
pub use userset::{Operation, UserSet};
