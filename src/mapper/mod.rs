//! Per-node mappers from the compiled IR to the exported document.
//!
//! Each mapper handles one kind of IR node; [`crate::SchemaExporter`] drives
//! them over a whole schema.

mod caveat;
mod classify;
mod relation_type;
mod userset;

use crate::options::ExportOptions;

pub use caveat::map_caveat;
pub use classify::{Classified, classify, relation_kind};
pub use relation_type::map_relation_type;
pub use userset::map_userset;

/// The permission being mapped, for error reporting and logging.
#[derive(Debug, Clone, Copy)]
pub struct RelationScope<'a> {
    /// Qualified name of the owning definition.
    pub definition: &'a str,
    pub relation: &'a str,
    pub options: &'a ExportOptions,
}
