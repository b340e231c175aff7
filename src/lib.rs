// src/lib.rs
//! Export a compiled SpiceDB schema as a structured JSON document.
//!
//! The schema DSL compiler produces a [`CompiledSchema`]; [`SchemaExporter`]
//! turns it into a [`Schema`] of definitions (split into relations and
//! permissions), userset trees and caveats, with doc comments attached.
//!
//! ```rust
//! use zed_schema_json::ir::{
//!     AllowedRelation, CompiledSchema, NamespaceDefinition, RelationDecl, SetOperationChild,
//!     UsersetRewrite,
//! };
//!
//! let compiled = CompiledSchema::new(
//!     vec![NamespaceDefinition::new(
//!         "acme/document",
//!         vec![
//!             RelationDecl::relation("viewer", vec![AllowedRelation::direct("acme/user")]),
//!             RelationDecl::permission(
//!                 "view",
//!                 UsersetRewrite::union([SetOperationChild::computed("viewer")]),
//!             ),
//!         ],
//!     )],
//!     vec![],
//! );
//!
//! let json = zed_schema_json::export_json(&compiled).unwrap();
//! assert!(json.starts_with(r#"{"definitions":[{"name":"document","namespace":"acme""#));
//! ```

pub use comments::extract_comment;
pub use error::SchemaError;
pub use exporter::{SchemaExporter, export_json, map_schema, split_qualified_name};
pub use ir::CompiledSchema;
pub use loader::{compile_schema, parse_compiled_schema};
pub use options::ExportOptions;
pub use source::{DEFAULT_READ_SCHEMA_PATH, ReadSchemaEndpoint, SchemaResponse};
pub use traits::{SchemaCompiler, SchemaSource};
pub use types::{Caveat, Definition, Operation, Permission, Relation, RelationType, Schema, UserSet};

/// Crate version, reported by hosts that wrap the exporter in a tool.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod comments;
mod error;
mod exporter;
pub mod ir;
mod loader;
pub mod mapper;
mod options;
mod source;
mod traits;
pub mod types;
