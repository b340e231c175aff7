use std::io::Write;

use itertools::{Either, Itertools};
use tracing::{debug, info};

use crate::comments::extract_comment;
use crate::error::SchemaError;
use crate::ir::{CompiledSchema, NamespaceDefinition};
use crate::loader;
use crate::mapper::{Classified, classify, map_caveat};
use crate::options::ExportOptions;
use crate::traits::{SchemaCompiler, SchemaSource};
use crate::types::{Definition, Permission, Relation, Schema};

/// Split `namespace/name` on the first `/`. A bare name has an empty namespace.
pub fn split_qualified_name(qualified: &str) -> (&str, &str) {
    match qualified.split_once('/') {
        Some((namespace, name)) => (namespace, name),
        None => ("", qualified),
    }
}

/// Maps compiled schemas into exported documents. Cloneable and thread-safe;
/// every call is an independent pass over its input.
#[derive(Debug, Clone, Default)]
pub struct SchemaExporter {
    options: ExportOptions,
}

impl SchemaExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ExportOptions) -> Self {
        SchemaExporter { options }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Map every definition and caveat, in IR order.
    ///
    /// The first relation that is neither a relation nor a permission aborts
    /// the pass.
    pub fn map_schema(&self, compiled: &CompiledSchema) -> Result<Schema, SchemaError> {
        let definitions = compiled
            .object_definitions
            .iter()
            .map(|def| self.map_definition(def))
            .collect::<Result<Vec<_>, _>>()?;

        let caveats = compiled
            .caveat_definitions
            .iter()
            .map(|caveat| map_caveat(caveat, &self.options))
            .collect::<Vec<_>>();

        info!(
            event = "Export",
            phase = "Mapped",
            definitions = definitions.len(),
            caveats = caveats.iter().map(|c| c.name.as_str()).join(",")
        );

        Ok(Schema {
            definitions,
            caveats,
        })
    }

    fn map_definition(&self, def: &NamespaceDefinition) -> Result<Definition, SchemaError> {
        let classified = def
            .relations
            .iter()
            .map(|decl| classify(def, decl, &self.options))
            .collect::<Result<Vec<_>, _>>()?;

        let (relations, permissions): (Vec<Relation>, Vec<Permission>) =
            classified.into_iter().partition_map(|c| match c {
                Classified::Relation(relation) => Either::Left(relation),
                Classified::Permission(permission) => Either::Right(permission),
            });

        let (namespace, name) = split_qualified_name(&def.name);

        debug!(
            event = "Export",
            phase = "Definition",
            namespace = namespace,
            name = name,
            relations = relations.len(),
            permissions = permissions.len()
        );

        Ok(Definition {
            name: name.to_string(),
            namespace: namespace.to_string(),
            relations,
            permissions,
            comment: extract_comment(&def.metadata, &self.options.doc_comment_type_url),
        })
    }

    /// Compact JSON: stable key order, no whitespace.
    pub fn export_json(&self, compiled: &CompiledSchema) -> Result<String, SchemaError> {
        let schema = self.map_schema(compiled)?;
        Ok(serde_json::to_string(&schema)?)
    }

    /// JSON indented by two spaces, for humans.
    pub fn export_json_pretty(&self, compiled: &CompiledSchema) -> Result<String, SchemaError> {
        let schema = self.map_schema(compiled)?;
        Ok(serde_json::to_string_pretty(&schema)?)
    }

    /// Write the compact JSON document to `writer`. Nothing is written if
    /// mapping or serialization fails.
    pub fn write_schema_to<W: Write>(
        &self,
        compiled: &CompiledSchema,
        mut writer: W,
    ) -> Result<(), SchemaError> {
        let data = serde_json::to_vec(&self.map_schema(compiled)?)?;
        writer.write_all(&data)?;
        writer.flush()?;
        Ok(())
    }

    /// Compile schema text from `source` and export it as compact JSON.
    pub fn export_source<C, S>(
        &self,
        compiler: &C,
        source: &S,
        default_namespace: Option<&str>,
    ) -> Result<String, SchemaError>
    where
        C: SchemaCompiler + ?Sized,
        S: SchemaSource + ?Sized,
    {
        let compiled = loader::compile_schema(compiler, source, default_namespace)?;
        self.export_json(&compiled)
    }
}

/// [`SchemaExporter::map_schema`] with default options.
pub fn map_schema(compiled: &CompiledSchema) -> Result<Schema, SchemaError> {
    SchemaExporter::default().map_schema(compiled)
}

/// [`SchemaExporter::export_json`] with default options.
pub fn export_json(compiled: &CompiledSchema) -> Result<String, SchemaError> {
    SchemaExporter::default().export_json(compiled)
}

#[cfg(test)]
mod tests;
