use tracing::debug;

use crate::error::SchemaError;
use crate::ir::CompiledSchema;
use crate::traits::{SchemaCompiler, SchemaSource};

/// Read a compiled schema IR serialized as JSON.
///
/// Any serde errors are mapped into `SchemaError::ParseError`.
///
/// Example:
/// ```rust
/// use zed_schema_json::parse_compiled_schema;
/// let ir = r#"{
///     "objectDefinitions": [{"name": "acme/user"}],
///     "caveatDefinitions": []
/// }"#;
/// let compiled = parse_compiled_schema(ir).unwrap();
/// assert_eq!(compiled.object_definitions.len(), 1);
/// ```
pub fn parse_compiled_schema(text: &str) -> Result<CompiledSchema, SchemaError> {
    serde_json::from_str(text).map_err(|e| SchemaError::ParseError(e.to_string()))
}

/// Read schema text from `source` and run it through `compiler`.
pub fn compile_schema<C, S>(
    compiler: &C,
    source: &S,
    default_namespace: Option<&str>,
) -> Result<CompiledSchema, SchemaError>
where
    C: SchemaCompiler + ?Sized,
    S: SchemaSource + ?Sized,
{
    let text = source.read_schema()?;
    debug!(
        event = "Compile",
        phase = "Source",
        bytes = text.len(),
        default_namespace = default_namespace.unwrap_or_default()
    );

    compiler
        .compile(&text, default_namespace)
        .map_err(|e| SchemaError::CompileError(e.to_string()))
}
