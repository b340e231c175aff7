use std::fmt::Display;

use crate::error::SchemaError;
use crate::ir::CompiledSchema;

/// The schema DSL compiler: schema text in, compiled IR out.
///
/// `default_namespace` is prefixed to definitions declared without one.
pub trait SchemaCompiler {
    type Error: Display;

    fn compile(
        &self,
        source: &str,
        default_namespace: Option<&str>,
    ) -> Result<CompiledSchema, Self::Error>;
}

impl<F, E> SchemaCompiler for F
where
    F: Fn(&str, Option<&str>) -> Result<CompiledSchema, E>,
    E: Display,
{
    type Error = E;

    fn compile(
        &self,
        source: &str,
        default_namespace: Option<&str>,
    ) -> Result<CompiledSchema, Self::Error> {
        self(source, default_namespace)
    }
}

/// Anything that can produce raw schema text: a file, an HTTP or RPC
/// schema service, or text already in memory.
pub trait SchemaSource {
    fn read_schema(&self) -> Result<String, SchemaError>;
}

impl SchemaSource for str {
    fn read_schema(&self) -> Result<String, SchemaError> {
        Ok(self.to_string())
    }
}

impl SchemaSource for String {
    fn read_schema(&self) -> Result<String, SchemaError> {
        Ok(self.clone())
    }
}
