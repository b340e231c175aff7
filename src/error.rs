use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum SchemaError {
    #[error("failed to export {definition:?}: unexpected relation {relation:?}, neither permission nor relation")]
    ClassificationError { definition: String, relation: String },

    #[error("failed to export {definition:?}: permission {relation:?} has an unsupported userset child ({kind})")]
    UnsupportedChild {
        definition: String,
        relation: String,
        kind: String,
    },

    #[error("unable to serialize schema for export: {0}")]
    SerializationError(String),

    #[error("unable to write schema for export: {0}")]
    WriteError(String),

    #[error("failed to parse compiled schema: {0}")]
    ParseError(String),

    #[error("failed to compile schema: {0}")]
    CompileError(String),

    #[error("failed to read schema source: {0}")]
    SourceError(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for SchemaError {
    fn from(err: std::io::Error) -> Self {
        SchemaError::WriteError(err.to_string())
    }
}
