//! Error taxonomy for collection, type-reference validation and emission.
use thiserror::Error;

/// Failures while reading schema documents. Fatal for the whole run.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The document does not have the `data.__schema.types` shape.
    #[error("malformed schema document `{document}`: {message}")]
    MalformedInput {
        /// Label of the offending document (usually its file path).
        document: String,
        /// Decoder message, prefixed with the JSON path that failed.
        message: String,
    },
}

/// A `TypeRef` node that breaks the wrapper/leaf invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeRefError {
    #[error("{kind} wrapper has no `ofType`")]
    MissingOfType { kind: String },

    #[error("{kind} leaf has no `name`")]
    MissingName { kind: String },

    #[error("{kind} leaf `{name}` carries an unexpected `ofType`")]
    UnexpectedOfType { kind: String, name: String },

    #[error("NON_NULL wrapper directly wraps another NON_NULL")]
    DoubleNonNull,

    #[error("LIST element is itself a LIST")]
    NestedList,
}

/// Emission failure for a single type. Sibling types are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    #[error("type `{type_name}`, field `{field}`: {source}")]
    MalformedTypeRef {
        type_name: String,
        field: String,
        #[source]
        source: TypeRefError,
    },
}

impl EmitError {
    pub fn type_name(&self) -> &str {
        match self {
            Self::MalformedTypeRef { type_name, .. } => type_name,
        }
    }

    pub fn field(&self) -> &str {
        match self {
            Self::MalformedTypeRef { field, .. } => field,
        }
    }
}
