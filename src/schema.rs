//! Serde model of GraphQL introspection output and the type collector.
//!
//! Only the parts of `__schema` the generator reads are modelled; every other
//! key (`args`, `interfaces`, `possibleTypes`, ...) is ignored on decode.
use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::error::SchemaError;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// `__TypeKind` as it appears in introspection JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
    #[serde(other)]
    Unknown,
}

/// One entry of `data.__schema.types`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    pub name: String,
    pub kind: TypeKind,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    fields: Option<Vec<FieldDescriptor>>,
    #[serde(default)]
    enum_values: Option<Vec<EnumValue>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub ty: RawTypeRef,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnumValue {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Unvalidated `__Type` reference as decoded; see [`crate::lower`] for the checked form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTypeRef {
    pub kind: TypeKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub of_type: Option<Box<RawTypeRef>>,
}

/// A parsed schema file plus a label used in error messages.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub label: String,
    pub json: Value,
}

#[derive(Deserialize)]
struct Envelope {
    data: Data,
}

#[derive(Deserialize)]
struct Data {
    #[serde(rename = "__schema")]
    schema: Schema,
}

#[derive(Deserialize)]
struct Schema {
    types: Vec<TypeDescriptor>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl TypeDescriptor {
    /// Declared fields in source order; empty when introspection reported `null`.
    pub fn fields(&self) -> &[FieldDescriptor] {
        self.fields.as_deref().unwrap_or_default()
    }

    /// Declared enum values in source order; empty for non-enum kinds.
    pub fn enum_values(&self) -> &[EnumValue] {
        self.enum_values.as_deref().unwrap_or_default()
    }
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::List => "LIST",
            Self::NonNull => "NON_NULL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SourceDocument {
    pub fn new(label: impl Into<String>, json: Value) -> Self {
        Self { label: label.into(), json }
    }
}

/// Concatenate `data.__schema.types` of every document, in document order.
///
/// Duplicates and every kind are kept; filtering happens in [`crate::filter`].
/// A document without the expected path aborts collection.
pub fn collect_types(documents: &[SourceDocument]) -> Result<Vec<TypeDescriptor>, SchemaError> {
    let mut types = Vec::new();
    for document in documents {
        let envelope = crate::path_de::from_value_with_path::<Envelope>(&document.json)
            .map_err(|message| SchemaError::MalformedInput {
                document: document.label.clone(),
                message,
            })?;
        tracing::debug!(
            document = %document.label,
            count = envelope.data.schema.types.len(),
            "collected types"
        );
        types.extend(envelope.data.schema.types);
    }
    Ok(types)
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
