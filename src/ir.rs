// Strongly-typed IR between the introspection model and codegen. No serde here.

use crate::schema::TypeKind;

/// Validated type reference. Wrappers always have an inner node, leaves always a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    NonNull(Box<TypeRef>),
    List(Box<TypeRef>),
    Named { kind: TypeKind, name: String },
}

/// Swift scalar a GraphQL scalar maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    Bool,
    Int,
    Float,
    String,
}

/// Closed set of property shapes the emitter knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Bool,
    Int,
    Float,
    String,
    ObjectRef,
    List,
    /// Non-object leaf used as a reference (enums, unknown kinds).
    FallbackOptionalObject,
}

/// Resolver output for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPlan {
    /// Wire name, as declared in the schema.
    pub name: String,
    /// Swift type: scalar name, referenced type name, or list element type.
    pub target_type_name: String,
    pub category: Category,
    pub optional: bool,
    pub description: Option<String>,
}

/// Final artifact for one schema type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedClass {
    pub type_name: String,
    pub source_text: String,
}

impl Scalar {
    /// Unknown scalar names (`ID`, custom scalars) fall back to `String`.
    pub fn from_graphql(name: &str) -> Self {
        match name {
            "Boolean" => Self::Bool,
            "Int" => Self::Int,
            "Float" => Self::Float,
            _ => Self::String,
        }
    }

    pub fn swift_name(&self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::String => "String",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Self::Bool => Category::Bool,
            Self::Int => Category::Int,
            Self::Float => Category::Float,
            Self::String => Category::String,
        }
    }
}

impl Category {
    /// Upper-case label used in logs, e.g. `INT-NON_OPTIONAL`.
    pub fn label(&self, optional: bool) -> String {
        let kind = match self {
            Self::Bool => "BOOL",
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::String => "STRING",
            Self::ObjectRef => "OBJECT",
            Self::List => "LIST",
            Self::FallbackOptionalObject => "FALLBACK-OBJECT",
        };
        let suffix = if optional { "OPTIONAL" } else { "NON_OPTIONAL" };
        format!("{kind}-{suffix}")
    }
}
