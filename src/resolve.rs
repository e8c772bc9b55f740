//! Field type resolver: nullability first, then shape.
use crate::error::TypeRefError;
use crate::ir::{Category, PropertyPlan, Scalar, TypeRef};
use crate::schema::{FieldDescriptor, TypeKind};

/// Validate a field's type reference and classify it.
pub fn resolve_field(field: &FieldDescriptor) -> Result<PropertyPlan, TypeRefError> {
    let ty = crate::lower::lower_type_ref(&field.ty)?;
    let (category, target_type_name, optional) = resolve(&ty)?;
    tracing::trace!(
        field = %field.name,
        category = %category.label(optional),
        target = %target_type_name,
        "resolved field"
    );
    Ok(PropertyPlan {
        name: field.name.clone(),
        target_type_name,
        category,
        optional,
        description: field.description.clone(),
    })
}

/// Returns `(category, target type name, optional)`.
pub fn resolve(ty: &TypeRef) -> Result<(Category, String, bool), TypeRefError> {
    match ty {
        TypeRef::NonNull(inner) => resolve_shape(inner, false),
        other => resolve_shape(other, true),
    }
}

fn resolve_shape(ty: &TypeRef, optional: bool) -> Result<(Category, String, bool), TypeRefError> {
    match ty {
        TypeRef::NonNull(_) => Err(TypeRefError::DoubleNonNull),
        TypeRef::Named { kind: TypeKind::Scalar, name } => {
            let scalar = scalar(name);
            Ok((scalar.category(), scalar.swift_name().to_owned(), optional))
        }
        // list optionality is not modelled: the container is never nil, only empty
        TypeRef::List(element) => Ok((Category::List, resolve_element(element)?, false)),
        // references are always optional, whatever the schema says
        TypeRef::Named { kind: TypeKind::Object, name } => {
            Ok((Category::ObjectRef, name.clone(), true))
        }
        TypeRef::Named { name, .. } => Ok((Category::FallbackOptionalObject, name.clone(), true)),
    }
}

/// Leaf-only element resolution. Element nullability is discarded.
fn resolve_element(element: &TypeRef) -> Result<String, TypeRefError> {
    match element {
        TypeRef::NonNull(inner) => match inner.as_ref() {
            TypeRef::NonNull(_) => Err(TypeRefError::DoubleNonNull),
            leaf => resolve_element(leaf),
        },
        TypeRef::List(_) => Err(TypeRefError::NestedList),
        TypeRef::Named { kind: TypeKind::Scalar, name } => Ok(scalar(name).swift_name().to_owned()),
        TypeRef::Named { name, .. } => Ok(name.clone()),
    }
}

fn scalar(name: &str) -> Scalar {
    let scalar = Scalar::from_graphql(name);
    if scalar == Scalar::String && name != "String" {
        tracing::debug!(scalar = %name, "unknown scalar, falling back to String");
    }
    scalar
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn field(ty: Value) -> FieldDescriptor {
        serde_json::from_value(json!({ "name": "f", "description": "doc", "type": ty })).unwrap()
    }

    fn plan(ty: Value) -> PropertyPlan {
        resolve_field(&field(ty)).unwrap()
    }

    #[test]
    fn non_null_int_is_non_optional() {
        let p = plan(json!({ "kind": "NON_NULL", "ofType": { "kind": "SCALAR", "name": "Int" } }));
        assert_eq!((p.category, p.target_type_name.as_str(), p.optional), (Category::Int, "Int", false));
        assert_eq!(p.category.label(p.optional), "INT-NON_OPTIONAL");
    }

    #[test]
    fn bare_boolean_is_optional() {
        let p = plan(json!({ "kind": "SCALAR", "name": "Boolean" }));
        assert_eq!((p.category, p.optional), (Category::Bool, true));
        assert_eq!(p.category.label(p.optional), "BOOL-OPTIONAL");
    }

    #[test]
    fn non_null_list_of_float() {
        let p = plan(json!({ "kind": "NON_NULL", "ofType": {
            "kind": "LIST", "ofType": { "kind": "SCALAR", "name": "Float" }
        }}));
        assert_eq!((p.category, p.target_type_name.as_str(), p.optional), (Category::List, "Float", false));
    }

    #[test]
    fn nullable_list_is_still_non_optional() {
        let p = plan(json!({ "kind": "LIST", "ofType": { "kind": "OBJECT", "name": "Post" } }));
        assert_eq!((p.category, p.target_type_name.as_str(), p.optional), (Category::List, "Post", false));
    }

    #[test]
    fn non_null_list_element_wrapper_is_peeled() {
        let p = plan(json!({ "kind": "LIST", "ofType": {
            "kind": "NON_NULL", "ofType": { "kind": "SCALAR", "name": "ID" }
        }}));
        assert_eq!(p.target_type_name, "String");
    }

    #[test]
    fn nested_list_is_rejected() {
        let f = field(json!({ "kind": "LIST", "ofType": {
            "kind": "LIST", "ofType": { "kind": "SCALAR", "name": "Int" }
        }}));
        assert_eq!(resolve_field(&f), Err(TypeRefError::NestedList));
    }

    #[test]
    fn non_null_object_stays_optional() {
        let p = plan(json!({ "kind": "NON_NULL", "ofType": { "kind": "OBJECT", "name": "Owner" } }));
        assert_eq!((p.category, p.target_type_name.as_str(), p.optional), (Category::ObjectRef, "Owner", true));
        assert_eq!(p.category.label(p.optional), "OBJECT-OPTIONAL");
    }

    #[test]
    fn enum_leaf_falls_back_to_optional_reference() {
        let p = plan(json!({ "kind": "NON_NULL", "ofType": { "kind": "ENUM", "name": "Status" } }));
        assert_eq!(
            (p.category, p.target_type_name.as_str(), p.optional),
            (Category::FallbackOptionalObject, "Status", true)
        );
    }

    #[test]
    fn id_scalar_falls_back_to_string() {
        let p = plan(json!({ "kind": "SCALAR", "name": "ID" }));
        assert_eq!((p.category, p.target_type_name.as_str()), (Category::String, "String"));
    }

    #[test]
    fn description_is_carried_verbatim() {
        let p = plan(json!({ "kind": "SCALAR", "name": "String" }));
        assert_eq!(p.description.as_deref(), Some("doc"));
        let f: FieldDescriptor = serde_json::from_value(json!({
            "name": "g", "type": { "kind": "SCALAR", "name": "String" }
        })).unwrap();
        assert_eq!(resolve_field(&f).unwrap().description, None);
    }

    #[test]
    fn double_non_null_is_rejected() {
        let f = field(json!({ "kind": "NON_NULL", "ofType": {
            "kind": "NON_NULL", "ofType": { "kind": "SCALAR", "name": "Int" }
        }}));
        assert_eq!(resolve_field(&f), Err(TypeRefError::DoubleNonNull));
    }

    #[test]
    fn malformed_leaf_is_rejected() {
        let f = field(json!({ "kind": "NON_NULL", "ofType": { "kind": "OBJECT", "name": null } }));
        assert_eq!(resolve_field(&f), Err(TypeRefError::MissingName { kind: "OBJECT".into() }));
    }
}
