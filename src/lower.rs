use crate::error::TypeRefError;
use crate::ir::TypeRef;
use crate::schema::{RawTypeRef, TypeKind};

/// Check the wrapper/leaf invariant and build the sum-typed [`TypeRef`].
///
/// NON_NULL and LIST need `ofType`; every other kind is a leaf that needs
/// `name` and must not carry `ofType`.
pub fn lower_type_ref(raw: &RawTypeRef) -> Result<TypeRef, TypeRefError> {
    match raw.kind {
        TypeKind::NonNull | TypeKind::List => {
            let inner = raw.of_type.as_deref().ok_or_else(|| TypeRefError::MissingOfType {
                kind: raw.kind.to_string(),
            })?;
            let inner = Box::new(lower_type_ref(inner)?);
            Ok(if raw.kind == TypeKind::NonNull {
                TypeRef::NonNull(inner)
            } else {
                TypeRef::List(inner)
            })
        }
        kind => {
            let name = raw.name.clone().ok_or_else(|| TypeRefError::MissingName {
                kind: kind.to_string(),
            })?;
            if raw.of_type.is_some() {
                return Err(TypeRefError::UnexpectedOfType { kind: kind.to_string(), name });
            }
            Ok(TypeRef::Named { kind, name })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(v: serde_json::Value) -> RawTypeRef {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn wrappers_nest() {
        let r = raw(json!({ "kind": "NON_NULL", "ofType": {
            "kind": "LIST", "ofType": { "kind": "OBJECT", "name": "Owner" }
        }}));
        let expected = TypeRef::NonNull(Box::new(TypeRef::List(Box::new(TypeRef::Named {
            kind: TypeKind::Object,
            name: "Owner".into(),
        }))));
        assert_eq!(lower_type_ref(&r).unwrap(), expected);
    }

    #[test]
    fn wrapper_without_of_type_fails() {
        let r = raw(json!({ "kind": "LIST", "name": null, "ofType": null }));
        assert_eq!(
            lower_type_ref(&r),
            Err(TypeRefError::MissingOfType { kind: "LIST".into() })
        );
    }

    #[test]
    fn leaf_without_name_fails_deep_inside() {
        let r = raw(json!({ "kind": "NON_NULL", "ofType": { "kind": "SCALAR", "name": null } }));
        assert_eq!(
            lower_type_ref(&r),
            Err(TypeRefError::MissingName { kind: "SCALAR".into() })
        );
    }

    #[test]
    fn leaf_with_of_type_fails() {
        let r = raw(json!({ "kind": "OBJECT", "name": "User", "ofType": { "kind": "SCALAR", "name": "Int" } }));
        assert!(matches!(lower_type_ref(&r), Err(TypeRefError::UnexpectedOfType { .. })));
    }
}
