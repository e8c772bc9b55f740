use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deserialize an already-parsed document with JSON-path context in error messages.
pub fn from_value_with_path<T: DeserializeOwned>(value: &Value) -> Result<T, String> {
    match serde_path_to_error::deserialize::<_, T>(value) {
        Ok(v) => Ok(v),
        Err(err) => {
            let path = err.path().to_string();
            Err(format!("at JSON path {path} → {}", err.into_inner()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Outer {
        #[allow(dead_code)]
        inner: Inner,
    }

    #[derive(Debug, Deserialize)]
    struct Inner {
        #[allow(dead_code)]
        count: u32,
    }

    #[test]
    fn error_names_the_failing_path() {
        let err = from_value_with_path::<Outer>(&serde_json::json!({"inner": {"count": "x"}}))
            .unwrap_err();
        assert!(err.starts_with("at JSON path inner.count"), "{err}");
    }

    #[test]
    fn missing_key_is_reported() {
        let err = from_value_with_path::<Outer>(&serde_json::json!({"inner": {}})).unwrap_err();
        assert!(err.contains("missing field `count`"), "{err}");
    }
}
