//! Custom deserializers for flexible parameter parsing.
//!
//! MCP clients are inconsistent about numeric parameters; these accept both
//! JSON numbers and numeric strings.

use serde::{Deserialize, Deserializer};

/// Deserializes an optional count from a number or a numeric string.
pub fn de_option_usize_forgiving<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let opt = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(v) = opt else { return Ok(None) };
    match v {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(n) => n
            .as_u64()
            .map(|u| Some(u as usize))
            .ok_or_else(|| D::Error::custom("expected a non-negative integer")),
        serde_json::Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<usize>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid integer: {s:?}")))
        }
        other => Err(D::Error::custom(format!(
            "expected integer or string, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Params {
        #[serde(default, deserialize_with = "de_option_usize_forgiving")]
        limit: Option<usize>,
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let p: Params = serde_json::from_str(r#"{"limit": 5}"#).unwrap();
        assert_eq!(p.limit, Some(5));
        let p: Params = serde_json::from_str(r#"{"limit": "12"}"#).unwrap();
        assert_eq!(p.limit, Some(12));
        let p: Params = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(p.limit, None);
        let p: Params = serde_json::from_str(r#"{"limit": ""}"#).unwrap();
        assert_eq!(p.limit, None);
    }

    #[test]
    fn rejects_non_numeric_values() {
        assert!(serde_json::from_str::<Params>(r#"{"limit": "many"}"#).is_err());
        assert!(serde_json::from_str::<Params>(r#"{"limit": [1]}"#).is_err());
    }
}
