/*
[INPUT]:  Serializable parameter structs
[OUTPUT]: Ordered, null-free query string pairs
[POS]:    HTTP layer - query string construction
[UPDATE]: When changing how parameter values are stringified
*/

use serde::Serialize;
use serde_json::Value;

use crate::http::Result;

/// Ordered query parameters with values already in string form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a struct into query pairs.
    ///
    /// Keys keep declaration order. Null values are dropped, strings are kept
    /// verbatim, numbers and booleans are stringified, lists of scalars are
    /// comma-joined (`-1,1`). Objects and lists holding objects are sent as
    /// compact JSON.
    pub fn from_serialize<T: Serialize + ?Sized>(params: &T) -> Result<Self> {
        let fields = match serde_json::to_value(params)? {
            Value::Object(fields) => fields,
            Value::Null => return Ok(Self::default()),
            _ => {
                return Err(<serde_json::Error as serde::ser::Error>::custom(
                    "query parameters must serialize to an object",
                )
                .into());
            }
        };

        let mut query = Self::default();
        for (key, value) in fields {
            query.push_value(key, value);
        }
        Ok(query)
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.pairs.push((key.into(), value.to_string()));
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    fn push_value(&mut self, key: String, value: Value) {
        let rendered = match value {
            Value::Null => return,
            Value::Array(items) if items.iter().all(is_scalar) => items
                .iter()
                .map(render_scalar)
                .collect::<Vec<_>>()
                .join(","),
            structured @ (Value::Array(_) | Value::Object(_)) => structured.to_string(),
            scalar => render_scalar(&scalar),
        };
        self.pairs.push((key, rendered));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

// Null list items render empty, the same way a joined list would show them.
fn render_scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample<'a> {
        a: i64,
        b: Option<&'a str>,
        c: &'a str,
        flag: bool,
        ids: Vec<i64>,
    }

    #[test]
    fn test_drops_null_and_keeps_order() {
        let query = QueryParams::from_serialize(&Sample {
            a: 1,
            b: None,
            c: "x y",
            flag: true,
            ids: vec![1, -1],
        })
        .expect("query");

        let pairs: Vec<(&str, &str)> = query.iter().collect();
        assert_eq!(
            pairs,
            vec![("a", "1"), ("c", "x y"), ("flag", "true"), ("ids", "1,-1")]
        );
    }

    #[test]
    fn test_scalar_lists_join_and_object_lists_stay_json() {
        #[derive(Serialize)]
        struct Lists {
            address: &'static str,
            chain_ids: Vec<i64>,
            names: Vec<&'static str>,
            empty: Vec<i64>,
            client_urls: serde_json::Value,
        }

        let query = QueryParams::from_serialize(&Lists {
            address: "0x3134",
            chain_ids: vec![-1, 1],
            names: vec!["a", "b c"],
            empty: vec![],
            client_urls: serde_json::json!([{ "chain_id": -1, "client_url": "https://node.example" }]),
        })
        .expect("query");

        let pairs: Vec<(&str, &str)> = query.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("address", "0x3134"),
                ("chain_ids", "-1,1"),
                ("names", "a,b c"),
                ("empty", ""),
                ("client_urls", r#"[{"chain_id":-1,"client_url":"https://node.example"}]"#),
            ]
        );
    }

    #[test]
    fn test_unit_serializes_to_empty() {
        let query = QueryParams::from_serialize(&()).expect("query");
        assert!(query.is_empty());
    }

    #[test]
    fn test_scalar_rejected() {
        assert!(QueryParams::from_serialize(&42).is_err());
    }

    #[test]
    fn test_builder_push() {
        let query = QueryParams::new().with("address", "0xabc").with("limit", 10);
        assert_eq!(query.len(), 2);
        assert_eq!(query.iter().last(), Some(("limit", "10")));
    }
}
