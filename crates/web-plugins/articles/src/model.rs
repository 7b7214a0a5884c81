use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ArticleError;

/// A single article record.
///
/// Every field is optional on input and defaults to the empty string, so
/// `{}` decodes to a blank article. `id` and `timestamp` are owned by the
/// store and get overwritten on creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    #[serde(deserialize_with = "nullable_string")]
    pub title: String,
    #[serde(deserialize_with = "nullable_string")]
    pub subtitle: String,
    #[serde(deserialize_with = "nullable_string")]
    pub id: String,
    #[serde(deserialize_with = "nullable_string")]
    pub content: String,
    #[serde(deserialize_with = "nullable_string")]
    pub timestamp: String,
}

impl Article {
    pub fn new(title: &str, subtitle: &str, content: &str) -> Self {
        Self {
            title: title.to_owned(),
            subtitle: subtitle.to_owned(),
            content: content.to_owned(),
            ..Default::default()
        }
    }

    /// Decodes a request payload.
    ///
    /// Only a top-level JSON object is accepted; arrays, scalars and
    /// unparseable input are reported as malformed with the decoder's message.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ArticleError> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|err| ArticleError::MalformedPayload(err.to_string()))?;

        if !value.is_object() {
            return Err(ArticleError::MalformedPayload(format!(
                "expected a JSON object, found {}",
                json_kind(&value)
            )));
        }

        serde_json::from_value(value).map_err(|err| ArticleError::MalformedPayload(err.to_string()))
    }
}

/// Treats an explicit `null` like an absent field.
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_lowercase_field_names() {
        let article = Article {
            title: "Daddy".to_owned(),
            subtitle: "Big Daddy".to_owned(),
            id: "1".to_owned(),
            content: "body".to_owned(),
            timestamp: "Today".to_owned(),
        };

        assert_eq!(
            serde_json::to_value(&article).unwrap(),
            json!({
                "title": "Daddy",
                "subtitle": "Big Daddy",
                "id": "1",
                "content": "body",
                "timestamp": "Today",
            })
        );
    }

    #[test]
    fn empty_object_decodes_to_blank_article() {
        let article = Article::from_json(b"{}").unwrap();
        assert_eq!(article, Article::default());
    }

    #[test]
    fn null_and_unknown_fields_are_tolerated() {
        let article =
            Article::from_json(br#"{"title": "T", "subtitle": null, "tags": ["x"]}"#).unwrap();

        assert_eq!(article.title, "T");
        assert_eq!(article.subtitle, "");
    }

    #[test]
    fn rejects_invalid_json() {
        let err = Article::from_json(b"not-json").unwrap_err();
        assert!(matches!(err, ArticleError::MalformedPayload(_)));
    }

    #[test]
    fn rejects_non_object_payloads() {
        let payloads: [&[u8]; 4] = [b"[]", b"\"title\"", b"42", b"null"];
        for payload in payloads {
            let err = Article::from_json(payload).unwrap_err();
            assert!(
                matches!(&err, ArticleError::MalformedPayload(msg) if msg.starts_with("expected a JSON object")),
                "unexpected error for {:?}: {err:?}",
                String::from_utf8_lossy(payload)
            );
        }
    }

    #[test]
    fn rejects_wrongly_typed_fields() {
        let err = Article::from_json(br#"{"title": 7}"#).unwrap_err();
        assert!(matches!(err, ArticleError::MalformedPayload(_)));
    }
}
