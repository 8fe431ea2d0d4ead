use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// BookDto is a data transfer object for Catalog service. Only `id`, `title` and `available`
// are required and typed; every other key is passed through unchanged, explicit nulls included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub author: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub genre: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub year: Option<Value>,
    pub available: bool,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BookDto {
    pub fn new(id: i64, title: &str, available: bool) -> BookDto {
        BookDto {
            id,
            title: title.to_string(),
            author: None,
            genre: None,
            year: None,
            available,
            description: None,
            extra: Map::new(),
        }
    }
}

// A key that is present is kept even when its value is null.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}
