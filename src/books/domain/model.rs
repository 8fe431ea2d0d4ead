use serde_json::{Map, Value};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity is a catalog record as held by the book repository. Only id, title and
// availability are typed; the descriptive fields and any other keys are kept verbatim.
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct BookEntity {
    pub id: i64,
    pub title: String,
    pub author: Option<Value>,
    pub genre: Option<Value>,
    pub year: Option<Value>,
    pub available: bool,
    pub description: Option<Value>,
    pub extra: Map<String, Value>,
}

impl BookEntity {
    pub fn new(id: i64, title: &str, available: bool) -> Self {
        Self {
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

    pub fn with_details(self, author: &str, genre: &str, year: i64, description: &str) -> Self {
        Self {
            author: Some(Value::from(author)),
            genre: Some(Value::from(genre)),
            year: Some(Value::from(year)),
            description: Some(Value::from(description)),
            ..self
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn is_available(&self) -> bool {
        self.available
    }
}
