//! Document and author records, plus JSON conversion helpers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Value, from_value, to_value};

use crate::error::DocumentStoreResult;

/// The creator of a document.
///
/// Authors are plain values: they are stored inline with every document and have no
/// lifecycle of their own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
}

impl Author {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

/// A stored record.
///
/// An empty `id` means the document has not been assigned one yet; the manager generates
/// it on first save. `created` is filled in by the manager on first insertion and is kept
/// from then on, whatever value later saves carry.
///
/// # Example
///
/// ```ignore
/// use docshelf::document::{Author, Document};
///
/// let doc = Document::new("Hello", "world", Author::new("a1", "Alice"));
/// assert!(doc.id.is_empty());
/// assert!(doc.created.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: Author,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl Document {
    /// Creates an unsaved document with no id and no creation time.
    pub fn new(title: impl Into<String>, content: impl Into<String>, author: Author) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            content: content.into(),
            author,
            created: None,
        }
    }

    /// Returns the same document with the given id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Whether the document still needs an id.
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}

/// Extension trait providing JSON conversion for documents and search requests.
///
/// Implemented for every serde-serializable type, so [`Document`], [`Author`] and
/// [`SearchRequest`](crate::request::SearchRequest) all get it.
pub trait DocumentExt: Sized {
    /// Converts this value to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn to_json(&self) -> DocumentStoreResult<Value>;

    /// Creates a value from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the structure is invalid.
    fn from_json(value: Value) -> DocumentStoreResult<Self>;
}

impl<D: Serialize + DeserializeOwned> DocumentExt for D {
    fn to_json(&self) -> DocumentStoreResult<Value> {
        Ok(to_value(self)?)
    }

    fn from_json(value: Value) -> DocumentStoreResult<Self> {
        Ok(from_value(value)?)
    }
}
