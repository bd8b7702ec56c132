//! In-memory storage implementation.
//!
//! Documents live in a `HashMap` keyed by id. Queries scan every document; there is no
//! indexing.

use std::collections::HashMap;

use tracing::trace;

use docshelf_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    document::Document,
    error::{DocumentStoreError, DocumentStoreResult},
    query::Expr,
};

use crate::evaluator::DocumentEvaluator;

type DocumentMap = HashMap<String, Document>;

/// In-memory document storage backend.
///
/// Not synchronized: writes need `&mut self`, so sharing across threads is up to the
/// caller. Query results come back in the map's iteration order, which is unspecified.
///
/// # Example
///
/// ```ignore
/// use docshelf_memory::InMemoryStore;
/// use docshelf::backend::StoreBackend;
/// use docshelf::document::{Author, Document};
///
/// let mut store = InMemoryStore::new();
/// store.put_document(Document::new("Hi", "there", Author::new("a1", "Alice")).with_id("d1"))?;
///
/// assert!(store.get_document("d1")?.is_some());
/// ```
#[derive(Default, Clone, Debug)]
pub struct InMemoryStore {
    /// document_id -> document
    documents: DocumentMap,
}

impl InMemoryStore {
    /// Creates a new empty in-memory document store.
    pub fn new() -> Self {
        Self { documents: DocumentMap::new() }
    }

    /// Creates a builder for constructing an `InMemoryStore` with custom options.
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder::default()
    }
}

impl StoreBackend for InMemoryStore {
    fn put_document(&mut self, document: Document) -> DocumentStoreResult<()> {
        if !document.has_id() {
            return Err(DocumentStoreError::InvalidDocument("document id is empty".to_string()));
        }

        self.documents.insert(document.id.clone(), document);

        Ok(())
    }

    fn get_document(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        Ok(self.documents.get(id).cloned())
    }

    fn query_documents(&self, filter: Option<&Expr>) -> DocumentStoreResult<Vec<Document>> {
        let documents = match filter {
            Some(filter) => DocumentEvaluator::filter_documents(self.documents.values(), filter)?,
            None => self.documents.values().cloned().collect::<Vec<_>>(),
        };

        trace!(scanned = self.documents.len(), matched = documents.len(), "scanned in-memory documents");

        Ok(documents)
    }

    fn count_documents(&self) -> DocumentStoreResult<usize> {
        Ok(self.documents.len())
    }
}

/// Builder for constructing [`InMemoryStore`] instances.
#[derive(Default, Debug)]
pub struct InMemoryStoreBuilder {
    capacity: Option<usize>,
}

impl InMemoryStoreBuilder {
    /// Pre-sizes the map for `capacity` documents.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }
}

impl StoreBackendBuilder for InMemoryStoreBuilder {
    type Backend = InMemoryStore;

    /// Builds and returns a new [`InMemoryStore`] instance. This always succeeds.
    fn build(self) -> DocumentStoreResult<Self::Backend> {
        Ok(match self.capacity {
            Some(capacity) => InMemoryStore { documents: DocumentMap::with_capacity(capacity) },
            None => InMemoryStore::new(),
        })
    }
}
