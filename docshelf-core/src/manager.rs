//! The document manager: upsert, lookup, and search on top of a backend.
//!
//! # Example
//!
//! ```ignore
//! use docshelf::prelude::*;
//! use docshelf::memory::InMemoryStore;
//!
//! let mut manager = DocumentManager::new(InMemoryStore::new());
//! let saved = manager.save(Document::new("Hello", "world", Author::new("a1", "Alice")))?;
//!
//! assert_eq!(manager.find_by_id(&saved.id)?, Some(saved));
//! ```

use tracing::{debug, trace};
use uuid::Uuid;

use crate::{
    backend::StoreBackend,
    clock::{Clock, SystemClock},
    document::Document,
    error::DocumentStoreResult,
    query::Expr,
    request::SearchRequest,
};

/// Owns a backend and applies the id and creation-time rules on top of it.
#[derive(Debug)]
pub struct DocumentManager<B: StoreBackend> {
    backend: B,
    clock: Box<dyn Clock>,
}

impl<B: StoreBackend> DocumentManager<B> {
    /// Creates a manager stamping documents with the system clock.
    pub fn new(backend: B) -> Self {
        DocumentManagerBuilder::new().build(backend)
    }

    /// Inserts or replaces a document.
    ///
    /// A document with an empty id gets a fresh UUID. The creation time of an existing
    /// entry is kept; whatever `created` the caller passed is ignored. New entries are
    /// stamped with the manager's clock.
    ///
    /// Returns the document as stored.
    pub fn save(&mut self, mut document: Document) -> DocumentStoreResult<Document> {
        if !document.has_id() {
            document.id = Uuid::new_v4().to_string();
            debug!(id = %document.id, "generated document id");
        }

        let existing = self.backend.get_document(&document.id)?;
        let inserted = existing.is_none();

        document.created = Some(
            existing
                .and_then(|stored| stored.created)
                .unwrap_or_else(|| self.clock.now()),
        );

        self.backend.put_document(document.clone())?;
        debug!(id = %document.id, inserted, "saved document");

        Ok(document)
    }

    /// Looks up a document by id. A missing document is `Ok(None)`.
    pub fn find_by_id(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        self.backend.get_document(id)
    }

    /// Returns every document matching the request, in backend order.
    ///
    /// `None`, like an empty request, matches every document.
    pub fn search(&self, request: Option<&SearchRequest>) -> DocumentStoreResult<Vec<Document>> {
        let filter = request.and_then(SearchRequest::to_expr);
        self.query(filter.as_ref())
    }

    /// Returns every document matching a raw filter expression.
    pub fn query(&self, filter: Option<&Expr>) -> DocumentStoreResult<Vec<Document>> {
        let documents = self.backend.query_documents(filter)?;
        trace!(matched = documents.len(), "queried documents");

        Ok(documents)
    }

    /// Number of stored documents.
    pub fn len(&self) -> DocumentStoreResult<usize> {
        self.backend.count_documents()
    }

    /// Whether the backend holds no documents.
    pub fn is_empty(&self) -> DocumentStoreResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Returns a reference to the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consumes the manager, returning the underlying backend.
    pub fn into_backend(self) -> B {
        self.backend
    }
}

/// Construction options for [`DocumentManager`].
///
/// ```ignore
/// use docshelf::{prelude::*, memory::InMemoryStore};
///
/// let clock = ManualClock::new(chrono::Utc::now());
/// let manager = DocumentManagerBuilder::new().clock(clock.clone()).build(InMemoryStore::new());
/// ```
#[derive(Debug)]
pub struct DocumentManagerBuilder {
    clock: Box<dyn Clock>,
}

impl Default for DocumentManagerBuilder {
    fn default() -> Self {
        Self { clock: Box::new(SystemClock) }
    }
}

impl DocumentManagerBuilder {
    /// Creates a builder using the system clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time source used for `created`.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Builds a manager that owns `backend`.
    pub fn build<B: StoreBackend>(self, backend: B) -> DocumentManager<B> {
        DocumentManager { backend, clock: self.clock }
    }
}
