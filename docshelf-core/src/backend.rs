//! Storage backend abstraction.
//!
//! A backend is a keyed map of documents that can also evaluate filter expressions. It
//! knows nothing about id generation or creation timestamps; those belong to
//! [`DocumentManager`](crate::manager::DocumentManager), which sits on top.
//!
//! To implement a new backend:
//!
//! 1. Implement the [`StoreBackend`] trait for your store type
//! 2. Implement [`StoreBackendBuilder`] to describe how it is constructed
//! 3. Evaluate [`Expr`] trees, typically via [`QueryVisitor`](crate::query::QueryVisitor)

use crate::{document::Document, error::DocumentStoreResult, query::Expr};

/// Core trait for document storage backends.
///
/// Backends own their documents and hand out clones. Iteration order of
/// [`query_documents`](StoreBackend::query_documents) is backend defined.
pub trait StoreBackend {
    /// Inserts the document, replacing any existing one with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDocument`](crate::error::DocumentStoreError::InvalidDocument) if
    /// the document has an empty id.
    fn put_document(&mut self, document: Document) -> DocumentStoreResult<()>;

    /// Retrieves the document stored under `id`, if any.
    fn get_document(&self, id: &str) -> DocumentStoreResult<Option<Document>>;

    /// Returns every document matching `filter`, or every document when it is `None`.
    fn query_documents(&self, filter: Option<&Expr>) -> DocumentStoreResult<Vec<Document>>;

    /// Number of stored documents.
    fn count_documents(&self) -> DocumentStoreResult<usize>;
}

/// Builder trait for constructing store backends.
pub trait StoreBackendBuilder {
    /// The type of backend this builder creates.
    type Backend: StoreBackend;

    /// Builds and returns a new backend instance.
    fn build(self) -> DocumentStoreResult<Self::Backend>;
}
