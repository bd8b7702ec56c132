//! Main docshelf crate: an in-memory document repository with filtered search.
//!
//! This crate is the primary entry point. It re-exports the core types from
//! `docshelf-core` and the in-memory backend from `docshelf-memory`.
//!
//! # Quick Start
//!
//! ```ignore
//! use docshelf::{prelude::*, memory::InMemoryStore};
//!
//! let mut manager = DocumentManager::new(InMemoryStore::new());
//!
//! // Upsert: the id and creation time are filled in
//! let saved = manager.save(Document::new("Hello", "foo bar", Author::new("a1", "Alice")))?;
//!
//! // Point lookup
//! assert_eq!(manager.find_by_id(&saved.id)?, Some(saved.clone()));
//!
//! // Filtered search: AND across fields, OR within a list
//! let hits = manager.search(Some(&SearchRequest {
//!     author_ids: Some(vec!["a1".into()]),
//!     contains_contents: Some(vec!["foo".into(), "baz".into()]),
//!     ..SearchRequest::new()
//! }))?;
//! assert_eq!(hits, vec![saved]);
//! ```
//!
//! # Expressions
//!
//! Search requests are lowered into [`query::Expr`] trees. Callers who need more than a
//! request can express (negation, suffixes, author names) can build expressions with
//! [`query::Filter`] and pass them to [`DocumentManager::query`](manager::DocumentManager::query).
//!
//! ```ignore
//! use docshelf::{prelude::*, memory::InMemoryStore};
//!
//! let manager = DocumentManager::new(InMemoryStore::new());
//! let drafts = manager.query(Some(
//!     &Filter::ends_with(DocumentField::Title, "(draft)")
//!         .and(Filter::eq(DocumentField::AuthorName, "Alice").not()),
//! ))?;
//! ```
//!
//! # Backends
//!
//! - [`memory`] - In-memory storage

pub mod prelude;

pub use docshelf_core::{backend, clock, document, error, manager, query, request};

/// In-memory storage backend implementations.
pub mod memory {
    pub use docshelf_memory::{InMemoryStore, InMemoryStoreBuilder};
}
