//! In-memory document storage backend for docshelf.
//!
//! This crate provides an in-memory implementation of the `StoreBackend` trait, along
//! with the evaluator that applies filter expressions to stored documents.
//!
//! # Quick Start
//!
//! ```ignore
//! use docshelf::{prelude::*, memory::InMemoryStore};
//!
//! let backend = InMemoryStore::builder().build()?;
//! let mut manager = DocumentManager::new(backend);
//!
//! let saved = manager.save(Document::new("Hello", "world", Author::new("a1", "Alice")))?;
//! assert_eq!(manager.find_by_id(&saved.id)?, Some(saved));
//! ```

#[allow(unused_extern_crates)]
extern crate self as docshelf_memory;

pub mod evaluator;
pub mod store;

pub use store::{InMemoryStore, InMemoryStoreBuilder};
