//! A small in-memory document repository with filtered search.
//!
//! This crate is the core of the docshelf project and provides:
//!
//! - **Documents** ([`document`]) - Document and author records with JSON helpers
//! - **Search requests** ([`request`]) - Optional per-field search criteria
//! - **Filter expressions** ([`query`]) - Typed expression trees and a visitor for evaluating them
//! - **Store backend abstraction** ([`backend`]) - Traits for implementing storage backends
//! - **Document manager** ([`manager`]) - Upsert, lookup and search with id and timestamp rules
//! - **Clocks** ([`clock`]) - Time sources for creation timestamps
//! - **Error handling** ([`error`]) - Error and result types
//!
//! # Example
//!
//! ```ignore
//! use docshelf::{prelude::*, memory::InMemoryStore};
//!
//! let mut manager = DocumentManager::new(InMemoryStore::new());
//! manager.save(Document::new("Hello", "world", Author::new("a1", "Alice")))?;
//!
//! let hits = manager.search(Some(&SearchRequest {
//!     title_prefixes: Some(vec!["Hel".into()]),
//!     ..SearchRequest::new()
//! }))?;
//! ```

#[allow(unused_extern_crates)]
extern crate self as docshelf_core;

pub mod backend;
pub mod clock;
pub mod document;
pub mod error;
pub mod manager;
pub mod query;
pub mod request;
