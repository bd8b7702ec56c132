//! Convenient re-exports of commonly used types from docshelf.
//!
//! ```ignore
//! use docshelf::prelude::*;
//! ```

pub use docshelf_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    clock::{Clock, ManualClock, SystemClock},
    document::{Author, Document, DocumentExt},
    error::{DocumentStoreError, DocumentStoreResult},
    manager::{DocumentManager, DocumentManagerBuilder},
    query::{DocumentField, Expr, FieldOp, Filter, QueryVisitor, Value},
    request::SearchRequest,
};
