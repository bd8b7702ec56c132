//! Search requests and their translation into filter expressions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::{DocumentField, Expr, Filter};

/// A set of optional search criteria.
///
/// Criteria are combined with AND across fields and OR within a list. A `None` field
/// places no constraint; an empty list matches nothing, since none of its zero options
/// can hold. The date bounds are inclusive.
///
/// # Example
///
/// ```ignore
/// use docshelf::request::SearchRequest;
///
/// let request = SearchRequest {
///     title_prefixes: Some(vec!["Hello".into()]),
///     author_ids: Some(vec!["a1".into()]),
///     ..SearchRequest::new()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    /// Title must start with one of these.
    pub title_prefixes: Option<Vec<String>>,
    /// Content must contain one of these.
    pub contains_contents: Option<Vec<String>>,
    /// Author id must be one of these.
    pub author_ids: Option<Vec<String>>,
    /// Created at or after.
    pub created_from: Option<DateTime<Utc>>,
    /// Created at or before.
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    /// Creates a request with no criteria, which matches every document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowers the request into a filter expression.
    ///
    /// Returns `None` when no criterion is set.
    pub fn to_expr(&self) -> Option<Expr> {
        let mut clauses = Vec::new();

        if let Some(prefixes) = &self.title_prefixes {
            clauses.push(Filter::or(
                prefixes
                    .iter()
                    .map(|prefix| Filter::starts_with(DocumentField::Title, prefix)),
            ));
        }

        if let Some(needles) = &self.contains_contents {
            clauses.push(Filter::or(
                needles
                    .iter()
                    .map(|needle| Filter::contains(DocumentField::Content, needle)),
            ));
        }

        if let Some(author_ids) = &self.author_ids {
            clauses.push(Filter::or(
                author_ids
                    .iter()
                    .map(|author_id| Filter::eq(DocumentField::AuthorId, author_id)),
            ));
        }

        if let Some(from) = self.created_from {
            clauses.push(Filter::gte(DocumentField::Created, from));
        }

        if let Some(to) = self.created_to {
            clauses.push(Filter::lte(DocumentField::Created, to));
        }

        if clauses.is_empty() {
            None
        } else {
            Some(Expr::And(clauses))
        }
    }
}
