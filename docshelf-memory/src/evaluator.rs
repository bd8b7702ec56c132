//! Query expression evaluation for in-memory document filtering.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use docshelf_core::{
    document::Document,
    error::{DocumentStoreError, DocumentStoreResult},
    query::{DocumentField, Expr, FieldOp, QueryVisitor, Value},
};

/// Comparable view of a document field or an expression operand.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Comparable<'a> {
    /// The field has no value (an unsaved document's `created`).
    Missing,
    Text(&'a str),
    Timestamp(DateTime<Utc>),
}

impl<'a> From<&'a Value> for Comparable<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Text(text) => Comparable::Text(text),
            Value::Timestamp(at) => Comparable::Timestamp(*at),
        }
    }
}

impl<'a> PartialEq for Comparable<'a> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Comparable::Text(a), Comparable::Text(b)) => a == b,
            (Comparable::Timestamp(a), Comparable::Timestamp(b)) => a == b,
            _ => false,
        }
    }
}

impl<'a> PartialOrd for Comparable<'a> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Comparable::Text(a), Comparable::Text(b)) => a.partial_cmp(b),
            (Comparable::Timestamp(a), Comparable::Timestamp(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

pub(crate) struct DocumentEvaluator<'a> {
    document: &'a Document,
}

impl<'a> DocumentEvaluator<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    pub fn evaluate(&mut self, expr: &Expr) -> DocumentStoreResult<bool> {
        self.visit_expr(expr)
    }

    pub fn filter_documents(
        documents: impl IntoIterator<Item = &'a Document>,
        expr: &Expr,
    ) -> DocumentStoreResult<Vec<Document>> {
        let mut matched = Vec::new();

        for document in documents {
            if DocumentEvaluator::new(document).evaluate(expr)? {
                matched.push(document.clone());
            }
        }

        Ok(matched)
    }

    fn resolve(&self, field: DocumentField) -> Comparable<'a> {
        let document = self.document;

        match field {
            DocumentField::Id => Comparable::Text(&document.id),
            DocumentField::Title => Comparable::Text(&document.title),
            DocumentField::Content => Comparable::Text(&document.content),
            DocumentField::AuthorId => Comparable::Text(&document.author.id),
            DocumentField::AuthorName => Comparable::Text(&document.author.name),
            DocumentField::Created => match document.created {
                Some(created) => Comparable::Timestamp(created),
                None => Comparable::Missing,
            },
        }
    }
}

impl<'a> QueryVisitor for DocumentEvaluator<'a> {
    type Output = bool;
    type Error = DocumentStoreError;

    fn visit_and(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error> {
        for expr in exprs {
            if !self.visit_expr(expr)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn visit_or(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error> {
        for expr in exprs {
            if self.visit_expr(expr)? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    fn visit_not(&mut self, expr: &Expr) -> Result<Self::Output, Self::Error> {
        Ok(!self.visit_expr(expr)?)
    }

    fn visit_field(&mut self, field: DocumentField, op: FieldOp, value: &Value) -> Result<Self::Output, Self::Error> {
        let left = self.resolve(field);
        let right = Comparable::from(value);

        if let Comparable::Missing = left {
            return Ok(false);
        }

        Ok(match op {
            FieldOp::Eq => left == right,
            FieldOp::Ne => left != right,
            FieldOp::Gt => left.partial_cmp(&right) == Some(Ordering::Greater),
            FieldOp::Gte => left.partial_cmp(&right).is_some_and(|o| o != Ordering::Less),
            FieldOp::Lt => left.partial_cmp(&right) == Some(Ordering::Less),
            FieldOp::Lte => left.partial_cmp(&right).is_some_and(|o| o != Ordering::Greater),
            FieldOp::Contains => match (left, right) {
                (Comparable::Text(haystack), Comparable::Text(needle)) => haystack.contains(needle),
                _ => false,
            },
            FieldOp::StartsWith => match (left, right) {
                (Comparable::Text(text), Comparable::Text(prefix)) => text.starts_with(prefix),
                _ => false,
            },
            FieldOp::EndsWith => match (left, right) {
                (Comparable::Text(text), Comparable::Text(suffix)) => text.ends_with(suffix),
                _ => false,
            },
        })
    }
}
