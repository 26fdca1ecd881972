use crate::domain::model::Book;
use crate::validation::field::{FieldError, FieldValidator};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionCause {
    /// The id is shared with at least one other record in the batch.
    DuplicateId,
    Invalid(Vec<FieldError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub id: String,
    pub title: String,
    pub cause: RejectionCause,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub valid: Vec<Book>,
    pub rejected: Vec<Rejection>,
}

/// Field validation plus duplicate-id detection over a whole batch.
#[derive(Debug, Clone, Default)]
pub struct CollectionValidator {
    field_validator: FieldValidator,
}

impl CollectionValidator {
    pub fn new() -> Self {
        Self {
            field_validator: FieldValidator::new(),
        }
    }

    /// Returns the records that passed, in input order.
    pub fn validate_and_filter(&self, books: &[Book]) -> Vec<Book> {
        self.validate(books).valid
    }

    /// Every record sharing a duplicated id is dropped, not just the extra copies.
    pub fn validate(&self, books: &[Book]) -> ValidationReport {
        let duplicate_ids = find_duplicate_ids(books);
        let mut report = ValidationReport::default();

        for book in books {
            if duplicate_ids.contains(book.id.as_str()) {
                tracing::warn!(
                    "Book skipped - Duplicate ID: Book with ID '{}' (Title: '{}') has a duplicate ID in the batch. All books with this ID will be excluded.",
                    book.id,
                    book.title
                );
                report.rejected.push(Rejection {
                    id: book.id.clone(),
                    title: book.title.clone(),
                    cause: RejectionCause::DuplicateId,
                });
                continue;
            }

            let result = self.field_validator.validate(book);
            if !result.is_valid() {
                tracing::warn!(
                    "Book skipped - Validation failed: Book with ID '{}' (Title: '{}') failed validation: {}",
                    book.id,
                    book.title,
                    result.summary()
                );
                report.rejected.push(Rejection {
                    id: book.id.clone(),
                    title: book.title.clone(),
                    cause: RejectionCause::Invalid(result.into_errors()),
                });
                continue;
            }

            report.valid.push(book.clone());
        }

        tracing::info!(
            "Validation complete: {} valid books, {} books skipped",
            report.valid.len(),
            report.rejected.len()
        );

        report
    }
}

fn find_duplicate_ids(books: &[Book]) -> HashSet<&str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for book in books.iter().filter(|b| !b.id.is_empty()) {
        *counts.entry(book.id.as_str()).or_default() += 1;
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(id, _)| id)
        .collect()
}
