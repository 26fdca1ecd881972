use crate::domain::model::Book;
use crate::domain::ports::BookProcessor;
use crate::utils::error::{EtlError, Result};
use rust_decimal::RoundingStrategy;
use tokio_util::sync::CancellationToken;

/// Cleans up text fields and price precision without dropping any book.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizingProcessor;

impl NormalizingProcessor {
    pub fn normalize(book: &Book) -> Book {
        Book {
            id: book.id.trim().to_string(),
            author: book.author.trim().to_string(),
            title: book.title.trim().to_string(),
            genre: book.genre.trim().to_string(),
            price: book
                .price
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            publish_date: book.publish_date,
            description: collapse_whitespace(&book.description),
        }
    }
}

impl BookProcessor for NormalizingProcessor {
    fn name(&self) -> &str {
        "Normalizer"
    }

    fn process(&self, books: Vec<Book>, cancel: &CancellationToken) -> Result<Vec<Book>> {
        let mut normalized = Vec::with_capacity(books.len());
        for book in &books {
            if cancel.is_cancelled() {
                return Err(EtlError::Cancelled);
            }
            normalized.push(Self::normalize(book));
        }

        tracing::debug!("Normalized {} books", normalized.len());
        Ok(normalized)
    }
}

// Spaces, CR and LF runs become one space; tabs are kept.
fn collapse_whitespace(text: &str) -> String {
    text.split([' ', '\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
