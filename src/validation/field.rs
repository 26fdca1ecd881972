use crate::domain::model::Book;
use rust_decimal::Decimal;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every violation found on one record, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// Messages joined with "; ", for log lines.
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn push(&mut self, field: &'static str, message: &str) {
        self.errors.push(FieldError {
            field,
            message: message.to_string(),
        });
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FieldValidator;

impl FieldValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, book: &Book) -> ValidationResult {
        let mut result = ValidationResult::default();

        if book.id.trim().is_empty() {
            result.push("@id", "Book ID (@id) cannot be empty");
        }
        if book.author.trim().is_empty() {
            result.push("author", "Author cannot be empty");
        }
        if book.title.trim().is_empty() {
            result.push("title", "Title cannot be empty");
        }

        if book.price < Decimal::ZERO {
            result.push("price", "Price must be non-negative");
        }
        if !is_money_value(book.price) {
            result.push("price", "Price must have at most 2 decimal places");
        }

        if book.publish_date.is_none() {
            result.push("publish_date", "Publish date must be a valid date");
        }

        result
    }
}

// Flags sub-cent precision; the value itself is never rounded.
fn is_money_value(price: Decimal) -> bool {
    price.round_dp(2) == price
}
