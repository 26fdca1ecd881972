use crate::domain::model::Book;
use crate::rules::{Rule, TransformRule};

/// Rounds the price up to the next whole number.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundPriceUpRule;

impl Rule for RoundPriceUpRule {
    fn name(&self) -> &str {
        "RoundPriceUp"
    }
}

impl TransformRule for RoundPriceUpRule {
    fn transform(&self, book: &Book) -> Book {
        Book {
            price: book.price.ceil(),
            ..book.clone()
        }
    }
}
