use crate::domain::model::Book;
use crate::domain::ports::BookReader;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::require_non_blank;
use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;

/// Reads a JSON array of books from a file.
#[derive(Debug, Clone)]
pub struct JsonBookReader {
    file_path: String,
}

impl JsonBookReader {
    pub fn new(file_path: impl Into<String>) -> Result<Self> {
        let file_path = file_path.into();
        require_non_blank("file_path", &file_path)?;
        Ok(Self { file_path })
    }

    /// A `null` document is treated as an empty batch. Property names are
    /// matched case-insensitively, so `"Author"` and `"author"` both bind.
    pub fn parse(content: &[u8]) -> Result<Vec<Book>> {
        let document: Value = serde_json::from_slice(content)?;

        let books = match document {
            Value::Null => Vec::new(),
            Value::Array(items) => items
                .into_iter()
                .map(|item| serde_json::from_value(lowercase_keys(item)))
                .collect::<std::result::Result<Vec<Book>, _>>()?,
            other => serde_json::from_value::<Vec<Book>>(other)?,
        };

        Ok(books)
    }
}

#[async_trait]
impl BookReader for JsonBookReader {
    fn source_name(&self) -> &str {
        &self.file_path
    }

    async fn read_books(&self) -> Result<Vec<Book>> {
        if !Path::new(&self.file_path).exists() {
            return Err(EtlError::SourceNotFound {
                path: self.file_path.clone(),
            });
        }

        let content = tokio::fs::read(&self.file_path).await?;
        let books = Self::parse(&content)?;
        tracing::debug!("Parsed {} books from {}", books.len(), self.file_path);
        Ok(books)
    }
}

fn lowercase_keys(item: Value) -> Value {
    match item {
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(key, value)| (key.to_lowercase(), value))
                .collect(),
        ),
        other => other,
    }
}
